// src/narration/src/lib.rs
//! 叙述输出
//!
//! 角色和物品的所有动作都以一行文本的形式交给 [`Narrator`]。
//! 终端使用 [`ConsoleNarrator`]，测试使用 [`MessageLog`]，两者看到的行完全一致。

use std::io::{self, Write};

use error::GameError;
use strum_macros::Display;

/// 叙述行的类型，用于在测试中分类统计
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    #[strum(serialize = "ability")]
    Ability, // 角色技能
    #[strum(serialize = "inventory")]
    Inventory, // 放入背包
    #[strum(serialize = "use")]
    Use, // 使用物品
    #[strum(serialize = "equip")]
    Equip, // 装备物品
}

/// 单条叙述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

/// 叙述输出端
pub trait Narrator {
    /// 输出一行叙述
    fn narrate(&mut self, kind: LineKind, text: String);
}

/// 内存中的叙述记录（按输出顺序保存）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    lines: Vec<Line>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// 只取文本，便于整段比较
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }

    /// 统计某一类型的行数
    pub fn count_of(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|line| line.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Narrator for MessageLog {
    fn narrate(&mut self, kind: LineKind, text: String) {
        self.lines.push(Line { kind, text });
    }
}

/// 逐行写入终端（或任意 `Write`）的叙述端
///
/// 写入失败后不再继续写，第一个错误保留到 [`ConsoleNarrator::finish`] 再返回，
/// 这样调用链上的每个动作都不需要处理IO错误。
#[derive(Debug)]
pub struct ConsoleNarrator<W: Write> {
    out: W,
    error: Option<io::Error>,
    written: usize,
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            error: None,
            written: 0,
        }
    }

    /// 已成功写出的行数
    pub fn written(&self) -> usize {
        self.written
    }

    /// 刷新输出并交回底层写入端
    pub fn finish(mut self) -> Result<W, GameError> {
        if let Some(err) = self.error.take() {
            return Err(GameError::from_io(err));
        }
        self.out.flush().map_err(GameError::from_io)?;
        Ok(self.out)
    }
}

impl<W: Write> Narrator for ConsoleNarrator<W> {
    fn narrate(&mut self, kind: LineKind, text: String) {
        if self.error.is_some() {
            return;
        }
        match writeln!(self.out, "{}", text) {
            Ok(()) => self.written += 1,
            Err(err) => {
                tracing::warn!(%kind, error = %err, "narration write failed");
                self.error = Some(err);
            }
        }
    }
}
