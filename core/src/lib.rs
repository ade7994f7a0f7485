#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use controller::*;
pub use error::*;
pub use signal::*;
pub use types::*;

mod board;
mod cell;
mod controller;
mod error;
mod signal;
mod types;

/// Symbol a player leaves on the board, e.g. `X` or `O`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Mark(char);

impl Mark {
    pub const X: Self = Self('X');
    pub const O: Self = Self('O');

    pub fn new(symbol: char) -> Result<Self> {
        if symbol.is_whitespace() || symbol.is_control() {
            Err(GameError::InvalidMark)
        } else {
            Ok(Self(symbol))
        }
    }

    /// Takes the only symbol of `text`, rejecting empty or multi-symbol input.
    pub fn parse(text: &str) -> Result<Self> {
        let mut chars = text.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::new(symbol),
            _ => Err(GameError::InvalidMark),
        }
    }

    pub const fn symbol(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Mark {
    type Error = GameError;

    fn try_from(symbol: char) -> Result<Self> {
        Self::new(symbol)
    }
}

impl From<Mark> for char {
    fn from(mark: Mark) -> Self {
        mark.0
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn mark(&self) -> Mark {
        self.mark
    }
}

/// Result of evaluating the board, always derived and never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Tie,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Placed,
    Won,
    Tie,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Won => true,
            Tie => true,
        }
    }
}
