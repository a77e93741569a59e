use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid option key: {raw:?} (expected one of A, B, C, D, E)")]
pub struct OptionKeyError {
    raw: String,
}

/// Label of a multiple-choice option.
///
/// Options are rendered in declaration order, so `Ord` doubles as display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
    E,
}

impl OptionKey {
    pub const ALL: [OptionKey; 5] = [
        OptionKey::A,
        OptionKey::B,
        OptionKey::C,
        OptionKey::D,
        OptionKey::E,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::A => "A",
            OptionKey::B => "B",
            OptionKey::C => "C",
            OptionKey::D => "D",
            OptionKey::E => "E",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKey {
    type Err = OptionKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(OptionKey::A),
            "B" | "b" => Ok(OptionKey::B),
            "C" | "c" => Ok(OptionKey::C),
            "D" | "d" => Ok(OptionKey::D),
            "E" | "e" => Ok(OptionKey::E),
            _ => Err(OptionKeyError { raw: s.to_string() }),
        }
    }
}
