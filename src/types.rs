//! Core types and structures for wordgen

use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, Preset};
use crate::error::{Result, WordgenError};

/// Inclusive range of word lengths, both bounds at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LengthRange {
    min: u32,
    max: u32,
}

impl LengthRange {
    pub const DEFAULT_LENGTH: u32 = 6;

    /// Create a range, rejecting zero bounds and `min > max`
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min == 0 || max == 0 {
            return Err(WordgenError::length(
                format!("{}-{}", min, max),
                "length must be greater than 0",
            ));
        }
        if min > max {
            return Err(WordgenError::length(
                format!("{}-{}", min, max),
                "min length must not exceed max length",
            ));
        }
        Ok(Self { min, max })
    }

    pub fn single(length: u32) -> Result<Self> {
        Self::new(length, length)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn lengths(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

impl Default for LengthRange {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_LENGTH,
            max: Self::DEFAULT_LENGTH,
        }
    }
}

fn length_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(\d+)\s*(?:-\s*(\d+)\s*)?$").expect("length pattern is valid")
    })
}

impl FromStr for LengthRange {
    type Err = WordgenError;

    /// Accepts `LEN` or `MIN-MAX`
    fn from_str(s: &str) -> Result<Self> {
        let caps = length_pattern()
            .captures(s)
            .ok_or_else(|| WordgenError::length(s, "misformatted length"))?;

        let parse = |m: regex::Match<'_>| {
            m.as_str()
                .parse::<u32>()
                .map_err(|e| WordgenError::length(s, e.to_string()))
        };

        let min = parse(caps.get(1).ok_or_else(|| WordgenError::length(s, "misformatted length"))?)?;
        let max = match caps.get(2) {
            Some(m) => parse(m)?,
            None => min,
        };

        Self::new(min, max).map_err(|e| match e {
            WordgenError::Length { message, .. } => WordgenError::length(s, message),
            other => other,
        })
    }
}

impl std::fmt::Display for LengthRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

impl TryFrom<String> for LengthRange {
    type Error = WordgenError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LengthRange> for String {
    fn from(range: LengthRange) -> Self {
        range.to_string()
    }
}

/// Optional text wrapped around every generated word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoration {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl Decoration {
    pub fn new(prefix: Option<String>, suffix: Option<String>) -> Self {
        Self { prefix, suffix }
    }

    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or("")
    }

    pub fn suffix(&self) -> &str {
        self.suffix.as_deref().unwrap_or("")
    }

    /// Extra bytes added to each word
    pub fn overhead(&self) -> usize {
        self.prefix().len() + self.suffix().len()
    }
}

/// Everything the engine needs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub alphabet: Alphabet,
    pub lengths: LengthRange,
    pub decoration: Decoration,
}

impl GenerationConfig {
    pub fn new(alphabet: Alphabet, lengths: LengthRange) -> Self {
        Self {
            alphabet,
            lengths,
            decoration: Decoration::default(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.decoration.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.decoration.suffix = Some(suffix.into());
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(Preset::default().alphabet(), LengthRange::default())
    }
}
