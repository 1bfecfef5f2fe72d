//! Alphabets and the named presets

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WordgenError;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const XDIGITS: &str = "0123456789abcdef";
pub const UPPER_XDIGITS: &str = "0123456789ABCDEF";
pub const PUNCT: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
pub const ALPHA: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALNUM: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Printable 7-bit ASCII, space excluded
pub const ASCII: &str = "!\"#$%&'()*+,-./0123456789:;<=>?@\
                         ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`\
                         abcdefghijklmnopqrstuvwxyz{|}~";

/// Named alphabet preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Preset {
    #[serde(rename = "lowercase")]
    Lowercase,
    #[serde(rename = "uppercase")]
    Uppercase,
    #[serde(rename = "digits")]
    Digits,
    #[serde(rename = "xdigits")]
    Xdigits,
    #[serde(rename = "Xdigits")]
    UpperXdigits,
    #[serde(rename = "punct")]
    Punct,
    #[serde(rename = "alpha")]
    Alpha,
    #[default]
    #[serde(rename = "alnum")]
    Alnum,
    #[serde(rename = "ascii")]
    Ascii,
}

impl Preset {
    pub const ALL: [Preset; 9] = [
        Preset::Lowercase,
        Preset::Uppercase,
        Preset::Digits,
        Preset::Xdigits,
        Preset::UpperXdigits,
        Preset::Punct,
        Preset::Alpha,
        Preset::Alnum,
        Preset::Ascii,
    ];

    pub fn chars(&self) -> &'static str {
        match self {
            Preset::Lowercase => LOWERCASE,
            Preset::Uppercase => UPPERCASE,
            Preset::Digits => DIGITS,
            Preset::Xdigits => XDIGITS,
            Preset::UpperXdigits => UPPER_XDIGITS,
            Preset::Punct => PUNCT,
            Preset::Alpha => ALPHA,
            Preset::Alnum => ALNUM,
            Preset::Ascii => ASCII,
        }
    }

    /// Name used on the command line and in profiles
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Lowercase => "lowercase",
            Preset::Uppercase => "uppercase",
            Preset::Digits => "digits",
            Preset::Xdigits => "xdigits",
            Preset::UpperXdigits => "Xdigits",
            Preset::Punct => "punct",
            Preset::Alpha => "alpha",
            Preset::Alnum => "alnum",
            Preset::Ascii => "ascii",
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        Alphabet::from(self.chars())
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Preset {
    type Err = WordgenError;

    /// Names are case sensitive: `xdigits` and `Xdigits` differ.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .iter()
            .copied()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Preset::ALL.iter().map(|p| p.name()).collect();
                WordgenError::config(format!(
                    "unknown preset '{}' (expected one of: {})",
                    s,
                    names.join(", ")
                ))
            })
    }
}

/// Ordered symbols words are built from.
///
/// Repeated symbols are kept as-is; the engine then emits textually
/// identical words for distinct index tuples.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new(symbols: Vec<char>) -> Self {
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl From<&str> for Alphabet {
    fn from(s: &str) -> Self {
        Self::new(s.chars().collect())
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
