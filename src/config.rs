//! Layered run settings: built-in defaults, profile file, command line

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, Preset};
use crate::config_error;
use crate::error::{Result, WordgenError};
use crate::sink::OutputTarget;
use crate::types::{Decoration, GenerationConfig, LengthRange};

/// Partial settings, as read from a profile file or the command line.
///
/// Every field is optional; missing fields fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Literal alphabet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Named alphabet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<LengthRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub generation: GenerationConfig,
    pub output: OutputTarget,
}

impl Profile {
    /// Load a profile from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            WordgenError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        let profile: Self = serde_json::from_str(&content).map_err(|e| {
            WordgenError::parse(format!("{}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "Loaded profile");
        Ok(profile)
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    ///
    /// The alphabet is one setting: an alphabet chosen in `other` replaces
    /// both `source` and `preset` of `self`.
    pub fn merge(self, other: Profile) -> Profile {
        let (source, preset) = if other.source.is_some() || other.preset.is_some() {
            (other.source, other.preset)
        } else {
            (self.source, self.preset)
        };

        Profile {
            source,
            preset,
            length: other.length.or(self.length),
            output: other.output.or(self.output),
            prefix: other.prefix.or(self.prefix),
            suffix: other.suffix.or(self.suffix),
        }
    }

    /// Fill in defaults so the profile describes the run completely
    pub fn with_defaults(self) -> Profile {
        let preset = if self.source.is_none() {
            Some(self.preset.unwrap_or_default())
        } else {
            self.preset
        };
        Profile {
            preset,
            length: Some(self.length.unwrap_or_default()),
            ..self
        }
    }

    /// Turn the layered settings into the values the engine runs with
    pub fn resolve(self) -> Result<Settings> {
        let alphabet = match (self.source, self.preset) {
            (Some(_), Some(preset)) => {
                return Err(config_error!(
                    "both a source string and the '{}' preset were given",
                    preset
                ));
            }
            (Some(source), None) => Alphabet::from(source.as_str()),
            (None, Some(preset)) => preset.alphabet(),
            (None, None) => Preset::default().alphabet(),
        };

        let generation = GenerationConfig {
            alphabet,
            lengths: self.length.unwrap_or_default(),
            decoration: Decoration::new(self.prefix, self.suffix),
        };

        Ok(Settings {
            generation,
            output: OutputTarget::from_path(self.output),
        })
    }
}
