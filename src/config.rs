//! User preferences, loaded from a TOML file.
//!
//! Nothing in the roller reads these directly; callers turn them into
//! [`RollOptions`] and pass those in.

use crate::error::ConfigError;
use crate::roll::{CopyFormat, NumberingPolicy, RollOptions, DEFAULT_MAX_DICE, MAX_DICE_CEILING};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Read a d10 as 0-9 instead of 1-10.
    pub zero_based_d10: bool,
    /// Read a d100 as 0-99 instead of 1-100.
    pub zero_based_d100: bool,
    pub history_enabled: bool,
    pub copy_format: CopyFormat,
    pub max_dice: usize,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(s)?;
        if !(1..=MAX_DICE_CEILING).contains(&settings.max_dice) {
            return Err(ConfigError::MaxDice {
                value: settings.max_dice,
                limit: MAX_DICE_CEILING,
            });
        }
        Ok(settings)
    }

    pub fn roll_options(&self) -> RollOptions {
        RollOptions {
            numbering: NumberingPolicy::new(self.zero_based_d10, self.zero_based_d100),
            max_dice: self.max_dice,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            zero_based_d10: false,
            zero_based_d100: false,
            history_enabled: true,
            copy_format: CopyFormat::default(),
            max_dice: DEFAULT_MAX_DICE,
        }
    }
}
