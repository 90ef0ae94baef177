//! Runtime configuration read from the environment.

use std::{collections::HashMap, env, path::PathBuf};

use thiserror::Error;

use crate::i18n::Locale;

pub const CATALOG_DIR_VAR: &str = "BOOKING_BOARD_CATALOG_DIR";
pub const LOCALE_VAR: &str = "BOOKING_BOARD_LOCALE";
pub const LOG_VAR: &str = "BOOKING_BOARD_LOG";

pub const DEFAULT_LOG_FILTER: &str = "booking_board=info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding `influencers.json` and `venues.json`; embedded data when unset.
    pub catalog_dir: Option<PathBuf>,
    pub locale: Locale,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_dir: None,
            locale: Locale::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is set but empty")]
    Empty { var: &'static str },
    #[error("unsupported locale {value:?} in {var}")]
    UnknownLocale { var: &'static str, value: String },
}

impl AppConfig {
    /// Reads the process environment. Invalid values are replaced by defaults
    /// and returned alongside, so they can be logged once a subscriber exists.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        let vars: HashMap<String, String> = env::vars().collect();
        Self::from_vars(&vars)
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(dir) = vars.get(CATALOG_DIR_VAR) {
            if dir.trim().is_empty() {
                errors.push(ConfigError::Empty { var: CATALOG_DIR_VAR });
            } else {
                config.catalog_dir = Some(PathBuf::from(dir.trim()));
            }
        }

        if let Some(code) = vars.get(LOCALE_VAR) {
            match Locale::from_code(code) {
                Some(locale) => config.locale = locale,
                None => errors.push(ConfigError::UnknownLocale {
                    var: LOCALE_VAR,
                    value: code.clone(),
                }),
            }
        }

        if let Some(filter) = vars.get(LOG_VAR) {
            if filter.trim().is_empty() {
                errors.push(ConfigError::Empty { var: LOG_VAR });
            } else {
                config.log_filter = filter.trim().to_string();
            }
        }

        (config, errors)
    }
}
