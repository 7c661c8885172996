//! Runtime configuration.
//!
//! Everything has a default so ThyBot starts with nothing but `GROQ_API_KEY`
//! set. Values come from the process environment; the binary loads `.env`
//! first via `dotenvy`.
//!
//! | Variable                  | Default                                      |
//! |---------------------------|----------------------------------------------|
//! | `THYBOT_MODEL`            | `llama3-70b-8192`                            |
//! | `THYBOT_HISTORY_LIMIT`    | `8` (`all` sends the whole conversation)     |
//! | `THYBOT_CHUNK_SIZE`       | `1000`                                       |
//! | `THYBOT_CHUNK_OVERLAP`    | `200`                                        |
//! | `THYBOT_TOP_K`            | `4`                                          |
//! | `THYBOT_SEARCH_RESULTS`   | `6`                                          |
//! | `THYBOT_NUTRITION_CSV`    | `data/Indian_Food_Nutrition_Processed.csv`   |
use std::{env, path::PathBuf, str::FromStr};

use thybot_core::model::Model;

use crate::{error::ConfigError, ingest::SplitterConfig};

pub const DEFAULT_HISTORY_LIMIT: usize = 8;
pub const DEFAULT_TOP_K: usize = 4;
pub const DEFAULT_SEARCH_RESULTS: usize = 6;
pub const DEFAULT_NUTRITION_CSV: &str = "data/Indian_Food_Nutrition_Processed.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct ThyBotConfig {
    pub model: Model,
    /// Number of most recent messages sent with a general chat question.
    /// `None` sends the whole conversation.
    pub history_limit: Option<usize>,
    pub splitter: SplitterConfig,
    pub top_k: usize,
    pub search_results: usize,
    pub nutrition_csv: PathBuf,
}

impl Default for ThyBotConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            splitter: SplitterConfig::default(),
            top_k: DEFAULT_TOP_K,
            search_results: DEFAULT_SEARCH_RESULTS,
            nutrition_csv: PathBuf::from(DEFAULT_NUTRITION_CSV),
        }
    }
}

impl ThyBotConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`; unset or blank keys keep
    /// their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(model) = get("THYBOT_MODEL") {
            config.model = Model::from_name(model.trim());
        }
        if let Some(limit) = get("THYBOT_HISTORY_LIMIT") {
            config.history_limit = if limit.trim().eq_ignore_ascii_case("all") {
                None
            } else {
                Some(parse("THYBOT_HISTORY_LIMIT", &limit)?)
            };
        }
        if let Some(size) = get("THYBOT_CHUNK_SIZE") {
            config.splitter.chunk_size = parse("THYBOT_CHUNK_SIZE", &size)?;
        }
        if let Some(overlap) = get("THYBOT_CHUNK_OVERLAP") {
            config.splitter.chunk_overlap = parse("THYBOT_CHUNK_OVERLAP", &overlap)?;
        }
        if let Some(k) = get("THYBOT_TOP_K") {
            config.top_k = parse("THYBOT_TOP_K", &k)?;
        }
        if let Some(n) = get("THYBOT_SEARCH_RESULTS") {
            config.search_results = parse("THYBOT_SEARCH_RESULTS", &n)?;
        }
        if let Some(path) = get("THYBOT_NUTRITION_CSV") {
            config.nutrition_csv = PathBuf::from(path);
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == Some(0) {
            return Err(invalid("THYBOT_HISTORY_LIMIT", "0", "must be positive or `all`"));
        }
        let splitter = &self.splitter;
        if splitter.chunk_size == 0 {
            return Err(invalid("THYBOT_CHUNK_SIZE", "0", "must be positive"));
        }
        if splitter.chunk_overlap >= splitter.chunk_size {
            return Err(invalid(
                "THYBOT_CHUNK_OVERLAP",
                &splitter.chunk_overlap.to_string(),
                "must be smaller than the chunk size",
            ));
        }
        if self.top_k == 0 {
            return Err(invalid("THYBOT_TOP_K", "0", "must be positive"));
        }
        if self.search_results == 0 {
            return Err(invalid("THYBOT_SEARCH_RESULTS", "0", "must be positive"));
        }
        Ok(())
    }
}

fn parse<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| invalid(key, value, &e.to_string()))
}

fn invalid(key: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_owned(),
        reason: reason.to_owned(),
    }
}
