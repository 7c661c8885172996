//! Model identifiers used throughout the **thybot** workspace.
//!
//! Application code picks an enum variant and the provider crate translates
//! it to its own naming scheme (`thybot-groq::model_map`). Model names that
//! come from configuration and are not known up front travel as
//! [`Model::Custom`].
//!
//! ```rust
//! use thybot_core::model::{GroqModel, Model};
//! assert_eq!(Model::from_name("llama3-70b-8192"),
//!            Model::Groq(GroqModel::Llama3_70b));
//! assert_eq!(Model::from_name("my-finetune"),
//!            Model::Custom("my-finetune".into()));
//! ```
use std::borrow::Cow;

/// Universal identifier for an LLM model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Models served by Groq's chat completion API.
    Groq(GroqModel),
    /// Any provider / model name not covered by a dedicated enum.
    Custom(Cow<'static, str>),
}

/// Groq-hosted models ThyBot has been used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroqModel {
    Llama3_70b,
    Llama3_8b,
    Llama31_8bInstant,
    Llama33_70bVersatile,
}

impl GroqModel {
    pub const ALL: [GroqModel; 4] = [
        GroqModel::Llama3_70b,
        GroqModel::Llama3_8b,
        GroqModel::Llama31_8bInstant,
        GroqModel::Llama33_70bVersatile,
    ];

    /// Wire name used by the Groq API.
    pub fn name(self) -> &'static str {
        match self {
            GroqModel::Llama3_70b => "llama3-70b-8192",
            GroqModel::Llama3_8b => "llama3-8b-8192",
            GroqModel::Llama31_8bInstant => "llama-3.1-8b-instant",
            GroqModel::Llama33_70bVersatile => "llama-3.3-70b-versatile",
        }
    }
}

impl Model {
    /// Resolve a configured model name, falling back to [`Model::Custom`].
    pub fn from_name(name: &str) -> Self {
        GroqModel::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .map(Model::Groq)
            .unwrap_or_else(|| Model::Custom(Cow::Owned(name.to_owned())))
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Groq(GroqModel::Llama3_70b)
    }
}

impl From<GroqModel> for Model {
    fn from(val: GroqModel) -> Self {
        Model::Groq(val)
    }
}
