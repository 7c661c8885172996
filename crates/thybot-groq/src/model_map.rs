use std::borrow::Cow;

use thybot_core::model::Model;

/// Translate a [`Model`] into the name Groq expects in `"model"`.
///
/// Custom names are passed through untouched; an empty custom name cannot be
/// sent and maps to `None`.
pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::Groq(groq_model) => Some(Cow::Borrowed(groq_model.name())),
        Model::Custom(custom) if custom.trim().is_empty() => None,
        Model::Custom(custom) => Some(custom.clone()),
    }
}
