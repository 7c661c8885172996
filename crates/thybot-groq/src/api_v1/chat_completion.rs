use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use thybot_core::error::ThyBotError;
use thybot_core::generic::{GenericMessage, GenericRole};
use thybot_core::provider::ChatCompleteParameters;

use std::fmt;

use crate::impl_builder_methods;
use crate::model_map::map_model;

use super::common;

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            temperature: None,
            top_p: None,
            max_tokens: None,
            stream: None,
        }
    }
}

impl_builder_methods!(
    ChatCompletionRequest,
    temperature: f64,
    top_p: f64,
    max_tokens: u32,
    stream: bool
);

impl<M> TryFrom<ChatCompleteParameters<M>> for ChatCompletionRequest
where
    M: Into<ChatCompletionMessage> + Clone,
{
    type Error = ThyBotError;

    fn try_from(value: ChatCompleteParameters<M>) -> Result<Self, Self::Error> {
        let model = map_model(&value.model).ok_or_else(|| ThyBotError::ModelNotSupported {
            provider: "groq",
            model: format!("{:?}", value.model),
        })?;

        Ok(Self {
            model: model.into_owned(),
            messages: value.messages.into_iter().map(Into::into).collect(),
            temperature: value.temperature,
            top_p: None,
            max_tokens: value.max_tokens,
            stream: None,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    System,
    Assistant,
}

/// Message text as it appears on the wire.
///
/// Providers send `null` (or omit the field) when a reply has no text; both
/// deserialise to an empty string so callers always get a `String`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content(pub String);

impl serde::Serialize for Content {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D>(deserializer: D) -> Result<Content, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ContentVisitor;

        impl<'de> Visitor<'de> for ContentVisitor {
            type Value = Content;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or null")
            }

            fn visit_str<E>(self, value: &str) -> Result<Content, E>
            where
                E: de::Error,
            {
                Ok(Content(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Content, E>
            where
                E: de::Error,
            {
                Ok(Content(value))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Content::default())
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Content::default())
            }
        }

        deserializer.deserialize_any(ContentVisitor)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: Content,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionMessageForResponse {
    pub role: MessageRole,
    #[serde(default)]
    pub content: Content,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<ChatCompletionMessageForResponse> for GenericMessage {
    fn from(value: ChatCompletionMessageForResponse) -> Self {
        GenericMessage {
            content: value.content.0,
            role: value.role.into(),
            name: value.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub index: i64,
    pub message: ChatCompletionMessageForResponse,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    #[serde(default)]
    pub usage: Option<common::Usage>,
    pub system_fingerprint: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
    #[serde(other)]
    Other,
}

impl From<GenericRole> for MessageRole {
    fn from(value: GenericRole) -> Self {
        match value {
            GenericRole::System => MessageRole::System,
            GenericRole::Assistant => MessageRole::Assistant,
            GenericRole::User => MessageRole::User,
        }
    }
}

impl From<MessageRole> for GenericRole {
    fn from(value: MessageRole) -> Self {
        match value {
            MessageRole::User => GenericRole::User,
            MessageRole::System => GenericRole::System,
            MessageRole::Assistant => GenericRole::Assistant,
        }
    }
}

impl From<GenericMessage> for ChatCompletionMessage {
    fn from(value: GenericMessage) -> Self {
        Self {
            role: value.role.into(),
            content: Content(value.content),
            name: value.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use thybot_core::model::{GroqModel, Model};

    use super::*;

    #[test]
    fn request_uses_groq_wire_names() {
        let params = ChatCompleteParameters::new(
            vec![GenericMessage::system("be brief"), GenericMessage::user("hi")],
            Model::Groq(GroqModel::Llama3_70b),
        )
        .with_temperature(0.2);

        let request = ChatCompletionRequest::try_from(params).unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "llama3-70b-8192");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["temperature"], 0.2);
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn null_content_becomes_empty_text() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "llama3-70b-8192",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": null},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 0, "total_tokens": 10}
        }"#;

        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        let message: GenericMessage = parsed.choices.into_iter().next().unwrap().message.into();
        assert_eq!(message.content, "");
        assert_eq!(message.role, GenericRole::Assistant);
    }

    #[test]
    fn unknown_finish_reason_is_tolerated() {
        let reason: FinishReason = serde_json::from_str(r#""eos""#).unwrap();
        assert_eq!(reason, FinishReason::Other);
    }
}
