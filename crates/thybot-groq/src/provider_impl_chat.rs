use std::{future::Future, pin::Pin, sync::Arc};

use thybot_core::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericUsageReport},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{
    GroqAdapter,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest, FinishReason},
    error::GroqError,
};

impl ChatCompletionProvider for GroqAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::try_from(params)?;

            #[cfg(feature = "tracing")]
            tracing::debug!(
                model = %request.model,
                messages = request.messages.len(),
                "chat completion"
            );

            let mut response = client.chat_completion(request).await?;

            let usage = response.usage.map(|usage| GenericUsageReport {
                prompt_tokens: usage.prompt_tokens as i64,
                completion_tokens: usage.completion_tokens as i64,
                total_tokens: usage.total_tokens as i64,
            });

            if response.choices.is_empty() {
                return Err(GroqError::Format("response has no choices".into()).into());
            }
            let first_choice = response.choices.swap_remove(0);

            match &first_choice.finish_reason {
                None | Some(FinishReason::Stop) | Some(FinishReason::Length) => {
                    Ok(GenericChatCompletionResponse {
                        message: first_choice.message.into(),
                        usage,
                    })
                }
                Some(other) => Err(GroqError::Format(format!(
                    "unhandled finish reason on API: {other:?}"
                ))
                .into()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use thybot_core::{error::ThyBotError, generic::GenericMessage, model::Model};

    use super::*;
    use crate::GroqAdapterBuilder;

    #[tokio::test]
    async fn unknown_model_fails_before_any_request() {
        let adapter = GroqAdapterBuilder::new()
            .with_api_key("gsk_test")
            .with_base_url("http://127.0.0.1:9")
            .build()
            .unwrap();
        let params = ChatCompleteParameters::new(
            vec![GenericMessage::user("What is TSH?")],
            Model::Custom("".into()),
        );

        let err = adapter.chat_complete(params).await.unwrap_err();
        assert!(matches!(err, ThyBotError::ModelNotSupported { provider: "groq", .. }));
    }
}
