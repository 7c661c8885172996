use thybot_core::{
    ThyBotClient,
    generic::{GenericMessage, SearchHit},
    provider::ChatCompletionProvider,
};
use thybot_types::{
    fragments::SearchResultsFragment,
    outputs::{ChatTurn, TurnSource},
};

use super::error_turn;

/// Reply used when a web search returns nothing. No model call is made.
pub const NO_SOURCES_MESSAGE: &str = "I couldn't find reliable sources on the web to answer \
     that. Please consult your physician or an endocrinologist.";

/// Answer `query` strictly from the search `hits`, followed by the list of
/// sources.
pub async fn summarize_search_for_thyroid<B>(
    client: &ThyBotClient<B>,
    query: &str,
    hits: &[SearchHit],
) -> ChatTurn
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    if hits.is_empty() {
        tracing::info!("web search returned no results");
        return ChatTurn::new(TurnSource::Notice, NO_SOURCES_MESSAGE);
    }

    tracing::debug!(hits = hits.len(), "summarising search results");
    match client.invoke(SearchResultsFragment::new(query, hits)).await {
        Ok(summary) => ChatTurn::new(TurnSource::WebSearch, with_sources(summary.trim(), hits)),
        Err(e) => {
            tracing::warn!(error = %e, "search summary failed");
            error_turn("Failed to summarize", e)
        }
    }
}

fn with_sources(summary: &str, hits: &[SearchHit]) -> String {
    let sources = hits
        .iter()
        .map(|hit| format!("- [{}]({})", hit.title, hit.link))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{summary}\n\n**Sources:**\n{sources}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedProvider, hit};

    #[tokio::test]
    async fn no_hits_short_circuits_without_model_call() {
        let client = ScriptedProvider::new().reply("unused").into_client();
        let turn = summarize_search_for_thyroid(&client, "what is TSH?", &[]).await;

        assert_eq!(turn.source, TurnSource::Notice);
        assert_eq!(turn.text, NO_SOURCES_MESSAGE);
        assert_eq!(client.backend().calls(), 0);
    }

    #[tokio::test]
    async fn summary_lists_sources() {
        let client = ScriptedProvider::new()
            .reply(" TSH is produced by the pituitary gland. ")
            .into_client();
        let hits = vec![hit("TSH test", "TSH comes from the pituitary", "https://a.example")];
        let turn = summarize_search_for_thyroid(&client, "what is TSH?", &hits).await;

        assert_eq!(turn.source, TurnSource::WebSearch);
        assert_eq!(
            turn.text,
            "TSH is produced by the pituitary gland.\n\n**Sources:**\n- [TSH test](https://a.example)"
        );
        let requests = client.backend().requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0][0].content.contains("TSH comes from the pituitary"));
    }

    #[tokio::test]
    async fn model_failure_becomes_error_text() {
        let client = ScriptedProvider::new().fail("rate limited").into_client();
        let hits = vec![hit("a", "b", "https://c.example")];
        let turn = summarize_search_for_thyroid(&client, "q", &hits).await;

        assert!(turn.is_error());
        assert!(turn.text.starts_with("⚠️ Failed to summarize"));
        assert!(turn.text.contains("rate limited"));
    }
}
