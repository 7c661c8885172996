//! Scripted fakes for the provider traits.
use std::{
    collections::VecDeque,
    future::Future,
    pin::Pin,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use thybot_core::{
    ThyBotClient,
    error::{Result, ThyBotError},
    generic::{GenericChatCompletionResponse, GenericMessage, SearchHit},
    model::Model,
    provider::{ChatCompleteParameters, ChatCompletionProvider, WebSearchProvider},
};

/// Chat backend that answers from a queue of scripted replies and records
/// every request it receives.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<std::result::Result<String, String>>>,
    requests: Mutex<Vec<Vec<GenericMessage>>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    pub fn fail(self, message: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Err(message.into()));
        self
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<Vec<GenericMessage>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn into_client(self) -> ThyBotClient<Self> {
        ThyBotClient::new(self, Model::default())
    }
}

impl ChatCompletionProvider for ScriptedProvider {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let messages: Vec<GenericMessage> =
            params.into_messages().into_iter().map(Into::into).collect();
        self.requests.lock().unwrap().push(messages);

        let next = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted reply left".into()));

        Box::pin(async move {
            next.map(|text| GenericChatCompletionResponse {
                message: GenericMessage::assistant(text),
                usage: None,
            })
            .map_err(ThyBotError::Invalid)
        })
    }
}

/// Search engine with a fixed answer.
#[derive(Debug)]
pub struct StaticSearch {
    outcome: std::result::Result<Vec<SearchHit>, String>,
    queries: Mutex<Vec<(String, usize)>>,
    calls: AtomicUsize,
}

impl StaticSearch {
    pub fn hits(hits: Vec<SearchHit>) -> Self {
        Self {
            outcome: Ok(hits),
            queries: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            queries: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<(String, usize)> {
        self.queries.lock().unwrap().clone()
    }
}

impl WebSearchProvider for StaticSearch {
    fn search<'a>(
        &'a self,
        query: &'a str,
        max_results: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SearchHit>>> + Send + 'a>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries
            .lock()
            .unwrap()
            .push((query.to_owned(), max_results));

        Box::pin(async move {
            self.outcome
                .clone()
                .map_err(ThyBotError::InvalidRequest)
        })
    }
}

pub fn hit(title: &str, snippet: &str, link: &str) -> SearchHit {
    SearchHit {
        title: title.into(),
        snippet: snippet.into(),
        link: link.into(),
    }
}
