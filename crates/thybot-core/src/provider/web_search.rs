use std::{future::Future, pin::Pin};

use crate::{error::Result, generic::SearchHit};

/// A live web search engine.
///
/// One call is one bounded request: at most `max_results` hits come back,
/// in the engine's ranking order.
pub trait WebSearchProvider: Send + Sync {
    fn search<'a>(
        &'a self,
        query: &'a str,
        max_results: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SearchHit>>> + Send + 'a>>;
}
