//! Paged-fetch producer for document streams.

use std::future::Future;
use std::time::Duration;

use async_stream::try_stream;
use futures::Stream;
use tracing::{debug, trace};

use crate::chunk::Chunk;
use crate::error::IterateError;

/// Default cap on rows fetched before the stream stops on its own.
const TOTAL_DOCUMENTS: usize = 10_000;
/// Default page size requested from the fetcher.
const REQUEST_LIMIT: usize = 5_000;
/// Default minimum duration of a single fetch, for backend rate limiting.
const REQUEST_DELAY: Duration = Duration::from_millis(100);

/// A row that can serve as a pagination cursor.
///
/// Backends that paginate by cursor rather than offset read the previous
/// page's trailing id back out of [`FetchQuery::last_id`].
pub trait Document {
    /// Cursor identity of a row.
    type Id: Clone;

    /// The row's id, handed to the fetcher as `last_id` of the next page.
    fn id(&self) -> Self::Id;
}

/// The request handed to the fetcher for each page.
///
/// Carries both offset-style (`limit`/`offset`/`page`) and cursor-style
/// (`last_id`) coordinates; a fetcher uses whichever its backend speaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchQuery<Id> {
    /// Maximum number of rows the fetcher may return.
    pub limit: usize,
    /// Index of the first requested row in the overall collection.
    pub offset: usize,
    /// Zero-based page number, `offset / limit`.
    pub page: usize,
    /// Id of the last row of the previous page; `None` on the first page.
    pub last_id: Option<Id>,
}

/// Tuning for [`iterate_documents`].
#[derive(Debug, Clone)]
pub struct IterateConfig {
    /// Hard cap on rows fetched before the stream ends on its own.
    pub total_documents: usize,
    /// Rows requested per page.
    pub page_limit: usize,
    /// Minimum duration of each fetch; the request and the pacing sleep
    /// run concurrently, so a slow backend is not penalized twice.
    pub request_delay: Duration,
}

impl Default for IterateConfig {
    fn default() -> Self {
        Self {
            total_documents: TOTAL_DOCUMENTS,
            page_limit: REQUEST_LIMIT,
            request_delay: REQUEST_DELAY,
        }
    }
}

/// Stream pages out of a remote source as [`Chunk::Batch`] elements.
///
/// Calls `fetch` with a fresh [`FetchQuery`] per page, yielding each
/// response as one batch. A full page advances the offset, page number,
/// and cursor and keeps going; a short page (empty included) is yielded
/// and ends the stream, as does reaching `total_documents`. A response
/// larger than `page_limit` ends the stream with
/// [`IterateError::PageOverflow`]; a fetcher error is passed through as
/// [`IterateError::Fetch`].
///
/// The stream is lazy: nothing is fetched until the first poll, and a
/// consumer that stops polling (e.g. [`paginate_documents`] once its
/// window fills) stops the fetching with it.
///
/// [`paginate_documents`]: crate::paginate_documents
pub fn iterate_documents<T, E, F, Fut>(
    config: IterateConfig,
    mut fetch: F,
) -> impl Stream<Item = Result<Chunk<T>, IterateError<E>>>
where
    T: Document,
    F: FnMut(FetchQuery<T::Id>) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    try_stream! {
        let mut fetched = 0usize;
        let mut page = 0usize;
        let mut last_id: Option<T::Id> = None;

        while fetched < config.total_documents {
            let query = FetchQuery {
                limit: config.page_limit,
                offset: fetched,
                page,
                last_id: last_id.clone(),
            };
            debug!(page, offset = query.offset, "fetching document page");

            let (response, _) = tokio::join!(
                fetch(query),
                tokio::time::sleep(config.request_delay),
            );
            let response = guard_page_limit(response?, page, config.page_limit)?;

            let short_page = response.len() < config.page_limit;
            trace!(rows = response.len(), short_page, "page received");

            last_id = response.last().map(Document::id);
            fetched += response.len();
            page += 1;

            yield Chunk::Batch(response);
            if short_page {
                break;
            }
        }
    }
}

fn guard_page_limit<T, E>(
    rows: Vec<T>,
    page: usize,
    limit: usize,
) -> Result<Vec<T>, IterateError<E>> {
    if rows.len() > limit {
        return Err(IterateError::PageOverflow {
            page,
            got: rows.len(),
            limit,
        });
    }
    Ok(rows)
}
