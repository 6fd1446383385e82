//! Composable operators over lazy document streams.

use std::future::Future;

use async_stream::try_stream;
use futures::{Stream, StreamExt};
use tracing::debug;

use crate::chunk::Chunk;
use crate::window::PageWindow;

/// Transform every row of `upstream` with an async callback, preserving
/// order.
///
/// Each incoming chunk is flattened and `map_fn` is awaited per row, one
/// row at a time and never concurrently, so callback side effects are
/// strictly sequenced. Mapped rows are re-yielded as [`Chunk::Single`]
/// elements, keeping the output composable with every other operator.
///
/// The output is exactly as long as the flattened input (infinite for an
/// infinite upstream) and is a single consumption pass: re-iterating means
/// calling again with a fresh upstream. An `Err` from the upstream or from
/// `map_fn` is yielded once and ends the stream.
pub fn map_documents<S, T, E, F, Fut, U>(
    upstream: S,
    mut map_fn: F,
) -> impl Stream<Item = Result<Chunk<U>, E>>
where
    S: Stream<Item = Result<Chunk<T>, E>>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    try_stream! {
        for await chunk in upstream {
            for row in chunk? {
                yield Chunk::Single(map_fn(row).await?);
            }
        }
    }
}

/// Keep only the rows of `upstream` for which an async predicate holds.
///
/// Same flattening and ordering discipline as [`map_documents`]: rows are
/// tested one at a time in input order, and survivors are re-yielded as
/// [`Chunk::Single`] with their relative order intact. An `Err` from the
/// upstream or from `predicate` is yielded once and ends the stream.
pub fn filter_documents<S, T, E, F, Fut>(
    upstream: S,
    mut predicate: F,
) -> impl Stream<Item = Result<Chunk<T>, E>>
where
    S: Stream<Item = Result<Chunk<T>, E>>,
    F: FnMut(&T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    try_stream! {
        for await chunk in upstream {
            for row in chunk? {
                if predicate(&row).await? {
                    yield Chunk::Single(row);
                }
            }
        }
    }
}

/// Drain `upstream` completely and return every row, flattened.
///
/// The terminal collector for sequences known to be finite and small
/// enough to materialize; there is no early exit. The windowed counterpart
/// is [`paginate_documents`]. The first `Err` is returned as-is and any
/// rows collected before it are discarded.
pub async fn resolve_documents<S, T, E>(upstream: S) -> Result<Vec<T>, E>
where
    S: Stream<Item = Result<Chunk<T>, E>>,
{
    tokio::pin!(upstream);
    let mut rows = Vec::new();
    while let Some(chunk) = upstream.next().await {
        rows.extend(chunk?);
    }
    Ok(rows)
}

/// Collect one `(limit, offset)` page from `upstream`, releasing the
/// upstream as soon as the page is full.
///
/// Chunks are drained through a [`PageWindow`]; fullness is checked before
/// every poll, so no chunk beyond the one that fills the window is ever
/// requested, and with `limit == 0` the upstream is not polled at all. When
/// the upstream runs dry first, whatever was collected is returned, which
/// is how callers distinguish a short final page.
///
/// The result is at most `limit` rows and excludes the first `offset` rows
/// of the flattened upstream. The first `Err` is returned as-is and the
/// partial page is discarded.
pub async fn paginate_documents<S, T, E>(
    upstream: S,
    limit: usize,
    offset: usize,
) -> Result<Vec<T>, E>
where
    S: Stream<Item = Result<Chunk<T>, E>>,
{
    tokio::pin!(upstream);
    let mut window = PageWindow::new(limit, offset);
    let mut chunks = 0usize;
    while !window.is_full() {
        match upstream.next().await {
            Some(chunk) => {
                chunks += 1;
                window.admit(chunk?);
            }
            None => {
                debug!(chunks, collected = window.len(), limit, "upstream exhausted before window filled");
                return Ok(window.into_rows());
            }
        }
    }
    debug!(chunks, limit, offset, "page window filled, upstream released");
    Ok(window.into_rows())
}
