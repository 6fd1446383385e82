//! Error types for the paged-fetch producer.

use thiserror::Error;

/// Errors produced by [`iterate_documents`](crate::iterate_documents).
///
/// The transform and collection operators have no failure modes of their
/// own, propagating the upstream's error type unmodified, so this is the
/// only error defined by the crate.
#[derive(Debug, Error)]
pub enum IterateError<E> {
    /// The fetcher returned more rows than the configured page limit.
    ///
    /// A backend that ignores the requested limit would silently corrupt
    /// the offset bookkeeping, so the stream refuses to continue.
    #[error("page {page} returned {got} rows, page limit is {limit}")]
    PageOverflow {
        /// Zero-based page number of the offending response.
        page: usize,
        /// Number of rows actually returned.
        got: usize,
        /// The limit the fetcher was asked to honor.
        limit: usize,
    },

    /// The fetcher itself failed; carried through unmodified.
    #[error(transparent)]
    Fetch(E),
}

impl<E> From<E> for IterateError<E> {
    fn from(err: E) -> Self {
        IterateError::Fetch(err)
    }
}
