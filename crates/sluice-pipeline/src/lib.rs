//! Lazy Document Streaming
//!
//! This crate provides composable operators over lazy asynchronous sequences
//! of document rows, for callers that page data out of a remote source and
//! want to slice, transform, or materialize it without holding the whole
//! collection in memory.
//!
//! ## Architecture
//!
//! Every operator consumes and produces the same wire shape, a
//! `Stream<Item = Result<Chunk<T>, E>>`, so stages chain in any order:
//!
//! ```text
//! iterate_documents (producer: paged fetch ─> Chunk::Batch per page)
//!   └─> map_documents / filter_documents (per-row transform stages)
//!         ├─> paginate_documents (windowed collector, short-circuits)
//!         └─> resolve_documents  (full collector)
//! ```
//!
//! Rows move through one at a time: a transform stage awaits its callback
//! for each row before touching the next, so callback side effects are
//! strictly ordered and an infinite upstream streams without buffering.
//!
//! ## Short-circuit pagination
//!
//! [`paginate_documents`] drives a [`PageWindow`] and stops polling the
//! upstream the moment the window fills. When the upstream is itself an
//! expensive paged fetch, no page beyond the one that fills the window is
//! ever requested.
//!
//! ## Errors
//!
//! Operators have no failure modes of their own; an `Err` from the
//! upstream, a callback, or a predicate passes through unmodified and
//! terminates iteration. The one exception is the producer,
//! [`iterate_documents`], which owns [`IterateError`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sluice_pipeline::{iterate_documents, filter_documents, paginate_documents, IterateConfig};
//!
//! let pages = iterate_documents(IterateConfig::default(), |query| fetch_page(query));
//! let visible = filter_documents(pages, |row| check_visibility(row));
//! let rows = paginate_documents(visible, 25, 50).await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod chunk;
mod error;
mod iterate;
mod ops;
mod window;

pub use chunk::{Chunk, ChunkIter};
pub use error::IterateError;
pub use iterate::{iterate_documents, Document, FetchQuery, IterateConfig};
pub use ops::{filter_documents, map_documents, paginate_documents, resolve_documents};
pub use window::PageWindow;
