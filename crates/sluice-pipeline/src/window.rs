//! Windowed collection of document rows.

/// Accumulates the rows falling inside a `(limit, offset)` page window.
///
/// Rows are fed in arbitrary call-sized groups via [`PageWindow::admit`]:
/// the window drops the first `offset` rows it sees, keeps the next `limit`,
/// and ignores everything after that. The accumulator grows across calls
/// and is handed out by [`PageWindow::into_rows`] once the producing loop
/// ends.
///
/// The window itself cannot tell "full" apart from "the producer ran dry
/// first": it only ever reports how many rows it has admitted. A driving
/// loop detects exhaustion by running out of input while [`is_full`] is
/// still false, which is exactly what [`paginate_documents`] does.
///
/// [`is_full`]: PageWindow::is_full
/// [`paginate_documents`]: crate::paginate_documents
#[derive(Debug)]
pub struct PageWindow<T> {
    rows: Vec<T>,
    remaining: usize,
    skip: usize,
}

impl<T> PageWindow<T> {
    /// Open a window keeping `limit` rows after dropping the first
    /// `offset`. A window with `limit == 0` is full from the start and
    /// admits nothing.
    pub fn new(limit: usize, offset: usize) -> Self {
        Self {
            rows: Vec::new(),
            remaining: limit,
            skip: offset,
        }
    }

    /// Feed the next group of candidate rows, in order.
    ///
    /// Rows are dropped while the offset is unconsumed, admitted while
    /// capacity remains, and discarded (along with the rest of the group)
    /// once the window fills. Note the offset is consumed even when the
    /// window is already full. Feeding an empty group is valid and simply
    /// reports the current state.
    ///
    /// Returns [`is_full`](PageWindow::is_full) after processing.
    pub fn admit<I>(&mut self, rows: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        for row in rows {
            if self.skip > 0 {
                self.skip -= 1;
                continue;
            }
            if self.remaining == 0 {
                break;
            }
            self.rows.push(row);
            self.remaining -= 1;
        }
        self.is_full()
    }

    /// True once `limit` rows have been admitted.
    pub fn is_full(&self) -> bool {
        self.remaining == 0
    }

    /// Rows admitted so far.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Number of rows admitted so far.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True while no row has been admitted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the window, returning the admitted rows.
    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }
}
