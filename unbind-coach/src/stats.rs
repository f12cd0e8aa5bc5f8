//! Library statistics derived once per coaching call.
//!
//! All percentages round half up, matching how readers see them on the
//! dashboard: 2 of 3 finished books is 67%, a mean quit point of 17.5% is 18%.
//! Rounding happens in integer arithmetic so results never depend on float
//! representation.
#![forbid(unsafe_code)]

use unbind_core::Book;

/// Maximum page difference for a book to count as "similar length".
pub const PAGE_WINDOW: u32 = 100;

/// Round `100 * part / whole` half up, saturating at 100.
///
/// Returns 0 when `whole` is zero.
///
/// # Examples
/// ```
/// use unbind_coach::stats::rounded_percent;
///
/// assert_eq!(rounded_percent(2, 3), 67);
/// assert_eq!(rounded_percent(1, 8), 13);
/// assert_eq!(rounded_percent(0, 0), 0);
/// assert_eq!(rounded_percent(12, 10), 100);
/// ```
#[expect(
    clippy::integer_division,
    reason = "half-up rounding is exact in integer arithmetic"
)]
#[must_use]
pub fn rounded_percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let doubled = part.saturating_mul(200).saturating_add(whole);
    let percent = doubled / whole.saturating_mul(2);
    u8::try_from(percent.min(100)).unwrap_or(100)
}

/// Round the mean of `values` half up; 0 for an empty input.
#[expect(
    clippy::integer_division,
    reason = "half-up rounding is exact in integer arithmetic"
)]
fn rounded_mean(values: impl Iterator<Item = u8>) -> u8 {
    let (sum, count) = values.fold((0_usize, 0_usize), |(sum, count), value| {
        (sum + usize::from(value), count + 1)
    });
    if count == 0 {
        return 0;
    }
    let mean = (2 * sum + count) / (2 * count);
    u8::try_from(mean).unwrap_or(u8::MAX)
}

/// Mean progress, rounded, at which the reader abandoned books.
///
/// Returns 0 when nothing has been abandoned.
#[must_use]
pub fn average_quit_percent(library: &[Book]) -> u8 {
    rounded_mean(
        library
            .iter()
            .filter(|book| book.is_abandoned())
            .map(|book| book.progress_percent),
    )
}

/// Size and finish count of a group of books.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CohortStats {
    /// Books in the cohort.
    pub size: usize,
    /// Finished books in the cohort.
    pub finished: usize,
}

impl CohortStats {
    /// Tally a cohort from its members.
    #[must_use]
    pub fn collect<'a, I>(books: I) -> Self
    where
        I: IntoIterator<Item = &'a Book>,
    {
        books.into_iter().fold(Self::default(), |cohort, book| Self {
            size: cohort.size + 1,
            finished: cohort.finished + usize::from(book.is_finished()),
        })
    }

    /// Rounded share of finished books; 0 for an empty cohort.
    #[must_use]
    pub fn finish_rate(&self) -> u8 {
        rounded_percent(self.finished, self.size)
    }
}

/// Statistics the coach reads for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryStats {
    /// Books sharing at least one genre tag with the candidate.
    pub genre: CohortStats,
    /// Books within [`PAGE_WINDOW`] pages of the candidate.
    pub length: CohortStats,
    /// Mean progress of abandoned books.
    pub avg_quit_percent: u8,
}

impl LibraryStats {
    /// Derive every statistic for `candidate` over the full `library`.
    ///
    /// The candidate is not excluded: if it is in the library it joins its own
    /// cohorts.
    #[must_use]
    pub fn derive(candidate: &Book, library: &[Book]) -> Self {
        let genre = CohortStats::collect(
            library
                .iter()
                .filter(|book| book.shares_genre_with(candidate)),
        );
        let length = CohortStats::collect(
            library
                .iter()
                .filter(|book| book.page_gap(candidate) <= PAGE_WINDOW),
        );
        Self {
            genre,
            length,
            avg_quit_percent: average_quit_percent(library),
        }
    }
}
