//! Library-wide reading insights for the dashboard.
//!
//! Unlike the coach, insights are computed for any library size; callers use
//! [`LibraryInsights::has_enough_data`] to decide whether to show pattern
//! breakdowns or a "keep logging" prompt.
#![forbid(unsafe_code)]

use std::collections::HashMap;

use serde::Serialize;
use unbind_core::{AbandonReason, Book, Genre, MIN_LIBRARY_SIZE, ReadingStatus};

use crate::stats::{average_quit_percent, rounded_percent};

/// Books longer than this many pages count as long.
pub const LONG_BOOK_PAGES: u32 = 400;
/// Books of at most this many pages count as short.
pub const SHORT_BOOK_PAGES: u32 = 300;
/// Abandon reasons highlighted on the dashboard.
pub const DASHBOARD_REASON_COUNT: usize = 3;

/// Finish statistics for one genre tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreInsight {
    /// The genre tag.
    pub genre: Genre,
    /// Books carrying the tag.
    pub total: usize,
    /// Finished books carrying the tag.
    pub finished: usize,
    /// Abandoned books carrying the tag.
    pub abandoned: usize,
    /// Rounded finish rate.
    pub rate: u8,
}

/// Finish counts for a band of book lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LengthBand {
    /// Books in the band.
    pub total: usize,
    /// Finished books in the band.
    pub finished: usize,
}

/// How often an abandon reason was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReasonCount {
    /// The reason.
    pub reason: AbandonReason,
    /// Abandoned books citing it.
    pub count: usize,
}

/// Summary of a reader's whole library.
///
/// # Examples
/// ```
/// use unbind_coach::LibraryInsights;
/// use unbind_core::{Book, Genre, ReadingStatus};
///
/// # fn main() -> Result<(), unbind_core::BookError> {
/// let library = vec![
///     Book::new(vec![Genre::new("Fiction")], 320, ReadingStatus::Finished, 100)?,
///     Book::new(vec![Genre::new("Fiction")], 500, ReadingStatus::Abandoned, 25)?,
/// ];
/// let insights = LibraryInsights::from_books(&library);
/// assert_eq!(insights.finish_rate, 50);
/// assert_eq!(insights.avg_abandon_percent, 25);
/// assert_eq!(insights.books_needed(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryInsights {
    /// Books logged.
    pub total: usize,
    /// Finished books.
    pub finished: usize,
    /// Abandoned books.
    pub abandoned: usize,
    /// Books in progress.
    pub reading: usize,
    /// Rounded share of finished books.
    pub finish_rate: u8,
    /// Mean progress at which books were abandoned.
    pub avg_abandon_percent: u8,
    /// Per-genre statistics, best finish rate first.
    pub genres: Vec<GenreInsight>,
    /// Books over [`LONG_BOOK_PAGES`] pages.
    pub long_books: LengthBand,
    /// Books of at most [`SHORT_BOOK_PAGES`] pages.
    pub short_books: LengthBand,
    /// Abandon reasons, most frequent first.
    pub abandon_reasons: Vec<ReasonCount>,
}

impl LibraryInsights {
    /// Summarise `books`.
    ///
    /// Genre and reason rankings are stable: ties keep the order in which the
    /// genre or reason first appears in the library.
    #[must_use]
    pub fn from_books(books: &[Book]) -> Self {
        let count_status =
            |status: ReadingStatus| books.iter().filter(|book| book.status == status).count();
        let total = books.len();
        let finished = count_status(ReadingStatus::Finished);
        let insights = Self {
            total,
            finished,
            abandoned: count_status(ReadingStatus::Abandoned),
            reading: count_status(ReadingStatus::Reading),
            finish_rate: rounded_percent(finished, total),
            avg_abandon_percent: average_quit_percent(books),
            genres: genre_breakdown(books),
            long_books: length_band(books, |pages| pages > LONG_BOOK_PAGES),
            short_books: length_band(books, |pages| pages <= SHORT_BOOK_PAGES),
            abandon_reasons: reason_breakdown(books),
        };
        log::debug!(
            "insights over {} books: {}% finished, {} genres, {} abandon reasons",
            insights.total,
            insights.finish_rate,
            insights.genres.len(),
            insights.abandon_reasons.len()
        );
        insights
    }

    /// Report whether the library is large enough for pattern breakdowns.
    #[must_use]
    pub const fn has_enough_data(&self) -> bool {
        self.total >= MIN_LIBRARY_SIZE
    }

    /// Books still to log before patterns unlock.
    #[must_use]
    pub const fn books_needed(&self) -> usize {
        MIN_LIBRARY_SIZE.saturating_sub(self.total)
    }

    /// The `n` most frequent abandon reasons.
    #[must_use]
    pub fn top_abandon_reasons(&self, n: usize) -> &[ReasonCount] {
        let end = n.min(self.abandon_reasons.len());
        self.abandon_reasons.get(..end).unwrap_or_default()
    }
}

fn genre_breakdown(books: &[Book]) -> Vec<GenreInsight> {
    let mut positions: HashMap<&Genre, usize> = HashMap::new();
    let mut rows: Vec<GenreInsight> = Vec::new();
    for book in books {
        for genre in &book.genres {
            let index = *positions.entry(genre).or_insert_with(|| {
                rows.push(GenreInsight {
                    genre: genre.clone(),
                    total: 0,
                    finished: 0,
                    abandoned: 0,
                    rate: 0,
                });
                rows.len() - 1
            });
            if let Some(row) = rows.get_mut(index) {
                row.total += 1;
                row.finished += usize::from(book.is_finished());
                row.abandoned += usize::from(book.is_abandoned());
            }
        }
    }
    for row in &mut rows {
        row.rate = rounded_percent(row.finished, row.total);
    }
    rows.sort_by(|a, b| b.rate.cmp(&a.rate));
    rows
}

fn length_band(books: &[Book], in_band: impl Fn(u32) -> bool) -> LengthBand {
    books
        .iter()
        .filter(|book| in_band(book.total_pages))
        .fold(LengthBand::default(), |band, book| LengthBand {
            total: band.total + 1,
            finished: band.finished + usize::from(book.is_finished()),
        })
}

fn reason_breakdown(books: &[Book]) -> Vec<ReasonCount> {
    let mut counts: Vec<ReasonCount> = Vec::new();
    let abandoned_reasons = books
        .iter()
        .filter(|book| book.is_abandoned())
        .flat_map(|book| book.abandon_reasons.iter().copied());
    for reason in abandoned_reasons {
        match counts.iter_mut().find(|entry| entry.reason == reason) {
            Some(entry) => entry.count += 1,
            None => counts.push(ReasonCount { reason, count: 1 }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use unbind_core::test_support::{book, seed_library};

    #[fixture]
    fn seed_insights() -> LibraryInsights {
        LibraryInsights::from_books(&seed_library())
    }

    #[rstest]
    fn counts_statuses(seed_insights: LibraryInsights) {
        assert_eq!(seed_insights.total, 5);
        assert_eq!(seed_insights.finished, 2);
        assert_eq!(seed_insights.abandoned, 2);
        assert_eq!(seed_insights.reading, 1);
        assert_eq!(seed_insights.finish_rate, 40);
        assert_eq!(seed_insights.avg_abandon_percent, 18);
        assert!(seed_insights.has_enough_data());
        assert_eq!(seed_insights.books_needed(), 0);
    }

    #[rstest]
    fn ranks_genres_by_rate_keeping_first_appearance_on_ties(seed_insights: LibraryInsights) {
        let order: Vec<&str> = seed_insights
            .genres
            .iter()
            .map(|row| row.genre.as_str())
            .collect();
        assert_eq!(
            order,
            vec![
                "Science Fiction",
                "Fiction",
                "Thriller",
                "Self-Help",
                "Non-Fiction",
                "History",
            ]
        );
        let fiction = seed_insights
            .genres
            .iter()
            .find(|row| row.genre.as_str() == "Fiction")
            .expect("fiction row");
        assert_eq!((fiction.total, fiction.finished, fiction.rate), (3, 2, 67));
    }

    #[rstest]
    fn splits_long_and_short_books(seed_insights: LibraryInsights) {
        // Long: Da Vinci Code, Dune, Sapiens. Short: none at or under 300.
        assert_eq!(seed_insights.long_books, LengthBand { total: 3, finished: 1 });
        assert_eq!(seed_insights.short_books, LengthBand::default());
    }

    #[rstest]
    fn ranks_abandon_reasons(seed_insights: LibraryInsights) {
        let top = seed_insights.top_abandon_reasons(DASHBOARD_REASON_COUNT);
        assert_eq!(
            top,
            [
                ReasonCount {
                    reason: AbandonReason::LostInterest,
                    count: 2
                },
                ReasonCount {
                    reason: AbandonReason::NoTime,
                    count: 1
                },
                ReasonCount {
                    reason: AbandonReason::TooDense,
                    count: 1
                },
            ]
        );
    }

    #[rstest]
    fn ignores_reasons_on_books_not_abandoned() {
        let library = vec![
            book(&["Fiction"], 250, ReadingStatus::Reading, 40)
                .with_abandon_reasons([AbandonReason::TooSlow]),
        ];
        let insights = LibraryInsights::from_books(&library);
        assert!(insights.abandon_reasons.is_empty());
        assert_eq!(insights.short_books, LengthBand { total: 1, finished: 0 });
    }

    #[rstest]
    fn empty_library_needs_five_books() {
        let insights = LibraryInsights::from_books(&[]);
        assert_eq!(insights.finish_rate, 0);
        assert_eq!(insights.books_needed(), 5);
        assert!(!insights.has_enough_data());
        assert!(insights.top_abandon_reasons(3).is_empty());
    }

    #[rstest]
    fn serializes_camel_case(seed_insights: LibraryInsights) {
        let json = serde_json::to_value(&seed_insights).expect("serialize insights");
        assert_eq!(json["finishRate"], 40);
        assert_eq!(json["avgAbandonPercent"], 18);
        assert_eq!(json["longBooks"]["total"], 3);
        assert_eq!(json["abandonReasons"][0]["reason"], "Lost interest");
    }
}
