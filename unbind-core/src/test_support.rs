//! Seed library fixtures shared by unit, behaviour and property tests.
//!
//! The five books mirror the demo data readers see before logging their own.

use crate::{AbandonReason, Book, Genre, ReadingStatus};

/// Build a validated book, panicking on invalid fixture data.
///
/// # Panics
/// Panics when `total_pages` is zero or `progress_percent` exceeds 100.
#[must_use]
pub fn book(genres: &[&str], total_pages: u32, status: ReadingStatus, progress_percent: u8) -> Book {
    let tags = genres.iter().copied().map(Genre::from).collect();
    match Book::new(tags, total_pages, status, progress_percent) {
        Ok(book) => book,
        Err(err) => panic!("invalid fixture book: {err}"),
    }
}

/// The five-book seed library.
///
/// | Title | Genres | Status | Progress | Pages |
/// |-------|--------|--------|----------|-------|
/// | The Da Vinci Code | Thriller, Fiction | Reading | 60% | 480 |
/// | Atomic Habits | Self-Help, Non-Fiction | Abandoned | 20% | 320 |
/// | Dune | Science Fiction, Fiction | Finished | 100% | 412 |
/// | Sapiens | History, Non-Fiction | Abandoned | 15% | 443 |
/// | 1984 | Fiction | Finished | 100% | 328 |
#[must_use]
pub fn seed_library() -> Vec<Book> {
    vec![
        book(&["Thriller", "Fiction"], 480, ReadingStatus::Reading, 60)
            .with_title("The Da Vinci Code")
            .with_author("Dan Brown"),
        book(&["Self-Help", "Non-Fiction"], 320, ReadingStatus::Abandoned, 20)
            .with_title("Atomic Habits")
            .with_author("James Clear")
            .with_abandon_reasons([AbandonReason::LostInterest, AbandonReason::NoTime]),
        book(&["Science Fiction", "Fiction"], 412, ReadingStatus::Finished, 100)
            .with_title("Dune")
            .with_author("Frank Herbert"),
        book(&["History", "Non-Fiction"], 443, ReadingStatus::Abandoned, 15)
            .with_title("Sapiens")
            .with_author("Yuval Noah Harari")
            .with_abandon_reasons([AbandonReason::TooDense, AbandonReason::LostInterest]),
        book(&["Fiction"], 328, ReadingStatus::Finished, 100)
            .with_title("1984")
            .with_author("George Orwell"),
    ]
}

/// Self-Help candidate at 10% of a 200-page book.
#[must_use]
pub fn self_help_candidate() -> Book {
    book(&["Self-Help"], 200, ReadingStatus::Reading, 10)
}

/// Fiction candidate at 80% of a 350-page book.
#[must_use]
pub fn fiction_candidate() -> Book {
    book(&["Fiction"], 350, ReadingStatus::Reading, 80)
}

/// History candidate at 25% of a 500-page book.
#[must_use]
pub fn history_candidate() -> Book {
    book(&["History"], 500, ReadingStatus::Reading, 25)
}

/// Return `library` with `candidate` appended, as when a new book is logged.
#[must_use]
pub fn with_candidate(mut library: Vec<Book>, candidate: &Book) -> Vec<Book> {
    library.push(candidate.clone());
    library
}
