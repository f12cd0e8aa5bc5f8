//! Logged books and their validation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{AbandonReason, Genre, ReadingStatus};

/// Highest valid reading progress, in percent.
pub const MAX_PROGRESS_PERCENT: u8 = 100;

/// A book in a reader's log.
///
/// Only `genres`, `total_pages`, `status` and `progress_percent` feed the
/// coach. The descriptive fields default to empty so that a bare candidate
/// record can be deserialized.
///
/// # Examples
/// ```
/// use unbind_core::{Book, Genre, ReadingStatus};
///
/// # fn main() -> Result<(), unbind_core::BookError> {
/// let book = Book::new(vec![Genre::new("Fiction")], 328, ReadingStatus::Finished, 100)?
///     .with_title("1984");
/// assert_eq!(book.primary_genre(), Some(&Genre::new("Fiction")));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Book {
    /// Display title.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    /// Display author.
    #[cfg_attr(feature = "serde", serde(default))]
    pub author: String,
    /// Page count; always positive for validated books.
    pub total_pages: u32,
    /// Genre tags. The first tag is the primary genre.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "genre", alias = "genres", default)
    )]
    pub genres: Vec<Genre>,
    /// Current reading status.
    pub status: ReadingStatus,
    /// Progress through the book in `0..=100`.
    pub progress_percent: u8,
    /// Reasons recorded when the book was abandoned.
    #[cfg_attr(feature = "serde", serde(default))]
    pub abandon_reasons: Vec<AbandonReason>,
}

/// Errors returned by [`Book::new`] and [`Book::validate`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BookError {
    /// The page count was zero.
    #[error("book must have a positive page count")]
    ZeroPages,
    /// Progress exceeded 100 percent.
    #[error("progress {percent}% is outside 0..=100")]
    ProgressOutOfRange {
        /// Rejected progress value.
        percent: u8,
    },
}

impl Book {
    /// Validates and constructs a [`Book`] without descriptive metadata.
    ///
    /// # Errors
    /// Returns [`BookError`] when the page count is zero or progress exceeds
    /// 100 percent.
    pub fn new(
        genres: Vec<Genre>,
        total_pages: u32,
        status: ReadingStatus,
        progress_percent: u8,
    ) -> Result<Self, BookError> {
        let book = Self {
            title: String::new(),
            author: String::new(),
            total_pages,
            genres,
            status,
            progress_percent,
            abandon_reasons: Vec::new(),
        };
        book.validate()?;
        Ok(book)
    }

    /// Check the invariants the coach relies on.
    ///
    /// Deserialized books skip [`Book::new`], so callers loading external data
    /// should validate each record.
    ///
    /// # Errors
    /// Returns [`BookError`] describing the first violated invariant.
    pub const fn validate(&self) -> Result<(), BookError> {
        if self.total_pages == 0 {
            return Err(BookError::ZeroPages);
        }
        if self.progress_percent > MAX_PROGRESS_PERCENT {
            return Err(BookError::ProgressOutOfRange {
                percent: self.progress_percent,
            });
        }
        Ok(())
    }

    /// Set the title while returning `self` for chaining.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the author while returning `self` for chaining.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Record abandon reasons while returning `self` for chaining.
    #[must_use]
    pub fn with_abandon_reasons<I>(mut self, reasons: I) -> Self
    where
        I: IntoIterator<Item = AbandonReason>,
    {
        self.abandon_reasons = reasons.into_iter().collect();
        self
    }

    /// The first genre tag, if any.
    #[must_use]
    pub fn primary_genre(&self) -> Option<&Genre> {
        self.genres.first()
    }

    /// Report whether this book shares at least one genre tag with `other`.
    ///
    /// # Examples
    /// ```
    /// use unbind_core::{Book, Genre, ReadingStatus};
    ///
    /// # fn main() -> Result<(), unbind_core::BookError> {
    /// let dune = Book::new(
    ///     vec![Genre::new("Science Fiction"), Genre::new("Fiction")],
    ///     412,
    ///     ReadingStatus::Finished,
    ///     100,
    /// )?;
    /// let orwell = Book::new(vec![Genre::new("Fiction")], 328, ReadingStatus::Finished, 100)?;
    /// assert!(dune.shares_genre_with(&orwell));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn shares_genre_with(&self, other: &Self) -> bool {
        self.genres.iter().any(|genre| other.genres.contains(genre))
    }

    /// Absolute difference in page count between two books.
    #[must_use]
    pub const fn page_gap(&self, other: &Self) -> u32 {
        self.total_pages.abs_diff(other.total_pages)
    }

    /// Report whether the book has been read to the end.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.status, ReadingStatus::Finished)
    }

    /// Report whether the book was abandoned.
    #[must_use]
    pub const fn is_abandoned(&self) -> bool {
        matches!(self.status, ReadingStatus::Abandoned)
    }
}
