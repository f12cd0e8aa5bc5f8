//! Reading coach for Unbind libraries.
//!
//! The crate provides two complementary capabilities:
//! - **Push/quit coaching** scores one candidate book against the reader's
//!   library. [`PatternCoach`] implements the
//!   [`Coach`](unbind_core::Coach) trait and looks at genre finish rates,
//!   progress relative to the reader's usual quit point, books of similar
//!   length, and momentum. Libraries under five books are reported as not
//!   ready rather than scored from a thin sample.
//! - **Library insights** summarise finish rates, quit points, genre
//!   rankings, length bands and abandon reasons for the dashboard.
//!
//! Both are pure functions over an in-memory library.
//!
//! # Examples
//!
//! ```
//! use unbind_coach::score;
//! use unbind_core::{Book, Genre, ReadingStatus};
//!
//! # fn main() -> Result<(), unbind_core::BookError> {
//! let candidate = Book::new(vec![Genre::new("Self-Help")], 200, ReadingStatus::Reading, 10)?;
//! let analysis = score(&candidate, &[candidate.clone()]);
//! assert_eq!(
//!     analysis.message().as_deref(),
//!     Some("Log at least 5 books to unlock pattern recognition. Currently: 1/5."),
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod insights;
mod pattern;
pub mod stats;
mod weights;

pub use error::CoachError;
pub use insights::{
    DASHBOARD_REASON_COUNT, GenreInsight, LONG_BOOK_PAGES, LengthBand, LibraryInsights,
    ReasonCount, SHORT_BOOK_PAGES,
};
pub use pattern::{
    CONFIDENCE_LIBRARY_SIZE, FALLBACK_GENRE_LABEL, GENRE_STRENGTH_RATE, LOW_INVESTMENT_PERCENT,
    MOMENTUM_PERCENT, PatternCoach, RISK_COHORT_FLOOR, RISK_RATE, SURVIVAL_MARGIN,
};
pub use weights::{FactorWeights, MAX_PUSH_SCORE};

use unbind_core::{Analysis, Book, Coach};

/// Analyse `candidate` against `library` with the default [`PatternCoach`].
#[must_use]
pub fn score(candidate: &Book, library: &[Book]) -> Analysis {
    PatternCoach::new().analyse(candidate, library)
}
