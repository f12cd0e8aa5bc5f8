//! Facade crate for the Unbind reading coach.
//!
//! This crate re-exports the core domain types together with the pattern
//! coach and library insights, so applications can depend on a single crate.

#![forbid(unsafe_code)]

pub use unbind_core::{
    AbandonReason, Analysis, Assessment, Book, BookError, Coach, Factor, Genre,
    MAX_PROGRESS_PERCENT, MIN_LIBRARY_SIZE, PUSH_THRESHOLD, ReadingStatus, Reason, Recommendation,
};

pub use unbind_coach::{
    CoachError, FactorWeights, GenreInsight, LengthBand, LibraryInsights, PatternCoach,
    ReasonCount, score,
};

#[cfg(feature = "test-support")]
pub use unbind_core::test_support;
