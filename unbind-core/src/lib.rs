//! Core domain types for the Unbind reading coach.
//!
//! A reader logs [`Book`]s, each with genre tags, a page count, a
//! [`ReadingStatus`] and progress. A [`Coach`] inspects a candidate book
//! against that library and returns an [`Analysis`]: either a notice that
//! more books are needed, or an [`Assessment`] with a push score, a
//! [`Recommendation`], a confidence value and the [`Reason`]s behind it.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod abandon;
pub mod analysis;
pub mod book;
pub mod coach;
pub mod genre;
pub mod status;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use abandon::AbandonReason;
pub use analysis::{
    Analysis, Assessment, Factor, MIN_LIBRARY_SIZE, PUSH_THRESHOLD, Reason, Recommendation,
};
pub use book::{Book, BookError, MAX_PROGRESS_PERCENT};
pub use coach::Coach;
pub use genre::Genre;
pub use status::ReadingStatus;
