//! Advise a reader whether to push through a book or quit.
//!
//! The [`Coach`] trait assesses a candidate [`Book`](crate::Book) against the
//! reader's full library.

use crate::{Analysis, Book};

/// Produce a push/quit [`Analysis`] for a candidate book.
///
/// Implementations must be pure: the same candidate and library always yield
/// the same analysis, and nothing is retained between calls. Coaches must be
/// `Send + Sync` so one instance can serve concurrent callers.
///
/// The method is infallible. A library too small to learn from is reported
/// as [`Analysis::NotReady`], never as an error.
///
/// The candidate need not be a member of `library`. When it is, it counts
/// towards every cohort like any other book.
///
/// # Examples
///
/// ```rust
/// use unbind_core::{Analysis, Book, Coach};
///
/// struct PatientCoach;
///
/// impl Coach for PatientCoach {
///     fn analyse(&self, _candidate: &Book, library: &[Book]) -> Analysis {
///         Analysis::NotReady { logged: library.len() }
///     }
/// }
///
/// let candidate = Book::new(Vec::new(), 200, unbind_core::ReadingStatus::Reading, 10)
///     .expect("valid book");
/// let analysis = PatientCoach.analyse(&candidate, &[]);
/// assert!(!analysis.is_ready());
/// ```
pub trait Coach: Send + Sync {
    /// Assess `candidate` in the light of `library`.
    fn analyse(&self, candidate: &Book, library: &[Book]) -> Analysis;
}

impl<C: Coach + ?Sized> Coach for &C {
    fn analyse(&self, candidate: &Book, library: &[Book]) -> Analysis {
        (**self).analyse(candidate, library)
    }
}

impl<C: Coach + ?Sized> Coach for Box<C> {
    fn analyse(&self, candidate: &Book, library: &[Book]) -> Analysis {
        (**self).analyse(candidate, library)
    }
}
