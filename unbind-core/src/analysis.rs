//! Coach output: the push/quit verdict and the reasons behind it.
//!
//! An [`Analysis`] is either [`Analysis::NotReady`], when the library is too
//! small to learn from, or [`Analysis::Ready`] carrying a full
//! [`Assessment`]. Score-dependent fields therefore exist together or not at
//! all.
//!
//! With the `serde` feature, an analysis serializes to the flat object the
//! presentation layer renders:
//!
//! ```text
//! {"ready": false, "message": "Log at least 5 books ..."}
//! {"ready": true, "pushScore": 100, "recommendation": "PUSH", "confidence": 50,
//!  "reasons": ["..."], "avgQuitPercent": 18, "genreRate": 67}
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Smallest library the coach will learn from.
pub const MIN_LIBRARY_SIZE: usize = 5;

/// Push score at or above which the coach recommends pushing on.
pub const PUSH_THRESHOLD: u8 = 60;

/// Binary verdict for a candidate book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Recommendation {
    /// Keep reading.
    #[cfg_attr(feature = "serde", serde(rename = "PUSH"))]
    Push,
    /// Put the book down.
    #[cfg_attr(feature = "serde", serde(rename = "QUIT"))]
    Quit,
}

impl Recommendation {
    /// Map a push score onto a verdict.
    ///
    /// # Examples
    /// ```
    /// use unbind_core::Recommendation;
    ///
    /// assert_eq!(Recommendation::from_push_score(60), Recommendation::Push);
    /// assert_eq!(Recommendation::from_push_score(59), Recommendation::Quit);
    /// ```
    #[must_use]
    pub const fn from_push_score(push_score: u8) -> Self {
        if push_score >= PUSH_THRESHOLD {
            Self::Push
        } else {
            Self::Quit
        }
    }

    /// Upper-case label shown to readers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Push => "PUSH",
            Self::Quit => "QUIT",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoring factor that produced a [`Reason`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Factor {
    /// Finish rate within the candidate's genres.
    Genre,
    /// Progress against the quit baseline, or the length cohort.
    Position,
    /// Raw progress through the candidate.
    Momentum,
}

/// One line of the coach's rationale.
///
/// `Display` renders the exact user-facing sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// The reader usually finishes books in this genre.
    GenreStrength {
        /// Genre cohort finish rate.
        rate: u8,
        /// Label used in the sentence.
        genre: String,
    },
    /// The reader rarely finishes books in this genre.
    GenreRisk {
        /// Genre cohort finish rate.
        rate: u8,
        /// Label used in the sentence.
        genre: String,
    },
    /// Progress is well past the reader's usual quit point.
    SurvivalZone {
        /// Mean progress of abandoned books.
        avg_quit_percent: u8,
    },
    /// Books of similar length are rarely finished.
    LengthRisk {
        /// Length cohort finish rate.
        rate: u8,
    },
    /// More than half of the book is already read.
    Momentum {
        /// Candidate progress.
        progress_percent: u8,
    },
    /// Very little has been invested so far.
    LowInvestment {
        /// Candidate progress.
        progress_percent: u8,
    },
}

impl Reason {
    /// The factor this reason belongs to.
    #[must_use]
    pub const fn factor(&self) -> Factor {
        match self {
            Self::GenreStrength { .. } | Self::GenreRisk { .. } => Factor::Genre,
            Self::SurvivalZone { .. } | Self::LengthRisk { .. } => Factor::Position,
            Self::Momentum { .. } | Self::LowInvestment { .. } => Factor::Momentum,
        }
    }

    /// Report whether the reason came with points towards pushing on.
    #[must_use]
    pub const fn adds_points(&self) -> bool {
        matches!(
            self,
            Self::GenreStrength { .. } | Self::SurvivalZone { .. } | Self::Momentum { .. }
        )
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenreStrength { rate, genre } => {
                write!(f, "Genre Strength: You finish {rate}% of {genre} books.")
            }
            Self::GenreRisk { rate, genre } => {
                write!(f, "Genre Risk: You only finish {rate}% of {genre} books.")
            }
            Self::SurvivalZone { avg_quit_percent } => write!(
                f,
                "Survival Zone: You're past your average quit point ({avg_quit_percent}%)."
            ),
            Self::LengthRisk { rate } => {
                write!(f, "Length Risk: Books this size have a low {rate}% finish rate.")
            }
            Self::Momentum { progress_percent } => {
                write!(f, "Momentum: You're over halfway done ({progress_percent}%).")
            }
            Self::LowInvestment { progress_percent } => write!(
                f,
                "Low Investment: Only {progress_percent}% in. Quitting now is cheap."
            ),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A complete push/quit assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct Assessment {
    /// Bounded score in `0..=100`.
    pub push_score: u8,
    /// Verdict derived from `push_score`.
    pub recommendation: Recommendation,
    /// Trust in the verdict, driven by library size only.
    pub confidence: u8,
    /// Rationale in evaluation order. Never reorder for display.
    pub reasons: Vec<Reason>,
    /// Mean progress at which the reader abandons books.
    pub avg_quit_percent: u8,
    /// Finish rate across the candidate's genre cohort.
    pub genre_rate: u8,
}

impl Assessment {
    /// Render every reason as its user-facing sentence.
    #[must_use]
    pub fn reason_messages(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }
}

/// Result of asking a coach about a candidate book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    /// The library is smaller than [`MIN_LIBRARY_SIZE`].
    NotReady {
        /// Number of books currently logged.
        logged: usize,
    },
    /// The library was large enough to score the candidate.
    Ready(Assessment),
}

impl Analysis {
    /// Report whether scoring was performed.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Explain the data shortfall; `None` once the analysis is ready.
    ///
    /// # Examples
    /// ```
    /// use unbind_core::Analysis;
    ///
    /// let analysis = Analysis::NotReady { logged: 3 };
    /// assert_eq!(
    ///     analysis.message().as_deref(),
    ///     Some("Log at least 5 books to unlock pattern recognition. Currently: 3/5."),
    /// );
    /// ```
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::NotReady { logged } => Some(format!(
                "Log at least {MIN_LIBRARY_SIZE} books to unlock pattern recognition. \
                 Currently: {logged}/{MIN_LIBRARY_SIZE}."
            )),
            Self::Ready(_) => None,
        }
    }

    /// Borrow the assessment when ready.
    #[must_use]
    pub const fn assessment(&self) -> Option<&Assessment> {
        match self {
            Self::Ready(assessment) => Some(assessment),
            Self::NotReady { .. } => None,
        }
    }

    /// Consume the analysis and return the assessment when ready.
    #[must_use]
    pub fn into_assessment(self) -> Option<Assessment> {
        match self {
            Self::Ready(assessment) => Some(assessment),
            Self::NotReady { .. } => None,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize)]
struct AnalysisView<'a> {
    ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(flatten)]
    assessment: Option<&'a Assessment>,
}

#[cfg(feature = "serde")]
impl Serialize for Analysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AnalysisView {
            ready: self.is_ready(),
            message: self.message(),
            assessment: self.assessment(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Reason::GenreStrength { rate: 67, genre: "Thriller".into() },
        "Genre Strength: You finish 67% of Thriller books.")]
    #[case(Reason::GenreRisk { rate: 0, genre: "similar".into() },
        "Genre Risk: You only finish 0% of similar books.")]
    #[case(Reason::SurvivalZone { avg_quit_percent: 18 },
        "Survival Zone: You're past your average quit point (18%).")]
    #[case(Reason::LengthRisk { rate: 25 },
        "Length Risk: Books this size have a low 25% finish rate.")]
    #[case(Reason::Momentum { progress_percent: 60 },
        "Momentum: You're over halfway done (60%).")]
    #[case(Reason::LowInvestment { progress_percent: 10 },
        "Low Investment: Only 10% in. Quitting now is cheap.")]
    fn reasons_render_verbatim(#[case] reason: Reason, #[case] expected: &str) {
        assert_eq!(reason.to_string(), expected);
    }

    #[rstest]
    fn message_only_when_not_ready() {
        let ready = Analysis::Ready(Assessment {
            push_score: 0,
            recommendation: Recommendation::Quit,
            confidence: 50,
            reasons: Vec::new(),
            avg_quit_percent: 0,
            genre_rate: 0,
        });
        assert!(ready.message().is_none());
        assert!(ready.is_ready());

        let not_ready = Analysis::NotReady { logged: 0 };
        assert!(not_ready.assessment().is_none());
        assert_eq!(
            not_ready.message().as_deref(),
            Some("Log at least 5 books to unlock pattern recognition. Currently: 0/5.")
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn not_ready_serializes_without_score_fields() {
        let json = serde_json::to_value(Analysis::NotReady { logged: 3 }).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "ready": false,
                "message": "Log at least 5 books to unlock pattern recognition. Currently: 3/5."
            })
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn ready_serializes_flat_camel_case() {
        let analysis = Analysis::Ready(Assessment {
            push_score: 70,
            recommendation: Recommendation::Push,
            confidence: 60,
            reasons: vec![Reason::Momentum {
                progress_percent: 80,
            }],
            avg_quit_percent: 18,
            genre_rate: 67,
        });
        let json = serde_json::to_value(&analysis).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "ready": true,
                "pushScore": 70,
                "recommendation": "PUSH",
                "confidence": 60,
                "reasons": ["Momentum: You're over halfway done (80%)."],
                "avgQuitPercent": 18,
                "genreRate": 67
            })
        );
    }
}
