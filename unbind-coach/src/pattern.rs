//! Heuristic push/quit coach built from the reader's own history.
//!
//! Three factors are evaluated in a fixed order. Each contributes at most one
//! block of points and at most one [`Reason`]:
//!
//! 1. **Genre**: points when the reader finishes at least 60% of books
//!    sharing a genre with the candidate; a risk note when the rate is 30% or
//!    lower across more than two such books.
//! 2. **Position**: points when progress is more than 10 points past the mean
//!    quit point; otherwise a risk note when books of similar length (within
//!    100 pages) are finished 30% of the time or less, across more than two
//!    such books. The two branches deliberately read different statistics.
//! 3. **Momentum**: points past 50% progress; a note below 15% that quitting
//!    is cheap.
//!
//! The push score is capped at 100 and a score of 60 or more recommends
//! pushing on. Confidence grows by 10 points per logged book and saturates
//! at a library of ten.
#![forbid(unsafe_code)]

use unbind_core::{
    Analysis, Assessment, Book, Coach, MIN_LIBRARY_SIZE, Reason, Recommendation,
};

use crate::{
    CoachError, FactorWeights, MAX_PUSH_SCORE,
    stats::{LibraryStats, rounded_percent},
};

/// Genre finish rate at or above which the genre factor awards points.
pub const GENRE_STRENGTH_RATE: u8 = 60;
/// Finish rate at or below which a cohort is flagged as a risk.
pub const RISK_RATE: u8 = 30;
/// A cohort must hold more than this many books to be flagged as a risk.
pub const RISK_COHORT_FLOOR: usize = 2;
/// Points past the mean quit percentage that count as the survival zone.
pub const SURVIVAL_MARGIN: u8 = 10;
/// Progress above which momentum awards points.
pub const MOMENTUM_PERCENT: u8 = 50;
/// Progress below which quitting is considered cheap.
pub const LOW_INVESTMENT_PERCENT: u8 = 15;
/// Library size at which confidence saturates.
pub const CONFIDENCE_LIBRARY_SIZE: usize = 10;
/// Genre label used when the candidate carries no tags.
pub const FALLBACK_GENRE_LABEL: &str = "similar";

/// Coach that scores a candidate against genre, position and momentum
/// patterns in the reader's library.
///
/// # Examples
/// ```
/// use unbind_coach::PatternCoach;
/// use unbind_core::{Book, Coach, Genre, ReadingStatus};
///
/// # fn main() -> Result<(), unbind_core::BookError> {
/// let finished = Book::new(vec![Genre::new("Fiction")], 300, ReadingStatus::Finished, 100)?;
/// let library = vec![finished; 5];
/// let candidate = Book::new(vec![Genre::new("Fiction")], 320, ReadingStatus::Reading, 70)?;
///
/// let analysis = PatternCoach::new().analyse(&candidate, &library);
/// let assessment = analysis.assessment().expect("five books unlock coaching");
/// assert_eq!(assessment.push_score, 100);
/// assert_eq!(assessment.confidence, 50);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternCoach {
    weights: FactorWeights,
}

impl PatternCoach {
    /// Construct a coach with the default 40/30/30 weighting.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weights: FactorWeights::DEFAULT,
        }
    }

    /// Construct a coach with custom factor weights.
    ///
    /// # Errors
    /// Returns [`CoachError::InvalidWeights`] when the weights do not fit the
    /// 100-point scale.
    pub fn with_weights(weights: FactorWeights) -> Result<Self, CoachError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// The weights applied when factors fire.
    #[must_use]
    pub const fn weights(&self) -> FactorWeights {
        self.weights
    }

    fn assess(&self, candidate: &Book, library: &[Book]) -> Assessment {
        let stats = LibraryStats::derive(candidate, library);
        log::debug!(
            "genre cohort {}/{} finished, length cohort {}/{} finished, average quit at {}%",
            stats.genre.finished,
            stats.genre.size,
            stats.length.finished,
            stats.length.size,
            stats.avg_quit_percent
        );

        let mut tally = Tally::default();
        tally.record(genre_reason(candidate, &stats), self.weights.genre);
        tally.record(position_reason(candidate, &stats), self.weights.position);
        tally.record(momentum_reason(candidate), self.weights.momentum);

        let push_score = tally.push_score();
        let assessment = Assessment {
            push_score,
            recommendation: Recommendation::from_push_score(push_score),
            confidence: confidence(library.len()),
            reasons: tally.reasons,
            avg_quit_percent: stats.avg_quit_percent,
            genre_rate: stats.genre.finish_rate(),
        };
        log::debug!(
            "push score {} -> {} at {}% confidence",
            assessment.push_score,
            assessment.recommendation,
            assessment.confidence
        );
        assessment
    }
}

impl Coach for PatternCoach {
    fn analyse(&self, candidate: &Book, library: &[Book]) -> Analysis {
        let logged = library.len();
        if logged < MIN_LIBRARY_SIZE {
            log::trace!("library holds {logged} books; coaching needs {MIN_LIBRARY_SIZE}");
            return Analysis::NotReady { logged };
        }
        Analysis::Ready(self.assess(candidate, library))
    }
}

/// Running score and rationale, in evaluation order.
#[derive(Debug, Default)]
struct Tally {
    score: u16,
    reasons: Vec<Reason>,
}

impl Tally {
    fn record(&mut self, reason: Option<Reason>, weight: u8) {
        let Some(found) = reason else {
            return;
        };
        if found.adds_points() {
            self.score += u16::from(weight);
        }
        log::debug!("{:?} factor: {found}", found.factor());
        self.reasons.push(found);
    }

    fn push_score(&self) -> u8 {
        let capped = self.score.min(u16::from(MAX_PUSH_SCORE));
        u8::try_from(capped).unwrap_or(MAX_PUSH_SCORE)
    }
}

fn genre_label(candidate: &Book) -> String {
    candidate
        .primary_genre()
        .filter(|genre| !genre.as_str().is_empty())
        .map_or_else(|| FALLBACK_GENRE_LABEL.to_owned(), ToString::to_string)
}

fn genre_reason(candidate: &Book, stats: &LibraryStats) -> Option<Reason> {
    let rate = stats.genre.finish_rate();
    if rate >= GENRE_STRENGTH_RATE {
        Some(Reason::GenreStrength {
            rate,
            genre: genre_label(candidate),
        })
    } else if rate <= RISK_RATE && stats.genre.size > RISK_COHORT_FLOOR {
        Some(Reason::GenreRisk {
            rate,
            genre: genre_label(candidate),
        })
    } else {
        None
    }
}

fn position_reason(candidate: &Book, stats: &LibraryStats) -> Option<Reason> {
    let survival_point = u16::from(stats.avg_quit_percent) + u16::from(SURVIVAL_MARGIN);
    if u16::from(candidate.progress_percent) > survival_point {
        return Some(Reason::SurvivalZone {
            avg_quit_percent: stats.avg_quit_percent,
        });
    }
    let rate = stats.length.finish_rate();
    (rate <= RISK_RATE && stats.length.size > RISK_COHORT_FLOOR)
        .then_some(Reason::LengthRisk { rate })
}

fn momentum_reason(candidate: &Book) -> Option<Reason> {
    let progress_percent = candidate.progress_percent;
    if progress_percent > MOMENTUM_PERCENT {
        Some(Reason::Momentum { progress_percent })
    } else if progress_percent < LOW_INVESTMENT_PERCENT {
        Some(Reason::LowInvestment { progress_percent })
    } else {
        None
    }
}

/// Confidence in a verdict drawn from `logged` books, independent of score.
fn confidence(logged: usize) -> u8 {
    rounded_percent(logged, CONFIDENCE_LIBRARY_SIZE)
}
