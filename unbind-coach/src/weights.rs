//! Points each scoring factor contributes when it fires.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::CoachError;

/// Highest push score a coach can report.
pub const MAX_PUSH_SCORE: u8 = 100;

/// Points awarded by each factor.
///
/// The defaults (40/30/30) fill the 100-point scale exactly, so the push
/// score is always one of `0, 30, 40, 60, 70, 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorWeights {
    /// Awarded when the reader usually finishes the candidate's genres.
    pub genre: u8,
    /// Awarded when progress is past the reader's usual quit point.
    pub position: u8,
    /// Awarded when more than half of the book is read.
    pub momentum: u8,
}

impl FactorWeights {
    /// Default weighting.
    pub const DEFAULT: Self = Self {
        genre: 40,
        position: 30,
        momentum: 30,
    };

    /// Sum of all factor weights.
    ///
    /// # Examples
    /// ```
    /// use unbind_coach::FactorWeights;
    ///
    /// assert_eq!(FactorWeights::default().total(), 100);
    /// ```
    #[must_use]
    pub fn total(self) -> u16 {
        u16::from(self.genre) + u16::from(self.position) + u16::from(self.momentum)
    }

    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`CoachError::InvalidWeights`] when the weights sum to zero or
    /// exceed [`MAX_PUSH_SCORE`].
    pub fn validate(self) -> Result<Self, CoachError> {
        let total = self.total();
        if total == 0 || total > u16::from(MAX_PUSH_SCORE) {
            return Err(CoachError::InvalidWeights { total });
        }
        Ok(self)
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_are_valid() {
        assert_eq!(FactorWeights::default().validate(), Ok(FactorWeights::DEFAULT));
    }

    #[rstest]
    #[case(FactorWeights { genre: 0, position: 0, momentum: 0 }, 0)]
    #[case(FactorWeights { genre: 50, position: 30, momentum: 30 }, 110)]
    #[case(FactorWeights { genre: 255, position: 255, momentum: 255 }, 765)]
    fn rejects_out_of_scale_totals(#[case] weights: FactorWeights, #[case] total: u16) {
        assert_eq!(weights.validate(), Err(CoachError::InvalidWeights { total }));
    }

    #[rstest]
    fn accepts_partial_scale() {
        let weights = FactorWeights {
            genre: 20,
            position: 10,
            momentum: 0,
        };
        assert!(weights.validate().is_ok());
    }
}
