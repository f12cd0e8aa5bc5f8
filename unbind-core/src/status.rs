//! Reading status of a logged book.
//!
//! # Examples
//! ```
//! use unbind_core::ReadingStatus;
//!
//! assert_eq!(ReadingStatus::Finished.as_str(), "Finished");
//! assert_eq!(ReadingStatus::Abandoned.to_string(), "Abandoned");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a reader currently stands with a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReadingStatus {
    /// Still in progress.
    Reading,
    /// Read to the end.
    Finished,
    /// Put down before the end.
    Abandoned,
}

impl ReadingStatus {
    /// Return the status label as stored in a reading log.
    ///
    /// # Examples
    /// ```
    /// use unbind_core::ReadingStatus;
    ///
    /// assert_eq!(ReadingStatus::Reading.as_str(), "Reading");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reading => "Reading",
            Self::Finished => "Finished",
            Self::Abandoned => "Abandoned",
        }
    }
}

impl std::fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReadingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reading" => Ok(Self::Reading),
            "finished" => Ok(Self::Finished),
            "abandoned" => Ok(Self::Abandoned),
            _ => Err(format!("unknown reading status '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("Reading", ReadingStatus::Reading)]
    #[case("finished", ReadingStatus::Finished)]
    #[case("ABANDONED", ReadingStatus::Abandoned)]
    fn parses_case_insensitively(#[case] raw: &str, #[case] expected: ReadingStatus) {
        assert_eq!(ReadingStatus::from_str(raw), Ok(expected));
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(
            ReadingStatus::Finished.to_string(),
            ReadingStatus::Finished.as_str()
        );
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = ReadingStatus::from_str("paused").unwrap_err();
        assert!(err.contains("unknown reading status"));
    }
}
