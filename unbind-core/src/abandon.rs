//! Reasons a reader gives when abandoning a book.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a book was put down.
///
/// Labels are user-facing and serialize verbatim.
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use unbind_core::AbandonReason;
///
/// assert_eq!(AbandonReason::TooDense.as_str(), "Too dense/complex");
/// assert_eq!(AbandonReason::from_str("No time"), Ok(AbandonReason::NoTime));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AbandonReason {
    /// The book failed to hold attention.
    #[cfg_attr(feature = "serde", serde(rename = "Too boring"))]
    TooBoring,
    /// The page count wore the reader down.
    #[cfg_attr(feature = "serde", serde(rename = "Too long"))]
    TooLong,
    /// The material was heavier than expected.
    #[cfg_attr(feature = "serde", serde(rename = "Too dense/complex"))]
    TooDense,
    /// Interest faded over time.
    #[cfg_attr(feature = "serde", serde(rename = "Lost interest"))]
    LostInterest,
    /// Wrong book for the reader's mood.
    #[cfg_attr(feature = "serde", serde(rename = "Mood mismatch"))]
    MoodMismatch,
    /// Other commitments took over.
    #[cfg_attr(feature = "serde", serde(rename = "No time"))]
    NoTime,
    /// The prose did not work for the reader.
    #[cfg_attr(feature = "serde", serde(rename = "Writing style"))]
    WritingStyle,
    /// Pacing dragged.
    #[cfg_attr(feature = "serde", serde(rename = "Too slow"))]
    TooSlow,
    /// The plot or argument was hard to track.
    #[cfg_attr(feature = "serde", serde(rename = "Hard to follow"))]
    HardToFollow,
    /// Something more appealing came along.
    #[cfg_attr(feature = "serde", serde(rename = "Better book found"))]
    BetterBookFound,
    /// Anything else, including labels this version does not know.
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

impl AbandonReason {
    /// Every reason, in the order offered to readers.
    pub const ALL: [Self; 11] = [
        Self::TooBoring,
        Self::TooLong,
        Self::TooDense,
        Self::LostInterest,
        Self::MoodMismatch,
        Self::NoTime,
        Self::WritingStyle,
        Self::TooSlow,
        Self::HardToFollow,
        Self::BetterBookFound,
        Self::Other,
    ];

    /// Return the user-facing label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooBoring => "Too boring",
            Self::TooLong => "Too long",
            Self::TooDense => "Too dense/complex",
            Self::LostInterest => "Lost interest",
            Self::MoodMismatch => "Mood mismatch",
            Self::NoTime => "No time",
            Self::WritingStyle => "Writing style",
            Self::TooSlow => "Too slow",
            Self::HardToFollow => "Hard to follow",
            Self::BetterBookFound => "Better book found",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for AbandonReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AbandonReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|reason| reason.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown abandon reason '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn labels_round_trip_through_from_str() {
        for reason in AbandonReason::ALL {
            assert_eq!(AbandonReason::from_str(reason.as_str()), Ok(reason));
        }
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = AbandonReason::from_str("Spoilers").unwrap_err();
        assert!(err.contains("unknown abandon reason"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&AbandonReason::BetterBookFound).unwrap();
        assert_eq!(json, "\"Better book found\"");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_labels_deserialize_as_other() {
        let reasons: Vec<AbandonReason> =
            serde_json::from_str(r#"["Spoilers", "No time", "Other"]"#).unwrap();
        assert_eq!(
            reasons,
            vec![
                AbandonReason::Other,
                AbandonReason::NoTime,
                AbandonReason::Other
            ]
        );
    }
}
