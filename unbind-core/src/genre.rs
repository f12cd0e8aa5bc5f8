//! Genre tags attached to books.
//!
//! Tags are free-form: readers may type genres outside the suggested list, so
//! a genre is a string newtype rather than a closed enum. Matching is exact
//! and case-sensitive.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single genre tag.
///
/// # Examples
/// ```
/// use unbind_core::Genre;
///
/// let genre = Genre::new("Science Fiction");
/// assert_eq!(genre.as_str(), "Science Fiction");
/// assert_eq!(genre, Genre::from("Science Fiction"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Genre(String);

impl Genre {
    /// Genres offered when logging a new book.
    pub const SUGGESTED: [&'static str; 33] = [
        "Biography",
        "Business",
        "Comics",
        "Fantasy",
        "Fiction",
        "Fiction Novels",
        "Graphic Novels",
        "Historical Fiction",
        "History",
        "Horror",
        "Humor",
        "LGBTQ",
        "Manga",
        "Memoir",
        "Music",
        "Mystery",
        "Non-Fiction",
        "Paranormal",
        "Philosophy",
        "Poetry",
        "Psychology",
        "Religion",
        "Romance",
        "Science",
        "Science Fiction",
        "Self-Help",
        "Spirituality",
        "Sports",
        "Suspense",
        "Tech",
        "Thriller",
        "Travel",
        "Young Adult",
    ];

    /// Wrap a tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Borrow the tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Report whether the tag appears in [`Genre::SUGGESTED`].
    ///
    /// # Examples
    /// ```
    /// use unbind_core::Genre;
    ///
    /// assert!(Genre::new("Thriller").is_suggested());
    /// assert!(!Genre::new("Cookbooks").is_suggested());
    /// ```
    #[must_use]
    pub fn is_suggested(&self) -> bool {
        Self::SUGGESTED.contains(&self.0.as_str())
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Genre {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Genre {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_case_sensitive() {
        assert_ne!(Genre::new("fiction"), Genre::new("Fiction"));
    }

    #[test]
    fn suggested_list_is_sorted() {
        let mut sorted = Genre::SUGGESTED;
        sorted.sort_unstable();
        assert_eq!(sorted, Genre::SUGGESTED);
    }
}
