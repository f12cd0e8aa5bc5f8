//! Loading JSON libraries and single book records from disk.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use serde::de::DeserializeOwned;
use std::io::{self, BufReader};
use unbind_core::Book;

use crate::CliError;

/// Check that `path` names an existing regular file.
///
/// `field` names the option that supplied the path so errors can point the
/// user at the right flag.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "path has no file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Load a JSON array of books and validate every record.
pub(crate) fn load_library(path: &Utf8Path) -> Result<Vec<Book>, CliError> {
    let books: Vec<Book> = read_json(path)?;
    for (index, book) in books.iter().enumerate() {
        book.validate().map_err(|source| CliError::InvalidBook {
            path: path.to_path_buf(),
            position: index + 1,
            source,
        })?;
    }
    log::debug!("loaded {} books from {path}", books.len());
    Ok(books)
}

/// Load a single JSON book record and validate it.
pub(crate) fn load_book(path: &Utf8Path) -> Result<Book, CliError> {
    let book: Book = read_json(path)?;
    book.validate().map_err(|source| CliError::InvalidBook {
        path: path.to_path_buf(),
        position: 1,
        source,
    })?;
    Ok(book)
}

fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenInput {
            path: path.to_path_buf(),
            source,
        }
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Find the library book whose title matches `title`.
///
/// Matching ignores ASCII case and surrounding whitespace. When several books
/// share a title the first one wins and a warning is logged.
pub(crate) fn find_by_title<'a>(library: &'a [Book], title: &str) -> Option<&'a Book> {
    let wanted = title.trim();
    let mut matches = library
        .iter()
        .filter(|book| book.title.trim().eq_ignore_ascii_case(wanted));
    let first = matches.next()?;
    let extra = matches.count();
    if extra > 0 {
        log::warn!(
            "{} books are titled {wanted:?}; coaching the first match",
            extra + 1
        );
    }
    Some(first)
}

/// Serialize `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: serde::Serialize>(
    writer: &mut dyn io::Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
