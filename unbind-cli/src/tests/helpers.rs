//! Test helpers for writing JSON libraries and candidate books to disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use unbind_core::Book;
use unbind_core::test_support::seed_library;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

pub(super) fn write_books(path: &Utf8Path, books: &[Book]) {
    let payload = serde_json::to_vec_pretty(books).expect("serialize library");
    write_utf8(path, &payload);
}

pub(super) fn write_book(path: &Utf8Path, book: &Book) {
    let payload = serde_json::to_vec_pretty(book).expect("serialize book");
    write_utf8(path, &payload);
}

/// Temporary workspace holding a `library.json` and any candidate files.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    /// Workspace whose library holds the five seed books.
    pub(super) fn seeded() -> Self {
        let workspace = Self::new();
        write_books(&workspace.library(), &seed_library());
        workspace
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn library(&self) -> Utf8PathBuf {
        self.path("library.json")
    }

    pub(super) fn candidate(&self, book: &Book) -> Utf8PathBuf {
        let path = self.path("candidate.json");
        write_book(&path, book);
        path
    }
}
