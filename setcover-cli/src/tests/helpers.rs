//! Test helpers for writing problem files.

use camino::{Utf8Path, Utf8PathBuf};
use setcover_core::document::ProblemDocument;
use setcover_core::sample_problem;
use std::fs;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory holding at most one problem file.
pub(super) struct ProblemDir {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl ProblemDir {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn problem_path(&self) -> Utf8PathBuf {
        self.root.join("problem.json")
    }

    /// Write the canonical sample problem as a JSON document.
    pub(super) fn write_sample(&self) -> Utf8PathBuf {
        let problem = sample_problem().expect("sample problem is valid");
        let payload = serde_json::to_string_pretty(&ProblemDocument::from(&problem))
            .expect("serialize sample");
        let path = self.problem_path();
        write_utf8(&path, payload.as_bytes());
        path
    }
}
