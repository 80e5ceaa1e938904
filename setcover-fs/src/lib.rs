//! Shared filesystem helpers built on `cap-std` and `camino`.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, Read};

/// Open a UTF-8 file path using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read the whole file at `path` as UTF-8 text.
pub fn read_utf8_to_string(path: &Utf8Path) -> io::Result<String> {
    let mut file = open_utf8_file(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Open the ambient parent directory of `path` and return it with the file name.
fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Return whether a path is a regular file using capability-based IO.
///
/// A missing path is reported as an [`io::ErrorKind::NotFound`] error.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}
