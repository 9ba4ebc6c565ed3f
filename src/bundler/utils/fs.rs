//! File system utilities for bundling.
//!
//! Thin wrappers over `std::fs` that attach the offending path to every
//! failure and map a missing source file to [`Error::InputNotFound`].

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

/// Mode applied to every directory of the bundle and to the executable.
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Mode applied to plain files (Info.plist, README, icon).
pub const REGULAR_MODE: u32 = 0o644;

/// Creates a single directory, failing if anything already exists at `path`.
pub fn create_new_dir(path: &Path, context: &'static str) -> Result<()> {
    fs::create_dir(path).fs_context(context, path)
}

/// Creates all of the directories of the specified path.
pub fn create_dir_all(path: &Path, context: &'static str) -> Result<()> {
    fs::create_dir_all(path).fs_context(context, path)
}

/// Opens `path` for reading, reporting a missing file as [`Error::InputNotFound`].
pub fn open_input(path: &Path, what: &'static str) -> Result<File> {
    match File::open(path) {
        Ok(file) => Ok(file),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::InputNotFound {
            what,
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e).fs_context("opening", path),
    }
}

/// Copies a regular file byte-for-byte.
///
/// The source is opened before the destination is created, so a missing
/// source leaves no empty file behind.
pub fn copy_file(from: &Path, to: &Path, what: &'static str) -> Result<u64> {
    let mut src = open_input(from, what)?;
    if !src.metadata().fs_context("reading metadata of", from)?.is_file() {
        return Err(Error::GenericError(format!("{} is not a file", from.display())));
    }

    let mut dst = File::create(to).fs_context("creating", to)?;
    let copied = io::copy(&mut src, &mut dst).fs_context("copying to", to)?;
    dst.flush().fs_context("flushing", to)?;
    Ok(copied)
}

/// Writes `contents` to a new (or truncated) file at `path`.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    let file = File::create(path).fs_context("creating", path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents).fs_context("writing", path)?;
    writer.flush().fs_context("flushing", path)?;
    Ok(())
}

/// Sets the unix permission bits of `path`.
#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .fs_context("setting permissions on", path)
}

/// Permission bits are a unix concept; nothing to do elsewhere.
#[cfg(not(unix))]
pub fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_copy_missing_source_creates_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let to = temp_dir.path().join("out");

        let err = copy_file(&temp_dir.path().join("nonsuch"), &to, "executable").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InputNotFound);
        assert!(!to.exists());
    }

    #[test]
    fn test_copy_is_byte_identical() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let from = temp_dir.path().join("in");
        let to = temp_dir.path().join("out");
        fs::write(&from, b"\x7fELF\x00\x01binary").unwrap();

        let copied = copy_file(&from, &to, "executable").unwrap();

        assert_eq!(copied, 12);
        assert_eq!(fs::read(&to).unwrap(), fs::read(&from).unwrap());
    }

    #[test]
    fn test_copy_directory_source_is_rejected() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let to = temp_dir.path().join("out");

        let err = copy_file(temp_dir.path(), &to, "executable").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::WriteFailure);
        assert!(!to.exists());
    }

    #[test]
    fn test_create_new_dir_fails_when_present() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = create_new_dir(temp_dir.path(), "creating bundle directory").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteFailure);
    }

    #[cfg(unix)]
    #[test]
    fn test_set_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("file");
        write_file(&path, b"x").unwrap();

        set_mode(&path, EXECUTABLE_MODE).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
