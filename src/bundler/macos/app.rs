//! macOS application bundle (.app) skeleton creation.

use crate::bundler::{error::Result, layout::BundleLayout, utils::fs};
use std::path::Path;

/// Creates `<Name>.app/Contents/{MacOS,Resources}`.
///
/// The bundle directory itself must not exist yet: any entry already at that
/// path (an earlier bundle or a plain file) fails the run. The output
/// directory is created if needed. Every directory ends up `rwxr-xr-x`.
pub fn create_skeleton(layout: &BundleLayout) -> Result<()> {
    if let Some(dist) = layout.bundle_dir().parent()
        && !dist.as_os_str().is_empty()
    {
        fs::create_dir_all(dist, "creating output directory")?;
    }

    fs::create_new_dir(layout.bundle_dir(), "creating app bundle")?;
    fs::create_dir_all(layout.macos_dir(), "creating MacOS directory")?;
    fs::create_dir_all(layout.resources_dir(), "creating Resources directory")?;

    for dir in [
        layout.bundle_dir(),
        layout.contents_dir(),
        layout.macos_dir(),
        layout.resources_dir(),
    ] {
        fs::set_mode(dir, fs::EXECUTABLE_MODE)?;
    }

    log::debug!("Created bundle skeleton at {}", layout.bundle_dir().display());
    Ok(())
}

/// Copies `executable` to `Contents/MacOS/<Name>.app` and marks it executable.
pub fn copy_executable(executable: &Path, layout: &BundleLayout) -> Result<()> {
    let dest = layout.binary_path();
    let bytes = fs::copy_file(executable, dest, "executable")?;
    fs::set_mode(dest, fs::EXECUTABLE_MODE)?;

    log::info!(
        "Copied {} ({} bytes) to {}",
        executable.display(),
        bytes,
        dest.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_skeleton_creates_nested_dist() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let layout = BundleLayout::new(&temp_dir.path().join("a/b"), "Test");

        create_skeleton(&layout).unwrap();

        assert!(layout.macos_dir().is_dir());
        assert!(layout.resources_dir().is_dir());
    }

    #[test]
    fn test_skeleton_refuses_existing_bundle() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let layout = BundleLayout::new(temp_dir.path(), "Test");
        create_skeleton(&layout).unwrap();

        let err = create_skeleton(&layout).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::WriteFailure);
    }

    #[test]
    fn test_missing_executable_leaves_skeleton() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let layout = BundleLayout::new(temp_dir.path(), "Test");
        create_skeleton(&layout).unwrap();

        let err = copy_executable(&temp_dir.path().join("nonsuch"), &layout).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InputNotFound);
        assert!(layout.macos_dir().is_dir());
        assert!(!layout.binary_path().exists());
    }
}
