//! Path layout of a generated `.app` bundle.
//!
//! ```text
//! <dist>/<Name>.app/
//!   Contents/
//!     MacOS/<Name>.app
//!     Resources/icon.icns
//!     Info.plist
//!     README
//! ```

use std::path::{Path, PathBuf};

/// File name of the icon written into `Resources`.
pub const ICON_FILE_NAME: &str = "icon.icns";

/// Every path the bundler writes to, computed once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    bundle_dir: PathBuf,
    contents_dir: PathBuf,
    macos_dir: PathBuf,
    resources_dir: PathBuf,
    binary_path: PathBuf,
}

impl BundleLayout {
    /// Layout for an app called `name` inside `dist`.
    ///
    /// The executable inside `MacOS` carries the same `<Name>.app` file name as
    /// the bundle directory; `CFBundleExecutable` points at exactly that path.
    pub fn new(dist: &Path, name: &str) -> Self {
        let app_name = format!("{}.app", name);
        let bundle_dir = dist.join(&app_name);
        let contents_dir = bundle_dir.join("Contents");
        let macos_dir = contents_dir.join("MacOS");
        let resources_dir = contents_dir.join("Resources");
        let binary_path = macos_dir.join(&app_name);

        Self {
            bundle_dir,
            contents_dir,
            macos_dir,
            resources_dir,
            binary_path,
        }
    }

    /// `<dist>/<Name>.app`
    pub fn bundle_dir(&self) -> &Path {
        &self.bundle_dir
    }

    /// `<Name>.app/Contents`
    pub fn contents_dir(&self) -> &Path {
        &self.contents_dir
    }

    /// `<Name>.app/Contents/MacOS`
    pub fn macos_dir(&self) -> &Path {
        &self.macos_dir
    }

    /// `<Name>.app/Contents/Resources`
    pub fn resources_dir(&self) -> &Path {
        &self.resources_dir
    }

    /// `<Name>.app/Contents/MacOS/<Name>.app`
    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    /// `<Name>.app/Contents/Info.plist`
    pub fn info_plist_path(&self) -> PathBuf {
        self.contents_dir.join("Info.plist")
    }

    /// `<Name>.app/Contents/README`
    pub fn readme_path(&self) -> PathBuf {
        self.contents_dir.join("README")
    }

    /// `<Name>.app/Contents/Resources/icon.icns`
    pub fn icon_path(&self) -> PathBuf {
        self.resources_dir.join(ICON_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = BundleLayout::new(Path::new("dist"), "Test");
        assert_eq!(layout.bundle_dir(), Path::new("dist/Test.app"));
        assert_eq!(layout.contents_dir(), Path::new("dist/Test.app/Contents"));
        assert_eq!(layout.macos_dir(), Path::new("dist/Test.app/Contents/MacOS"));
        assert_eq!(
            layout.resources_dir(),
            Path::new("dist/Test.app/Contents/Resources")
        );
        assert_eq!(
            layout.binary_path(),
            Path::new("dist/Test.app/Contents/MacOS/Test.app")
        );
        assert_eq!(
            layout.info_plist_path(),
            PathBuf::from("dist/Test.app/Contents/Info.plist")
        );
        assert_eq!(
            layout.readme_path(),
            PathBuf::from("dist/Test.app/Contents/README")
        );
        assert_eq!(
            layout.icon_path(),
            PathBuf::from("dist/Test.app/Contents/Resources/icon.icns")
        );
    }
}
