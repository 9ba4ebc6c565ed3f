//! Bundle icon preparation.
//!
//! Produces `Contents/Resources/icon.icns` from whatever the user supplied:
//! an `.icns` file is copied unchanged, a raster image is run through an
//! [`IconCodec`].

use crate::bundler::{
    error::{Context, Error, ErrorExt, Result},
    layout::ICON_FILE_NAME,
    resources::icons::IconCodec,
    utils::fs,
};
use std::{
    io::Read,
    path::{Path, PathBuf},
};

/// How a source icon file is turned into `icon.icns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSource {
    /// Already an ICNS container.
    Icns,
    /// PNG, JPEG or GIF image to convert.
    Raster,
}

impl IconSource {
    /// Classify `path` by its (case-insensitive) extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase());

        match extension.as_deref() {
            Some("icns") => Ok(IconSource::Icns),
            Some("png" | "jpg" | "jpeg" | "gif") => Ok(IconSource::Raster),
            Some(other) => Err(Error::UnsupportedIconFormat {
                extension: format!(".{}", other),
            }),
            None => Err(Error::UnsupportedIconFormat {
                extension: "(no extension)".into(),
            }),
        }
    }
}

/// Writes `icon.icns` into `resources_dir` and returns its path.
///
/// Creates `resources_dir` if it does not exist yet. An unsupported extension
/// is rejected before `icon.icns` is created.
pub fn prepare_icon(icon: &Path, resources_dir: &Path, codec: &dyn IconCodec) -> Result<PathBuf> {
    let mut src = fs::open_input(icon, "icon file")?;

    fs::create_dir_all(resources_dir, "creating Resources directory")?;

    let source = IconSource::from_path(icon)?;

    let mut bytes = Vec::new();
    src.read_to_end(&mut bytes).fs_context("reading icon file", icon)?;

    let dest = resources_dir.join(ICON_FILE_NAME);
    match source {
        IconSource::Icns => {
            log::debug!("Copying {} verbatim", icon.display());
            fs::write_file(&dest, &bytes)
                .with_context(|| format!("copying {}", icon.display()))?;
        }
        IconSource::Raster => {
            let image = codec.decode(&bytes).context("decode image")?;
            let icns = codec.encode(&image).context("generate icns file")?;
            fs::write_file(&dest, &icns)?;
        }
    }
    fs::set_mode(&dest, fs::REGULAR_MODE)?;

    log::info!("Created icon: {}", dest.display());
    Ok(dest)
}
