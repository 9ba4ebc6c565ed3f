//! Bundle orchestration.
//!
//! The [`Bundler`] runs the workflow strictly in order:
//! 1. Create the `.app` skeleton and copy the executable in
//! 2. Prepare `icon.icns` (only when an icon was configured)
//! 3. Render Info.plist and write the README
//!
//! The first failing step aborts the run. Nothing is rolled back: files written
//! by earlier steps stay on disk.
//!
//! # Example
//!
//! ```no_run
//! use appify::bundler::{BundleConfig, Bundler};
//!
//! # fn example() -> appify::bundler::Result<()> {
//! let config = BundleConfig::new("target/release/myapp")
//!     .name("My App")
//!     .icon("assets/icon.png");
//!
//! let app = Bundler::new(config).bundle()?;
//! println!("Created {}", app.bundle_path.display());
//! # Ok(())
//! # }
//! ```

use crate::bundler::{
    BundledApp,
    error::{Context, Result},
    layout::BundleLayout,
    macos::{app, icon, info_plist},
    resources::icons::{IcnsCodec, IconCodec},
    settings::{BundleConfig, BundleMetadata},
};

/// Builds one `.app` bundle from a [`BundleConfig`].
pub struct Bundler {
    config: BundleConfig,
    codec: Box<dyn IconCodec>,
}

impl std::fmt::Debug for Bundler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bundler")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Bundler {
    /// Create a bundler using the default [`IcnsCodec`].
    pub fn new(config: BundleConfig) -> Self {
        Self::with_codec(config, IcnsCodec)
    }

    /// Create a bundler that converts raster icons with `codec`.
    pub fn with_codec(config: BundleConfig, codec: impl IconCodec + 'static) -> Self {
        Self {
            config,
            codec: Box::new(codec),
        }
    }

    /// The configuration this bundler was built with.
    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    /// Run the workflow and return what was produced.
    pub fn bundle(&self) -> Result<BundledApp> {
        let config = &self.config;
        let layout = BundleLayout::new(&config.dist, &config.name);
        log::info!(
            "Bundling {} at {}",
            config.app_name(),
            layout.bundle_dir().display()
        );

        let mut files = Vec::new();

        app::create_skeleton(&layout).context("bundle skeleton")?;
        app::copy_executable(&config.executable, &layout).context("copy executable")?;
        files.push(layout.binary_path().to_path_buf());

        let mut metadata = BundleMetadata::resolve(config);

        if let Some(icon_source) = &config.icon {
            let icon_path = icon::prepare_icon(icon_source, layout.resources_dir(), self.codec.as_ref())
                .context("icon")?;
            metadata.icon_file = icon_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
            files.push(icon_path);
        }

        info_plist::write_descriptor(&layout, &metadata).context("Info.plist")?;
        files.push(layout.info_plist_path());
        files.push(layout.readme_path());

        log::info!("Created {}", layout.bundle_dir().display());

        Ok(BundledApp {
            bundle_path: layout.bundle_dir().to_path_buf(),
            metadata,
            files,
        })
    }
}
