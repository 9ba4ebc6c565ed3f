//! Info.plist and README generation.

use crate::bundler::{
    error::{Context, Result},
    layout::BundleLayout,
    settings::BundleMetadata,
    utils::fs,
};
use handlebars::Handlebars;

const INFO_PLIST_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
	<dict>
		<key>CFBundlePackageType</key>
		<string>APPL</string>
		<key>CFBundleInfoDictionaryVersion</key>
		<string>6.0</string>
		<key>CFBundleName</key>
		<string>{{name}}</string>
		<key>CFBundleExecutable</key>
		<string>{{executable}}</string>
		<key>CFBundleIdentifier</key>
		<string>{{identifier}}</string>
		<key>CFBundleVersion</key>
		<string>{{version}}</string>
		<key>CFBundleGetInfoString</key>
		<string>{{info_string}}</string>
		<key>CFBundleShortVersionString</key>
		<string>{{short_version_string}}</string>
		{{#if icon_file}}
		<key>CFBundleIconFile</key>
		<string>{{icon_file}}</string>
		{{/if}}
	</dict>
</plist>
"#;

/// Attribution notice written next to Info.plist. Constant across runs.
pub const README: &str = "Made with Appify by Machine Box
https://github.com/machinebox/appify

Inspired by https://gist.github.com/anmoljagetia/d37da67b9d408b35ac753ce51e420132 \n";

/// Render the Info.plist descriptor for `metadata`.
///
/// Values go through handlebars' default escaping, whose entities are all valid XML.
pub fn render_info_plist(metadata: &BundleMetadata) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_template_string("info_plist", INFO_PLIST_TEMPLATE)?;
    Ok(handlebars.render("info_plist", metadata)?)
}

/// Writes `Contents/Info.plist` and `Contents/README`.
pub fn write_descriptor(layout: &BundleLayout, metadata: &BundleMetadata) -> Result<()> {
    let plist = render_info_plist(metadata).context("execute Info.plist template")?;

    let plist_path = layout.info_plist_path();
    fs::write_file(&plist_path, plist.as_bytes())?;
    fs::set_mode(&plist_path, fs::REGULAR_MODE)?;
    log::debug!("Wrote {}", plist_path.display());

    let readme_path = layout.readme_path();
    fs::write_file(&readme_path, README.as_bytes())?;
    fs::set_mode(&readme_path, fs::REGULAR_MODE)?;

    Ok(())
}
