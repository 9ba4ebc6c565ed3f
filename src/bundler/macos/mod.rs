//! macOS application bundle steps.
//!
//! Each submodule implements one step of the workflow driven by
//! [`Bundler`](crate::bundler::Bundler):
//!
//! | Step | Module | Output |
//! |------|--------|--------|
//! | Skeleton | [`app`] | `Contents/{MacOS,Resources}`, `MacOS/<Name>.app` |
//! | Icon | [`icon`] | `Resources/icon.icns` |
//! | Descriptor | [`info_plist`] | `Info.plist`, `README` |
//!
//! No step requires macOS tooling, so bundles can be assembled on any host.

pub mod app;
pub mod icon;
pub mod info_plist;
