//! Icon codecs used when converting raster images into bundle icons.

pub mod icons;
