//! Raster-to-ICNS conversion behind a narrow codec interface.
//!
//! The icon step only needs two capabilities: turn file bytes into pixels,
//! and turn pixels into an icon container. [`IconCodec`] captures exactly
//! that, so the orchestration never depends on a particular image library.
//!
//! # Representations
//!
//! [`IcnsCodec`] fills the standard ICNS slots from a single source image:
//!
//! | Slot | Pixels |
//! |------|--------|
//! | 16x16, 16x16@2x | 16, 32 |
//! | 32x32, 32x32@2x | 32, 64 |
//! | 64x64 | 64 |
//! | 128x128, 128x128@2x | 128, 256 |
//! | 256x256, 256x256@2x | 256, 512 |
//! | 512x512, 512x512@2x | 512, 1024 |
//!
//! Slots larger than the source's longest side are skipped so nothing is
//! upscaled, except the 16x16 slot which is always present.

use crate::bundler::error::{Error, Result};
use icns::{IconFamily, IconType, Image as IcnsImage, PixelFormat};
use image::{RgbaImage, imageops::FilterType};

/// Decode raster bytes and encode pixels into an icon container.
pub trait IconCodec {
    /// Decode an image, detecting its format from the content.
    fn decode(&self, bytes: &[u8]) -> Result<RgbaImage>;

    /// Encode an image into the platform icon container format.
    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>>;
}

/// Default codec: `image` for decoding, `icns` for the container.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcnsCodec;

static ICON_TYPES: [(IconType, u32, &str); 11] = [
    (IconType::RGBA32_16x16, 16, "16x16"),
    (IconType::RGBA32_16x16_2x, 32, "16x16@2x"),
    (IconType::RGBA32_32x32, 32, "32x32"),
    (IconType::RGBA32_32x32_2x, 64, "32x32@2x"),
    (IconType::RGBA32_64x64, 64, "64x64"),
    (IconType::RGBA32_128x128, 128, "128x128"),
    (IconType::RGBA32_128x128_2x, 256, "128x128@2x"),
    (IconType::RGBA32_256x256, 256, "256x256"),
    (IconType::RGBA32_256x256_2x, 512, "256x256@2x"),
    (IconType::RGBA32_512x512, 512, "512x512"),
    (IconType::RGBA32_512x512_2x, 1024, "512x512@2x"),
];

/// ICNS slots filled for a source whose longest side is `longest` pixels.
fn selected_slots(longest: u32) -> impl Iterator<Item = &'static (IconType, u32, &'static str)> {
    ICON_TYPES
        .iter()
        .enumerate()
        .filter(move |(i, (_, size, _))| *i == 0 || *size <= longest)
        .map(|(_, slot)| slot)
}

impl IconCodec for IcnsCodec {
    fn decode(&self, bytes: &[u8]) -> Result<RgbaImage> {
        let img = image::load_from_memory(bytes)?;
        log::debug!("Decoded {}x{} icon image", img.width(), img.height());
        Ok(img.to_rgba8())
    }

    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>> {
        let mut family = IconFamily::new();
        let longest = image.width().max(image.height());

        for (icon_type, size, name) in selected_slots(longest) {
            log::debug!("Adding {} representation", name);

            let rgba = if image.width() == *size && image.height() == *size {
                image.clone()
            } else {
                image::imageops::resize(image, *size, *size, FilterType::Lanczos3)
            };

            let icns_img = IcnsImage::from_data(PixelFormat::RGBA, *size, *size, rgba.into_raw())
                .map_err(|e| Error::GenericError(format!("creating ICNS image for {}: {}", name, e)))?;

            family
                .add_icon_with_type(&icns_img, *icon_type)
                .map_err(|e| Error::GenericError(format!("adding {} to icon family: {}", name, e)))?;
        }

        let mut out = Vec::new();
        family.write(&mut out).map_err(Error::IcnsError)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::ErrorKind;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    fn target_sizes(width: u32, height: u32) -> Vec<u32> {
        selected_slots(width.max(height)).map(|(_, size, _)| *size).collect()
    }

    #[test]
    fn test_target_sizes_never_upscale() {
        assert_eq!(target_sizes(64, 64), vec![16, 32, 32, 64, 64]);
        assert_eq!(target_sizes(8, 8), vec![16]);
        assert_eq!(target_sizes(1024, 512).len(), 11);
    }

    #[test]
    fn test_decode_detects_format_from_content() {
        let img = IcnsCodec.decode(&png_bytes(20, 10)).unwrap();
        assert_eq!((img.width(), img.height()), (20, 10));
    }

    #[test]
    fn test_decode_garbage_is_write_failure() {
        let err = IcnsCodec.decode(b"definitely not an image").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteFailure);
    }

    #[test]
    fn test_encode_produces_icns_family() {
        let img = IcnsCodec.decode(&png_bytes(64, 64)).unwrap();
        let bytes = IcnsCodec.encode(&img).unwrap();

        assert_eq!(&bytes[..4], b"icns");
        let family = IconFamily::read(Cursor::new(&bytes)).unwrap();
        assert!(family.has_icon_with_type(IconType::RGBA32_16x16));
        assert!(family.has_icon_with_type(IconType::RGBA32_64x64));
        assert!(!family.has_icon_with_type(IconType::RGBA32_128x128));
    }
}
