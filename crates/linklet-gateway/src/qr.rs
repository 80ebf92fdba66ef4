use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};
use thiserror::Error;
use typed_builder::TypedBuilder;

pub const DEFAULT_QR_SIZE: u32 = 200;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("content cannot be encoded as a QR code: {0}")]
    Encode(#[from] QrError),
    #[error("failed to write PNG: {0}")]
    Image(#[from] image::ImageError),
}

/// Renders a string as a scannable image.
pub trait QrRenderer: Send + Sync + 'static {
    /// Returns the encoded image bytes for `content`.
    fn render(&self, content: &str) -> Result<Vec<u8>, RenderError>;

    /// MIME type of the bytes returned by [`render`](Self::render).
    fn content_type(&self) -> &'static str;
}

/// Configures a [`PngQrRenderer`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct QrSettings {
    /// Minimum width and height of the image, in pixels.
    #[builder(default = DEFAULT_QR_SIZE)]
    pub size: u32,
    #[builder(default = EcLevel::M)]
    pub ec_level: EcLevel,
}

impl Default for QrSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Renders grayscale PNG QR codes.
#[derive(Debug, Clone, Default)]
pub struct PngQrRenderer {
    settings: QrSettings,
}

impl PngQrRenderer {
    pub fn new(settings: QrSettings) -> Self {
        Self { settings }
    }
}

impl QrRenderer for PngQrRenderer {
    fn render(&self, content: &str) -> Result<Vec<u8>, RenderError> {
        let code = QrCode::with_error_correction_level(content.as_bytes(), self.settings.ec_level)?;
        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(self.settings.size, self.settings.size)
            .build();

        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }

    fn content_type(&self) -> &'static str {
        "image/png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn renders_png_bytes() {
        let renderer = PngQrRenderer::default();

        let png = renderer.render("http://localhost:3000/abc1234").unwrap();

        assert!(png.starts_with(&PNG_SIGNATURE));
        assert_eq!(renderer.content_type(), "image/png");
    }

    #[test]
    fn image_respects_minimum_size() {
        let renderer = PngQrRenderer::new(QrSettings::builder().size(320).build());

        let png = renderer.render("http://localhost:3000/abc1234").unwrap();
        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png).unwrap();

        assert!(decoded.width() >= 320);
        assert!(decoded.height() >= 320);
    }

    #[test]
    fn oversized_content_fails_to_encode() {
        let renderer = PngQrRenderer::default();

        let err = renderer.render(&"x".repeat(8000)).unwrap_err();

        assert!(matches!(err, RenderError::Encode(QrError::DataTooLong)));
    }
}
