//! Export eines gerenderten Frames als JPEG oder PNG.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use thiserror::Error;

/// Zielformat, abgeleitet aus der Dateiendung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Jpeg,
    Png,
}

impl ExportFormat {
    /// `.jpg`/`.jpeg` → JPEG, `.png` → PNG (Groß-/Kleinschreibung egal).
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            _ => Err(ExportError::UnsupportedFormat { extension }),
        }
    }
}

/// Fehler beim Schreiben eines Frames. Die Szene ist davon nie betroffen.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nicht unterstütztes Bildformat: '{extension}' (erwartet .jpg, .jpeg oder .png)")]
    UnsupportedFormat { extension: String },
    #[error("Datei konnte nicht geschrieben werden: {0}")]
    Io(#[from] std::io::Error),
    #[error("Bild konnte nicht kodiert werden: {0}")]
    Encode(#[from] image::ImageError),
}

/// Schreibt `image` nach `path`; das Format folgt der Dateiendung.
///
/// JPEG wird ohne Alphakanal mit `jpeg_quality` (1–100) kodiert.
pub fn export_frame(image: &RgbaImage, path: &Path, jpeg_quality: u8) -> Result<(), ExportError> {
    let format = ExportFormat::from_path(path)?;
    let mut writer = BufWriter::new(File::create(path)?);

    match format {
        ExportFormat::Jpeg => {
            let rgb = image::DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            let encoder = JpegEncoder::new_with_quality(&mut writer, jpeg_quality.clamp(1, 100));
            encoder.write_image(
                rgb.as_raw(),
                rgb.width(),
                rgb.height(),
                ExtendedColorType::Rgb8,
            )?;
        }
        ExportFormat::Png => {
            let encoder = PngEncoder::new(&mut writer);
            encoder.write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )?;
        }
    }

    std::io::Write::flush(&mut writer)?;
    log::debug!("Frame als {:?} geschrieben: {}", format, path.display());
    Ok(())
}
