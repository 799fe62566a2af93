//! [`ImageDecoder`] backed by the `image` crate

use image::{DynamicImage, GenericImageView, ImageFormat as CodecFormat};
use mom_application::{DecodeError, ImageDecoder};
use mom_domain::{DecodedImage, ImageFormat, UploadedImage};
use std::io::Cursor;
use tracing::debug;

/// Decodes uploads by sniffing their content, not their extension.
///
/// PNG and JPEG payloads are passed through unchanged. Anything else the
/// codec understands (a GIF renamed to `.png`, say) is re-encoded as PNG so
/// the MIME type sent to the model always matches the bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateDecoder;

impl ImageCrateDecoder {
    pub fn new() -> Self {
        Self
    }

    fn reencode_png(image: &DynamicImage, filename: &str) -> Result<Vec<u8>, DecodeError> {
        let mut out = Cursor::new(Vec::new());
        image
            .write_to(&mut out, CodecFormat::Png)
            .map_err(|e| DecodeError::new(filename, e.to_string()))?;
        Ok(out.into_inner())
    }
}

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, upload: &UploadedImage) -> Result<DecodedImage, DecodeError> {
        let filename = upload.filename();
        let bytes = upload.bytes();

        if bytes.is_empty() {
            return Err(DecodeError::new(filename, "file is empty"));
        }

        let sniffed = image::guess_format(bytes)
            .map_err(|_| DecodeError::new(filename, "cannot identify image file"))?;
        let decoded = image::load_from_memory_with_format(bytes, sniffed)
            .map_err(|e| DecodeError::new(filename, e.to_string()))?;
        let (width, height) = decoded.dimensions();

        let (format, payload) = match sniffed {
            CodecFormat::Png => (ImageFormat::Png, bytes.to_vec()),
            CodecFormat::Jpeg => (ImageFormat::Jpeg, bytes.to_vec()),
            other => {
                debug!(?other, filename, "Re-encoding upload as PNG");
                (ImageFormat::Png, Self::reencode_png(&decoded, filename)?)
            }
        };

        if format != upload.format() {
            debug!(
                declared = %upload.format(),
                actual = %format,
                filename,
                "Upload extension does not match its content"
            );
        }

        Ok(DecodedImage::new(format, width, height, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn encode(format: CodecFormat, width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut out, format)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_blank_png_decodes_with_dimensions() {
        let bytes = encode(CodecFormat::Png, 100, 100);
        let upload = UploadedImage::new("blank.png", bytes.clone()).unwrap();

        let decoded = ImageCrateDecoder::new().decode(&upload).unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
        assert_eq!((decoded.width, decoded.height), (100, 100));
        assert_eq!(decoded.bytes, bytes);
    }

    #[test]
    fn test_jpeg_passes_through() {
        let bytes = encode(CodecFormat::Jpeg, 40, 20);
        let upload = UploadedImage::new("notes.jpeg", bytes.clone()).unwrap();

        let decoded = ImageCrateDecoder::new().decode(&upload).unwrap();
        assert_eq!(decoded.format, ImageFormat::Jpeg);
        assert_eq!(decoded.mime_type(), "image/jpeg");
        assert_eq!((decoded.width, decoded.height), (40, 20));
    }

    #[test]
    fn test_png_named_jpg_is_labelled_by_content() {
        let bytes = encode(CodecFormat::Png, 8, 8);
        let upload = UploadedImage::new("photo.jpg", bytes).unwrap();

        let decoded = ImageCrateDecoder::new().decode(&upload).unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
    }

    #[test]
    fn test_other_codec_is_reencoded_as_png() {
        let bytes = encode(CodecFormat::Bmp, 4, 4);
        let upload = UploadedImage::new("scan.png", bytes).unwrap();

        let decoded = ImageCrateDecoder::new().decode(&upload).unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
        assert_eq!(image::guess_format(&decoded.bytes).unwrap(), CodecFormat::Png);
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        let upload = UploadedImage::new("notes.png", b"definitely not pixels".to_vec()).unwrap();
        let err = ImageCrateDecoder::new().decode(&upload).unwrap_err();
        assert_eq!(err.filename, "notes.png");
        assert!(err.to_string().contains("cannot identify image file"));
    }

    #[test]
    fn test_truncated_png_fails_to_decode() {
        let mut bytes = encode(CodecFormat::Png, 100, 100);
        bytes.truncate(40);
        let upload = UploadedImage::new("cut.png", bytes).unwrap();
        assert!(ImageCrateDecoder::new().decode(&upload).is_err());
    }

    #[test]
    fn test_empty_file_fails() {
        let upload = UploadedImage::new("empty.png", Vec::new()).unwrap();
        let err = ImageCrateDecoder::new().decode(&upload).unwrap_err();
        assert_eq!(err.reason, "file is empty");
    }
}
