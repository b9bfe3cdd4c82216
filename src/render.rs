use crate::encoding::{decode, EncodedBitmap};
use crate::error::Error;
use crate::header::{write_header, BitmapName};
use image::{DynamicImage, ImageError, ImageFormat};
use log::info;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Picks the decoder from the file extension.
fn image_format(path: &Path) -> Option<ImageFormat> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some(ImageFormat::Png),
        "bmp" => Some(ImageFormat::Bmp),
        _ => None,
    }
}

/// Loads a PNG or BMP image.
pub fn load_image(path: &Path) -> Result<DynamicImage, Error> {
    let format = image_format(path).ok_or_else(|| Error::UnsupportedExtension {
        path: path.to_path_buf(),
    })?;
    let load_error = |source: ImageError| Error::Load {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| load_error(ImageError::IoError(e)))?;
    let image = image::load(BufReader::new(file), format).map_err(load_error)?;

    info!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

/// Writes `<output>_bmp.h` and returns its path.
///
/// The header is rendered in memory first so that a failure leaves no
/// partial file behind.
pub fn save_header(bitmap: &EncodedBitmap, name: &BitmapName) -> Result<PathBuf, Error> {
    let mut header = Vec::new();
    write_header(bitmap, name, &mut header)?;

    let path = name.header_path();
    fs::write(&path, header).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    info!("Wrote {} ({} bitmap bytes)", path.display(), bitmap.len());
    Ok(path)
}

/// Writes `<output>_preview.bmp`, showing the packed data as grayscale.
pub fn save_preview(bitmap: &EncodedBitmap, name: &BitmapName) -> Result<PathBuf, Error> {
    let path = name.preview_path();
    decode(bitmap)
        .save_with_format(&path, ImageFormat::Bmp)
        .map_err(|source| Error::Preview {
            path: path.clone(),
            source,
        })?;
    info!("Wrote preview {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod test {
    use super::{image_format, load_image};
    use crate::Error;
    use image::ImageFormat;
    use std::path::Path;

    #[test]
    fn test_image_format() {
        assert_eq!(image_format(Path::new("a.png")), Some(ImageFormat::Png));
        assert_eq!(image_format(Path::new("dir/A.PNG")), Some(ImageFormat::Png));
        assert_eq!(image_format(Path::new("a.Bmp")), Some(ImageFormat::Bmp));
        assert_eq!(image_format(Path::new("a.jpg")), None);
        assert_eq!(image_format(Path::new("png")), None);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let result = load_image(Path::new("picture.gif"));
        assert!(matches!(result, Err(Error::UnsupportedExtension { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_image(Path::new("does/not/exist.png"));
        assert!(matches!(result, Err(Error::Load { .. })));
    }
}
