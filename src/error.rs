use crate::encoding::EncodingError;
use crate::header::HeaderError;
use std::io;
use std::path::PathBuf;

/// Errors that abort rendering a bitmap.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file is neither a PNG nor a BMP file.
    #[error("unsupported image extension: {}", path.display())]
    UnsupportedExtension { path: PathBuf },
    /// The input file could not be opened or decoded.
    #[error("cannot load image {}: {source}", path.display())]
    Load {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("cannot encode bitmap: {0}")]
    Encoding(#[from] EncodingError),
    #[error("cannot render header: {0}")]
    Header(#[from] HeaderError),
    #[error("cannot save preview {}: {source}", path.display())]
    Preview {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("cannot write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}
