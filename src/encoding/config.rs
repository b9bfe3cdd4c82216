use super::error::EncodingError;

/// Widest memory block (and pixel field) the block register can hold.
pub const MAX_BITS: u32 = u64::BITS;

/// The order in which pixels are visited and grouped into memory blocks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Rows are scanned top to bottom, pixels left to right.
    #[default]
    RowMajor,
    /// Columns are scanned left to right, pixels top to bottom.
    ColumnMajor,
}

impl ScanDirection {
    /// Returns `(line_len, line_count)` for an image of the given size.
    ///
    /// A scan line is a row for `RowMajor` and a column for `ColumnMajor`.
    pub fn line_geometry(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            ScanDirection::RowMajor => (width, height),
            ScanDirection::ColumnMajor => (height, width),
        }
    }

    /// Maps a position along a scan line back to image coordinates.
    pub fn coordinates(self, line: u32, position: u32) -> (u32, u32) {
        match self {
            ScanDirection::RowMajor => (position, line),
            ScanDirection::ColumnMajor => (line, position),
        }
    }
}

/// The parameters that determine the exact bytes of an encoded bitmap.
///
/// A configuration can only be built through [`EncodingConfig::new`], which
/// rejects parameter combinations the block packer cannot lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingConfig {
    color_depth: u32,
    mem_block_bits: u32,
    scan_direction: ScanDirection,
    invert: bool,
}

impl EncodingConfig {
    pub fn new(
        color_depth: u32,
        mem_block_bits: u32,
        scan_direction: ScanDirection,
        invert: bool,
    ) -> Result<EncodingConfig, EncodingError> {
        if color_depth == 0 {
            return Err(EncodingError::ZeroColorDepth);
        }
        if mem_block_bits == 0 {
            return Err(EncodingError::ZeroMemBlock);
        }
        if color_depth > MAX_BITS {
            return Err(EncodingError::ColorDepthTooWide { color_depth });
        }
        if mem_block_bits > MAX_BITS {
            return Err(EncodingError::MemBlockTooWide { mem_block_bits });
        }
        if color_depth > mem_block_bits {
            return Err(EncodingError::ColorDepthExceedsBlock {
                color_depth,
                mem_block_bits,
            });
        }

        Ok(EncodingConfig {
            color_depth,
            mem_block_bits,
            scan_direction,
            invert,
        })
    }

    /// Bits per quantized pixel.
    pub fn color_depth(&self) -> u32 {
        self.color_depth
    }

    /// Bits per memory block.
    pub fn mem_block_bits(&self) -> u32 {
        self.mem_block_bits
    }

    pub fn scan_direction(&self) -> ScanDirection {
        self.scan_direction
    }

    pub fn invert(&self) -> bool {
        self.invert
    }
}

impl Default for EncodingConfig {
    fn default() -> Self {
        EncodingConfig {
            color_depth: 4,
            mem_block_bits: 8,
            scan_direction: ScanDirection::RowMajor,
            invert: false,
        }
    }
}
