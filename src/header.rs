use crate::encoding::EncodedBitmap;
use std::io::{self, Write};
use std::path::PathBuf;

/// Size of the `__bitmap_t` descriptor on the target: a pointer and two bytes.
pub const DESCRIPTOR_SIZE: usize = 6;

/// Number of bytes written on each line of the array literal.
pub const BYTES_PER_LINE: usize = 32;

/// The descriptor stores width and height in `unsigned char` fields.
pub const MAX_DIMENSION: u32 = u8::MAX as u32;

#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    #[error("bitmap of {width}x{height} pixels does not fit the 8-bit descriptor fields (max {max}x{max})", max = MAX_DIMENSION)]
    DimensionsTooLarge { width: u32, height: u32 },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The output path prefix and the C identifier derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapName {
    path: String,
    ident: String,
}

impl BitmapName {
    /// Cleans up an output path given without extension.
    ///
    /// Quotes are removed and backslashes become slashes. The identifier is the
    /// last path component with every character outside `[A-Za-z0-9_]`
    /// replaced by `_`.
    pub fn from_output(dest: &str) -> BitmapName {
        let path: String = dest
            .chars()
            .filter(|&c| c != '\'' && c != '"')
            .map(|c| if c == '\\' { '/' } else { c })
            .collect();

        let base = path.rsplit('/').next().unwrap_or_default();
        let mut ident: String = base
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        if ident.is_empty() {
            ident.push_str("bitmap");
        } else if ident.starts_with(|c: char| c.is_ascii_digit()) {
            ident.insert(0, '_');
        }

        BitmapName { path, ident }
    }

    /// The C identifier used for the array, the descriptor and the guard.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn header_path(&self) -> PathBuf {
        PathBuf::from(format!("{}_bmp.h", self.path))
    }

    pub fn preview_path(&self) -> PathBuf {
        PathBuf::from(format!("{}_preview.bmp", self.path))
    }
}

/// Writes the array literal, 32 bytes per line.
fn write_array<W>(data: &[u8], to: &mut W) -> io::Result<()>
where
    W: Write,
{
    for line in data.chunks(BYTES_PER_LINE) {
        write!(to, "\t")?;
        for byte in line {
            write!(to, "0x{:02X},", byte)?;
        }
        writeln!(to)?;
    }
    Ok(())
}

/// Renders `bitmap` as a C header declaring the byte array and its descriptor.
pub fn write_header<W>(bitmap: &EncodedBitmap, name: &BitmapName, mut to: W) -> Result<(), HeaderError>
where
    W: Write,
{
    let (width, height) = (bitmap.width(), bitmap.height());
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(HeaderError::DimensionsTooLarge { width, height });
    }

    let ident = name.ident();
    let guard = format!("__BITMAP_{}_H", ident.to_uppercase());
    let bitmap_size = bitmap.len();

    writeln!(to, "#ifndef {guard}")?;
    writeln!(to, "#define {guard}")?;
    writeln!(to)?;

    writeln!(to, "//\t{ident} bitmap")?;
    writeln!(to, "//")?;
    writeln!(to, "//\tMemory usage")?;
    writeln!(to, "//\t\tBitmap: {bitmap_size}")?;
    writeln!(to, "//\t\tDescriptor: {DESCRIPTOR_SIZE}")?;
    writeln!(to, "//")?;
    writeln!(to, "//\t\tTotal: {}", bitmap_size + DESCRIPTOR_SIZE)?;
    writeln!(to, "//")?;
    writeln!(to)?;

    // Several bitmap headers may end up in one translation unit.
    writeln!(to, "#ifndef __BITMAP_T_DEFINED")?;
    writeln!(to, "#define __BITMAP_T_DEFINED")?;
    writeln!(to, "typedef struct {{")?;
    writeln!(to, "\tconst unsigned char *map;")?;
    writeln!(to, "\tunsigned char w;")?;
    writeln!(to, "\tunsigned char h;")?;
    writeln!(to, "}} __bitmap_t;")?;
    writeln!(to, "#endif")?;
    writeln!(to)?;

    writeln!(to, "const unsigned char __{ident}_map[] = {{")?;
    write_array(bitmap.data(), &mut to)?;
    writeln!(to, "}};")?;
    writeln!(to)?;

    writeln!(to, "const __bitmap_t {ident}_bmp = {{")?;
    writeln!(to, "\t.map = __{ident}_map,")?;
    writeln!(to, "\t.w = {width},")?;
    writeln!(to, "\t.h = {height},")?;
    writeln!(to, "}};")?;
    writeln!(to)?;

    writeln!(to, "#endif // {guard}")?;
    Ok(())
}
