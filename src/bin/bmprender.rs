use bitmap_renderer::encoding::{encode_image, EncodingConfig, ScanDirection};
use bitmap_renderer::header::BitmapName;
use bitmap_renderer::render::{load_image, save_header, save_preview};
use clap::{Parser, ValueEnum};
use log::error;
use std::path::PathBuf;
use std::process;

/// Pixel direction in graphic memory.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum MemDirection {
    /// Pixels of a row share a memory block.
    #[value(alias = "hor")]
    Horizontal,
    /// Pixels of a column share a memory block.
    #[value(alias = "ver")]
    Vertical,
}

impl From<MemDirection> for ScanDirection {
    fn from(direction: MemDirection) -> ScanDirection {
        match direction {
            MemDirection::Horizontal => ScanDirection::RowMajor,
            MemDirection::Vertical => ScanDirection::ColumnMajor,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Converts a PNG or BMP image to a packed C bitmap header", long_about = None)]
#[command(version)]
struct Args {
    /// The input image.
    input: PathBuf,

    /// Path to the output files, without extension. Produces <OUTPUT>_bmp.h
    /// and, with --preview, <OUTPUT>_preview.bmp.
    #[arg(short, long)]
    output: String,

    /// Bits per pixel.
    #[arg(short = 'd', long, default_value_t = 4)]
    color_depth: u32,

    /// Bits per graphic memory block.
    #[arg(short = 'b', long, default_value_t = 8)]
    mem_block: u32,

    /// Pixel direction in graphic memory.
    #[arg(short = 'm', long, value_enum, default_value_t = MemDirection::Horizontal)]
    mem_dir: MemDirection,

    /// Invert the image.
    #[arg(short, long)]
    invert: bool,

    /// Also write a preview of the packed bitmap.
    #[arg(short, long)]
    preview: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match EncodingConfig::new(
        args.color_depth,
        args.mem_block,
        args.mem_dir.into(),
        args.invert,
    ) {
        Ok(c) => c,
        Err(e) => {
            error!(
                "Invalid configuration (color depth {}, memory block {}): {}",
                args.color_depth, args.mem_block, e
            );
            process::exit(1)
        }
    };

    let image = match load_image(&args.input) {
        Ok(i) => i,
        Err(e) => {
            error!("{}", e);
            process::exit(1)
        }
    };

    let bitmap = match encode_image(&image, &config) {
        Ok(b) => b,
        Err(e) => {
            error!("Cannot encode {}: {}", args.input.display(), e);
            process::exit(1)
        }
    };

    let name = BitmapName::from_output(&args.output);
    if let Err(e) = save_header(&bitmap, &name) {
        error!("{}", e);
        process::exit(1)
    }

    if args.preview {
        if let Err(e) = save_preview(&bitmap, &name) {
            error!("{}", e);
            process::exit(1)
        }
    }
}
