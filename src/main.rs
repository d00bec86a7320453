//! # Gaiji CLI
//!
//! Command-line interface for mixed-script receipt printing.
//!
//! ## Usage
//!
//! ```bash
//! # Print a line (trailing newline added unless --no-newline)
//! gaiji print --host 192.168.10.21 "JIS0213：俱剝瘦繫 👍"
//!
//! # Double width and height, applied to single-byte characters too
//! gaiji print --host 192.168.10.21 --dw --dh --single-byte "ABC亜丂"
//!
//! # Show which path each character takes
//! gaiji classify "Aあ丂👍য"
//!
//! # Render the gaiji cells to a PNG to tune font offsets
//! gaiji preview --png cells.png "丂俱👍য"
//! ```
//!
//! Set `RUST_LOG=debug` to see glyph definitions and evictions.

use clap::{Args, Parser, Subcommand};
use image::{GrayImage, Luma, imageops};
use log::info;
use std::path::{Path, PathBuf};

use gaiji::{
    GaijiError, PrinterSession, SessionConfig,
    charset::{Classification, Classifier, JisTables, UnicodeEmoji, classify::FontProfiles},
    printer::PrinterModel,
    protocol::text::PrintAttributes,
    render::{CellSize, GlyphRasterizer, TtfRasterizer},
    transport::NetworkTransport,
};

/// Gaiji - mixed-script receipt printing
#[derive(Parser, Debug)]
#[command(name = "gaiji")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON session configuration (table and font paths)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print text to a network printer
    Print {
        /// Printer hostname or IP address
        #[arg(long)]
        host: String,

        /// Raw printing port
        #[arg(long, default_value_t = PrinterModel::TM88IV.port)]
        port: u16,

        #[command(flatten)]
        attrs: AttrArgs,

        /// Don't append a newline
        #[arg(long)]
        no_newline: bool,

        /// Cut the paper afterwards
        #[arg(long)]
        cut: bool,

        /// Text to print
        text: String,
    },

    /// Show how each character would be printed
    Classify {
        text: String,
    },

    /// Render each gaiji cell of the text into a PNG strip
    Preview {
        /// Output file
        #[arg(long, value_name = "FILE")]
        png: PathBuf,

        /// Pixel scale of the output
        #[arg(long, default_value = "4")]
        scale: u32,

        text: String,
    },
}

#[derive(Args, Debug)]
struct AttrArgs {
    /// Double width
    #[arg(long)]
    dw: bool,

    /// Double height
    #[arg(long)]
    dh: bool,

    /// Underline
    #[arg(long)]
    underline: bool,

    /// White on black
    #[arg(long)]
    reverse: bool,

    /// Apply width/height/underline to single-byte characters too
    #[arg(long)]
    single_byte: bool,
}

impl From<&AttrArgs> for PrintAttributes {
    fn from(a: &AttrArgs) -> Self {
        PrintAttributes::new()
            .double_width(a.dw)
            .double_height(a.dh)
            .underline(a.underline)
            .reverse(a.reverse)
            .single_byte(a.single_byte)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GaijiError> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    };

    match cli.command {
        Commands::Print {
            host,
            port,
            attrs,
            no_newline,
            cut,
            text,
        } => {
            let transport = NetworkTransport::connect(&host, port)?;
            let mut session = PrinterSession::open(transport, &config)?;

            let mut text = text;
            if !no_newline {
                text.push('\n');
            }
            session.print_text(&text, &PrintAttributes::from(&attrs))?;
            if cut {
                session.cut()?;
            }
            info!(
                "printed {} characters, {} gaiji resident",
                text.chars().count(),
                session.cache().pool(gaiji::cache::PoolKind::DoubleByte).occupied()
            );
        }

        Commands::Classify { text } => {
            let classifier = load_classifier(&config)?;
            for ch in text.chars() {
                match classifier.classify(ch) {
                    Classification::Builtin(bytes) => {
                        println!("U+{:04X} {}  builtin {:02X?}", ch as u32, ch, bytes);
                    }
                    Classification::Custom { tier, profile } => {
                        println!(
                            "U+{:04X} {}  {:?} ({} {}px, offset {},{})",
                            ch as u32,
                            ch,
                            tier,
                            profile.font.display(),
                            profile.size,
                            profile.offset_x,
                            profile.offset_y
                        );
                    }
                }
            }
        }

        Commands::Preview { png, scale, text } => {
            let classifier = load_classifier(&config)?;
            let mut rasterizer = TtfRasterizer::new();

            let mut cells = Vec::new();
            for ch in text.chars() {
                if let Classification::Custom { profile, .. } = classifier.classify(ch) {
                    cells.push(rasterizer.rasterize(ch, profile, CellSize::Double)?);
                }
            }
            if cells.is_empty() {
                println!("No gaiji in text; nothing to preview");
                return Ok(());
            }

            save_strip(&png, &cells, scale.max(1))?;
            println!("Saved {} cells to {}", cells.len(), png.display());
        }
    }

    Ok(())
}

fn load_classifier(config: &SessionConfig) -> Result<Classifier, GaijiError> {
    config.validate()?;
    let tables = JisTables::load(
        &config.jis0201_file,
        &config.jis0208_file,
        &config.jis0212_file,
        &config.jis0213_file,
    )?;
    Ok(Classifier::new(tables, UnicodeEmoji, FontProfiles::from_config(config)))
}

/// Lay cells out left to right with a 1px gray separator, then upscale.
fn save_strip(
    path: &Path,
    cells: &[gaiji::render::GlyphBitmap],
    scale: u32,
) -> Result<(), GaijiError> {
    let cell_w = CellSize::Double.width() as u32;
    let cell_h = CellSize::Double.height() as u32;
    let width = cells.len() as u32 * (cell_w + 1) - 1;

    let mut strip = GrayImage::from_pixel(width, cell_h, Luma([160]));
    for (i, cell) in cells.iter().enumerate() {
        imageops::replace(&mut strip, &cell.to_image(), (i as u32 * (cell_w + 1)) as i64, 0);
    }

    let scaled = imageops::resize(
        &strip,
        width * scale,
        cell_h * scale,
        imageops::FilterType::Nearest,
    );
    scaled
        .save(path)
        .map_err(|e| GaijiError::Image(format!("Failed to save PNG: {}", e)))
}
