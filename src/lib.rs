//! Reviewmark: outline low-confidence text detections for human review.
//!
//! Given a text detector's output and the image it ran on, reviewmark picks
//! the regions the detector was unsure about, pads their outlines outward
//! by a fixed pixel margin, and strokes them onto a copy of the image saved
//! next to the original.
//!
//! # Modules
//!
//! - [`geom`]: Typed points, polygons and boxes in pixel or normalized space
//! - [`detection`]: Detection result model and Textract JSON reader
//! - [`select`]: Low-confidence region selection and reporting
//! - [`pad`]: Outward polygon padding
//! - [`render`]: Canvas, stroking and review-copy persistence
//! - [`pipeline`]: The select, pad, render sequence
//! - [`error`]: Error types for reviewmark operations

pub mod detection;
pub mod error;
pub mod geom;
pub mod pad;
pub mod pipeline;
pub mod render;
pub mod select;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use detection::RegionKind;
pub use error::ReviewError;
use pipeline::{ReviewConfig, ReviewOutcome};
use render::{RenderOptions, StrokeStyle};
use select::SelectOptions;

/// The reviewmark CLI application.
#[derive(Parser)]
#[command(name = "reviewmark")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Outline low-confidence regions on a copy of the image.
    Annotate(AnnotateArgs),

    /// List the regions that would be outlined, without touching any image.
    Select(SelectArgs),
}

/// Which regions to flag. Shared by both subcommands.
#[derive(clap::Args)]
struct SelectionArgs {
    /// Textract DetectDocumentText JSON response for the image.
    #[arg(long, short = 'd')]
    detections: PathBuf,

    /// Region kind to review ('word', 'line', ...).
    #[arg(long, env = "REVIEWMARK_KIND", default_value = "word")]
    kind: RegionKind,

    /// Confidence percentage; regions strictly below it are flagged.
    #[arg(long, env = "REVIEWMARK_THRESHOLD", default_value_t = 80.0)]
    threshold: f64,
}

impl SelectionArgs {
    fn options(&self) -> SelectOptions {
        SelectOptions {
            kind: self.kind.clone(),
            confidence_threshold: self.threshold,
        }
    }
}

/// Arguments for the annotate subcommand.
#[derive(clap::Args)]
struct AnnotateArgs {
    /// Source image the detections were produced from.
    image: PathBuf,

    #[command(flatten)]
    selection: SelectionArgs,

    /// Outward padding in pixels.
    #[arg(long, env = "REVIEWMARK_MARGIN", default_value_t = 5.0)]
    margin: f64,

    /// Outline width in pixels.
    #[arg(long, env = "REVIEWMARK_STROKE_WIDTH", default_value_t = 2)]
    stroke_width: u32,

    /// Outline colour as rrggbb.
    #[arg(
        long,
        env = "REVIEWMARK_COLOR",
        default_value = "ff0000",
        value_parser = render::parse_color
    )]
    color: [u8; 3],

    /// Text inserted before the extension of the output file.
    #[arg(long, env = "REVIEWMARK_SUFFIX", default_value = render::DEFAULT_SUFFIX)]
    suffix: String,
}

/// Arguments for the select subcommand.
#[derive(clap::Args)]
struct SelectArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the reviewmark CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ReviewError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Annotate(args)) => run_annotate(args),
        Some(Commands::Select(args)) => run_select(args),
        None => {
            println!("reviewmark {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Outline low-confidence text detections for human review.");
            println!();
            println!("Run 'reviewmark --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the annotate subcommand.
fn run_annotate(args: AnnotateArgs) -> Result<(), ReviewError> {
    if !args.margin.is_finite() || args.margin < 0.0 {
        return Err(ReviewError::InvalidArgument(format!(
            "margin must be a non-negative number, got {}",
            args.margin
        )));
    }

    let detections = detection::io_textract::read_textract_json(&args.selection.detections)?;

    let config = ReviewConfig {
        select: args.selection.options(),
        render: RenderOptions {
            margin: args.margin,
            stroke: StrokeStyle {
                width: args.stroke_width,
                color: args.color,
            },
            suffix: args.suffix,
        },
    };

    match pipeline::run_review(&detections, &args.image, &config)? {
        ReviewOutcome::NothingToAnnotate => println!("Nothing to annotate"),
        ReviewOutcome::Annotated(summary) => {
            if summary.skipped > 0 {
                eprintln!("Skipped {} polygon(s) with no vertices", summary.skipped);
            }
            println!("{}", summary.output.display());
        }
    }

    Ok(())
}

/// Execute the select subcommand.
fn run_select(args: SelectArgs) -> Result<(), ReviewError> {
    let detections = detection::io_textract::read_textract_json(&args.selection.detections)?;
    let report = select::build_report(&detections, &args.selection.options());

    match args.output.as_str() {
        "json" => {
            let json =
                serde_json::to_string_pretty(&report).map_err(ReviewError::ReportSerialize)?;
            println!("{}", json);
        }
        "text" => print!("{}", report),
        other => {
            return Err(ReviewError::InvalidArgument(format!(
                "unsupported report output '{}' (supported: text, json)",
                other
            )));
        }
    }

    Ok(())
}
