//! CLI command definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;

/// CLI for extracting text and detecting faces in images.
#[derive(Parser)]
#[command(name = "snapsight")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract text from an image, sweeping binarization thresholds
    ExtractText(ExtractTextArgs),

    /// Detect faces in an image
    DetectFaces(DetectFacesArgs),

    /// List supported image formats
    Formats,
}

/// Extract-text command arguments.
#[derive(Parser)]
pub struct ExtractTextArgs {
    /// Path to the input image
    pub image: PathBuf,

    /// Dictionary word list (defaults to the bundled words_alpha.txt)
    #[arg(long, env = "SNAPSIGHT_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Directory holding text-detection.rten and text-recognition.rten
    #[arg(long, env = "SNAPSIGHT_OCR_MODELS")]
    pub models_dir: Option<PathBuf>,
}

/// Detect-faces command arguments.
#[derive(Parser)]
pub struct DetectFacesArgs {
    /// Path to the input image
    pub image: PathBuf,

    /// Classifier model file; repeat for multiple models (defaults to the
    /// bundled frontal-face model)
    #[arg(long = "model")]
    pub models: Vec<PathBuf>,

    /// Write a copy of the image with detected faces outlined
    #[arg(long)]
    pub highlight: Option<PathBuf>,

    /// Write one cropped image per detected face into this directory
    #[arg(long)]
    pub faces_dir: Option<PathBuf>,

    /// Smallest face size, in pixels, to report
    #[arg(long, default_value = "20")]
    pub min_face_size: u32,

    /// Minimum classifier score for a detection
    #[arg(long, default_value = "2.0")]
    pub score_threshold: f64,
}
