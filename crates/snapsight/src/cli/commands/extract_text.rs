//! Extract-text command implementation.

use anyhow::Context;
use snapsight_engine::imaging::{load_image, ImageProcessor};
use snapsight_engine::ocr::{OcrsRecognizer, TextExtractor, WordListDictionary};

use crate::cli::ExtractTextArgs;
use crate::output::Output;

pub fn run(args: ExtractTextArgs, output: &Output) -> anyhow::Result<()> {
    let image = load_image(&args.image)?;

    let dictionary = match &args.dictionary {
        Some(path) => WordListDictionary::load(path)?,
        None => WordListDictionary::load_default()?,
    };

    let recognizer = match &args.models_dir {
        Some(dir) => OcrsRecognizer::new(dir)?,
        None => OcrsRecognizer::with_default_models()?,
    };

    let extractor = TextExtractor::new(ImageProcessor, recognizer, dictionary);
    let result = extractor.extract_text(&image);

    output
        .print_extraction(&result)
        .context("failed to print extraction result")
}
