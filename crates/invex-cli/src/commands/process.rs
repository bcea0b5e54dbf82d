//! Process command - run OCR on an invoice image and extract its fields.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use invex_core::RuleExtractor;

use super::output::{format_record, OutputFormat};
use crate::providers::FallbackChain;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input image file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Skip the remote OCR service and use only the local engine
    #[arg(long)]
    local_only: bool,

    /// Print extraction warnings to stderr
    #[arg(long)]
    show_warnings: bool,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Loading image...");
    pb.set_position(10);
    let image = fs::read(&args.input)?;

    pb.set_message("Running OCR...");
    pb.set_position(30);
    let chain = FallbackChain::from_config(&config.ocr, args.local_only);
    let ocr_output = chain.recognize(&image)?;

    pb.set_message("Extracting fields...");
    pb.set_position(70);
    let extractor = RuleExtractor::from_config(&config.extraction);
    let result = extractor.run(&ocr_output);

    pb.finish_with_message("Done");

    if args.show_warnings {
        for warning in &result.warnings {
            eprintln!("{} {}", style("warning:").yellow().bold(), warning);
        }
    }

    let output = format_record(&result.record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{output}");
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
