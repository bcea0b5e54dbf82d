//! Extract structured fields from already-recognized OCR output.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use invex_core::{InvoiceExtractor, OcrInput, RuleExtractor};
use tracing::info;

use super::output::{format_record, OutputFormat};

#[derive(Args)]
pub struct ExtractArgs {
    /// Input file, or "-" for stdin
    pub input: String,

    /// Treat the input as a JSON OCR payload (string or token array)
    #[arg(long)]
    pub json: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Print extraction warnings to stderr
    #[arg(long)]
    pub show_warnings: bool,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let raw = if args.input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.input)?
    };

    let input = if args.json {
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        OcrInput::from_json(value)?
    } else {
        OcrInput::Text(raw)
    };

    let extractor = RuleExtractor::from_config(&config.extraction);
    let result = extractor.run(&input);

    info!(
        elapsed_ms = result.processing_time_ms,
        warnings = result.warnings.len(),
        "extraction finished"
    );

    if args.show_warnings {
        for warning in &result.warnings {
            eprintln!("{} {}", style("warning:").yellow().bold(), warning);
        }
    }

    let rendered = format_record(&result.record, args.format)?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            println!(
                "{} wrote {}",
                style("✓").green().bold(),
                style(path.display()).cyan()
            );
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
