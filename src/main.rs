use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::Path;

use receipt_processor::{breakdown, Receipt, ReceiptValidator};

const USAGE: &str = "Usage: receipt-points <receipt.json> [--explain]";

fn main() -> Result<()> {
    receipt_processor::init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let explain = args.iter().any(|a| a == "--explain");
    let paths: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    match paths.as_slice() {
        [path] => score_file(Path::new(path.as_str()), explain),
        _ => bail!(USAGE),
    }
}

/// Score a receipt file offline, without the server
fn score_file(path: &Path, explain: bool) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read receipt file: {:?}", path))?;

    let receipt: Receipt =
        serde_json::from_str(&content).context("Failed to parse receipt JSON")?;

    if let Err(errors) = ReceiptValidator::validate(&receipt) {
        for error in &errors {
            tracing::warn!(%error, "field will score zero");
        }
    }

    let points = breakdown(&receipt);

    if explain {
        for (rule, value) in points.rules() {
            println!("{:<18}{:>6}", rule, value);
        }
        println!("{:<18}{:>6}", "total", points.total());
    } else {
        println!("{}", points.total());
    }

    Ok(())
}
