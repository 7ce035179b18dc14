//! Print the storage unit label of DLIS files.
//!
//! Usage:
//!   dlis_label [--json] FILE.dlis [FILE.dlis ...]
//!
//! Warnings (e.g. a label that is not DLIS v1.0) go to stderr through `tracing`; set
//! `RUST_LOG=dlis=warn` (the default) or `RUST_LOG=off` to silence them.

use anyhow::Context;
use dlis_frames::{read_storage_label, StorageLabel, Warnings};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy)]
enum OutputStyle {
    Text,
    Json,
}

/// One line of `--json` output.
#[derive(Serialize)]
struct LabelSummary<'a> {
    path: &'a str,
    sequence: u32,
    version: String,
    layout: String,
    maxlen: i64,
    id: &'a str,
}

impl<'a> LabelSummary<'a> {
    fn new(path: &'a str, label: &'a StorageLabel) -> Self {
        LabelSummary {
            path,
            sequence: label.sequence,
            version: label.version(),
            layout: label.layout.to_string(),
            maxlen: label.maxlen,
            id: label.id_trimmed(),
        }
    }
}

fn print_label(path: &str, label: &StorageLabel, style: OutputStyle) -> anyhow::Result<()> {
    match style {
        OutputStyle::Text => {
            println!("{}", path);
            println!("  sequence: {}", label.sequence);
            println!("  version:  {}", label.version());
            println!("  layout:   {}", label.layout);
            println!("  maxlen:   {}", label.maxlen);
            println!("  id:       {}", label.id_trimmed());
        }
        OutputStyle::Json => {
            println!("{}", serde_json::to_string(&LabelSummary::new(path, label))?);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dlis=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let style = if let Some(pos) = args.iter().position(|a| a == "--json") {
        args.remove(pos);
        OutputStyle::Json
    } else {
        OutputStyle::Text
    };
    if args.is_empty() {
        anyhow::bail!("usage: dlis_label [--json] FILE.dlis [FILE.dlis ...]");
    }

    for path in &args {
        let mut warnings = Warnings::new();
        let label = read_storage_label(path, &mut warnings)
            .with_context(|| format!("reading storage label of {}", path))?;
        print_label(path, &label, style)?;
    }
    Ok(())
}
