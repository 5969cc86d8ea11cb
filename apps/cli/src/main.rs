//! Command-line harness over the aurum codec: validate FHIR JSON documents
//! and re-emit them in canonical form.

use anyhow::{Context, Result};
use aurum_codec::{DecodeOptions, ModifierPolicy, UnknownFieldPolicy};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "aurum", about = "FHIR R5 JSON codec tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct DecodeArgs {
    /// Path to a FHIR JSON document.
    file: PathBuf,

    /// Reject undeclared fields instead of preserving them.
    #[arg(long)]
    reject_unknown_fields: bool,

    /// Accept unrecognized modifier extensions, reporting them as notes.
    #[arg(long)]
    lenient_modifiers: bool,

    /// Modifier extension URLs to treat as recognized. Repeatable.
    #[arg(long = "recognize", value_name = "URL")]
    recognized: Vec<String>,

    /// Maximum element nesting depth.
    #[arg(long, default_value_t = 64)]
    max_depth: usize,

    /// Maximum number of contained resources.
    #[arg(long, default_value_t = 256)]
    max_contained: usize,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a document and report the outcome.
    Validate {
        #[command(flatten)]
        args: DecodeArgs,

        /// Emit the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Decode a document and write its canonical encoding to stdout.
    Roundtrip {
        #[command(flatten)]
        args: DecodeArgs,

        /// Pretty-print the output.
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Serialize)]
struct Report {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ReportError>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    notes: Vec<ReportNote>,
}

#[derive(Serialize)]
struct ReportError {
    path: String,
    message: String,
}

#[derive(Serialize)]
struct ReportNote {
    path: String,
    unrecognized_modifier: String,
}

fn options_from(args: &DecodeArgs) -> DecodeOptions {
    let mut options = DecodeOptions::new()
        .with_max_depth(args.max_depth)
        .with_max_contained(args.max_contained);
    if args.reject_unknown_fields {
        options = options.with_unknown_fields(UnknownFieldPolicy::Reject);
    }
    if args.lenient_modifiers {
        options = options.with_unknown_modifiers(ModifierPolicy::Note);
    }
    for url in &args.recognized {
        options = options.recognize_modifier_extension(url.as_str());
    }
    options
}

fn validate(args: &DecodeArgs, json: bool) -> Result<ExitCode> {
    let bytes = fs::read(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let options = options_from(args);
    let report = match aurum_model::decode_with(&bytes, &options) {
        Ok(decoded) => Report {
            valid: true,
            resource_type: Some(decoded.value.resource_type().to_string()),
            error: None,
            notes: decoded
                .notes
                .into_iter()
                .map(|note| ReportNote {
                    path: note.path,
                    unrecognized_modifier: note.url,
                })
                .collect(),
        },
        Err(err) => Report {
            valid: false,
            resource_type: None,
            error: Some(ReportError {
                path: err.path.clone(),
                message: err.kind.to_string(),
            }),
            notes: Vec::new(),
        },
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.valid {
        let resource_type = report.resource_type.as_deref().unwrap_or("(unknown)");
        println!("{}: valid {resource_type}", args.file.display());
        for note in &report.notes {
            println!(
                "  note: unrecognized modifier extension `{}` at `{}`",
                note.unrecognized_modifier, note.path
            );
        }
    } else if let Some(error) = &report.error {
        println!(
            "{}: invalid at `{}`: {}",
            args.file.display(),
            error.path,
            error.message
        );
    }

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn roundtrip(args: &DecodeArgs, pretty: bool) -> Result<ExitCode> {
    let bytes = fs::read(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let options = options_from(args);
    let decoded = match aurum_model::decode_with(&bytes, &options) {
        Ok(decoded) => decoded,
        Err(err) => {
            eprintln!("{}: {err}", args.file.display());
            return Ok(ExitCode::FAILURE);
        }
    };
    let value = aurum_model::encode_value(&decoded.value)?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{rendered}");
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Validate { args, json } => validate(args, *json),
        Command::Roundtrip { args, pretty } => roundtrip(args, *pretty),
    }
}
