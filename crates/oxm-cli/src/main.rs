use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use oxm_core::{
    DEFAULT_ROOT_KEY, MergeOptions, TracingSink, document_to_string, extract_examples,
    load_document, merge_into_root, save_document,
};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "oxm",
    about = "Merge example values from a converted OpenAPI document into the original",
    version
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Merge examples from CONVERTED into ORIGINAL and emit the result
    Merge(MergeArgs),
    /// Extract the example tree from CONVERTED and emit it as YAML
    Extract(ExtractArgs),
}

#[derive(ClapArgs, Debug)]
struct MergeArgs {
    /// Original (authoritative) API description
    original: PathBuf,
    /// Converted API description carrying example values
    converted: PathBuf,
    /// Output path; prints to stdout when omitted
    #[arg(short, long, conflicts_with = "in_place")]
    out: Option<PathBuf>,
    /// Overwrite ORIGINAL, keeping a timestamped backup next to it
    #[arg(long, conflicts_with = "out")]
    in_place: bool,
    /// Insert example keys that are absent from the original document
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    add_missing: bool,
    /// Top-level key under which endpoint paths are matched
    #[arg(long, default_value = DEFAULT_ROOT_KEY)]
    root_key: String,
}

#[derive(ClapArgs, Debug)]
struct ExtractArgs {
    /// Converted API description carrying example values
    converted: PathBuf,
    /// Output path; prints to stdout when omitted
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    match cli.cmd {
        Cmd::Merge(args) => cmd_merge(args),
        Cmd::Extract(args) => cmd_extract(args),
    }
}

fn setup_logging(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG wins over the -v flags when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

fn cmd_merge(args: MergeArgs) {
    let mut original = load_document(&args.original).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        process::exit(2);
    });
    let converted = load_document(&args.converted).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        process::exit(2);
    });

    let mut sink = TracingSink;
    let examples = extract_examples(&converted, &mut sink);
    let opts = MergeOptions {
        add_missing: args.add_missing,
        root_key: args.root_key,
    };
    merge_into_root(&mut original, &examples, &opts);

    if args.in_place {
        let backup = oxm_core::backup_file(&args.original).unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            process::exit(4);
        });
        tracing::info!("backed up original to {}", backup.display());
        save_document(&args.original, &original).unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            process::exit(4);
        });
    } else if let Some(out) = args.out {
        save_document(&out, &original).unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            process::exit(4);
        });
    } else {
        let text = document_to_string(&original).unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            process::exit(4);
        });
        print!("{}", text);
    }
}

fn cmd_extract(args: ExtractArgs) {
    let converted = load_document(&args.converted).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        process::exit(2);
    });
    let mut sink = TracingSink;
    let examples = extract_examples(&converted, &mut sink);
    if let Some(out) = args.out {
        save_document(&out, &examples).unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            process::exit(4);
        });
    } else {
        let text = document_to_string(&examples).unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            process::exit(4);
        });
        print!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
