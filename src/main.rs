use clap::{ArgGroup, Parser};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use lrprev_extract::{run, Catalog, ExtractConfig, OutputOptions};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "lrprev-extract")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract the largest JPEG from Lightroom .lrprev files")]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["input_dir", "input_file"]),
))]
struct Cli {
    /// Path to your Lightroom previews directory (.lrdata)
    #[arg(short = 'd', long)]
    input_dir: Option<PathBuf>,

    /// Path to a single preview file (.lrprev)
    #[arg(short = 'f', long)]
    input_file: Option<PathBuf>,

    /// Path to output directory
    #[arg(short = 'o', long)]
    output_directory: PathBuf,

    /// Path to the Lightroom catalog (.lrcat)
    #[arg(short = 'l', long)]
    lightroom_db: Option<PathBuf>,

    /// Include image size information in the file name output
    #[arg(long)]
    include_size: bool,

    /// Print debug diagnostics
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Turn the arguments into the configuration the pipeline runs with
    fn config(&self) -> ExtractConfig {
        ExtractConfig {
            output: OutputOptions::new(&self.output_directory).with_size(self.include_size),
            catalog: self.lightroom_db.as_ref().map(Catalog::new),
        }
    }

    fn input(&self) -> &Path {
        match (&self.input_dir, &self.input_file) {
            (Some(dir), None) => dir.as_path(),
            (None, Some(file)) => file.as_path(),
            _ => unreachable!("clap accepts exactly one of --input-dir and --input-file"),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "lrprev_extract=debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    // Exits with status 2 when both or neither input is given
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Ensure the output directory exists
    if let Err(e) = std::fs::create_dir_all(&cli.output_directory) {
        eprintln!(
            "❌ Failed to create output directory {}: {}",
            cli.output_directory.display(),
            e
        );
        return ExitCode::FAILURE;
    }

    let config = cli.config();
    if let Some(catalog) = &config.catalog {
        println!("📁 Using catalog: {}", catalog.path().display());
    }

    run(cli.input(), &config);

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_exactly_one_input_is_required() {
        let err = Cli::try_parse_from(["lrprev-extract", "-o", "out"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["lrprev-extract", "-d", "in", "-f", "a.lrprev", "-o", "out"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_config_from_args() {
        let cli = Cli::try_parse_from([
            "lrprev-extract",
            "--input-file",
            "a.lrprev",
            "--output-directory",
            "out",
            "--lightroom-db",
            "cat.lrcat",
            "--include-size",
        ])
        .unwrap();

        let config = cli.config();

        assert_eq!(cli.input(), Path::new("a.lrprev"));
        assert_eq!(config.output, OutputOptions::new("out").with_size(true));
        assert_eq!(config.catalog.unwrap().path(), PathBuf::from("cat.lrcat"));
    }

    #[test]
    fn test_output_is_required() {
        let err = Cli::try_parse_from(["lrprev-extract", "-d", "in"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
