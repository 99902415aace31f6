mod cli;
mod config;

use cli::{Args, RunOptions};
use config::ConfigFile;
use sbom_csv::adapters::outbound::console::StderrProgressReporter;
use sbom_csv::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use sbom_csv::adapters::outbound::formatters::CsvFormatter;
use sbom_csv::application::dto::ConversionRequest;
use sbom_csv::application::use_cases::ConvertSbomUseCase;
use sbom_csv::shared::error::{ExitCode, SbomError};
use sbom_csv::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => report_failure(&e),
    };
    process::exit(exit_code.as_i32());
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments and merge them over the config file
    let args = Args::parse_args();
    let config = load_config(args.config.as_deref())?;
    let RunOptions {
        input,
        output,
        hash_policy,
    } = args.merge_with(config)?;

    // Missing paths are reported on stdout and are not a failure
    let Some(input_path) = input else {
        println!("Please provide a file name");
        return Ok(ExitCode::Success);
    };
    let Some(output_path) = output else {
        println!("Please provide a output file name");
        return Ok(ExitCode::Success);
    };

    // Create adapters (Dependency Injection)
    let use_case = ConvertSbomUseCase::new(
        FileSystemReader::new(),
        CsvFormatter::new(),
        FileSystemWriter::new(),
        StderrProgressReporter::new(),
    );

    let request = ConversionRequest::new(input_path, output_path, hash_policy);
    use_case.execute(request)?;

    Ok(ExitCode::Success)
}

fn load_config(explicit_path: Option<&str>) -> Result<ConfigFile> {
    let config = match explicit_path {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(Path::new("."))?,
    };
    Ok(config.unwrap_or_default())
}

/// Prints `error` and picks the exit status.
///
/// An output file that cannot be created is reported on stdout and the run
/// ends with status 0; every other error goes to stderr with status 1.
fn report_failure(error: &anyhow::Error) -> ExitCode {
    if let Some(SbomError::OutputCreateError { .. }) = error.downcast_ref::<SbomError>() {
        println!("{}", error);
        return ExitCode::Success;
    }

    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", error);

    // Display error chain
    for cause in error.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }

    eprintln!();
    ExitCode::Failure
}
