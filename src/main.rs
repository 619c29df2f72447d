//! qrgen command-line entrypoint

use clap::{ArgAction, CommandFactory, Parser};
use qrgen::{DefaultOptions, Error, ErrorCorrectionLevel, GenerationRequest, QrgenConfig, logging};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "qrgen", version, about = "Generate QR codes from text or links.")]
struct Cli {
    /// Text or URL to encode (ignored if --input-file is provided)
    data: Option<String>,

    /// Output file path (extension determines format: .png or .svg) [default: qr.png]
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Box size (pixels per module) for raster output [default: 10]
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(1..))]
    size: Option<u32>,

    /// Quiet-zone border width (modules) [default: 4]
    #[arg(long, value_name = "MODULES")]
    border: Option<u32>,

    /// Error correction level: L (7%), M (15%), Q (25%), H (30%) [default: M]
    #[arg(long, value_enum, value_name = "LEVEL")]
    ec: Option<ErrorCorrectionLevel>,

    /// Foreground color (e.g., black, #000000) [default: black]
    #[arg(long, value_name = "COLOR")]
    fill_color: Option<String>,

    /// Background color (e.g., white, #FFFFFF) [default: white]
    #[arg(long, value_name = "COLOR")]
    bg_color: Option<String>,

    /// Read input text from a file path
    #[arg(long, value_name = "PATH")]
    input_file: Option<PathBuf>,

    /// Optional configuration file (toml/yaml). Defaults to qrgen.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> DefaultOptions {
        DefaultOptions {
            output: self.output.clone(),
            size: self.size,
            border: self.border,
            ec: self.ec,
            fill_color: self.fill_color.clone(),
            bg_color: self.bg_color.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(saved) => {
            println!("Saved QR to: {}", saved.display());
            ExitCode::SUCCESS
        }
        Err(Error::Usage(message)) => Cli::command()
            .error(clap::error::ErrorKind::ValueValidation, message)
            .exit(),
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> qrgen::Result<PathBuf> {
    let config = QrgenConfig::load(cli.config.as_deref())?;
    logging::init(&config.logging, cli.verbose)?;

    let (output, options) = config.defaults.overlay(cli.overrides()).resolve()?;
    let data = qrgen::resolve_input(cli.data, cli.input_file)?;

    let request = GenerationRequest::new(data, output, options);
    tracing::info!(
        path = %request.output_path.display(),
        format = ?request.output_format(),
        ec = %request.options.error_correction,
        "Generating QR code"
    );

    qrgen::generate(&request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "qrgen",
            "https://example.com",
            "-o",
            "out.svg",
            "--size",
            "6",
            "--border",
            "2",
            "--ec",
            "H",
            "--fill-color",
            "#112233",
            "--bg-color",
            "ivory",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(cli.data.as_deref(), Some("https://example.com"));
        assert_eq!(overrides.output, Some(PathBuf::from("out.svg")));
        assert_eq!(overrides.size, Some(6));
        assert_eq!(overrides.border, Some(2));
        assert_eq!(overrides.ec, Some(ErrorCorrectionLevel::H));
        assert_eq!(overrides.fill_color.as_deref(), Some("#112233"));
        assert_eq!(overrides.bg_color.as_deref(), Some("ivory"));
    }

    #[test]
    fn test_cli_rejects_bad_values() {
        assert!(Cli::try_parse_from(["qrgen", "x", "--ec", "Z"]).is_err());
        assert!(Cli::try_parse_from(["qrgen", "x", "--size", "0"]).is_err());
        assert!(Cli::try_parse_from(["qrgen", "x", "--border", "-1"]).is_err());
    }

    #[test]
    fn test_cli_data_optional() {
        let cli = Cli::try_parse_from(["qrgen", "--input-file", "payload.txt"]).unwrap();
        assert!(cli.data.is_none());
        assert_eq!(cli.input_file, Some(PathBuf::from("payload.txt")));
    }
}
