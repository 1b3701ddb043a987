use std::{
    io::{self, stderr, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

use bin2c::{io::OutputTarget, logging::setup_logging};
use clap::Parser;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use log::debug;

fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();
    let mut stderr = stderr();
    let colored = stderr.is_terminal();
    run(cli, &mut stderr, colored)
}

fn run<W: Write>(cli: Cli, err_out: &mut W, colored: bool) -> ExitCode {
    let Cli { input, output } = cli;

    match bin2c::convert(&input, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("conversion of {} failed: {:?}", input.display(), err);
            if let Err(report_err) = report_error(err_out, &err.to_string(), colored) {
                debug!("cannot report error: {}", report_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn report_error<W: Write>(out: &mut W, message: &str, colored: bool) -> io::Result<()> {
    let message = format!("error: {}\n", message);
    if colored {
        execute!(
            out,
            SetForegroundColor(Color::Red),
            Print(&message),
            ResetColor
        )
    } else {
        execute!(out, Print(&message))
    }
}

/// Convert a binary file into a C byte-array declaration.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Binary file to convert
    #[arg(short, long)]
    input: PathBuf,

    /// Output file, or `-` for standard output
    #[arg(short, long)]
    output: OutputTarget,
}

#[cfg(test)]
mod test {
    use clap::{error::ErrorKind, Parser};

    use std::{fs, process::ExitCode};

    use super::{run, Cli};
    use bin2c::io::OutputTarget;

    #[test]
    fn parse_short_flags() {
        let cli = Cli::try_parse_from(["bin2c", "-i", "logo.png", "-o", "-"]).unwrap();
        assert_eq!(cli.input.to_str(), Some("logo.png"));
        assert_eq!(cli.output, OutputTarget::Stdout);
    }

    #[test]
    fn parse_long_flags() {
        let cli =
            Cli::try_parse_from(["bin2c", "--input", "a.bin", "--output", "gen/a.h"]).unwrap();
        assert_eq!(cli.output, OutputTarget::File("gen/a.h".into()));
    }

    #[test]
    fn missing_output() {
        let result = Cli::try_parse_from(["bin2c", "-i", "a.bin"]);
        assert!(result.is_err());
        assert_eq!(
            result.err().map(|err| err.kind()),
            Some(ErrorKind::MissingRequiredArgument)
        );
    }

    #[test]
    fn missing_input() {
        let result = Cli::try_parse_from(["bin2c", "-o", "-"]);
        assert_eq!(
            result.err().map(|err| err.kind()),
            Some(ErrorKind::MissingRequiredArgument)
        );
    }

    #[test]
    fn empty_output_rejected() {
        let result = Cli::try_parse_from(["bin2c", "-i", "a.bin", "-o", ""]);
        assert_eq!(
            result.err().map(|err| err.kind()),
            Some(ErrorKind::ValueValidation)
        );
    }

    #[test]
    fn run_success() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("blob.bin");
        let output = dir.path().join("blob.h");
        fs::write(&input, [1, 2, 3]).unwrap();
        let cli = Cli {
            input,
            output: OutputTarget::File(output.clone()),
        };
        let mut err_out = Vec::new();

        let code = run(cli, &mut err_out, false);
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(err_out.is_empty());
        assert!(output.exists());
    }

    #[test]
    fn run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            input: dir.path().join("missing.bin"),
            output: OutputTarget::File(dir.path().join("missing.h")),
        };
        let mut err_out = Vec::new();

        let code = run(cli, &mut err_out, false);
        assert_eq!(code, ExitCode::FAILURE);
        let message = String::from_utf8(err_out).unwrap();
        assert!(message.starts_with("error: cannot access "));
        assert!(message.contains("missing.bin"));
        assert!(message.ends_with('\n'));
    }

    #[test]
    fn run_missing_input_colored() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            input: dir.path().join("missing.bin"),
            output: OutputTarget::Stdout,
        };
        let mut err_out = Vec::new();

        let code = run(cli, &mut err_out, true);
        assert_eq!(code, ExitCode::FAILURE);
        let message = String::from_utf8(err_out).unwrap();
        assert!(message.starts_with('\u{1b}'));
        assert!(message.contains("error: cannot access "));
    }
}
