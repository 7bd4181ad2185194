//! CLI entrypoint.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use kotskel_core::{FileOutline, Kotskel, KotskelError};
use owo_colors::{OwoColorize, Stream};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the kotskel CLI.
struct Cli {
	/// Kotlin source file or directory to outline
	target: PathBuf,

	/// Render private, internal, and protected declarations too
	#[arg(short = 'p', long, default_value_t = false)]
	private: bool,

	/// Outline files with syntax errors from whatever the parser recovered
	#[arg(short = 'l', long, default_value_t = false)]
	lenient: bool,

	/// Print a `// <path>` header before each file's outline
	#[arg(short = 'H', long, default_value_t = false)]
	headers: bool,

	/// Comma-separated list of source extensions to pick up
	#[arg(
		short = 'e',
		long = "ext",
		env = "KOTSKEL_EXTENSIONS",
		value_delimiter = ',',
		value_name = "EXT[,EXT...]",
		default_value = "kt"
	)]
	extensions: Vec<String>,

	/// Enable verbose mode, logging each processed file to stderr
	#[arg(short = 'v', long, default_value_t = false)]
	verbose: bool,
}

impl Cli {
	fn kotskel(&self) -> Kotskel {
		Kotskel::new()
			.with_private_items(self.private)
			.with_lenient(self.lenient)
			.with_extensions(&self.extensions)
	}
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
	let default = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(false)
		.init();
}

/// Write one file's outline, or its error report, to `out`.
fn write_outline(out: &mut impl Write, outline: &FileOutline, headers: bool) -> io::Result<()> {
	match &outline.outcome {
		Ok(rendered) => {
			if headers {
				writeln!(out, "// {}", outline.path.display())?;
			}
			write!(out, "{rendered}")
		}
		Err(err) => {
			let report = format!(
				"Error processing file {}: {err}",
				outline.absolute_path().display()
			);
			writeln!(
				out,
				"{}",
				report.if_supports_color(Stream::Stdout, |text| text.red())
			)
		}
	}
}

/// Outline the target and stream the result to stdout.
fn run_cmdline(cli: &Cli) -> Result<(), Box<dyn Error>> {
	let outlines = match cli.kotskel().outline(&cli.target) {
		Ok(outlines) => outlines,
		Err(KotskelError::NoSources(path)) => {
			println!("No Kotlin files found at: {}", path.display());
			return Ok(());
		}
		Err(err) => return Err(err.into()),
	};
	let files = outlines.len();
	let mut failed = 0;

	let stdout = io::stdout();
	let mut out = stdout.lock();
	for outline in outlines {
		if !outline.is_ok() {
			failed += 1;
		}
		write_outline(&mut out, &outline, cli.headers)?;
	}
	out.flush()?;
	debug!(files, failed, "outlined target");

	Ok(())
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(e) = run_cmdline(&cli) {
		eprintln!("{e}");
		process::exit(1);
	}
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	fn outline(path: &str, outcome: kotskel_core::Result<String>) -> FileOutline {
		FileOutline {
			path: PathBuf::from(path),
			outcome,
		}
	}

	fn written(outline: &FileOutline, headers: bool) -> String {
		let mut buffer = Vec::new();
		write_outline(&mut buffer, outline, headers).unwrap();
		String::from_utf8(buffer).unwrap()
	}

	#[test]
	fn cli_definition_is_valid() {
		Cli::command().debug_assert();
	}

	#[test]
	fn extensions_split_on_commas() {
		let cli = Cli::try_parse_from(["kotskel", "src", "--ext", "kt,kts"]).unwrap();
		assert_eq!(cli.extensions, vec!["kt", "kts"]);
		assert_eq!(cli.kotskel().extensions(), ["kt".to_string(), "kts".to_string()]);
	}

	#[test]
	fn target_is_required() {
		assert!(Cli::try_parse_from(["kotskel"]).is_err());
	}

	#[test]
	fn outline_with_header() {
		let rendered = written(&outline("a/Main.kt", Ok("fun main()\n".into())), true);
		assert_eq!(rendered, "// a/Main.kt\nfun main()\n");
	}

	#[test]
	fn outline_without_header() {
		let rendered = written(&outline("a/Main.kt", Ok("fun main()\n".into())), false);
		assert_eq!(rendered, "fun main()\n");
	}

	#[test]
	fn error_report_names_file_and_cause() {
		let err = KotskelError::NoSources(PathBuf::from("nowhere"));
		let rendered = written(&outline("a/Broken.kt", Err(err)), false);
		assert!(rendered.contains("Error processing file "));
		assert!(rendered.contains("Broken.kt: No Kotlin files found at: nowhere"));
	}

	#[test]
	fn error_report_is_plain_without_color_support() {
		owo_colors::set_override(false);
		let err = KotskelError::NoSources(PathBuf::from("nowhere"));
		let rendered = written(&outline("a/Broken.kt", Err(err)), false);
		owo_colors::unset_override();
		assert!(!rendered.contains('\x1b'), "unexpected escape codes: {rendered:?}");
		assert!(rendered.ends_with("No Kotlin files found at: nowhere\n"));
	}
}
