mod cli;
mod error;

use changelog::{ParseOptions, parse_changelog};
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use error::{CliError, Result};
use std::io::{self, Write};
use std::{fs, process};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

#[tracing::instrument(skip(cli), fields(file = %cli.file))]
fn run(cli: &Cli) -> Result<()> {
    let options = build_options(cli)?;
    let changelog = parse_changelog(options)
        .map_err(|e| CliError::from(e).with_context(format!("Failed to parse {}", cli.file)))?;

    tracing::info!(
        title = %changelog.title,
        versions = changelog.versions.len(),
        "Parsed changelog"
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&changelog)?
    } else {
        serde_json::to_string(&changelog)?
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, json + "\n").map_err(|e| CliError::WriteFailed(path.clone(), e))?;
            println!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}

fn build_options(cli: &Cli) -> Result<ParseOptions> {
    let mut options = if cli.file == "-" {
        ParseOptions::from_text(io::read_to_string(io::stdin())?)
    } else {
        ParseOptions::from_path(&cli.file)
    };

    if let Some(title) = &cli.title {
        options = options.with_default_title(title.clone());
    }
    if cli.no_order {
        options = options.with_category_order(None::<Vec<String>>);
    } else if let Some(order) = &cli.order {
        options = options.with_category_order(Some(order.iter().map(|c| c.trim())));
    }

    Ok(options
        .with_colon_sections(!cli.no_colon_sections)
        .with_omit_unreleased(!cli.keep_unreleased))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("changelog-json").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_map_to_parse_options() {
        let options = build_options(&cli(&["CHANGELOG.md"])).unwrap();

        assert_eq!(options.path, Some(PathBuf::from("CHANGELOG.md")));
        assert!(options.recognize_colon_sections);
        assert!(options.omit_unreleased_versions);
        assert_eq!(options.default_title, changelog::DEFAULT_TITLE);
        assert_eq!(
            options.category_order.as_ref().map(Vec::len),
            Some(changelog::DEFAULT_CATEGORY_ORDER.len())
        );
    }

    #[test]
    fn test_flags_override_options() {
        let options = build_options(&cli(&[
            "notes.md",
            "--title",
            "Notes",
            "--no-colon-sections",
            "--keep-unreleased",
            "--order",
            "Fixed, New",
        ]))
        .unwrap();

        assert_eq!(options.default_title, "Notes");
        assert!(!options.recognize_colon_sections);
        assert!(!options.omit_unreleased_versions);
        assert_eq!(
            options.category_order,
            Some(vec!["Fixed".to_string(), "New".to_string()])
        );
    }

    #[test]
    fn test_no_order_keeps_document_order() {
        let options = build_options(&cli(&["notes.md", "--no-order"])).unwrap();
        assert!(options.category_order.is_none());
    }

    #[test]
    fn test_run_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("CHANGELOG.md");
        let output = dir.path().join("CHANGELOG.json");
        fs::write(&input, "# Log\n\n## 1.0.0 - 2021-10-28\n\n### New\n\n- Thing\n").unwrap();

        run(&cli(&[input.to_str().unwrap(), "-o", output.to_str().unwrap()])).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["title"], "Log");
        assert_eq!(json["versions"][0]["version"], "1.0.0");
        assert_eq!(json["versions"][0]["date"], "October 28, 2021");
        assert_eq!(json["versions"][0]["categories"]["New"][0], "Thing");
    }

    #[test]
    fn test_run_reports_missing_file() {
        let err = run(&cli(&["does/not/exist.md"])).unwrap_err();
        assert!(err.user_message().starts_with("Failed to parse does/not/exist.md: "));
    }
}
