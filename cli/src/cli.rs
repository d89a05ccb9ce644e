use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "changelog-json")]
#[command(
    author,
    version,
    about = "Parse a keep-a-changelog style CHANGELOG.md and print it as JSON"
)]
pub struct Cli {
    /// Changelog to parse, or `-` to read it from standard input
    pub file: String,

    /// Write the JSON to this file instead of standard output
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Title to use when the changelog has no top-level heading
    #[clap(long)]
    pub title: Option<String>,

    /// Do not treat lines such as `Fixed:` as category headings
    #[clap(long, default_value_t = false)]
    pub no_colon_sections: bool,

    /// Keep versions titled "Unreleased"
    #[clap(long, default_value_t = false)]
    pub keep_unreleased: bool,

    /// Comma-separated category order used to sort changes within a version
    #[clap(long, value_delimiter = ',', conflicts_with = "no_order")]
    pub order: Option<Vec<String>>,

    /// Keep changes in document order
    #[clap(long, default_value_t = false)]
    pub no_order: bool,

    /// Pretty-print the JSON output
    #[clap(short, long, default_value_t = false)]
    pub pretty: bool,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}
