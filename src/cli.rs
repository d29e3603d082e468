use clap::{ArgAction, Parser};

use crate::application::dto::OutputFormat;

/// Report dependency conflicts and in-repo substitutions of a multi-module build
#[derive(Parser, Debug)]
#[command(name = "buckdeps")]
#[command(version)]
#[command(
    about = "Report dependency conflicts and in-repo substitutions of a multi-module build",
    long_about = None
)]
pub struct Args {
    /// Resolution manifest, or a directory containing buckdeps.manifest.yml
    #[arg(short, long, value_name = "PATH")]
    pub manifest: Option<String>,

    /// Config file (defaults to buckdeps.config.yml next to the manifest)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Report every dependency, not only those with more than one version
    #[arg(long)]
    pub all_versions: bool,

    /// Zero-pad version parts in versioned target names
    #[arg(long)]
    pub pad_versions: bool,

    /// Keep the version in every target name
    #[arg(long)]
    pub no_versionless: bool,

    /// Keep in-repo coordinates as external dependencies
    #[arg(long)]
    pub no_substitution: bool,

    /// Directory external dependency targets are generated under
    #[arg(long, value_name = "DIR")]
    pub external_root: Option<String>,

    /// Exit with code 1 when a version or substitution conflict is found
    #[arg(long)]
    pub fail_on_conflict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
