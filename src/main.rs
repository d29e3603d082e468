use buckdeps::cli::Args;
use buckdeps::config::{self, ConfigFile};
use buckdeps::dependency_resolution::domain::DEFAULT_EXTERNAL_ROOT;
use buckdeps::prelude::*;
use buckdeps::shared::error::{BuckDepsError, ExitCode};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red());
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// 0 = warn, 1 = info, 2+ = debug; `RUST_LOG` wins when set
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("buckdeps=warn"),
        1 => EnvFilter::new("buckdeps=info"),
        _ => EnvFilter::new("buckdeps=debug"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let manifest_path = PathBuf::from(args.manifest.as_deref().unwrap_or(MANIFEST_FILENAME));

    let config = load_config(&args, &manifest_path)?.unwrap_or_default();
    let format = resolve_format(&args, &config)?;
    let request = build_request(&args, &config, manifest_path)?;
    debug!("Resolution request: {:?}", request);

    let use_case =
        ResolveDependenciesUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let response = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let output = FormatterFactory::create(format).format(
        &response.conflict_report,
        &response.substitution_report,
        &response.module_targets,
        &response.metadata,
    )?;

    let presenter_type = match args.output.as_deref() {
        Some(path) => PresenterType::File(PathBuf::from(path)),
        None => PresenterType::Stdout,
    };
    PresenterFactory::create(presenter_type).present(&output)?;

    if args.fail_on_conflict && response.has_conflicts() {
        return Ok(ExitCode::ConflictsDetected);
    }
    Ok(ExitCode::Success)
}

/// An explicit `--config` must exist; otherwise look next to the manifest
fn load_config(args: &Args, manifest_path: &Path) -> Result<Option<ConfigFile>> {
    if let Some(path) = args.config.as_deref() {
        let config = config::load_config_from_path(Path::new(path))?;
        eprintln!("📄 Loaded config from: {}", path);
        return Ok(Some(config));
    }

    let dir = if manifest_path.is_dir() {
        manifest_path
    } else {
        match manifest_path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        }
    };
    let config = config::discover_config(dir)?;
    if config.is_some() {
        eprintln!(
            "📄 Auto-discovered config file: {}",
            dir.join(config::CONFIG_FILENAME).display()
        );
    }
    Ok(config)
}

fn resolve_format(args: &Args, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    match config.format.as_deref() {
        Some(format) => format
            .parse()
            .map_err(|message| BuckDepsError::Validation { message }.into()),
        None => Ok(OutputFormat::default()),
    }
}

/// Merges CLI flags over config values over defaults
///
/// The merged external root is validated again; the CLI flag bypasses the
/// config file checks.
fn build_request(
    args: &Args,
    config: &ConfigFile,
    manifest_path: PathBuf,
) -> Result<ResolutionRequest> {
    let threshold = if args.all_versions {
        ReportThreshold::Always
    } else {
        config
            .only_multiple
            .map(ReportThreshold::from_only_multiple)
            .unwrap_or_default()
    };

    let external_root = args
        .external_root
        .clone()
        .or_else(|| config.external_root.clone())
        .unwrap_or_else(|| DEFAULT_EXTERNAL_ROOT.to_string());
    buckdeps::config::validate_external_root(&external_root)?;

    Ok(ResolutionRequest {
        manifest_path,
        threshold,
        versionless: !args.no_versionless && config.versionless.unwrap_or(true),
        pad_versions: args.pad_versions || config.pad_versions.unwrap_or(false),
        versioned_exceptions: config.versioned_exceptions.clone().unwrap_or_default(),
        substitution_enabled: !args.no_substitution && config.substitution.unwrap_or(true),
        external_root,
    })
}
