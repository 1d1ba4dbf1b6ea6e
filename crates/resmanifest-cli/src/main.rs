mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use resmanifest::{AdapterPackage, Config, ExitStatus, KNOWN_ADAPTER_TYPES};
use tracing_subscriber::EnvFilter;

use report::Report;

#[derive(Parser, Debug)]
#[command(
    name = "resmanifest",
    version,
    about = "Check that a www-only adapter's descriptor matches what it ships"
)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate an adapter checkout
    Check {
        /// Adapter root directory
        #[arg(default_value = ".")]
        root: PathBuf,
        /// Config file (default: <root>/.resmanifest.json, then ~/.resmanifest/config.json)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Descriptor file, relative to root
        #[arg(long)]
        descriptor: Option<String>,
        /// Release metadata file, relative to root
        #[arg(long)]
        release: Option<String>,
        /// Resource directory, relative to root
        #[arg(long)]
        www: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List recognized adapter type tags
    Types,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(ExitStatus::InputError.code())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(command: Command) -> anyhow::Result<ExitStatus> {
    match command {
        Command::Check {
            root,
            config,
            descriptor,
            release,
            www,
            format,
        } => {
            let (mut config, config_path) = Config::resolve(config.as_deref(), &root)
                .context("failed to load configuration")?;
            if let Some(path) = &config_path {
                tracing::debug!("Config loaded from {:?}", path);
            }
            if let Some(descriptor) = descriptor {
                config.descriptor_file = descriptor;
            }
            if let Some(release) = release {
                config.release_file = release;
            }
            if let Some(www) = www {
                config.resource_dir = www;
            }

            let package = AdapterPackage::load(&root, &config)
                .with_context(|| format!("failed to load adapter at {}", root.display()))?;
            let result = package.check(&config.validation_options());
            let report = Report::new(&package, result);

            match format {
                Format::Text => report.print_text(),
                Format::Json => report.print_json()?,
            }
            Ok(report.status())
        }
        Command::Types => {
            for tag in KNOWN_ADAPTER_TYPES {
                println!("{}", tag);
            }
            Ok(ExitStatus::Clean)
        }
    }
}
