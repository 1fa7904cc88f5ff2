use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use triage_pipeline::{Capability, TriageConfig, TriageService};
use triage_protocol::{serialize_json, TriageResponse};

mod http_api;

#[derive(Parser)]
#[command(name = "contract-triage")]
#[command(about = "Contract triage: classify, extract clauses, flag risks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,

    /// Force demo/core-only mode regardless of template availability
    #[arg(long, global = true)]
    demo: bool,

    /// Template corpus directory probed for the extended path
    #[arg(long, global = true)]
    templates_dir: Option<PathBuf>,

    /// TOML config file overlaying environment configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Triage a contract document and print the result as JSON
    Triage(TriageArgs),

    /// Serve the triage API over HTTP (POST /triage)
    #[command(name = "serve-http")]
    ServeHttp(ServeArgs),
}

#[derive(Args)]
struct TriageArgs {
    /// Document file to read (stdin when omitted)
    file: Option<PathBuf>,

    /// Pretty-print JSON response
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct ServeArgs {
    /// Bind address, e.g. 127.0.0.1:7700
    #[arg(long, default_value = "127.0.0.1:7700")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = resolve_config(&cli)?;
    let capability = Capability::initialize(&config);
    let service = TriageService::new(capability);

    match cli.command {
        Commands::Triage(args) => run_triage(args, &service).await?,
        Commands::ServeHttp(args) => http_api::serve(&args.bind, service).await?,
    }

    Ok(())
}

/// Environment first, then the optional TOML overlay, then CLI flags.
/// Config is resolved here once; nothing downstream reads the environment.
fn resolve_config(cli: &Cli) -> Result<TriageConfig> {
    let mut config = TriageConfig::from_env();
    if let Some(path) = &cli.config {
        config = config
            .overlay_file(path)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
    }
    if cli.demo {
        config.demo_mode = true;
    }
    if let Some(dir) = &cli.templates_dir {
        config.templates_dir = dir.clone();
    }
    Ok(config)
}

async fn run_triage(args: TriageArgs, service: &TriageService) -> Result<()> {
    let text = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let result = service.triage(&text).await?;
    let response = TriageResponse { result };

    let json = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serialize_json(&response)?
    };
    println!("{json}");
    Ok(())
}
