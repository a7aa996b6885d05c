use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use neuroreport_cli::config::{self, NeuroreportConfig};
use neuroreport_cli::sources::{audiogram_source, text_source_for};
use neuroreport_core::models::result::{DiscussionMode, ProcessOutcome};
use neuroreport_instruments::{all_instruments, get_instrument};
use neuroreport_pipeline::ReportProcessor;

#[derive(Parser)]
#[command(name = "neuroreport")]
#[command(about = "Extract values from neurocognitive study reports and summarize them")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process one report document
    Process {
        /// PDF or text report
        file: PathBuf,
        /// Treat the file as plain text whatever its extension
        #[arg(long)]
        text: bool,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
        /// Discussion renderer: itemized or implications
        #[arg(long)]
        discussion_mode: Option<DiscussionMode>,
        /// Audiogram JSON file ({"left_ear": {"250": 20, ...}, ...})
        #[arg(long, conflicts_with = "no_audiogram")]
        audiogram: Option<PathBuf>,
        /// Never attach an audiogram
        #[arg(long)]
        no_audiogram: bool,
        /// Seed for the estimated audiogram
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print reference ranges: one battery (behavioral, erp, eeg) or all
    Ranges {
        battery: Option<String>,
    },
    /// Show or initialise the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write a default config file if none exists
    Init,
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Commands::Process {
            file,
            text,
            json,
            discussion_mode,
            audiogram,
            no_audiogram,
            seed,
        } => {
            let config = config::load_config()?;
            let mut processor_config = config.processor_config();
            if let Some(mode) = discussion_mode {
                processor_config.discussion_mode = mode;
            }

            let processor = ReportProcessor::new(
                text_source_for(&file, text)?,
                audiogram_source(audiogram.as_deref(), no_audiogram, seed, config.audiogram)?,
                processor_config,
            );
            let outcome = processor.process_file(&file)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            }
            match outcome {
                ProcessOutcome::Complete(_) if json => {}
                ProcessOutcome::Complete(result) => {
                    println!("Study Findings:\n{}\n", result.generated_study_findings);
                    println!("Study Discussion:\n{}", result.generated_study_discussion);
                }
                ProcessOutcome::Failed { .. } if json => {}
                ProcessOutcome::Failed { error } => return Err(eyre::eyre!(error)),
            }
        }
        Commands::Ranges { battery } => {
            let instruments = match battery {
                Some(id) => vec![get_instrument(&id)?],
                None => all_instruments(),
            };
            for instrument in instruments {
                println!("{}", instrument.describe_ranges());
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let path = config::config_path()?;
                let config = config::load_config()?;
                println!("# {}", path.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Init => {
                let path = config::config_path()?;
                if path.exists() {
                    println!("config already exists at {}", path.display());
                } else {
                    let path = config::save_config(&NeuroreportConfig::default())?;
                    println!("wrote default config to {}", path.display());
                }
            }
        },
    }

    Ok(())
}
