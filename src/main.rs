use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::process;
use sizewise::cmd::{self, ProfileUpdate};
use sizewise::error::ErrorFormatter;

/// Garment size chart detection and fit recommendation
///
/// sizewise scrapes size charts out of saved product pages, matches your
/// body measurements against them and prints a confidence-weighted size
/// recommendation.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    /// Data directory for profile, history and chart cache
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect a size chart in a saved product page
    Detect {
        /// Saved HTML page to scan
        #[arg(value_name = "PAGE")]
        file: String,

        /// Hostname of the shop the page came from (enables site
        /// patterns and brand adjustments)
        #[arg(short = 'H', long)]
        hostname: Option<String>,

        /// Sizing convention for the estimated fallback: mens, womens
        #[arg(short, long, default_value = "mens")]
        gender: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recommend a size for a saved product page
    Recommend {
        /// Saved HTML page to scan
        #[arg(value_name = "PAGE")]
        file: String,

        /// Hostname of the shop the page came from
        #[arg(short = 'H', long)]
        hostname: Option<String>,

        /// Profile JSON file (defaults to the stored profile)
        #[arg(short, long)]
        profile: Option<String>,

        /// Seed for deterministic message selection
        #[arg(long)]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the measurement profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Show recent recommendations
    History {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Set profile fields (unset fields keep their values)
    Set {
        /// Profile name
        #[arg(long)]
        name: Option<String>,

        /// Sizing convention: mens, womens
        #[arg(long)]
        gender: Option<String>,

        /// Chest circumference, inches
        #[arg(long)]
        chest: Option<f64>,

        /// Waist circumference, inches
        #[arg(long)]
        waist: Option<f64>,

        /// Hip circumference, inches
        #[arg(long)]
        hips: Option<f64>,

        /// Inside leg length, inches
        #[arg(long)]
        inseam: Option<f64>,

        /// Fit preference: fitted, regular, relaxed
        #[arg(long)]
        fit: Option<String>,
    },

    /// Show the stored profile
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let data_dir = cli.data_dir.as_deref();

    let result = match cli.command {
        Some(Commands::Detect {
            file,
            hostname,
            gender,
            json,
        }) => cmd::cmd_detect(&file, hostname.as_deref(), &gender, json, data_dir),
        Some(Commands::Recommend {
            file,
            hostname,
            profile,
            seed,
            json,
        }) => cmd::cmd_recommend(
            &file,
            hostname.as_deref(),
            profile.as_deref(),
            seed,
            json,
            data_dir,
        ),
        Some(Commands::Profile { command }) => match command {
            ProfileCommands::Set {
                name,
                gender,
                chest,
                waist,
                hips,
                inseam,
                fit,
            } => cmd::cmd_profile_set(
                ProfileUpdate {
                    name,
                    gender,
                    chest,
                    waist,
                    hips,
                    inseam,
                    fit,
                },
                data_dir,
            ),
            ProfileCommands::Show { json } => cmd::cmd_profile_show(json, data_dir),
        },
        Some(Commands::History { json }) => cmd::cmd_history(json, data_dir),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(shell);
            Ok(())
        }
        None => {
            // No subcommand: print help and exit cleanly
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            println!();
            Ok(())
        }
    };

    if let Err(error) = result {
        eprintln!("{}", ErrorFormatter::format(&error));
        process::exit(ErrorFormatter::exit_code(&error));
    }
}
