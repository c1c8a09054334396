//! Completions command implementation
//!
//! Handles the `sizewise completions` command which generates shell
//! completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// sizewise completions bash > /etc/bash_completion.d/sizewise
///
/// # Zsh
/// sizewise completions zsh > ~/.zfunc/_sizewise
///
/// # Fish
/// sizewise completions fish > ~/.config/fish/completions/sizewise.fish
/// ```
pub fn cmd_completions(shell: Shell) {
    // We need to re-create the command structure here since Cli is in main.rs
    // This uses clap's builder API to generate completions
    use clap::{Arg, ArgAction, Command};

    let mut cmd = Command::new("sizewise")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Garment size chart detection and fit recommendation")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Data directory for profile, history and chart cache")
                .global(true),
        )
        .subcommand(Command::new("detect").about("Detect a size chart in a saved page"))
        .subcommand(Command::new("recommend").about("Recommend a size for a saved page"))
        .subcommand(Command::new("profile").about("Manage the measurement profile"))
        .subcommand(Command::new("history").about("Show recent recommendations"))
        .subcommand(Command::new("completions").about("Generate shell completions"));

    let bin_name = "sizewise".to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
