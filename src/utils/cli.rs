//! Command-line argument parsing and help for fuzzy-filer.
//!
//! This module handles all CLI flag parsing used for config initialization and help.
//!
//! When invoked with no args/flags (ff), fuzzy-filer simply launches the picker in the current
//! directory.

use crate::config::Config;
use crate::config::load::CONFIG_ENV;

use clap::Parser;

use std::path::PathBuf;

/// Command-line arguments accepted by the `ff` binary.
#[derive(Parser, Debug)]
#[command(
    name = "ff",
    version,
    about = "Interactive fuzzy picker for files and directories. Prints the chosen path."
)]
pub struct Cli {
    #[arg(
        value_name = "PATH",
        help = "Directory to start in (default: current directory)"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "FILE",
        env = CONFIG_ENV,
        help = "Config file to use (default: $XDG_CONFIG_HOME/fuzzy-filer/config.toml)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Disable the preview pane regardless of the config")]
    pub no_preview: bool,

    #[arg(long, help = "Write the default config file and exit")]
    pub init: bool,

    #[arg(long, help = "Display all the configuration options")]
    pub config_help: bool,

    #[arg(long, help = "Display the default key bindings")]
    pub keybinds: bool,
}

/// What `main` should do after the arguments are handled.
pub enum CliAction {
    RunApp {
        start: PathBuf,
        config_path: PathBuf,
        no_preview: bool,
    },
    Exit,
}

pub fn handle_args() -> CliAction {
    handle_cli(Cli::parse())
}

/// Resolves parsed arguments. Informational flags are handled here and end the process.
pub fn handle_cli(cli: Cli) -> CliAction {
    let config_path = cli.config.unwrap_or_else(Config::default_path);

    if cli.config_help {
        print_config_help();
        return CliAction::Exit;
    }

    if cli.keybinds {
        print_keybinds();
        return CliAction::Exit;
    }

    if cli.init {
        if let Err(e) = Config::generate_default(&config_path) {
            eprintln!("Error: {}", e);
        }
        return CliAction::Exit;
    }

    CliAction::RunApp {
        start: cli.path.unwrap_or_else(|| PathBuf::from(".")),
        config_path,
        no_preview: cli.no_preview,
    }
}

const KEYBINDS_TEXT: &str = r##"
=========================
 Key Bindings
=========================
[keys]
  quit                      ["Ctrl+d", "Ctrl+c", "Esc"]
  up                        ["Ctrl+p", "Up"]
  down                      ["Ctrl+n", "Down"]
  confirm                   ["Enter"]       (drill into a directory, select a file)
  erase                     ["Backspace", "Ctrl+h"]

  Any other printable character is appended to the query.

  Syntax Reference:
    Single character:  "q"
    Control keys:      "Ctrl+x", "ctrl-x", "<c-x>"
    Named keys:        "Enter", "Backspace", "Esc", "Tab", "Space", "Up", "Down"

  Note:
    - Binding a printable character makes it unavailable for typing in the query.
    - Unknown specs are ignored.
"##;

fn print_keybinds() {
    println!("{}", KEYBINDS_TEXT);
}

fn print_config_help() {
    let help_text = r##"
fuzzy-filer - Full Configuration Guide (config.toml)

Location: --config <FILE>, $FUZZY_FILER_CONFIG, $XDG_CONFIG_HOME/fuzzy-filer/config.toml,
          ~/.config/fuzzy-filer/config.toml

=========================
 General Settings
=========================
[general]
  exclude_patterns           Skipped paths. "*.ext" matches a suffix, anything else a substring
                             of the path relative to the scan root. Matching directories are
                             not descended into. [default: node_modules, .git, target, ...]
  max_depth                  Deepest level below the scan root (default: 10, min: 1)
  max_files                  Entries collected per scan (default: 100000, min: 1)

=========================
 Display Settings
=========================
[display]
  preview                    Show the preview pane [default: true]
  preview_lines              Lines of preview content (default: 20, min: 3, max: 500)
  icons                      Show Nerd Font icons instead of plain markers [default: false]

=========================
 Logging
=========================
  FUZZY_FILER_LOG            Write diagnostics to this file
  FUZZY_FILER_LOG_LEVEL      Filter directives, e.g. "debug" (default: info)
"##;

    println!("{}{}", help_text, KEYBINDS_TEXT);
}
