//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use super::config_file::ConfigFile;
use crate::core::{RootBackPolicy, Tab};
use crate::integrate::{exit_code, OutputFormat};

/// Application configuration from CLI args and config file
#[derive(Debug, Clone)]
pub struct Config {
    /// Print pets and exit (non-interactive)
    pub list_mode: bool,
    /// Only list favorites in list mode
    pub favorites_only: bool,
    /// Output format for list mode
    pub output_format: OutputFormat,
    /// JSON file with pets (replaces the sample data)
    pub data_file: Option<PathBuf>,
    /// Tab set, in tab bar order
    pub tabs: Vec<Tab>,
    /// Tab active on launch
    pub default_tab: Tab,
    /// Show the welcome page on launch
    pub show_start: bool,
    /// What back does at a tab's root
    pub root_back_policy: RootBackPolicy,
    /// Log file (logging is off in the UI without one)
    pub log_file: Option<PathBuf>,
    /// Show the back stack breadcrumb (from config file)
    pub show_breadcrumb: bool,
    /// Why the config file was ignored, if it was
    pub config_warning: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file(ConfigFile::default())
    }
}

/// What the command line asked for
#[derive(Debug)]
pub enum CliCommand {
    Run(Config),
    Help,
    Version,
}

impl Config {
    /// Settings from the config file alone
    pub fn from_file(config_file: ConfigFile) -> Self {
        Self {
            list_mode: false,
            favorites_only: false,
            output_format: OutputFormat::default(),
            data_file: config_file.general.data_file,
            tabs: config_file.navigation.tabs,
            default_tab: config_file.navigation.default_tab,
            show_start: config_file.general.show_start,
            root_back_policy: config_file.navigation.back_at_root,
            log_file: config_file.general.log_file,
            show_breadcrumb: config_file.ui.show_breadcrumb,
            config_warning: None,
        }
    }

    /// Parse process arguments; prints help/version and exits when asked
    pub fn from_args() -> anyhow::Result<Self> {
        // Load config file first (provides defaults)
        let (config_file, warning) = ConfigFile::load();

        match parse_args(env::args().skip(1), config_file)? {
            CliCommand::Run(mut config) => {
                config.config_warning = warning;
                Ok(config)
            }
            CliCommand::Help => {
                print_help();
                std::process::exit(exit_code::SUCCESS);
            }
            CliCommand::Version => {
                println!("pv {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(exit_code::SUCCESS);
            }
        }
    }
}

/// Parse arguments on top of config file settings
///
/// CLI arguments take precedence over the config file.
pub fn parse_args<I>(args: I, config_file: ConfigFile) -> anyhow::Result<CliCommand>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::from_file(config_file);
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--list" | "-l" => config.list_mode = true,
            "--favorites" => config.favorites_only = true,
            "--format" | "-f" => {
                if let Some(fmt) = args.next() {
                    config.output_format = OutputFormat::from_str(&fmt).map_err(|_| {
                        anyhow::anyhow!("Invalid format '{}'. Valid formats: lines, json", fmt)
                    })?;
                } else {
                    anyhow::bail!("--format requires a value (lines or json)");
                }
            }
            "--data" | "-d" => {
                let Some(file) = args.next() else {
                    anyhow::bail!("--data requires a file path");
                };
                let path = PathBuf::from(&file);
                if !path.is_file() {
                    anyhow::bail!("Data file does not exist: {}", file);
                }
                config.data_file = Some(path);
            }
            "--tab" | "-t" => {
                let Some(name) = args.next() else {
                    anyhow::bail!("--tab requires a tab name (home, favorites, about)");
                };
                config.default_tab = parse_tab(&name)?;
            }
            "--tabs" => {
                let Some(list) = args.next() else {
                    anyhow::bail!("--tabs requires a comma-separated list of tabs");
                };
                config.tabs = list
                    .split(',')
                    .map(|name| parse_tab(name.trim()))
                    .collect::<anyhow::Result<Vec<_>>>()?;
            }
            "--no-start" => config.show_start = false,
            "--exit-on-root-back" => config.root_back_policy = RootBackPolicy::Exit,
            "--log-file" => {
                let Some(file) = args.next() else {
                    anyhow::bail!("--log-file requires a file path");
                };
                config.log_file = Some(PathBuf::from(file));
            }
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--version" | "-V" => return Ok(CliCommand::Version),
            unknown if unknown.starts_with('-') => {
                anyhow::bail!(
                    "Unknown option: {}. Use --help for usage information.",
                    unknown
                );
            }
            other => anyhow::bail!("Unexpected argument: {}", other),
        }
    }

    Ok(CliCommand::Run(config))
}

fn parse_tab(name: &str) -> anyhow::Result<Tab> {
    Tab::from_str(name).map_err(|_| {
        anyhow::anyhow!(
            "Unknown tab '{}'. Valid tabs: home, favorites, about",
            name
        )
    })
}

fn print_help() {
    println!(
        r#"pv - PetView: browse and adopt pets in your terminal

USAGE:
    pv [OPTIONS]

OPTIONS:
    -l, --list             Print pets to stdout and exit
    --favorites            With --list: only pets with likes
    -f, --format FMT       Output format for --list: lines, json
    -d, --data FILE        Load pets from a JSON file instead of the sample data
    -t, --tab NAME         Tab active on launch: home, favorites, about
    --tabs LIST            Tabs to show, comma-separated (e.g. home,about)
    --no-start             Skip the welcome page
    --exit-on-root-back    Quit when going back from a tab's first screen
    --log-file FILE        Append logs to FILE (filter with PETVIEW_LOG)
    -h, --help             Show this help message
    -V, --version          Show version

CONFIG FILE:
    ~/.config/petview/config.toml

KEYBINDINGS:
    1-9         Select tab (again: back to the tab's first screen)
    Tab/S-Tab   Next / previous tab
    j/↓ k/↑     Move down / up
    g/G         Go to top / bottom
    Enter/l     Open pet details
    Esc/h/BS    Back
    f           Like pet
    x           Adopt pet (with confirmation)
    /           Search (Home)
    a           Add a pet (Home)
    ?           Show help
    q           Quit"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<CliCommand> {
        parse_args(
            args.iter().map(|s| s.to_string()),
            ConfigFile::default(),
        )
    }

    fn run_config(args: &[&str]) -> Config {
        match parse(args).unwrap() {
            CliCommand::Run(config) => config,
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let config = run_config(&[]);
        assert!(!config.list_mode);
        assert_eq!(config.tabs, Tab::ALL.to_vec());
        assert_eq!(config.default_tab, Tab::Home);
        assert!(config.show_start);
        assert_eq!(config.root_back_policy, RootBackPolicy::Ignore);
    }

    #[test]
    fn test_list_options() {
        let config = run_config(&["--list", "--favorites", "-f", "json"]);
        assert!(config.list_mode);
        assert!(config.favorites_only);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_navigation_options() {
        let config = run_config(&[
            "--tabs",
            "about, home",
            "--tab",
            "about",
            "--no-start",
            "--exit-on-root-back",
        ]);
        assert_eq!(config.tabs, vec![Tab::About, Tab::Home]);
        assert_eq!(config.default_tab, Tab::About);
        assert!(!config.show_start);
        assert_eq!(config.root_back_policy, RootBackPolicy::Exit);
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let file: ConfigFile = toml::from_str(
            r#"
[navigation]
default_tab = "favorites"
"#,
        )
        .unwrap();
        let config = match parse_args(vec!["-t".to_string(), "home".to_string()], file).unwrap()
        {
            CliCommand::Run(config) => config,
            other => panic!("expected run, got {:?}", other),
        };
        assert_eq!(config.default_tab, Tab::Home);
    }

    #[test]
    fn test_help_and_version() {
        assert!(matches!(parse(&["-h"]).unwrap(), CliCommand::Help));
        assert!(matches!(parse(&["--version"]).unwrap(), CliCommand::Version));
    }

    #[test]
    fn test_errors() {
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["stray"]).is_err());
        assert!(parse(&["--format", "xml"]).is_err());
        assert!(parse(&["--format"]).is_err());
        assert!(parse(&["--tab", "settings"]).is_err());
        assert!(parse(&["--tabs", "home,,about"]).is_err());
        assert!(parse(&["--data", "/nonexistent/pets.json"]).is_err());
    }
}
