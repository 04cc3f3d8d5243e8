mod logging;
mod render;
mod ui;
mod views;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;

use folio_core::commands::{group_commands, CommandRegistry};
use folio_core::config::{Config, CONFIG_FILE_NAME};
use folio_core::content::PORTFOLIO;
use folio_core::palette::no_results_message;
use folio_core::persistence::{
    FilePreferenceStorage, MemoryPreferenceStorage, PreferenceStorage, PREFERENCES_FILE_NAME,
};
use folio_core::state::{NavigationTarget, PortfolioState, Timing, ViewId};
use folio_core::theme::{accent_by_name, ResolvedMode, ThemeMode, ThemeStore};
use folio_core::FolioError;
use folio_exec::{detect_system_scheme, LinkOpener, SimulatedLinkOpener, SystemLinkOpener};

use crate::logging::Verbosity;

/// folio - a terminal portfolio with a command palette
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to <config dir>/folio/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// View to open first (home, about, philosophy, experience, projects, skills)
    #[arg(long, value_name = "VIEW")]
    view: Option<ViewId>,

    /// Section inside the first view to scroll to, e.g. skills-education
    #[arg(long, value_name = "ID", requires = "view")]
    section: Option<String>,

    /// Log link opens instead of launching the system opener
    #[arg(long)]
    no_open: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Subcommands>,
}

#[derive(Subcommand, Debug)]
enum Subcommands {
    /// Print the palette's commands, grouped the way the palette shows them
    Commands {
        /// Filter like the palette does
        #[arg(long)]
        query: Option<String>,

        /// Emit the matching entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the stored theme, or change it
    Theme {
        /// light, dark or system
        #[arg(long)]
        mode: Option<ThemeMode>,

        /// One of the accent color names, e.g. Teal
        #[arg(long)]
        accent: Option<String>,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct ThemeReport<'a> {
    mode: ThemeMode,
    resolved: ResolvedMode,
    accent: &'a str,
    hex: &'a str,
    preferences: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let folio_dir = dirs::config_dir().map(|dir| dir.join("folio"));
    let config_path = args
        .config
        .clone()
        .or_else(|| folio_dir.as_ref().map(|dir| dir.join(CONFIG_FILE_NAME)));
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match logging::init(&config.logging, Verbosity::from_flags(args.verbose, args.quiet)) {
        Ok(Some(path)) => {
            tracing::info!(
                version = env!("CARGO_PKG_VERSION"),
                config = ?config_path,
                log = %path.display(),
                "folio starting"
            );
        }
        Ok(None) => {}
        Err(err) => eprintln!("warning: logging disabled: {err}"),
    }

    if folio_dir.is_none() {
        tracing::warn!("no user config directory; preferences will not be saved");
    }
    let (mut storage, preferences_path) = open_preferences(folio_dir.as_deref());
    let system = detect_system_scheme()
        .map(ui::resolved_mode)
        .unwrap_or(ResolvedMode::Dark);
    let theme = ThemeStore::load(&*storage, config.theme_defaults(), system);

    match args.command {
        Some(Subcommands::Commands { query, json }) => {
            print_commands(&theme, query.as_deref().unwrap_or(""), json)
        }
        Some(Subcommands::Theme { mode, accent, json }) => {
            theme_command(
                theme,
                &mut *storage,
                preferences_path.as_deref(),
                mode,
                accent.as_deref(),
                json,
            )
        }
        None => {
            let start = match (args.view, args.section) {
                (Some(view), Some(section)) => NavigationTarget::section(view, section.as_str()),
                (Some(view), None) => NavigationTarget::view(view),
                (None, _) => NavigationTarget::view(ViewId::Home),
            };
            let opener: Box<dyn LinkOpener> = if args.no_open {
                Box::new(SimulatedLinkOpener)
            } else {
                Box::new(SystemLinkOpener)
            };
            let host = ui::Host {
                storage,
                opener,
                transition_ms: config.navigation.transition_ms,
            };
            let state = PortfolioState::new(theme, Timing::from_config(&config));
            ui::run(state, host, start)
        }
    }
}

/// Preferences live next to the config; without a config directory they
/// are kept in memory for this run only.
fn open_preferences(folio_dir: Option<&Path>) -> (Box<dyn PreferenceStorage>, Option<PathBuf>) {
    match folio_dir {
        Some(dir) => {
            let path = dir.join(PREFERENCES_FILE_NAME);
            (Box::new(FilePreferenceStorage::open(&path)), Some(path))
        }
        None => (Box::new(MemoryPreferenceStorage::default()), None),
    }
}

fn print_commands(
    theme: &ThemeStore,
    query: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = CommandRegistry::build(theme, PORTFOLIO.quick_links);
    let entries = registry.filter(query);
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    if entries.is_empty() {
        println!("{}", no_results_message(query));
        return Ok(());
    }
    for group in group_commands(&entries) {
        println!("{}", group.heading);
        for entry in group.entries {
            match &entry.description {
                Some(description) => println!("  {:<24} {}", entry.label, description),
                None => println!("  {}", entry.label),
            }
        }
    }
    Ok(())
}

fn theme_command(
    mut theme: ThemeStore,
    storage: &mut dyn PreferenceStorage,
    preferences_path: Option<&Path>,
    mode: Option<ThemeMode>,
    accent: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Resolve the accent first so a bad name writes nothing.
    let accent = accent
        .map(|name| accent_by_name(name).ok_or_else(|| FolioError::UnknownAccent(name.to_string())))
        .transpose()?;
    if let Some(mode) = mode {
        storage.apply(&theme.set_mode(mode).persist)?;
    }
    if let Some(accent) = accent {
        storage.apply(&theme.set_accent(accent).persist)?;
    }

    let current = theme.accent();
    let report = ThemeReport {
        mode: theme.mode(),
        resolved: theme.resolved_mode(),
        accent: current.name,
        hex: current.hex,
        preferences: preferences_path
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "(in memory, not saved)".to_string()),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("mode:        {} ({})", report.mode.as_str(), report.resolved.as_str());
        println!("accent:      {} {}", report.accent, report.hex);
        println!("preferences: {}", report.preferences);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use folio_core::theme::ThemeMode;

    use super::*;

    #[test]
    fn missing_config_dir_falls_back_to_memory_defaults() {
        let (mut storage, path) = open_preferences(None);
        assert_eq!(path, None);

        let theme = ThemeStore::load(
            &*storage,
            Config::default().theme_defaults(),
            ResolvedMode::Dark,
        );
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(theme.accent().name, "Copper");

        // Writes succeed and are readable for the rest of the run.
        storage.set("theme-accent", "Teal").expect("memory write");
        assert_eq!(storage.get("theme-accent").as_deref(), Some("Teal"));
    }

    #[test]
    fn config_dir_keeps_preferences_on_disk() {
        let dir = std::env::temp_dir().join("folio-main-test");
        let (_storage, path) = open_preferences(Some(&dir));
        assert_eq!(path, Some(dir.join(PREFERENCES_FILE_NAME)));
    }
}
