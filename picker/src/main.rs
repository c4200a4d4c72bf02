//! emojipicker command line front end.
//!
//! Usage:
//!   emojipicker                        browse interactively
//!   emojipicker search cat face        recommend emoji by name
//!   emojipicker check 😀 🫠            check glyphs against system fonts
//!   emojipicker serve                  answer glyph channel calls on stdin/stdout
//!   emojipicker recents --clear        show or clear recent emoji

mod browse;

use anyhow::Context;
use clap::{Parser, Subcommand};
use emojipicker_core::{
    filter_available, glyph_available, serve_lines, Catalog, Category, Emoji, GlyphOracle,
    PickerConfig, PickerRuntime, Preferences, RecentStore,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "emojipicker")]
#[command(about = "Pick emoji by category, with recents and font-aware filtering")]
struct Cli {
    /// Picker configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Preferences database holding recent emoji
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Show every glyph without consulting system fonts
    #[arg(long, global = true)]
    no_font_check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse categories and pick emoji (default)
    Browse {
        /// Category to open on
        #[arg(long)]
        category: Option<Category>,
    },
    /// Recommend emoji whose names match keywords
    Search {
        #[arg(required = true)]
        keywords: Vec<String>,

        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Report whether glyphs render with the installed fonts
    Check {
        glyphs: Vec<String>,

        /// Summarise a whole category instead
        #[arg(long, conflicts_with = "glyphs")]
        category: Option<Category>,
    },
    /// Answer glyph availability calls, one JSON message per line
    Serve,
    /// Show recent emoji
    Recents {
        /// Forget all recent emoji
        #[arg(long)]
        clear: bool,

        /// Print persisted records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML
    Config {
        /// Write it to a file instead
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command.unwrap_or(Command::Browse { category: None }) {
        Command::Browse { category } => {
            let mut config = config;
            if let Some(category) = category {
                config.initial_category = category;
            }
            let store = open_store(cli.db.as_ref())?;
            let oracle = make_oracle(&config, cli.no_font_check);
            let mut runtime = PickerRuntime::new(
                Catalog::builtin(),
                oracle,
                store,
                config,
                |e: &Emoji| println!("selected {}  {}", e.glyph, e.name),
            );
            let stdin = io::stdin();
            browse::run(&mut runtime, stdin.lock(), io::stdout())?;
        }
        Command::Search { keywords, limit } => {
            let found = Catalog::builtin().recommend(&keywords, limit);
            if found.is_empty() {
                println!("  → (no emoji found)");
            }
            for (i, e) in found.iter().enumerate() {
                println!("  {}. {}  {}", i + 1, e.glyph, e.name);
            }
        }
        Command::Check { glyphs, category } => {
            let oracle = make_oracle(&config, cli.no_font_check);
            check(&*oracle, &glyphs, category)?;
        }
        Command::Serve => {
            let oracle = make_oracle(&config, cli.no_font_check);
            tracing::info!("serving glyph availability on stdin/stdout");
            let stdin = io::stdin();
            let answered = serve_lines(&*oracle, stdin.lock(), io::stdout())?;
            tracing::info!(answered, "input closed");
        }
        Command::Recents { clear, json } => {
            let store = open_store(cli.db.as_ref())?;
            if clear {
                store.clear();
                println!("recent emoji cleared");
                return Ok(());
            }
            let recents = store.load();
            if json {
                println!("{}", serde_json::to_string_pretty(&recents)?);
            } else if recents.is_empty() {
                println!("  → (no recent emoji)");
            } else {
                for (i, e) in recents.iter().enumerate() {
                    println!("  {}. {}  {}", i + 1, e.glyph, e.name);
                }
            }
        }
        Command::Config { write } => match write {
            Some(path) => {
                config
                    .save_toml(&path)
                    .with_context(|| format!("failed to write config to {}", path.display()))?;
                println!("wrote {}", path.display());
            }
            None => print!("{}", config.to_toml_string()?),
        },
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<PickerConfig> {
    match path {
        Some(path) => PickerConfig::load_toml(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(PickerConfig::default()),
    }
}

/// Open the recent store, falling back to memory if the database is unusable.
fn open_store(path: Option<&PathBuf>) -> anyhow::Result<RecentStore> {
    let path = path.cloned().unwrap_or_else(Preferences::default_path);
    match Preferences::new_redb(&path) {
        Ok(prefs) => Ok(RecentStore::new(prefs)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot open preferences, recent emoji will not persist");
            Ok(RecentStore::in_memory())
        }
    }
}

fn make_oracle(config: &PickerConfig, no_font_check: bool) -> Box<dyn GlyphOracle> {
    if no_font_check {
        emojipicker_fonts::passthrough_oracle()
    } else {
        emojipicker_fonts::platform_oracle(config)
    }
}

fn check(oracle: &dyn GlyphOracle, glyphs: &[String], category: Option<Category>) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();

    if let Some(category) = category {
        let candidates = catalog
            .get(category)
            .with_context(|| format!("{} has no built-in emoji", category))?;
        let available = filter_available(oracle, candidates);
        println!(
            "{}: {} of {} render",
            category,
            available.len(),
            candidates.len()
        );
        for (name, glyph) in candidates {
            if !available.contains_key(name) {
                println!("  ✗ {}  {}", glyph, name);
            }
        }
        return Ok(());
    }

    if glyphs.is_empty() {
        anyhow::bail!("nothing to check: pass glyphs or --category");
    }
    for glyph in glyphs {
        let mark = if glyph_available(oracle, glyph) { "✓" } else { "✗" };
        match catalog.find_glyph(glyph) {
            Some((category, name)) => println!("  {} {}  {} ({})", mark, glyph, name, category),
            None => println!("  {} {}", mark, glyph),
        }
    }
    Ok(())
}
