//! Export or import the persisted recent emoji list
//!
//! Usage:
//!   cargo run -p export_recents -- --db ~/.emojipicker/preferences.redb --format json
//!   cargo run -p export_recents -- --db prefs.redb --format csv --output recents.csv
//!   cargo run -p export_recents -- --db prefs.redb --import recents.json

use clap::Parser;
use emojipicker_core::{Emoji, Preferences, RecentList, RecentStore};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "export_recents")]
#[command(about = "Export recent emoji to JSON or CSV, or import them from JSON")]
struct Args {
    /// Path to the preferences database
    #[arg(short, long)]
    db: PathBuf,

    /// Output format: json or csv
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Replace the stored list with the emoji in this JSON file
    #[arg(long, conflicts_with = "output")]
    import: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let prefs = Preferences::new_redb(&args.db)
        .map_err(|e| anyhow::anyhow!("Failed to open preferences: {}", e))?;
    let store = RecentStore::new(prefs);

    if let Some(path) = args.import {
        let raw = std::fs::read_to_string(&path)?;
        let emojis: Vec<Emoji> = serde_json::from_str(&raw)?;
        let list = RecentList::from_emojis(emojis);
        store.persist(&list);
        eprintln!("imported {} recent emoji", list.len());
        return Ok(());
    }

    let recents = store.load();

    let output = match args.format.as_str() {
        "json" => export_json(&recents)?,
        "csv" => export_csv(&recents),
        _ => anyhow::bail!("Unsupported format: {}. Use 'json' or 'csv'", args.format),
    };

    if let Some(path) = args.output {
        std::fs::write(path, output)?;
    } else {
        print!("{}", output);
    }

    Ok(())
}

fn export_json(recents: &[Emoji]) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(recents)?;
    json.push('\n');
    Ok(json)
}

fn export_csv(recents: &[Emoji]) -> String {
    let mut output = String::from("rank,glyph,name\n");
    for (i, e) in recents.iter().enumerate() {
        let name = e.name.replace('"', "\"\"");
        output.push_str(&format!("{},{},\"{}\"\n", i + 1, e.glyph, name));
    }
    output
}
