use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use routemap::Snapshot;

use super::load_router;

pub fn execute(config: &Path, path: &str, json: bool) -> Result<()> {
    let routes = load_router(config)?;
    let snapshot = routes.parse(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", describe(&snapshot));
    }

    Ok(())
}

/// Human-readable rendering of a match
pub fn describe(snapshot: &Snapshot) -> String {
    let mut out = format!(
        "{} {} {}\n",
        snapshot.rule.route().cyan(),
        "->".dimmed(),
        snapshot.rule.method().green().bold()
    );
    for (name, value) in &snapshot.args {
        out.push_str(&format!("  {} = {:?}\n", name.yellow(), value));
    }
    out
}
