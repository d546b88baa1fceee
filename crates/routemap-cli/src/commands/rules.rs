use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use routemap::RouteMap;

use super::load_router;

pub fn execute(config: &Path) -> Result<()> {
    let routes = load_router(config)?;
    print!("{}", list_rules(&routes));
    Ok(())
}

/// Rule table in match-priority order, one numbered line per rule
pub fn list_rules(routes: &RouteMap) -> String {
    if routes.rules().is_empty() {
        return format!("{}\n", "No rules configured".yellow());
    }

    let mut out = String::new();
    if !routes.prefix().is_empty() {
        out.push_str(&format!("Prefix: {}\n\n", routes.prefix().cyan()));
    }

    let width = routes
        .rules()
        .iter()
        .map(|rule| rule.route().len())
        .max()
        .unwrap_or(0);

    for (i, rule) in routes.rules().iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {}  {}\n",
            i + 1,
            format!("{:<width$}", rule.route()).cyan(),
            rule.method().green()
        ));
    }
    out
}
