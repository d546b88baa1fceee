use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use routemap::{Context, Dispatch, MemoryLocation, RouteMap};

use super::load_router;

/// Visits each path in turn with a printing handler bound to every method
pub fn execute(config: &Path, paths: &[String]) -> Result<()> {
    let location = MemoryLocation::new("/");
    let mut routes = load_router(config)?.with_location(location);
    routes.set_context(dry_run_context(&routes));

    println!("{}", "Dispatching (dry run)...".green().bold());
    println!();

    let mut failures = 0;
    for path in paths {
        println!("{} {}", "→".cyan(), path);
        if let Err(e) = routes.go(path) {
            failures += 1;
            println!("  {} {}", "✗".red(), e);
        }
    }

    if failures > 0 {
        println!();
        println!(
            "{}",
            format!("{} of {} paths failed to dispatch", failures, paths.len()).yellow()
        );
    }

    Ok(())
}

/// Context with one printing handler per distinct method in the rule table
fn dry_run_context(routes: &RouteMap) -> Context {
    let methods: BTreeSet<&str> = routes.rules().iter().map(|rule| rule.method()).collect();

    methods.into_iter().fold(Context::new(), |context, method| {
        context.with_handler(method, |nav| {
            print!("{}", summarize(nav));
            Ok(())
        })
    })
}

fn summarize(nav: &Dispatch<'_>) -> String {
    let last = nav
        .last
        .map(|last| last.rule.route().to_string())
        .unwrap_or_else(|| "(none)".to_string());

    let mut out = format!(
        "  {} {} {}\n",
        "✓".green(),
        nav.current.rule.method().green().bold(),
        format!("(last: {})", last).dimmed()
    );
    for (name, value) in nav.args {
        out.push_str(&format!("    {} = {:?}\n", name.yellow(), value));
    }
    out
}
