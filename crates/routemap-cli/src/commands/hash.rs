use std::path::Path;

use anyhow::Result;
use routemap::{Args, RouteMap, RuleDef};

use super::{load_router, parse_params};

pub fn execute(config: &Path, route: &str, params: &[String], link: bool) -> Result<()> {
    let routes = load_router(config)?;
    let params = parse_params(params)?;

    println!("{}", render_path(&routes, route, &params, link)?);

    Ok(())
}

/// Renders `route`, using the configured rule when one has that template
pub fn render_path(routes: &RouteMap, route: &str, params: &Args, link: bool) -> Result<String> {
    // method is irrelevant to rendering
    let def = routes
        .rules()
        .iter()
        .find(|rule| rule.route() == route)
        .map(RuleDef::from)
        .unwrap_or_else(|| RuleDef::new(route, "-"));

    let path = if link {
        routes.link(&def, params)?
    } else {
        routes.hash(&def, params)?
    };
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_config(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("routemap.toml");
        std::fs::write(
            &path,
            r##"
                [routing]
                prefix = "#"

                [[rules]]
                route = "/users/:id"
                method = "user"
            "##,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_render_configured_rule() {
        let dir = tempfile::tempdir().unwrap();
        let routes = load_router(&write_config(&dir)).unwrap();
        let params = parse_params(&["id=42".to_string()]).unwrap();

        assert_eq!(render_path(&routes, "/users/:id", &params, false).unwrap(), "/users/42");
        assert_eq!(render_path(&routes, "/users/:id", &params, true).unwrap(), "#/users/42");
    }

    #[test]
    fn test_render_unregistered_template() {
        let dir = tempfile::tempdir().unwrap();
        let routes = load_router(&write_config(&dir)).unwrap();
        let params = parse_params(&["q=a b".to_string()]).unwrap();

        assert_eq!(
            render_path(&routes, "/search/q:?", &params, true).unwrap(),
            "#/search/q=a%20b"
        );
        assert!(render_path(&routes, "/search/:q/:page", &params, false).is_err());
        assert!(render_path(&routes, "/bad/*/:x", &params, false).is_err());
    }

    #[test]
    fn test_execute_reads_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(&dir);

        assert!(execute(&config, "/users/:id", &["id=7".to_string()], true).is_ok());
        assert!(execute(&config, "/users/:id", &[], false).is_err());
    }
}
