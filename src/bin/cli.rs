//! Folio CLI
//!
//! Command-line interface for Folio:
//! - Inspect the project catalog
//! - Inspect and exercise the route table
//! - Smoke-check a deployed site
//! - Generate a config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use folio::catalog::{Catalog, Project};
use folio::config::generate_default_config;
use folio::router::{Params, RouteTable, View};

#[derive(Parser)]
#[command(name = "folio-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and check the portfolio site")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all projects
    Projects,

    /// Show a single project
    Project {
        /// Project id
        id: String,
    },

    /// Print the route table
    Routes,

    /// Resolve a path to the view it renders
    Resolve {
        /// Path, e.g. /projects/0
        path: String,
    },

    /// Request every page of a running site and check the status codes
    Check {
        /// Base URL of the site
        #[arg(long, default_value = "http://localhost:8080")]
        url: String,
        /// Request timeout in seconds
        #[arg(long, default_value = "10")]
        timeout: u64,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// A path to request and the status it must return
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTarget {
    pub path: String,
    pub expect: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = Catalog::global();
    let table = RouteTable::global();
    let json = cli.format == "json";

    match cli.command {
        Commands::Projects => {
            if json {
                println!("{}", serde_json::to_string_pretty(catalog.all())?);
            } else {
                println!("{:<4} {:<30} {}", "ID", "Title", "Tech");
                println!("{}", "-".repeat(70));
                for project in catalog.all() {
                    println!(
                        "{:<4} {:<30} {}",
                        project.id,
                        project.title,
                        project.tech.join(", ")
                    );
                }
            }
        }

        Commands::Project { id } => match catalog.lookup(&id) {
            Ok(project) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(project)?);
                } else {
                    print_project(project);
                }
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },

        Commands::Routes => {
            if json {
                let routes: Vec<_> = table
                    .entries()
                    .iter()
                    .map(|r| serde_json::json!({ "pattern": r.pattern, "view": r.view }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&routes)?);
            } else {
                println!("{:<20} {}", "Pattern", "View");
                println!("{}", "-".repeat(40));
                for route in table.entries() {
                    println!("{:<20} {}", route.pattern.as_str(), route.view);
                }
                println!("{:<20} {}", "(anything else)", View::NotFound);
            }
        }

        Commands::Resolve { path } => {
            let matched = table.resolve(&path);
            if json {
                println!("{}", serde_json::to_string_pretty(&matched)?);
            } else {
                println!("Path:    {}", matched.path);
                println!(
                    "Pattern: {}",
                    matched.pattern.as_deref().unwrap_or("(none)")
                );
                println!("View:    {}", matched.view);
                for (name, value) in matched.params.iter() {
                    println!("Prop:    {} = {:?}", name, value);
                }
                if let Some(id) = matched.param("id") {
                    match catalog.lookup(id) {
                        Ok(project) => println!("Project: {}", project.title),
                        Err(e) => println!("Project: not found ({})", e),
                    }
                }
            }
        }

        Commands::Check { url, timeout } => {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(timeout))
                .build()?;
            let base = url.trim_end_matches('/');
            let targets = check_plan(catalog, table);

            let mut failures = 0;
            for target in &targets {
                let full = format!("{}{}", base, target.path);
                match client.get(&full).send().await {
                    Ok(resp) => {
                        let status = resp.status().as_u16();
                        let ok = status == target.expect;
                        if !ok {
                            failures += 1;
                        }
                        println!(
                            "{} {:<24} {} (expected {})",
                            if ok { "ok  " } else { "FAIL" },
                            target.path,
                            status,
                            target.expect
                        );
                    }
                    Err(e) => {
                        failures += 1;
                        println!("FAIL {:<24} {}", target.path, e);
                    }
                }
            }

            println!();
            println!("{} checked, {} failed", targets.len(), failures);
            if failures > 0 {
                std::process::exit(1);
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, config)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", config),
            }
        }
    }

    Ok(())
}

fn print_project(project: &Project) {
    println!("{}", project.title);
    println!("{}", "=".repeat(project.title.len()));
    println!("{}", project.description);
    println!();
    println!("ID:     {}", project.id);
    println!("Path:   {}", project.detail_path());
    println!("Tech:   {}", project.tech.join(", "));
    println!("GitHub: {}", project.github);
    if let Some(demo) = project.demo {
        println!("Demo:   {}", demo);
    }
    if let Some(image) = project.image {
        println!("Image:  {}", image);
    }
}

/// Every page path with its expected status, plus paths that must 404
fn check_plan(catalog: Catalog, table: &RouteTable) -> Vec<CheckTarget> {
    let mut targets = vec![
        CheckTarget {
            path: "/health/ready".to_string(),
            expect: 200,
        },
        CheckTarget {
            path: "/api/v1/projects".to_string(),
            expect: 200,
        },
    ];

    for route in table.entries() {
        if route.pattern.is_static() {
            targets.push(CheckTarget {
                path: route.pattern.as_str().to_string(),
                expect: 200,
            });
        } else if route.view == View::ProjectDetails {
            for id in catalog.ids() {
                if let Ok(path) = route.pattern.href(&Params::new().with("id", id.to_string())) {
                    targets.push(CheckTarget { path, expect: 200 });
                }
            }
        }
    }

    let unused_id = catalog.ids().max().map_or(0, |id| id.saturating_add(1));
    targets.push(CheckTarget {
        path: format!("/projects/{}", unused_id),
        expect: 404,
    });
    targets.push(CheckTarget {
        path: "/this-page-does-not-exist".to_string(),
        expect: 404,
    });

    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_plan_covers_every_page() {
        let plan = check_plan(Catalog::global(), RouteTable::global());
        let paths: Vec<&str> = plan.iter().map(|t| t.path.as_str()).collect();

        for path in ["/", "/about", "/skills", "/projects", "/contact"] {
            assert!(paths.contains(&path), "missing {}", path);
        }
        assert!(paths.contains(&"/projects/0"));
        assert!(paths.contains(&"/projects/1"));
        assert!(plan.contains(&CheckTarget {
            path: "/projects/2".to_string(),
            expect: 404,
        }));
    }

    #[test]
    fn test_check_plan_on_empty_catalog() {
        let plan = check_plan(Catalog::new(&[]), RouteTable::global());
        assert!(plan.contains(&CheckTarget {
            path: "/projects/0".to_string(),
            expect: 404,
        }));
        assert!(!plan.iter().any(|t| t.path == "/projects/0" && t.expect == 200));
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["folio-cli", "resolve", "/projects/0"]).unwrap();
        assert!(matches!(cli.command, Commands::Resolve { ref path } if path == "/projects/0"));

        let cli = Cli::try_parse_from(["folio-cli", "--format", "json", "projects"]).unwrap();
        assert_eq!(cli.format, "json");
    }
}
