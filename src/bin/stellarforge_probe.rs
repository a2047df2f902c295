//! stellarforge-probe — connectivity check against a StellarForge API
//!
//! Usage:
//!   stellarforge-probe health [--config <file>]     Exit 0 iff /health answers 2xx
//!   stellarforge-probe list [--config <file>]       Print the project list
//!   stellarforge-probe stars <id> [--config <file>] Print systems of one project

use std::path::PathBuf;
use std::process::ExitCode;

use stellarforge_client::bootstrap::{init_tracing, AppServices};
use stellarforge_client::ClientConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    match args[1].as_str() {
        "version" | "--version" | "-V" => {
            println!("stellarforge-probe {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    let command = args[1].as_str();
    if !matches!(command, "health" | "list" | "stars") {
        eprintln!("Unknown command: {command}");
        eprintln!();
        print_usage();
        return ExitCode::FAILURE;
    }

    let options = match ProbeOptions::parse(&args[2..]) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let project_id = match (command, options.positional.first()) {
        ("stars", Some(id)) => Some(id.clone()),
        ("stars", None) => {
            eprintln!("Usage: stellarforge-probe stars <project-id>");
            return ExitCode::FAILURE;
        }
        _ => None,
    };

    init_tracing();

    let services = match load_services(&options) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match project_id {
        Some(id) => cmd_stars(&services, &id).await,
        None if command == "health" => cmd_health(&services).await,
        None => cmd_list(&services).await,
    }
}

/// Options following the command name.
#[derive(Debug, Default, PartialEq)]
struct ProbeOptions {
    config: Option<PathBuf>,
    positional: Vec<String>,
}

impl ProbeOptions {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--config" => match iter.next() {
                    Some(path) => options.config = Some(PathBuf::from(path)),
                    None => return Err("--config requires a file path".to_string()),
                },
                flag if flag.starts_with("--") => return Err(format!("Unknown option: {flag}")),
                value => options.positional.push(value.to_string()),
            }
        }
        Ok(options)
    }
}

fn print_usage() {
    println!(
        r#"stellarforge-probe — StellarForge API connectivity check

USAGE:
    stellarforge-probe <COMMAND> [OPTIONS]

COMMANDS:
    health                      Check the /health endpoint
    list                        List generated projects
    stars <project-id>          Show star systems of a project
    version                     Show version information
    help                        Show this help message

OPTIONS:
    --config <file>             YAML file with apiBaseUrl / timeoutSecs / userAgent

ENVIRONMENT:
    STELLARFORGE_API_BASE_URL   Overrides apiBaseUrl
    STELLARFORGE_TIMEOUT_SECS   Overrides timeoutSecs
    RUST_LOG                    Log filter (default: info)"#
    );
}

fn load_services(options: &ProbeOptions) -> stellarforge_client::Result<AppServices> {
    let config = ClientConfig::load(options.config.as_deref())?;
    AppServices::bootstrap(config)
}

async fn cmd_health(services: &AppServices) -> ExitCode {
    let url = &services.config().api_base_url;
    if services.api().check_health().await {
        println!("healthy: {url}");
        ExitCode::SUCCESS
    } else {
        println!("unreachable or unhealthy: {url}");
        ExitCode::FAILURE
    }
}

async fn cmd_list(services: &AppServices) -> ExitCode {
    let Some(list) = services.api().get_projects().await else {
        eprintln!("failed to list projects (see log for the cause)");
        return ExitCode::FAILURE;
    };

    if list.is_empty() {
        println!("no projects");
        return ExitCode::SUCCESS;
    }

    println!("{:<38} {:<24} {:<8} {:>8} {:>8}  CREATED", "ID", "NAME", "TYPE", "SYSTEMS", "STARS");
    for p in &list.projects {
        println!(
            "{:<38} {:<24} {:<8} {:>8} {:>8}  {}",
            p.id, p.name, p.distribution_type, p.num_star_systems, p.num_stars_total, p.created_at
        );
    }
    ExitCode::SUCCESS
}

async fn cmd_stars(services: &AppServices, project_id: &str) -> ExitCode {
    let Some(stars) = services.api().get_project_stars(project_id).await else {
        eprintln!("failed to load stars for {project_id} (see log for the cause)");
        return ExitCode::FAILURE;
    };

    println!(
        "{} ({}): {} systems, {} stars",
        stars.project_name,
        stars.project_id,
        stars.systems.len(),
        stars.star_count()
    );
    for system in &stars.systems {
        let classes: Vec<&str> = system.stars.iter().map(|s| s.spectral_class.as_str()).collect();
        println!(
            "  {:<20} {:<8} ({:>9.2}, {:>9.2}, {:>9.2})  {}",
            system.system_name,
            system.system_type,
            system.position.x,
            system.position.y,
            system.position.z,
            classes.join(" ")
        );
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_id_may_follow_config_option() {
        let options = ProbeOptions::parse(&args(&["--config", "f.yaml", "p1"])).unwrap();
        assert_eq!(options.config, Some(PathBuf::from("f.yaml")));
        assert_eq!(options.positional, vec!["p1".to_string()]);

        let options = ProbeOptions::parse(&args(&["p1", "--config", "f.yaml"])).unwrap();
        assert_eq!(options.config, Some(PathBuf::from("f.yaml")));
        assert_eq!(options.positional, vec!["p1".to_string()]);
    }

    #[test]
    fn test_no_options() {
        assert_eq!(ProbeOptions::parse(&[]).unwrap(), ProbeOptions::default());
    }

    #[test]
    fn test_bad_options_are_rejected() {
        assert!(ProbeOptions::parse(&args(&["--config"])).is_err());
        assert!(ProbeOptions::parse(&args(&["--verbose"])).is_err());
    }
}
