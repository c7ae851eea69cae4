use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use rolectl::backend::{ApiClient, RemoteSession, RemoteUserStore, SessionProvider};
use rolectl::config;
use rolectl::models::{Role, RoleCheck};
use rolectl::roles;

#[derive(Parser)]
#[command(
    name = "rolectl",
    author,
    version,
    about = "Assign and inspect user roles on the hosted backend",
    long_about = r#"rolectl — assign a role/department to a user record, or read back the
current session's role, against the configured hosted backend.

Credentials are read from the environment (or a .env file):
  API_BASE_URL   base URL of the backend
  API_TOKEN      bearer token, if the backend requires one
  PROJECT_ID     project the user documents live under

Examples:
  1) Make a user a department administrator:
      rolectl set-role u-42 departmentadmin --department water
  2) Check who the current session is and what role they hold:
      rolectl whoami
"#,
    after_help = "Use `rolectl <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign a role (and optional department) to a user record
    #[command(
        about = "Assign a role to a user",
        long_about = "Merge a role (generaluser|departmentadmin|overalladmin), an optional department and an updated-at timestamp into the user's document. The document is created if it does not exist; fields not supplied are left untouched."
    )]
    SetRole {
        /// Identifier of the user record to patch
        uid: String,
        /// Role tag: generaluser, departmentadmin or overalladmin
        role: String,
        /// Department name (by convention paired with departmentadmin)
        #[arg(long)]
        department: Option<String>,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Show the current session's user and role
    #[command(
        about = "Show the current session's role",
        long_about = "Read the backend's current authenticated session and fetch that user's role document. Prints a notice when no session is active or when the user has no document yet; neither case is an error."
    )]
    Whoami {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration (env vars / API credentials)
    #[command(
        about = "Validate configuration and ensure backend connectivity.",
        long_about = "Validate the environment variables rolectl needs, then validate the configured credentials by attempting a session lookup against the remote backend."
    )]
    CheckConfig { env_file: Option<String> },
}

/// Table width for a terminal of the given column count, leaving a small
/// margin without underflowing on very narrow terminals.
fn table_width(term_cols: u16) -> u16 {
    term_cols.saturating_sub(4)
}

/// Split raw configuration values into hard errors and warnings.
///
/// An empty token is only a warning: the backend may not require one, in
/// which case requests are sent without an Authorization header.
fn config_problems(
    base_url: &str,
    api_token: &str,
    project_id: &str,
) -> (Vec<&'static str>, Vec<&'static str>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    if base_url.trim().is_empty() {
        errors.push("API_BASE_URL is not configured");
    }
    if api_token.trim().is_empty() {
        warnings.push("API_TOKEN is empty; requests will carry no Authorization header");
    }
    if project_id.trim().is_empty() {
        errors.push("PROJECT_ID is not configured");
    }
    (errors, warnings)
}

fn print_role_check(check: &RoleCheck) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(table_width(w));
    }

    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["uid", check.uid.as_str()]);
    table.add_row(vec![
        "role",
        check.role.map(|r| r.to_string()).as_deref().unwrap_or("—"),
    ]);
    table.add_row(vec!["department", check.department.as_deref().unwrap_or("—")]);

    println!("\n{table}\n");
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    match cli.command {
        Commands::SetRole {
            uid,
            role,
            department,
            env_file,
        } => {
            config::load_env_file(env_file.as_deref());

            let role: Role = match role.parse() {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Invalid role").red(), e);
                    process::exit(2);
                }
            };

            let api = match ApiClient::from_env() {
                Ok(api) => api,
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Configuration error").red(), e);
                    process::exit(1);
                }
            };
            let store = RemoteUserStore::new(api);

            match roles::setup_user_role(&store, &uid, role, department.as_deref()).await {
                Ok(()) => {
                    println!(
                        "{} '{}' {} {}",
                        yansi::Paint::new("Role").green(),
                        role,
                        yansi::Paint::new("assigned to user").green(),
                        yansi::Paint::new(&uid).cyan()
                    );
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Failed to assign role").red(), e);
                    process::exit(1);
                }
            }
        }
        Commands::Whoami { env_file } => {
            config::load_env_file(env_file.as_deref());

            let api = match ApiClient::from_env() {
                Ok(api) => api,
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Configuration error").red(), e);
                    process::exit(1);
                }
            };
            let session = RemoteSession::new(api.clone());
            let store = RemoteUserStore::new(api);

            match roles::verify_current_user_role(&session, &store).await {
                Some(check) => {
                    if check.role.is_none() {
                        println!(
                            "{} {}",
                            yansi::Paint::new("No role document for user").yellow(),
                            yansi::Paint::new(&check.uid).cyan()
                        );
                    }
                    print_role_check(&check);
                }
                None => {
                    println!("{}", yansi::Paint::new("No active session (or the backend could not be reached)").yellow());
                }
            }
        }
        Commands::CheckConfig { env_file } => {
            config::load_env_file(env_file.as_deref());

            // Basic check: ensure base URL and project exist; then ping the session endpoint
            let (errors, warnings) = config_problems(
                &std::env::var("API_BASE_URL").unwrap_or_default(),
                &std::env::var("API_TOKEN").unwrap_or_default(),
                &std::env::var("PROJECT_ID").unwrap_or_default(),
            );
            for warning in &warnings {
                println!("{}", yansi::Paint::new(warning).yellow());
            }
            for error in &errors {
                eprintln!("{}", yansi::Paint::new(error).red());
            }
            if !errors.is_empty() {
                process::exit(1);
            }

            let api = match ApiClient::from_env() {
                Ok(api) => api,
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Configuration appears invalid").red(), e);
                    process::exit(1);
                }
            };
            let session = RemoteSession::new(api);

            match session.current_user_id().await {
                Ok(Some(uid)) => {
                    println!(
                        "{} (session bound to {})",
                        yansi::Paint::new("Configuration looks valid").green(),
                        yansi::Paint::new(&uid).cyan()
                    );
                    process::exit(0);
                }
                Ok(None) => {
                    println!(
                        "{}",
                        yansi::Paint::new("Configuration looks valid (backend reachable, no active session)").green()
                    );
                    process::exit(0);
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Configuration appears invalid").red(), e);
                    process::exit(1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_width_leaves_margin() {
        assert_eq!(table_width(80), 76);
    }

    #[test]
    fn test_table_width_clamps_on_narrow_terminals() {
        assert_eq!(table_width(3), 0);
        assert_eq!(table_width(0), 0);
    }

    #[test]
    fn test_config_problems_all_set() {
        let (errors, warnings) = config_problems("https://api.example.com", "token", "demo");
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_config_problems_empty_token_is_only_a_warning() {
        let (errors, warnings) = config_problems("https://api.example.com", "", "demo");
        assert!(errors.is_empty());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_config_problems_missing_base_and_project_are_errors() {
        let (errors, _) = config_problems("", "token", "  ");
        assert_eq!(errors.len(), 2);
    }
}
