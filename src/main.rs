mod api;
mod models;
mod render;
mod store;
mod theme;
mod tui;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use std::io::{self, Write};

use api::{ApiClient, ApiError, DEFAULT_API};
use models::{ApplicationPatch, JobApplication, NewApplication, Status};
use theme::Theme;

#[derive(Parser)]
#[command(name = "apptrack")]
#[command(about = "Track job applications against a shared tracker server")]
struct Cli {
    /// Base URL of the tracker API
    #[arg(long, default_value = DEFAULT_API)]
    api: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account on the tracker server
    Register {
        username: String,
        password: String,
    },

    /// Log in and store the session for later commands
    Login {
        username: String,
        password: String,
    },

    /// Log out and forget the stored session
    Logout,

    /// List applications
    List {
        /// Case-insensitive search over company and role
        #[arg(short, long)]
        search: Option<String>,

        /// Only show applications with this status
        #[arg(short = 't', long)]
        status: Option<Status>,
    },

    /// Add an application
    Add {
        company: String,
        role: String,

        /// Date applied (YYYY-MM-DD)
        date: String,

        #[arg(short = 't', long, default_value = "applied")]
        status: Status,

        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Change the status or notes of an application
    Edit {
        /// Application ID (see 'apptrack list')
        id: i64,

        #[arg(short = 't', long)]
        status: Option<Status>,

        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Delete an application
    Delete {
        /// Application ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show summary statistics and the status breakdown
    Stats {
        /// Case-insensitive search over company and role
        #[arg(short, long)]
        search: Option<String>,

        /// Only count applications with this status
        #[arg(short = 't', long)]
        status: Option<Status>,
    },

    /// Browse applications in an interactive dashboard
    Browse,

    /// Show or set the dashboard color theme
    Theme {
        value: Option<Theme>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut client = ApiClient::connect(&cli.api)?;

    match cli.command {
        Commands::Register { username, password } => {
            client.register(&username, &password)?;
            println!("Account created. Log in with 'apptrack login {}'.", username);
        }

        Commands::Login { username, password } => {
            let confirmed = client.login(&username, &password)?;
            println!("Logged in as {}.", confirmed);
        }

        Commands::Logout => {
            client.logout()?;
            println!("Logged out.");
        }

        Commands::List { search, status } => {
            let records = fetch(&client)?;
            let visible = store::filter(&records, search.as_deref().unwrap_or(""), status);
            print!("{}", render::render_table(&visible));
        }

        Commands::Add {
            company,
            role,
            date,
            status,
            notes,
        } => {
            let new = NewApplication {
                company: company.trim().to_string(),
                role: role.trim().to_string(),
                date_applied: date.trim().to_string(),
                status,
                notes: notes.trim().to_string(),
            };
            // Nothing is sent until the fields pass
            new.validate()?;
            client.create(&new)?;
            println!("Application added.");
            reload_and_print(&client)?;
        }

        Commands::Edit { id, status, notes } => {
            let records = fetch(&client)?;
            let current = records
                .iter()
                .find(|r| r.id == id)
                .ok_or_else(|| anyhow!("Application #{} not found", id))?;
            let patch = ApplicationPatch {
                status: status.unwrap_or(current.status),
                notes: notes.unwrap_or_else(|| current.notes.clone().unwrap_or_default()),
            };
            client.update(id, &patch)?;
            println!("Application updated.");
            reload_and_print(&client)?;
        }

        Commands::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete application #{}?", id))? {
                println!("Aborted.");
                return Ok(());
            }
            client.delete(id)?;
            println!("Application deleted.");
            reload_and_print(&client)?;
        }

        Commands::Stats { search, status } => {
            let records = fetch(&client)?;
            // Stats and chart come from the same filtered list
            let visible = store::filter(&records, search.as_deref().unwrap_or(""), status);
            let counts = render::count_statuses(&visible);
            print!("{}", render::render_stats(&counts));
            println!();
            print!("{}", render::render_chart(&visible));
        }

        Commands::Browse => {
            let username = require_login(&client)?;
            tui::run(&client, username)?;
        }

        Commands::Theme { value } => match value {
            Some(theme) => {
                theme.save()?;
                println!("Theme set to {}.", theme.as_str());
            }
            None => println!("{}", Theme::load().as_str()),
        },
    }

    Ok(())
}

/// CLI analog of the login-gate redirect: aborts with the login entry
/// point when the session check says we are not logged in.
fn require_login(client: &ApiClient) -> Result<String> {
    let session = match client.me() {
        Ok(session) => session,
        Err(e) => return Err(anyhow::Error::new(e).context("Could not reach the tracker server")),
    };
    if !session.logged_in {
        bail!("Not logged in. Run 'apptrack login <username> <password>' first.");
    }
    Ok(session.username.unwrap_or_default())
}

fn fetch(client: &ApiClient) -> Result<Vec<JobApplication>> {
    client.list().map_err(|e| match e {
        ApiError::Unauthorized => {
            anyhow!("Not logged in, or session expired. Run 'apptrack login' first.")
        }
        other => anyhow::Error::new(other).context("Could not reach the tracker server"),
    })
}

/// Every mutation ends with a fresh fetch of the authoritative list,
/// rendered without any filter.
fn reload_and_print(client: &ApiClient) -> Result<()> {
    let records = fetch(client)?;
    print!("{}", render::render_table(&records));
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
