use std::fmt::Write as _;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use contract::{Activity, ActivityMap, ApiError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error(transparent)]
    Api(ApiError),
}

impl From<ApiError> for CliError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Rejected { status, .. } => Self::Rejected {
                status,
                message: error.rejection_text().unwrap_or(contract::GENERIC_ERROR_MESSAGE).to_owned(),
            },
            other => Self::Api(other),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "activity-cli", about = "Browse and manage extracurricular activity signups")]
struct Cli {
    #[arg(long, env = "ACTIVITY_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the host answers `/healthz`.
    Ping,
    /// Print every activity with its availability and participants.
    List,
    /// Register an email for an activity.
    Signup { activity: String, email: String },
    /// Remove an email from an activity.
    Unregister { activity: String, email: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error_line(&error));
            ExitCode::FAILURE
        }
    }
}

fn error_line(error: &CliError) -> String {
    format!("error: {error}")
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let base_url = cli.base_url.trim_end_matches('/');
    let client = reqwest::Client::new();

    match cli.command {
        Command::Ping => run_ping(&client, base_url).await,
        Command::List => {
            let (status, body) = send(client.get(format!("{base_url}{}", contract::ACTIVITIES_PATH))).await?;
            let activities = contract::parse_activities(status, &body)?;
            print!("{}", render_activities(&activities));
            Ok(())
        }
        Command::Signup { activity, email } => {
            let email = require_email(&email)?;
            let url = format!("{base_url}{}", contract::signup_path(&activity, &email));
            let (status, body) = send(client.post(url)).await?;
            println!("{}", contract::classify_response(status, &body)?);
            Ok(())
        }
        Command::Unregister { activity, email } => {
            let email = require_email(&email)?;
            let url = format!("{base_url}{}", contract::unregister_path(&activity, &email));
            let (status, body) = send(client.delete(url)).await?;
            println!("{}", contract::classify_response(status, &body)?);
            Ok(())
        }
    }
}

async fn run_ping(client: &reqwest::Client, base_url: &str) -> Result<(), CliError> {
    let response = client.get(format!("{base_url}/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Rejected { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

async fn send(request: reqwest::RequestBuilder) -> Result<(u16, String), CliError> {
    let response = request.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok((status, body))
}

fn require_email(raw: &str) -> Result<String, CliError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(CliError::EmptyEmail);
    }
    Ok(email.to_owned())
}

fn render_activities(activities: &ActivityMap) -> String {
    if activities.is_empty() {
        return "no activities\n".to_owned();
    }
    let mut out = String::new();
    for (name, activity) in activities.iter() {
        render_activity(&mut out, name, activity);
    }
    out
}

fn render_activity(out: &mut String, name: &str, activity: &Activity) {
    let _ = writeln!(out, "{name}");
    let _ = writeln!(out, "  {}", activity.description);
    let _ = writeln!(out, "  Schedule: {}", activity.schedule);
    let _ = writeln!(out, "  Availability: {}", activity.availability_label());
    if activity.participants.is_empty() {
        let _ = writeln!(out, "  No participants yet");
    }
    for email in &activity.participants {
        let _ = writeln!(out, "  - {email}");
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
