use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod career_chat;
mod catalog;
mod config;
mod error;
mod export;
mod filter;
mod models;
mod report;
mod roles;
mod routes;
mod scholarship_chat;
mod transcript;
mod ui;
mod urgency;
mod view;

use career_chat::CareerChat;
use config::ChatSettings;
use export::CsvRow;
use filter::{
    CollegeFilters, CounsellorFilters, FilterCriteria, Listing, ScholarshipFilters, StreamFilters,
};
use models::Sender;
use roles::Role;
use routes::Route;
use scholarship_chat::{HttpTransport, ScholarshipChat, SendOutcome};

#[derive(Parser)]
#[command(name = "careerpath")]
#[command(about = "CareerPath student guidance portal in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Write the matching records to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Print the matching records as JSON instead of the page
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Page {
    Colleges,
    Counsellors,
    Scholarships,
    Streams,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the landing page with every role
    Home,
    /// Render the page a portal path points to
    Open { path: String },
    /// Show the login page for a role, or sign in with --email
    Login {
        role: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Show the registration form for a role, or submit it with --password
    Register {
        role: String,
        #[arg(long)]
        password: Option<String>,
        #[arg(long, default_value = "")]
        confirm_password: String,
    },
    /// Show the student dashboard
    Dashboard,
    /// Search colleges
    Colleges {
        #[arg(long = "type", value_parser = PossibleValuesParser::new(catalog::COLLEGE_TYPES.iter().copied()))]
        kind: Option<String>,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        program: String,
        #[arg(long, default_value = "")]
        search: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Browse counsellors
    Counsellors {
        #[arg(long, default_value = filter::ALL, value_parser = PossibleValuesParser::new(catalog::SPECIALIZATIONS.iter().copied()))]
        specialization: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = filter::ALL, value_parser = PossibleValuesParser::new(catalog::CONSULTATION_MODES.iter().copied()))]
        mode: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Search scholarships and show deadline urgency
    Scholarships {
        #[arg(long, default_value = filter::ALL, value_parser = PossibleValuesParser::new(catalog::SCHOLARSHIP_CATEGORIES.iter().copied()))]
        category: String,
        #[arg(long, default_value = "")]
        field: String,
        /// Evaluate deadlines as of this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Explore academic streams
    Streams {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = filter::ALL, value_parser = PossibleValuesParser::new(catalog::STREAM_CATEGORIES.iter().copied()))]
        category: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generate a markdown scholarship deadline report
    Report {
        #[arg(long, default_value = filter::ALL, value_parser = PossibleValuesParser::new(catalog::SCHOLARSHIP_CATEGORIES.iter().copied()))]
        category: String,
        #[arg(long, default_value = "")]
        field: String,
        #[arg(long)]
        today: Option<NaiveDate>,
        #[arg(long, default_value = "deadlines.md")]
        out: PathBuf,
    },
    /// Browse a listing interactively, editing filters one at a time
    Browse {
        #[arg(value_enum)]
        page: Page,
    },
    /// Chat with the scripted career advisor
    CareerChat {
        #[arg(long, default_value_t = config::DEFAULT_REPLY_DELAY_MS)]
        delay_ms: u64,
    },
    /// Ask the scholarship assistant (needs a Perplexity API key)
    ScholarshipChat {
        #[arg(long, env = "PERPLEXITY_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
        #[arg(long, env = "CAREERPATH_CHAT_ENDPOINT")]
        endpoint: Option<String>,
        #[arg(long, default_value_t = config::DEFAULT_REQUEST_TIMEOUT_SECS)]
        timeout_secs: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CAREERPATH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Home => print!("{}", view::render_home()),
        Commands::Open { path } => {
            let route = Route::resolve(&path);
            tracing::debug!(path = %route.path(), "opening page");
            print!("{}", view::render_route(&route, Utc::now()));
        }
        Commands::Login {
            role,
            email,
            password,
        } => match (role.parse::<Role>(), email) {
            (Ok(role), Some(email)) => {
                let next = role.login(&email, &password);
                println!("Signed in. Redirecting to {next}.");
            }
            (Ok(role), None) => print!("{}", view::render_login(role)),
            (Err(_), _) => print!("{}", view::render_invalid_role()),
        },
        Commands::Register {
            role,
            password,
            confirm_password,
        } => match (role.parse::<Role>(), password) {
            (Ok(role), Some(password)) => match role.register(&password, &confirm_password) {
                Ok(next) => println!("Account created. Redirecting to {next}."),
                Err(err) => println!("{err}"),
            },
            (Ok(role), None) => print!("{}", view::render_register(role)),
            (Err(_), _) => print!("{}", view::render_invalid_role()),
        },
        Commands::Dashboard => print!("{}", view::render_dashboard()),
        Commands::Colleges {
            kind,
            location,
            program,
            search,
            output,
        } => {
            let listing = build_listing::<CollegeFilters>(
                catalog::COLLEGES,
                &[
                    ("type", kind.as_deref().unwrap_or_default()),
                    ("location", location.as_str()),
                    ("program", program.as_str()),
                    ("searchTerm", search.as_str()),
                ],
            )?;
            emit(&listing, &output, view::render_colleges)?;
        }
        Commands::Counsellors {
            specialization,
            location,
            mode,
            output,
        } => {
            let listing = build_listing::<CounsellorFilters>(
                catalog::COUNSELLORS,
                &[
                    ("specialization", specialization.as_str()),
                    ("location", location.as_str()),
                    ("consultationMode", mode.as_str()),
                ],
            )?;
            emit(&listing, &output, view::render_counsellors)?;
        }
        Commands::Scholarships {
            category,
            field,
            today,
            output,
        } => {
            let listing = build_listing::<ScholarshipFilters>(
                catalog::SCHOLARSHIPS,
                &[("category", category.as_str()), ("field", field.as_str())],
            )?;
            let now = reference_time(today);
            emit(&listing, &output, |listing| {
                view::render_scholarships(listing, now)
            })?;
        }
        Commands::Streams {
            search,
            category,
            output,
        } => {
            let listing = build_listing::<StreamFilters>(
                catalog::STREAMS,
                &[("search", search.as_str()), ("category", category.as_str())],
            )?;
            emit(&listing, &output, view::render_streams)?;
        }
        Commands::Report {
            category,
            field,
            today,
            out,
        } => {
            let listing = build_listing::<ScholarshipFilters>(
                catalog::SCHOLARSHIPS,
                &[("category", category.as_str()), ("field", field.as_str())],
            )?;
            let label = describe_filters(listing.criteria());
            let report =
                report::build_report(label.as_deref(), reference_time(today), listing.results());
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Browse { page } => run_browse(page).await?,
        Commands::CareerChat { delay_ms } => {
            run_career_chat(Duration::from_millis(delay_ms)).await?;
        }
        Commands::ScholarshipChat {
            api_key,
            endpoint,
            timeout_secs,
        } => {
            let settings = ChatSettings::default()
                .with_endpoint(endpoint)
                .with_timeout_secs(timeout_secs);
            run_scholarship_chat(settings, api_key).await?;
        }
    }

    Ok(())
}

fn build_listing<C: FilterCriteria>(
    records: &'static [C::Record],
    filters: &[(&str, &str)],
) -> anyhow::Result<Listing<C>> {
    let mut listing = Listing::new(records);
    for &(key, value) in filters {
        listing.set_filter(key, value)?;
    }
    Ok(listing)
}

async fn run_browse(page: Page) -> anyhow::Result<()> {
    match page {
        Page::Colleges => browse::<CollegeFilters>(catalog::COLLEGES, view::render_colleges).await,
        Page::Counsellors => {
            browse::<CounsellorFilters>(catalog::COUNSELLORS, view::render_counsellors).await
        }
        Page::Scholarships => {
            browse::<ScholarshipFilters>(catalog::SCHOLARSHIPS, |listing| {
                view::render_scholarships(listing, Utc::now())
            })
            .await
        }
        Page::Streams => browse::<StreamFilters>(catalog::STREAMS, view::render_streams).await,
    }
}

enum BrowseInput<'a> {
    Skip,
    Quit,
    Clear,
    Set(&'a str, &'a str),
    Invalid,
}

/// `key=value` keeps the value as typed; only the key is trimmed.
fn parse_browse_input(line: &str) -> BrowseInput<'_> {
    match line.trim() {
        "" => BrowseInput::Skip,
        "/quit" => BrowseInput::Quit,
        "/clear" => BrowseInput::Clear,
        _ => match line.split_once('=') {
            Some((key, value)) => BrowseInput::Set(key.trim(), value),
            None => BrowseInput::Invalid,
        },
    }
}

async fn browse<C: FilterCriteria>(
    records: &'static [C::Record],
    render: impl Fn(&Listing<C>) -> String,
) -> anyhow::Result<()> {
    let mut listing: Listing<C> = Listing::new(records);
    print!("{}", render(&listing));
    println!(
        "Set a filter with key=value ({}), /clear to reset, /quit to leave.",
        C::KEYS.join(", ")
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_browse_input(&line) {
            BrowseInput::Skip => continue,
            BrowseInput::Quit => break,
            BrowseInput::Clear => listing.clear(),
            BrowseInput::Set(key, value) => {
                if let Err(err) = listing.set_filter(key, value) {
                    println!("{err}");
                    continue;
                }
            }
            BrowseInput::Invalid => {
                println!("Expected key=value, /clear or /quit.");
                continue;
            }
        }
        print!("{}", render(&listing));
    }

    Ok(())
}

fn emit<C>(
    listing: &Listing<C>,
    output: &OutputArgs,
    render: impl Fn(&Listing<C>) -> String,
) -> anyhow::Result<()>
where
    C: FilterCriteria,
    C::Record: CsvRow + Serialize,
{
    if let Some(path) = &output.csv {
        let written = export::write_csv(path, listing.results())?;
        println!("Wrote {written} records to {}.", path.display());
    }

    if output.json {
        println!("{}", serde_json::to_string_pretty(listing.results())?);
    } else {
        print!("{}", render(listing));
    }
    Ok(())
}

fn describe_filters<C: FilterCriteria>(criteria: &C) -> Option<String> {
    if criteria.is_default() {
        return None;
    }
    let parts: Vec<String> = C::KEYS
        .iter()
        .filter_map(|key| {
            criteria
                .get(key)
                .filter(|value| !filter::is_unconstrained(value))
                .map(|value| format!("{key}={value}"))
        })
        .collect();
    Some(parts.join(", "))
}

fn reference_time(today: Option<NaiveDate>) -> DateTime<Utc> {
    today
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .unwrap_or_else(Utc::now)
}

async fn run_career_chat(reply_delay: Duration) -> anyhow::Result<()> {
    let chat = CareerChat::new(reply_delay);
    print!("{}", view::render_career_chat_intro());
    println!("Type a question, /reset to start over, /quit to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" => break,
            "/reset" => {
                chat.reset();
                print!("{}", view::render_transcript(&chat.transcript()));
                continue;
            }
            _ => {}
        }

        if !chat.send(&line)? {
            continue;
        }
        println!("AI is typing...");
        chat.wait_for_reply().await;

        if let Some(reply) = chat.transcript().last() {
            print!("{}", view::render_message_text(reply.sender, &reply.text));
        }
    }

    Ok(())
}

async fn run_scholarship_chat(
    settings: ChatSettings,
    api_key: Option<String>,
) -> anyhow::Result<()> {
    let transport =
        HttpTransport::new(&settings).context("failed to build chat HTTP client")?;
    let mut chat = ScholarshipChat::new(transport, settings.model.clone());
    if let Some(key) = api_key {
        chat.set_api_key(key);
    }

    print!(
        "{}",
        view::render_message_text(Sender::Ai, scholarship_chat::GREETING)
    );
    if !chat.has_api_key() {
        print!("{}", view::render_api_key_prompt());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input == "/quit" {
            break;
        }
        if let Some(key) = key_command(input) {
            chat.set_api_key(key);
            println!("API key updated.");
            continue;
        }

        match chat.send(&line).await {
            SendOutcome::Ignored => {}
            SendOutcome::NeedsApiKey => print!("{}", view::render_api_key_prompt()),
            SendOutcome::Answered | SendOutcome::Failed => {
                if let Some(reply) = chat.transcript().last() {
                    print!("{}", view::render_message_text(reply.sender, &reply.text));
                }
            }
        }
    }

    Ok(())
}

/// `/key <value>` sets the API key; `/keyboard` and the like are questions.
fn key_command(input: &str) -> Option<&str> {
    let rest = input.strip_prefix("/key")?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_command_needs_a_word_boundary() {
        assert_eq!(key_command("/key pplx-123"), Some("pplx-123"));
        assert_eq!(key_command("/key"), Some(""));
        assert_eq!(key_command("/key\tpplx-123 "), Some("pplx-123"));
        assert_eq!(key_command("/keyboard scholarships?"), None);
        assert_eq!(key_command("what is /key"), None);
    }

    #[test]
    fn filter_values_reach_the_listing_untrimmed() {
        let padded =
            build_listing::<StreamFilters>(catalog::STREAMS, &[("search", "  medicine  ")])
                .unwrap();
        assert_eq!(padded.criteria().get("search"), Some("  medicine  "));
        assert!(padded.results().is_empty());

        let plain =
            build_listing::<StreamFilters>(catalog::STREAMS, &[("search", "medicine")]).unwrap();
        assert!(!plain.results().is_empty());
    }

    #[test]
    fn browse_input_keeps_raw_values() {
        assert!(matches!(
            parse_browse_input("search= doctor"),
            BrowseInput::Set("search", " doctor")
        ));
        assert!(matches!(parse_browse_input(" /clear "), BrowseInput::Clear));
        assert!(matches!(parse_browse_input("/quit"), BrowseInput::Quit));
        assert!(matches!(parse_browse_input("   "), BrowseInput::Skip));
        assert!(matches!(parse_browse_input("doctor"), BrowseInput::Invalid));
    }

    #[test]
    fn select_flags_only_take_listed_options() {
        let cli = Cli::try_parse_from(["careerpath", "counsellors", "--mode", "Chat"]).unwrap();
        assert!(matches!(cli.command, Commands::Counsellors { mode, .. } if mode == "Chat"));

        let cli = Cli::try_parse_from(["careerpath", "counsellors"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Counsellors { specialization, mode, .. }
                if specialization == "all" && mode == "all"
        ));

        assert!(Cli::try_parse_from(["careerpath", "streams", "--category", "Law"]).is_err());
        assert!(Cli::try_parse_from(["careerpath", "colleges", "--type", "Medical School"]).is_ok());
        assert!(Cli::try_parse_from(["careerpath", "colleges", "--type", "Castle"]).is_err());
    }
}
