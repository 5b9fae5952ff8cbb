use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use bellboard::api::ApiClient;
use bellboard::config::Config;
use bellboard::logging::init_tracing;
use bellboard::view::admin::{AdminFormReducer, AdminFormState, AdminIntent, FieldEdit, SubmitStatus};
use bellboard::view::fetch::FetchState;
use bellboard::view::mvi::Reducer;
use bellboard::view::pages::{AnnouncementsPage, SchedulePage};
use bellboard::view::render::{render_announcements, render_schedule, render_submit_status};
use bellboard::view::route::Route;
use bellboard::view::runtime::{mount_read_view, submit_announcement};

#[derive(Parser)]
#[command(name = "bellboard", about = "Terminal client for the school information site")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the bell schedule
    Schedule,
    /// List currently-active announcements
    Announcements,
    /// Create an announcement (token-gated)
    Admin(AdminArgs),
}

#[derive(Args)]
struct AdminArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    message: String,
    /// Start of the validity window, local time (e.g. 2026-09-01T08:00)
    #[arg(long)]
    start: String,
    /// End of the validity window, local time
    #[arg(long)]
    end: String,
    /// Optional notification time, local time
    #[arg(long)]
    notify_at: Option<String>,
    /// Priority, 1-100
    #[arg(long, default_value_t = 10)]
    priority: u8,
    /// Create the announcement as inactive
    #[arg(long)]
    inactive: bool,
    #[arg(long)]
    created_by: Option<String>,
    /// Admin token; falls back to the configured one
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load().context("failed to load configuration")?;
    let client = ApiClient::new(&config.api_url);

    match cli.command.unwrap_or(Command::Schedule) {
        Command::Schedule => run_read_route(&client, Route::Schedule).await,
        Command::Announcements => run_read_route(&client, Route::Announcements).await,
        Command::Admin(args) => run_admin(&client, &config, args).await,
    }
}

async fn run_read_route(client: &ApiClient, route: Route) -> anyhow::Result<ExitCode> {
    let (output, failed) = match route {
        Route::Schedule => {
            let state = mount_read_view::<SchedulePage, _, _>(|| client.bell_schedule()).await;
            (render_schedule(&state), matches!(state, FetchState::Failure(_)))
        }
        Route::Announcements => {
            let state =
                mount_read_view::<AnnouncementsPage, _, _>(|| client.active_announcements()).await;
            (
                render_announcements(&state),
                matches!(state, FetchState::Failure(_)),
            )
        }
        Route::Admin => unreachable!("admin route carries form arguments"),
    };

    print!("{}", ensure_newline(output));
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

async fn run_admin(
    client: &ApiClient,
    config: &Config,
    args: AdminArgs,
) -> anyhow::Result<ExitCode> {
    let token = args
        .token
        .or_else(|| config.admin_token.clone())
        .unwrap_or_default();

    // Feed the flags through the form machine the way the page would:
    // one field per edit.
    let edits = [
        FieldEdit::Token(token),
        FieldEdit::Title(args.title),
        FieldEdit::Message(args.message),
        FieldEdit::StartDate(args.start),
        FieldEdit::EndDate(args.end),
        FieldEdit::NotifyAt(args.notify_at.unwrap_or_default()),
        FieldEdit::Priority(args.priority),
        FieldEdit::Active(!args.inactive),
        FieldEdit::CreatedBy(args.created_by.unwrap_or_default()),
    ];
    let mut state = AdminFormState::default();
    for edit in edits {
        state = AdminFormReducer::reduce(state, AdminIntent::Edit(edit));
    }

    let state = submit_announcement(client, state)
        .await
        .context("announcement draft rejected")?;

    let failed = matches!(state.status, Some(SubmitStatus::Failed(_)));
    if let Some(line) = render_submit_status(&state.status) {
        println!("{line}");
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn ensure_newline(mut s: String) -> String {
    if !s.is_empty() && !s.ends_with('\n') {
        s.push('\n');
    }
    s
}
