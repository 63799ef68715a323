use clap::{Parser, Subcommand, ValueEnum};
use std::sync::Arc;

use quizzle_app::{
    app::AppBus,
    command_handlers::LoginCommandHandler,
    config::Config,
    cqrs::commands::Login,
    leaderboard::{LEADERBOARD_ERROR, LEADERBOARD_TITLE, LeaderboardTab, LeaderboardViewModel},
    submission::SubmissionController,
};
use quizzle_client::RemoteServices;
use quizzle_types::{
    category::Category,
    common::GameResult,
    errors::{ApplicationError, AuthError},
};

mod logs;
use logs::setup_logging;

#[derive(Parser)]
#[command(name = "quizzle", version, about = "Quiz client: scores and leaderboards")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and remember the session on this device.
    Login { username: String, password: String },
    /// Submit the score of a finished game.
    Submit {
        #[arg(short, long)]
        points: u32,
        #[arg(short, long)]
        category: u32,
    },
    /// Show the top scores of a category.
    Leaderboard {
        #[arg(short, long, default_value_t = 0)]
        category: u32,
        #[arg(short, long, value_enum, default_value_t = TabArg::All)]
        tab: TabArg,
    },
    /// List the known quiz categories.
    Categories,
}

#[derive(Clone, Copy, ValueEnum)]
enum TabArg {
    All,
    You,
}

impl From<TabArg> for LeaderboardTab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::All => LeaderboardTab::All,
            TabArg::You => LeaderboardTab::You,
        }
    }
}

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    let _log_guard = setup_logging();
    let cli = Cli::parse();
    let bus = setup_app()?;

    match cli.command {
        Commands::Login { username, password } => login(&bus, username, password).await,
        Commands::Submit { points, category } => {
            submit(bus, GameResult::new(points, category)).await
        }
        Commands::Leaderboard { category, tab } => leaderboard(bus, category, tab.into()).await,
        Commands::Categories => {
            for category in Category::ALL_CATEGORIES {
                println!("{:>3}  {}", category.id, category.name);
            }
        }
    }

    Ok(())
}

fn setup_app() -> Result<Arc<AppBus>, ApplicationError> {
    let config = Arc::new(Config::from_env());
    tracing::debug!(api_url = %config.api_url, storage = %config.storage_path.display(), "Configuration loaded");

    let services = Arc::new(RemoteServices::new(config.clone())?);
    Ok(Arc::new(AppBus::new(config, services)))
}

async fn login(bus: &AppBus, username: String, password: String) {
    match bus
        .execute(Login { username, password }, LoginCommandHandler::new())
        .await
    {
        Ok(()) => println!("Login successful"),
        Err(ApplicationError::Auth(AuthError::Rejected(message))) => {
            println!("Login failed: {message}")
        }
        Err(ApplicationError::Auth(AuthError::MissingCredentials)) => {
            println!("{}", AuthError::MissingCredentials)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error during login");
            println!("Something went wrong. Please try again.");
        }
    }
}

async fn submit(bus: Arc<AppBus>, result: GameResult) {
    let controller = SubmissionController::new(bus);
    controller.run(result).await;

    for line in controller.view().lines() {
        println!("{line}");
    }
}

async fn leaderboard(bus: Arc<AppBus>, category_id: u32, tab: LeaderboardTab) {
    let view_model = LeaderboardViewModel::new(bus);
    view_model.select_tab(tab);
    view_model.select_category(category_id).await;

    println!("{LEADERBOARD_TITLE}");
    println!("From the category: {}", Category::name_for(category_id));

    let tabs = [LeaderboardTab::All, LeaderboardTab::You]
        .iter()
        .map(|t| {
            if *t == view_model.tab() {
                format!("[{}]", t.title())
            } else {
                t.title().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!("{tabs}");

    if view_model.has_error() {
        println!("{LEADERBOARD_ERROR}");
        return;
    }

    for row in view_model.rows() {
        println!("{row}");
    }
}
