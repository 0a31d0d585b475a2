//! userdash - a cached user directory dashboard.
//!
//! Headless front end over the dashboard core: loads the user roster
//! (persisted cache first, network on miss or explicit refresh), drains the
//! controller's UI event channels, and prints the result.

mod api;
mod cache;
mod config;
mod controller;
mod event;
mod models;
mod store;
mod utils;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api::{DirectoryClient, DEFAULT_BASE_URL};
use cache::JsonRecordCache;
use config::Config;
use controller::{DashboardController, DetailController, Navigator, ShellController};
use models::UserRecord;
use store::UserStore;
use utils::EnglishStrings;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Navigator that records control transfers in the log. A real shell would
/// swap screens here; the headless front end just prints what it renders.
struct LogNavigator;

impl Navigator for LogNavigator {
    fn go_to_dashboard(&self) {
        info!("Navigating to dashboard");
    }

    fn go_to_detail(&self, user: &UserRecord) {
        info!(user = %user.name, "Navigating to detail view");
    }

    fn go_back(&self) {
        info!("Navigating back");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("userdash starting");

    let args: Vec<String> = std::env::args().collect();
    let force_refresh = args.iter().any(|a| a == "--refresh");
    let detail_name = args
        .iter()
        .position(|a| a == "--detail")
        .and_then(|i| args.get(i + 1))
        .cloned();

    let config = Config::load()?;
    let api_url = config
        .api_url
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let directory = Arc::new(DirectoryClient::new(api_url)?);
    let cache = Arc::new(JsonRecordCache::open(config.cache_dir()?)?);
    let store = Arc::new(UserStore::new(directory, cache));
    let navigator: Arc<dyn Navigator> = Arc::new(LogNavigator);
    let strings = Arc::new(EnglishStrings);

    let mut shell = ShellController::new(Arc::clone(&navigator));
    shell.attach();

    let mut dashboard =
        DashboardController::new(store, Arc::clone(&navigator), Arc::clone(&strings) as _);
    if force_refresh {
        dashboard.on_refresh().await;
    } else {
        dashboard.attach().await;
    }

    render_dashboard(&dashboard);

    if let Some(name) = detail_name {
        match dashboard.users().and_then(|users| {
            users
                .iter()
                .find(|u| u.name.eq_ignore_ascii_case(&name))
                .cloned()
        }) {
            Some(user) => {
                dashboard.on_click(&user);
                let detail =
                    DetailController::new(Arc::clone(&navigator), Arc::clone(&strings) as _);
                detail.set_user(user);
                render_detail(&detail);
            }
            None => eprintln!("No user named '{}' on the dashboard", name),
        }
    }

    info!("userdash shutting down");
    Ok(())
}

/// Drain the dashboard's event channels and print the roster.
fn render_dashboard(dashboard: &DashboardController) {
    let events = &dashboard.events;

    // The spinner signals cancel out in a one-shot run; consume them so a
    // hypothetical second render pass would not replay them.
    let _ = events.show_spinner.take();
    let _ = events.hide_spinner.take();
    let _ = events.dismiss_error.take();

    if let Some(line) = events.log_error.take() {
        warn!("{}", line);
    }
    if let Some(message) = events.show_error.take() {
        eprintln!("{} - run again with --refresh to retry", message);
    }
    if let Some(users) = events.update_users.take() {
        println!("{:<24} {:<20} {}", "NAME", "REGION", "AGE");
        for user in &users {
            println!(
                "{:<24} {:<20} {}",
                user.name,
                user.region,
                user.display_age.as_deref().unwrap_or("-")
            );
        }
        println!("{} users", users.len());
    }
}

fn render_detail(detail: &DetailController) {
    if let Some(user) = detail.user().borrow().clone() {
        println!();
        println!("{}", user.name);
        println!("  region: {}", user.region);
        println!("  age:    {}", user.display_age.as_deref().unwrap_or("-"));
        println!("  photo:  {}", user.photo_url);
    }
}
