use clap::{Parser, Subcommand};
use time::macros::format_description;
use tracing_subscriber::EnvFilter;

use charityevents_client::api::{ApiClient, DEFAULT_BASE_URL};
use charityevents_client::clock::SystemClock;
use charityevents_client::html;
use charityevents_client::pages;

/// Renders the charity events pages from the live API.
#[derive(Parser)]
#[command(name = "charityevents-client")]
struct Cli {
    /// API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    #[command(subcommand)]
    page: Page,
}

#[derive(Subcommand)]
enum Page {
    /// Home page: upcoming events
    Home,
    /// Search results for the given filters
    Search {
        /// Calendar day, e.g. 2026-10-03
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// Category id from the categories listing
        #[arg(long)]
        category: Option<i32>,
    },
    /// Detail page for one event
    Detail {
        #[arg(long)]
        id: i32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let api = ApiClient::new(cli.api_url);

    let view = match cli.page {
        Page::Home => pages::home::load(&api).await,
        Page::Search {
            date,
            location,
            category,
        } => {
            let date = match date {
                Some(s) => {
                    let fmt = format_description!("[year]-[month]-[day]");
                    Some(
                        time::Date::parse(&s, &fmt)
                            .map_err(|e| anyhow::anyhow!("invalid --date {:?}: {}", s, e))?,
                    )
                }
                None => None,
            };
            let form = pages::search::SearchForm {
                date,
                location: location.unwrap_or_default(),
                category_id: category,
            };
            pages::search::submit(&api, &form, &SystemClock).await
        }
        Page::Detail { id } => pages::detail::load_by_id(&api, id).await,
    };

    println!("{}", html::render_page(&view));
    Ok(())
}
