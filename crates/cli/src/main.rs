use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use models::CatalogItem;
use tracing::{debug, info};
use ui::{ClientConfig, GridContent, MovieMatchApp, RenderOutcome};

/// movie-match - pick a movie, see what matches it
#[derive(Parser)]
#[command(name = "movie-match")]
#[command(about = "Browse the movie catalog and render similar-movie recommendations", long_about = None)]
struct Cli {
    /// Backend base URL (overrides MOVIE_MATCH_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Recommendation timeout in milliseconds (overrides MOVIE_MATCH_RECOMMEND_TIMEOUT_MS)
    #[arg(long)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries, optionally matched against a query
    Catalog {
        /// Text to match against the labels (case-insensitive)
        #[arg(long)]
        query: Option<String>,

        /// Maximum number of entries to print
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Print the selector option markup for each entry
        #[arg(long)]
        html: bool,
    },

    /// Show recommendations for a movie id
    Recommend {
        /// Catalog id of the selected movie
        #[arg(long)]
        movie_id: String,

        /// Print the results grid markup instead of a ranked list
        #[arg(long)]
        html: bool,
    },

    /// Search the catalog, select the best match and show its recommendations
    Pick {
        /// Movie title to search for
        #[arg(long)]
        query: String,

        /// Print the results grid markup instead of a ranked list
        #[arg(long)]
        html: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.api_base_url = base_url;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.recommend_timeout_ms = timeout_ms;
    }

    debug!("Client config: {:?}", config);
    let app = MovieMatchApp::ready(&config).context("Failed to initialize page")?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Catalog { query, limit, html } => {
            handle_catalog(&app, query.as_deref().unwrap_or(""), limit, html).await?
        }
        Commands::Recommend { movie_id, html } => handle_recommend(&app, &movie_id, html).await?,
        Commands::Pick { query, html } => handle_pick(&app, &query, html).await?,
    }

    Ok(())
}

/// Handle the 'catalog' command
async fn handle_catalog(app: &MovieMatchApp, query: &str, limit: usize, html: bool) -> Result<()> {
    let options = app.load_options(query).await;
    let matches = match_options(&options, query);
    info!("{} of {} catalog entries match {:?}", matches.len(), options.len(), query);

    if matches.is_empty() {
        println!("{}", "No movies found.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("{} of {} catalog entries:", matches.len().min(limit), matches.len())
            .bold()
            .blue()
    );
    for item in matches.iter().take(limit) {
        if html {
            println!("{}", ui::render_option(item));
        } else {
            println!("{}: {}", item.id.to_string().green(), item.text);
        }
    }
    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(app: &MovieMatchApp, movie_id: &str, html: bool) -> Result<()> {
    let outcome = app.on_change(Some(movie_id)).await;
    finish_render(app, outcome, html)
}

/// Handle the 'pick' command
async fn handle_pick(app: &MovieMatchApp, query: &str, html: bool) -> Result<()> {
    let options = app.load_options(query).await;
    let Some(choice) = match_options(&options, query).into_iter().next() else {
        bail!("No catalog entry matches '{}'", query);
    };

    if html {
        println!("{}", ui::render_item(choice));
    } else {
        println!("{} {}", "Selected".bold().blue(), choice.text);
    }
    info!("Picked catalog entry {} for query {:?}", choice.id, query);
    let outcome = app.select(choice).await;
    finish_render(app, outcome, html)
}

fn finish_render(app: &MovieMatchApp, outcome: RenderOutcome, html: bool) -> Result<()> {
    if outcome == RenderOutcome::Ignored {
        bail!("Movie id cannot be empty");
    }

    if html {
        println!("{}", app.page().grid_html());
    } else {
        print_grid(&app.page().grid());
    }

    if outcome == RenderOutcome::Failed {
        bail!("Recommendation request failed");
    }
    Ok(())
}

/// Widget-style local matching: exact label matches first, then substring
/// matches, each in catalog order. An empty query matches everything.
fn match_options<'a>(items: &'a [CatalogItem], query: &str) -> Vec<&'a CatalogItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.iter().collect();
    }

    let (mut exact, partial): (Vec<&CatalogItem>, Vec<&CatalogItem>) = items
        .iter()
        .filter(|item| item.text.to_lowercase().contains(&query))
        .partition(|item| {
            let label = item.text.to_lowercase();
            label == query || ui::clean_title(&label).title == query
        });
    exact.extend(partial);
    exact
}

/// Helper function to format and print the results grid
fn print_grid(grid: &GridContent) {
    match grid {
        GridContent::Cards(cards) => {
            print!("{}", "Recommended Movies:\n".bold().blue());
            for (i, card) in cards.iter().enumerate() {
                let year = if card.year.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", card.year)
                };
                println!(
                    "{}. {}{} - {}",
                    (i + 1).to_string().green(),
                    card.title.bold(),
                    year,
                    format!("{}% match", card.score_percent).cyan()
                );
                if !card.overview.is_empty() {
                    println!("   {}", card.overview);
                }
                if !card.url.is_empty() {
                    println!("   {}", card.url.dimmed());
                }
            }
        }
        GridContent::NoResults => println!("{}", ui::view::NO_RESULTS_MESSAGE.yellow()),
        GridContent::Error(message) => println!("{}", message.red()),
        GridContent::Loading => println!("{}", ui::view::LOADING_MESSAGE),
        GridContent::Blank => {}
    }
}
