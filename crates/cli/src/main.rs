use anyhow::{Context, Result};
use catalog::{Artifacts, CatalogIndex, SimilarityMatrix};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{Recommendation, Recommender};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tmdb_client::{TmdbClient, TmdbConfig};
use tracing::info;

/// Cinematch - similar-movie recommendations enriched from TMDB
#[derive(Parser)]
#[command(name = "cinematch")]
#[command(about = "Pick a movie you love, get five you might vibe with", long_about = None)]
struct Cli {
    /// Path to the precomputed artifacts directory (movies.json + similarity.json)
    #[arg(short, long, default_value = "artifacts")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend five movies similar to a title
    Recommend {
        /// Exact title as it appears in the catalog
        #[arg(long)]
        title: String,

        /// How many of the five result cards to print
        #[arg(long, default_value_t = engine::RESULT_COUNT, value_parser = parse_limit)]
        limit: usize,
    },

    /// List every title known to the catalog
    Titles,

    /// Search for titles by case-insensitive substring match
    Search {
        /// Title fragment to search for
        #[arg(long)]
        title: String,
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

    println!("Loading catalog artifacts from {}...", cli.data_dir.display());
    let start = Instant::now();
    let artifacts =
        Artifacts::load(&cli.data_dir).context("Failed to load catalog artifacts")?;
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        artifacts.catalog.len(),
        start.elapsed()
    );

    let catalog = Arc::new(artifacts.catalog);
    let similarity = Arc::new(artifacts.similarity);

    match cli.command {
        Commands::Recommend { title, limit } => {
            handle_recommend(catalog, similarity, title, limit).await?
        }
        Commands::Titles => handle_titles(&catalog),
        Commands::Search { title } => handle_search(&catalog, &title),
    }

    Ok(())
}

/// Validate the `--limit` flag: the engine always produces exactly five
/// results, so the flag only narrows what gets printed.
fn parse_limit(s: &str) -> std::result::Result<usize, String> {
    let limit: usize = s.parse().map_err(|e| format!("invalid limit: {}", e))?;
    if limit == 0 || limit > engine::RESULT_COUNT {
        return Err(format!(
            "limit must be between 1 and {}",
            engine::RESULT_COUNT
        ));
    }
    Ok(limit)
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<CatalogIndex>,
    similarity: Arc<SimilarityMatrix>,
    title: String,
    limit: usize,
) -> Result<()> {
    let config = TmdbConfig::from_env()
        .context("TMDB configuration missing; set TMDB_API_KEY in the environment or .env")?;
    let resolver = TmdbClient::new(config).context("Failed to build TMDB client")?;

    info!(%title, limit, "Requesting recommendations");
    let recommender = Recommender::new(catalog, similarity, resolver);
    let recommendations = recommender.recommend(&title).await?;

    print_recommendations(&title, &recommendations[..limit]);
    Ok(())
}

/// Handle the 'titles' command
fn handle_titles(catalog: &CatalogIndex) {
    println!("{}", "Known titles:".bold().blue());
    for title in catalog.titles() {
        println!("  {}", title);
    }
    println!("{} titles total", catalog.len());
}

/// Handle the 'search' command
fn handle_search(catalog: &CatalogIndex, fragment: &str) {
    let fragment_lower = fragment.to_lowercase();
    let matches: Vec<_> = catalog
        .records()
        .iter()
        .filter(|r| r.title.to_lowercase().contains(&fragment_lower))
        .collect();

    println!(
        "{}",
        format!("Search results for '{}':", fragment).bold().blue()
    );
    for record in &matches {
        println!("  {} (tmdb id {})", record.title, record.tmdb_id);
    }
    if matches.is_empty() {
        println!("  no matches");
    }
}

/// Helper function to format and print the five recommendation cards
fn print_recommendations(query: &str, recommendations: &[Recommendation]) {
    println!(
        "{}",
        format!("Top picks if you liked '{}':", query).bold().blue()
    );
    for (i, rec) in recommendations.iter().enumerate() {
        let rating = rec
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "N/A".to_string());
        println!("{}. {}", (i + 1).to_string().green(), rec.title.bold());
        println!("   Poster: {}", rec.poster_url);
        println!("   Genres: {} | Rating: {}", rec.genres, rating);
        println!("   {}", rec.overview);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_recommend(args: &[&str]) -> std::result::Result<usize, clap::Error> {
        let mut full = vec!["cinematch", "recommend", "--title", "Alpha"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).map(|cli| match cli.command {
            Commands::Recommend { limit, .. } => limit,
            _ => panic!("expected recommend subcommand"),
        })
    }

    #[test]
    fn test_limit_defaults_to_result_count() {
        assert_eq!(parse_recommend(&[]).unwrap(), engine::RESULT_COUNT);
    }

    #[test]
    fn test_limit_accepts_smaller_values() {
        assert_eq!(parse_recommend(&["--limit", "3"]).unwrap(), 3);
        assert_eq!(parse_recommend(&["--limit", "1"]).unwrap(), 1);
    }

    #[test]
    fn test_limit_rejects_out_of_range_values() {
        assert!(parse_recommend(&["--limit", "0"]).is_err());
        assert!(parse_recommend(&["--limit", "6"]).is_err());
        assert!(parse_recommend(&["--limit", "many"]).is_err());
    }
}
