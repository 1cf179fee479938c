use std::path::PathBuf;

use clap::{Parser, Subcommand};
use phodir_core::{AppConfig, CityTaxonomy, TaxonomyResolver};
use phodir_rank::{compare_rankings, DataLoader, Ranker};
use tracing_subscriber::EnvFilter;

mod report;

#[derive(Debug, Parser)]
#[command(name = "phodir")]
#[command(about = "Pho directory listing ranking and taxonomy tools")]
struct Cli {
    /// Data directory holding `cities/` and `divisions/` (overrides `PHODIR_DATA_DIR`).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the ranked listings of a city (or one of its divisions) as JSON.
    Rank {
        city: String,
        #[arg(long)]
        division: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Compare rating-only ordering with combined-score ordering for a city.
    Compare {
        city: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Show display metadata and administrative structure for a city slug.
    City { slug: String },
    /// Generate the URL slug for a display name.
    Slug { name: String },
    /// List cities with listing data.
    Cities,
    /// List the districts or wards with listing data for a city.
    Divisions { city: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = phodir_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let data_dir = cli.data_dir.unwrap_or_else(|| config.data_dir.clone());
    tracing::debug!(env = %config.env, data_dir = %data_dir.display(), "configuration loaded");

    let loader = DataLoader::new(data_dir);
    let ranker = Ranker::new(config.tie_break);

    match cli.command {
        Some(Commands::Rank {
            city,
            division,
            limit,
        }) => {
            let raw = match division.as_deref() {
                Some(division) => loader.load_division(&city, division),
                None => loader.load_city(&city),
            };
            let mut ranked = ranker.rank(raw);
            if let Some(limit) = limit {
                ranked.truncate(limit);
            }
            tracing::info!(city = %city, listings = ranked.len(), "ranked listings");
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        }
        Some(Commands::Compare { city, limit }) => {
            let ranked = ranker.rank(loader.load_city(&city));
            let rows = compare_rankings(&ranked, limit);
            print!("{}", report::render_comparison(&rows)?);
        }
        Some(Commands::City { slug }) => {
            let resolver = build_resolver(&config)?;
            let info = resolver.city_info(&slug);
            let output = serde_json::json!({
                "slug": &slug,
                "name": info.name,
                "description": info.description,
                "twoTier": resolver.is_two_tier(&slug),
                "structure": resolver.admin_structure(&slug),
                "divisionKind": resolver.division_kind(&slug),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Some(Commands::Slug { name }) => println!("{}", phodir_core::generate_slug(&name)),
        Some(Commands::Cities) => {
            for slug in loader.city_slugs() {
                println!("{slug}");
            }
        }
        Some(Commands::Divisions { city }) => {
            let resolver = build_resolver(&config)?;
            let kind = resolver.division_kind(&city);
            for slug in loader.division_slugs(&city) {
                println!("{slug}\t{kind}");
            }
        }
        None => println!("phodir: no command given (try --help)"),
    }

    Ok(())
}

/// Taxonomy from `PHODIR_TAXONOMY_PATH` when set, otherwise the built-in tables.
fn build_resolver(config: &AppConfig) -> anyhow::Result<TaxonomyResolver> {
    let taxonomy = match &config.taxonomy_path {
        Some(path) => phodir_core::load_taxonomy(path)?,
        None => CityTaxonomy::builtin(),
    };
    Ok(TaxonomyResolver::new(taxonomy))
}
