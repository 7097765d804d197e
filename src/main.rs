use anyhow::Result;
use clap::{Parser, Subcommand};
use listing_scout::catalog::{load_catalog, source_for};
use listing_scout::config::Config;
use listing_scout::favorites::{FavoritesStore, FileStorage};
use listing_scout::search::{query, RawCriteria};
use listing_scout::view;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "listing-scout")]
#[command(about = "Browse, search and bookmark property listings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Listings JSON file or http(s) URL
    #[arg(long, global = true)]
    data: Option<String>,

    /// Directory for the favorites slot
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and filter listings
    List {
        /// Free-text search over name, address and description
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        min_price: Option<String>,

        #[arg(long)]
        max_price: Option<String>,

        /// Exact count, "4+" or "all"
        #[arg(short, long)]
        bedrooms: Option<String>,

        /// Required tag (repeat for several)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Only favorited listings
        #[arg(short, long)]
        favorites: bool,

        /// recent, price_asc or price_desc
        #[arg(long)]
        sort: Option<String>,

        /// Prefill search/city from a query string (search=...&city=...)
        #[arg(long)]
        query: Option<String>,
    },

    /// Featured listings
    Featured,

    /// Cities present in the catalog
    Cities,

    /// Show one listing
    Show {
        id: String,

        /// Print schema.org JSON-LD instead of the text view
        #[arg(long)]
        json_ld: bool,
    },

    /// Toggle a listing in the favorites
    Favorite { id: String },

    /// List favorited listings
    Favorites,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let directive = if cli.verbose {
        "listing_scout=debug"
    } else {
        "listing_scout=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .init();

    let mut config = Config::load()?;
    if let Some(data) = cli.data {
        config.data_source = data;
    }
    if let Some(storage) = cli.storage {
        config.storage_dir = storage;
    }

    let source = source_for(&config.data_source)?;
    let catalog = load_catalog(source.as_ref()).await;

    let mut favorites = FavoritesStore::open(FileStorage::new(&config.storage_dir));
    favorites.set_counter(|n| info!("Favorites: {}", n));

    match cli.command {
        Commands::List {
            search,
            city,
            min_price,
            max_price,
            bedrooms,
            tags,
            favorites: favorites_only,
            sort,
            query: query_string,
        } => {
            let mut raw = RawCriteria {
                search,
                city,
                min_price,
                max_price,
                bedrooms,
                tags,
                favorites_only,
                sort,
            };
            if let Some(qs) = query_string {
                raw.apply_query_string(&qs);
            }
            let criteria = raw.into_criteria();

            let results = query(&catalog, favorites.ids(), &criteria);
            info!("{} of {} properties match", results.len(), catalog.len());
            println!("{}", view::render_list(&results, |id| favorites.is_favorite(id)));
        }
        Commands::Featured => {
            let featured = catalog.featured(config.featured_limit);
            println!("{}", view::render_list(&featured, |id| favorites.is_favorite(id)));
        }
        Commands::Cities => {
            for city in catalog.cities() {
                println!("{}", city);
            }
        }
        Commands::Show { id, json_ld } => match catalog.find(&id) {
            Some(property) if json_ld => {
                println!("{}", serde_json::to_string_pretty(&view::json_ld(property))?);
            }
            Some(property) => {
                println!("{}", view::render_detail(property, favorites.is_favorite(&id)));
            }
            None => println!("{}", view::render_not_found(&id)),
        },
        Commands::Favorite { id } => {
            let now_favorite = favorites.toggle(&id);
            let state = if now_favorite { "added to" } else { "removed from" };
            println!("{} {} favorites ({} total)", id, state, favorites.size());
        }
        Commands::Favorites => {
            let listed: Vec<_> = catalog
                .iter()
                .filter(|p| favorites.is_favorite(&p.id))
                .collect();
            println!("{}", view::render_list(&listed, |_| true));
        }
    }

    Ok(())
}
