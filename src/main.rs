use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use slowmo_match::config::{LoggingSettings, Settings};
use slowmo_match::core::{ContentMatcher, MatchTables};
use slowmo_match::models::ScoringWeights;
use slowmo_match::routes::{self, related::AppState};
use slowmo_match::services::{ContentCatalog, SupabaseClient, SupabaseTables};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            // Logging is not configured yet
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Slow Morocco relevance service...");

    let store = SupabaseClient::new(
        settings.supabase.url.clone(),
        settings.supabase.api_key.clone(),
        SupabaseTables {
            journeys: settings.supabase.journeys_table.clone(),
            stories: settings.supabase.stories_table.clone(),
        },
        Duration::from_secs(settings.supabase.timeout_secs),
    )
    .map_err(|e| {
        error!("Failed to create Supabase client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!("Supabase client initialized for {}", settings.supabase.url);

    let catalog = Arc::new(ContentCatalog::new(
        store,
        settings.catalog.max_entries,
        settings.catalog.ttl_secs,
    ));

    info!("Content catalog initialized (TTL: {}s)", settings.catalog.ttl_secs);

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let matcher = ContentMatcher::new(MatchTables::morocco(), weights);

    info!("Matcher initialized with weights: {:?}", weights);

    let app_state = AppState {
        catalog,
        matcher,
        limits: settings.matching.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
