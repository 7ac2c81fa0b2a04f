use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::ContentMatcher;
use crate::models::{
    ErrorResponse, HealthResponse, RelatedJourney, RelatedJourneysQuery, RelatedStoriesQuery, RelatedStory,
};
use crate::services::ContentCatalog;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ContentCatalog>,
    pub matcher: ContentMatcher,
    pub limits: MatchingSettings,
}

/// Configure all relevance routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/related/journeys", web::get().to(related_journeys))
        .route("/related/stories", web::get().to(related_stories));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Journeys related to a story, as a bare JSON array
///
/// GET /api/v1/related/journeys?region=Sahara&tags=camel,nomad&category=Desert&limit=3
///
/// Fails soft: if the catalog cannot be loaded the response is an empty list.
async fn related_journeys(
    state: web::Data<AppState>,
    query: web::Query<RelatedJourneysQuery>,
) -> impl Responder {
    if let Err(response) = validate_limit(&*query, query.limit, state.limits.max_limit) {
        return response;
    }

    let region = query.region.as_deref().unwrap_or_default();
    let tags = query.tags.as_deref().unwrap_or_default();
    let category = query.category.as_deref().unwrap_or_default();
    let limit = query.limit.unwrap_or(state.limits.default_journeys_limit);

    if region.trim().is_empty() && tags.trim().is_empty() {
        return HttpResponse::Ok().json(Vec::<RelatedJourney>::new());
    }

    let journeys = match state.catalog.published_journeys().await {
        Ok(journeys) => journeys,
        Err(e) => {
            tracing::warn!("Failed to load journeys for relevance lookup, returning none: {}", e);
            return HttpResponse::Ok().json(Vec::<RelatedJourney>::new());
        }
    };

    let related = state
        .matcher
        .find_related_journeys(region, tags, category, &journeys, limit);

    tracing::info!(
        "Returning {} related journeys for region={:?} tags={:?} (from {} candidates)",
        related.len(),
        region,
        tags,
        journeys.len()
    );

    HttpResponse::Ok().json(related)
}

/// Stories related to a journey, as a bare JSON array
///
/// GET /api/v1/related/stories?destinations=merzouga,zagora&focus=desert&limit=4
///
/// Fails soft: if the catalog cannot be loaded the response is an empty list.
async fn related_stories(
    state: web::Data<AppState>,
    query: web::Query<RelatedStoriesQuery>,
) -> impl Responder {
    if let Err(response) = validate_limit(&*query, query.limit, state.limits.max_limit) {
        return response;
    }

    let destinations = query.destinations.as_deref().unwrap_or_default();
    let focus = query.focus.as_deref().unwrap_or_default();
    let limit = query.limit.unwrap_or(state.limits.default_stories_limit);

    if destinations.trim().is_empty() {
        return HttpResponse::Ok().json(Vec::<RelatedStory>::new());
    }

    let stories = match state.catalog.published_stories().await {
        Ok(stories) => stories,
        Err(e) => {
            tracing::warn!("Failed to load stories for relevance lookup, returning none: {}", e);
            return HttpResponse::Ok().json(Vec::<RelatedStory>::new());
        }
    };

    let related = state
        .matcher
        .find_related_stories(destinations, focus, &stories, limit);

    tracing::info!(
        "Returning {} related stories for destinations={:?} focus={:?} (from {} candidates)",
        related.len(),
        destinations,
        focus,
        stories.len()
    );

    HttpResponse::Ok().json(related)
}

/// Run field validation, then enforce the configured upper bound on `limit`
fn validate_limit<Q: Validate>(query: &Q, limit: Option<usize>, max_limit: usize) -> Result<(), HttpResponse> {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for relevance query: field_errors={:?}", errors);
        return Err(HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        }));
    }

    match limit {
        Some(limit) if limit > max_limit => Err(HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: format!("limit must be at most {}", max_limit),
            status_code: 400,
        })),
        _ => Ok(()),
    }
}
