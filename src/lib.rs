//! Slow Morocco relevance - cross-links journeys and stories
//!
//! This library provides the content relevance matcher used by the Slow Morocco site,
//! plus the read-only catalog and HTTP routes that serve it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{ContentMatcher, MatchTables, calculate_match_score, normalize_region, parse_destinations, parse_tags};
pub use self::models::{Journey, Story, RelatedJourney, RelatedStory, ScoringWeights};
