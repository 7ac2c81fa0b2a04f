// Core algorithm exports
pub mod matcher;
pub mod normalize;
pub mod scoring;
pub mod tables;

pub use matcher::ContentMatcher;
pub use normalize::{normalize_region, parse_destinations, parse_tags, slugify};
pub use scoring::{calculate_match_score, MatchSignals, SourceAttributes, TargetAttributes};
pub use tables::{KeywordTable, MatchTables};
