use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query for journeys related to a story
///
/// The upper bound on `limit` comes from configuration and is checked by the handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RelatedJourneysQuery {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Query for stories related to a journey
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RelatedStoriesQuery {
    #[serde(default)]
    pub destinations: Option<String>,
    #[serde(default)]
    pub focus: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}
