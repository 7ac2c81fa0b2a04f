// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Journey, RelatedJourney, RelatedStory, ScoringWeights, Story};
pub use requests::{RelatedJourneysQuery, RelatedStoriesQuery};
pub use responses::{ErrorResponse, HealthResponse};
