use crate::core::{
    scoring::{calculate_match_score, MatchSignals, SourceAttributes, TargetAttributes},
    tables::MatchTables,
};
use crate::models::{Journey, RelatedJourney, RelatedStory, ScoringWeights, Story};

/// Cross-links stories and journeys
///
/// Every lookup is the same pipeline:
/// 1. Score each candidate against the fixed side
/// 2. Drop candidates scoring 0
/// 3. Stable sort by score, descending (ties keep input order)
/// 4. Truncate to `limit`
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentMatcher {
    tables: MatchTables,
    weights: ScoringWeights,
}

impl ContentMatcher {
    pub fn new(tables: MatchTables, weights: ScoringWeights) -> Self {
        Self { tables, weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single story against a single journey
    pub fn score(&self, story: &SourceAttributes<'_>, journey: &TargetAttributes<'_>) -> (u32, MatchSignals) {
        calculate_match_score(story, journey, &self.tables, &self.weights)
    }

    /// Rank stories for a journey described by its destinations and focus
    ///
    /// Blank destinations short-circuit to an empty result.
    pub fn find_related_stories(
        &self,
        journey_destinations: &str,
        journey_focus: &str,
        stories: &[Story],
        limit: usize,
    ) -> Vec<RelatedStory> {
        if journey_destinations.trim().is_empty() {
            return Vec::new();
        }

        let journey = TargetAttributes {
            destinations: journey_destinations,
            focus: journey_focus,
        };

        let scored = stories.iter().filter_map(|story| {
            let source = SourceAttributes {
                region: &story.region,
                tags: &story.tags,
                category: &story.category,
            };
            let (score, signals) = self.score(&source, &journey);
            if score == 0 {
                return None;
            }

            tracing::debug!("Story {} scored {} ({:?})", story.slug, score, signals);

            Some(RelatedStory {
                slug: story.slug.clone(),
                title: story.title.clone(),
                category: non_empty(&story.category),
                hero_image: story.hero_image.clone(),
                excerpt: story.excerpt.clone(),
                score,
            })
        });

        rank(scored, |s| s.score, limit)
    }

    /// Rank journeys for a story described by its region, tags and category
    ///
    /// A story with neither region nor tags short-circuits to an empty result.
    pub fn find_related_journeys(
        &self,
        story_region: &str,
        story_tags: &str,
        story_category: &str,
        journeys: &[Journey],
        limit: usize,
    ) -> Vec<RelatedJourney> {
        if story_region.trim().is_empty() && story_tags.trim().is_empty() {
            return Vec::new();
        }

        let story = SourceAttributes {
            region: story_region,
            tags: story_tags,
            category: story_category,
        };

        let scored = journeys.iter().filter_map(|journey| {
            let target = TargetAttributes {
                destinations: &journey.destinations,
                focus: &journey.focus,
            };
            let (score, signals) = self.score(&story, &target);
            if score == 0 {
                return None;
            }

            tracing::debug!("Journey {} scored {} ({:?})", journey.slug, score, signals);

            Some(RelatedJourney {
                slug: journey.slug.clone(),
                title: journey.title.clone(),
                hero_image: journey.hero_image.clone(),
                duration: journey.duration.clone(),
                price: journey.price.clone(),
                score,
            })
        });

        rank(scored, |j| j.score, limit)
    }
}

fn rank<T>(scored: impl Iterator<Item = T>, score: impl Fn(&T) -> u32, limit: usize) -> Vec<T> {
    let mut ranked: Vec<T> = scored.collect();
    // sort_by is stable, so equal scores keep candidate order
    ranked.sort_by(|a, b| score(b).cmp(&score(a)));
    ranked.truncate(limit);
    ranked
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
