use crate::core::normalize::{normalize_region, parse_destinations, parse_tags, slugify};
use crate::core::tables::MatchTables;
use crate::models::ScoringWeights;

/// Descriptive attributes of the story side of a comparison
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceAttributes<'a> {
    pub region: &'a str,
    pub tags: &'a str,
    pub category: &'a str,
}

/// Attributes of the journey side of a comparison
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetAttributes<'a> {
    pub destinations: &'a str,
    pub focus: &'a str,
}

/// Which signals produced points, so a score can be explained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSignals {
    pub regions: Vec<String>,
    pub destination_tags: Vec<String>,
    pub focus_tags: Vec<String>,
    pub category_in_focus: bool,
    pub category_is_focus: bool,
}

/// Calculate the relevance score of a story against a journey
///
/// Point table (defaults):
/// - region synonym found in the destinations: +10
/// - per tag overlapping a destination: +5
/// - per tag among the focus keywords: +3
/// - category among the focus keywords: +3
/// - category equal to the focus: +5
///
/// Tag bonuses are not capped. A score of 0 means no relation.
pub fn calculate_match_score(
    source: &SourceAttributes<'_>,
    target: &TargetAttributes<'_>,
    tables: &MatchTables,
    weights: &ScoringWeights,
) -> (u32, MatchSignals) {
    let mut score: u32 = 0;
    let mut signals = MatchSignals::default();

    let destinations = parse_destinations(target.destinations);
    let tags = parse_tags(source.tags);

    // Region alignment counts once, however many synonyms the route visits
    signals.regions = normalize_region(source.region, &tables.regions)
        .into_iter()
        .filter(|synonym| destinations.contains(synonym))
        .collect();
    if !signals.regions.is_empty() {
        score = score.saturating_add(weights.region);
    }

    for tag in &tags {
        if tag_hits_destination(tag, &destinations) {
            score = score.saturating_add(weights.tag_destination);
            signals.destination_tags.push(tag.clone());
        }
    }

    let focus = target.focus.trim().to_lowercase();
    let category = source.category.trim().to_lowercase();

    if let Some(keywords) = tables.focus_tags.get(&focus) {
        for tag in &tags {
            if keywords.contains(&tag.as_str()) {
                score = score.saturating_add(weights.focus_tag);
                signals.focus_tags.push(tag.clone());
            }
        }

        if keywords.contains(&category.as_str()) {
            score = score.saturating_add(weights.focus_category);
            signals.category_in_focus = true;
        }
    }

    if !category.is_empty() && category == focus {
        score = score.saturating_add(weights.category_focus);
        signals.category_is_focus = true;
    }

    (score, signals)
}

#[inline]
fn tag_hits_destination(tag: &str, destinations: &[String]) -> bool {
    let slug = slugify(tag);
    if slug.is_empty() {
        return false;
    }

    destinations
        .iter()
        .any(|dest| *dest == slug || dest.contains(&slug) || slug.contains(dest.as_str()))
}
