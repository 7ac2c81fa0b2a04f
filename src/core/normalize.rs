use crate::core::tables::KeywordTable;

/// Fragments that only show up when an image-generation prompt was pasted
/// into the region column instead of a place name
const PROMPT_ARTIFACTS: &[&str] = &["--ar", "--v"];

/// Lowercase `value` and join its whitespace-separated words with hyphens
pub fn slugify(value: &str) -> String {
    value
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Resolve a free-text region into the destination slugs it stands for
///
/// Resolution order:
/// 1. Blank input, or input carrying prompt artifacts, resolves to nothing
/// 2. Exact key in the synonym table
/// 3. First key (in table order) that contains the input or is contained in it
/// 4. The region itself, slugified
pub fn normalize_region(region: &str, synonyms: &KeywordTable) -> Vec<String> {
    let region = region.trim().to_lowercase();

    if region.is_empty() || PROMPT_ARTIFACTS.iter().any(|marker| region.contains(marker)) {
        return Vec::new();
    }

    if let Some(values) = synonyms
        .get(&region)
        .or_else(|| synonyms.find_overlapping(&region))
    {
        return values.iter().map(|v| v.to_string()).collect();
    }

    vec![slugify(&region)]
}

/// Split a comma-separated tag list into trimmed, lowercased tags
pub fn parse_tags(tags: &str) -> Vec<String> {
    split_list(tags)
}

/// Split a comma-separated destination list into trimmed, lowercased names
pub fn parse_destinations(destinations: &str) -> Vec<String> {
    split_list(destinations)
}

#[inline]
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_lowercase())
        .filter(|part| !part.is_empty())
        .collect()
}
