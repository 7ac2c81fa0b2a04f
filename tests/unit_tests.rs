// Unit tests for the Slow Morocco relevance matcher

use slowmo_match::core::{
    normalize::{normalize_region, parse_destinations, parse_tags, slugify},
    scoring::{calculate_match_score, SourceAttributes, TargetAttributes},
    tables::MatchTables,
};
use slowmo_match::models::ScoringWeights;

fn score(region: &str, tags: &str, category: &str, destinations: &str, focus: &str) -> u32 {
    let source = SourceAttributes { region, tags, category };
    let target = TargetAttributes { destinations, focus };
    let (score, _) = calculate_match_score(&source, &target, &MatchTables::morocco(), &ScoringWeights::default());
    score
}

#[test]
fn test_desert_story_against_desert_journey() {
    // region synonym +10, camel +3, nomad +3, category in keywords +3, category == focus +5
    assert_eq!(score("Sahara", "camel,nomad", "Desert", "merzouga,erg-chebbi", "desert"), 24);
}

#[test]
fn test_unknown_region_has_no_relation() {
    let tables = MatchTables::morocco();
    assert_eq!(normalize_region("Unknown Region", &tables.regions), vec!["unknown-region"]);
    assert_eq!(score("Unknown Region", "", "", "marrakech", "culture"), 0);
}

#[test]
fn test_zero_when_nothing_aligns() {
    // Blank region, tags that hit nothing, category unrelated to the focus
    assert_eq!(score("", "poetry,jazz", "Essay", "fes,meknes", "coast"), 0);
    // Prompt junk in the region column never matches
    assert_eq!(score("dunes at dusk --ar 3:2 --v 6", "", "", "merzouga", "desert"), 0);
}

#[test]
fn test_adding_matching_tags_never_lowers_score() {
    let candidates = ["souk", "tagine", "fes", "spice", "medina", "unrelated"];
    let mut tags: Vec<&str> = Vec::new();
    let mut previous = score("Fes", "", "Food", "fes,meknes", "food");

    for tag in candidates {
        tags.push(tag);
        let current = score("Fes", &tags.join(","), "Food", "fes,meknes", "food");
        assert!(current >= previous, "adding {} lowered score {} -> {}", tag, previous, current);
        previous = current;
    }
}

#[test]
fn test_focus_lookup_is_case_insensitive() {
    assert_eq!(score("", "Surf", "", "", "  Coast "), 3);
}

#[test]
fn test_unlisted_focus_only_rewards_category_equality() {
    assert_eq!(score("", "surf", "Birding", "", "birding"), 5);
}

#[test]
fn test_substring_region_fallback_uses_first_entry() {
    let tables = MatchTables::morocco();
    // "high atlas" is declared before "atlas", so it wins for this input
    let synonyms = normalize_region("The High Atlas Villages", &tables.regions);
    assert!(synonyms.contains(&"imlil".to_string()));
    assert!(!synonyms.contains(&"ifrane".to_string()));
}

#[test]
fn test_substring_region_fallback_finds_each_atlas_range() {
    let tables = MatchTables::morocco();

    let anti = normalize_region("Anti-Atlas Mountains", &tables.regions);
    assert_eq!(anti, vec!["tafraoute", "taroudant", "ait-mansour"]);
    assert_eq!(normalize_region("the anti atlas", &tables.regions), anti);

    let middle = normalize_region("Middle Atlas cedar forest", &tables.regions);
    assert_eq!(middle, vec!["azrou", "ifrane", "midelt"]);

    // Each range now links to its own journeys, not High Atlas treks
    assert_eq!(score("Anti-Atlas Mountains", "", "", "tafraoute", ""), 10);
    assert_eq!(score("Anti-Atlas Mountains", "", "", "imlil", ""), 0);
    assert_eq!(score("Middle Atlas cedar forest", "", "", "midelt", ""), 10);
}

#[test]
fn test_agafay_is_not_read_as_the_deep_desert() {
    let tables = MatchTables::morocco();
    let synonyms = normalize_region("Agafay Desert", &tables.regions);
    assert!(synonyms.contains(&"agafay".to_string()));
    assert!(!synonyms.contains(&"merzouga".to_string()));
}

#[test]
fn test_list_parsing() {
    assert_eq!(parse_tags("Tea, Souk ,,  ,Spice"), vec!["tea", "souk", "spice"]);
    assert_eq!(parse_destinations("Ait-Benhaddou ,Skoura"), vec!["ait-benhaddou", "skoura"]);
    assert_eq!(slugify("  Erg   Chigaga "), "erg-chigaga");
}
