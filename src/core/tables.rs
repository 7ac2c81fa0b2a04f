/// An ordered `key -> values` lookup table backed by static data.
///
/// Declaration order matters: the region fallback takes the first entry
/// whose key overlaps the input, so entries are always scanned front to back.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    entries: &'static [(&'static str, &'static [&'static str])],
}

impl KeywordTable {
    pub const fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// Exact lookup by (already lowercased) key
    pub fn get(&self, key: &str) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, values)| *values)
    }

    /// First entry, in declaration order, whose key contains `input`
    /// or is contained in it
    pub fn find_overlapping(&self, input: &str) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|(k, _)| input.contains(k) || k.contains(input))
            .map(|(_, values)| *values)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
        self.entries.iter().copied()
    }
}

/// Canonical region keys and the destination slugs that count as the same place
const REGION_SYNONYMS: &[(&str, &[&str])] = &[
    ("sahara", &["merzouga", "erg-chebbi", "mhamid", "erg-chigaga", "zagora"]),
    ("agafay", &["agafay", "marrakech", "marrakesh"]),
    ("desert", &["merzouga", "erg-chebbi", "mhamid", "erg-chigaga", "zagora"]),
    ("marrakech", &["marrakech", "marrakesh", "agafay", "ourika"]),
    ("high atlas", &["imlil", "toubkal", "ait-bouguemez", "telouet", "tizi-n-tichka"]),
    ("middle atlas", &["azrou", "ifrane", "midelt"]),
    ("anti-atlas", &["tafraoute", "taroudant", "ait-mansour"]),
    ("anti atlas", &["tafraoute", "taroudant", "ait-mansour"]),
    // Catch-all for the ranges; must stay after every "... atlas" key
    ("atlas", &["imlil", "toubkal", "ait-bouguemez", "telouet", "tizi-n-tichka", "azrou", "ifrane"]),
    ("fes", &["fes", "fez", "meknes", "volubilis", "moulay-idriss"]),
    ("fez", &["fes", "fez", "meknes", "volubilis", "moulay-idriss"]),
    ("meknes", &["meknes", "volubilis", "moulay-idriss"]),
    ("rif", &["chefchaouen", "akchour", "tetouan"]),
    ("chefchaouen", &["chefchaouen", "akchour"]),
    ("north", &["tangier", "tetouan", "chefchaouen", "asilah"]),
    ("tangier", &["tangier", "asilah", "cap-spartel"]),
    ("essaouira", &["essaouira", "sidi-kaouki"]),
    ("atlantic", &["essaouira", "oualidia", "el-jadida", "asilah", "sidi-ifni", "taghazout"]),
    ("coast", &["essaouira", "oualidia", "el-jadida", "asilah", "sidi-ifni", "taghazout"]),
    ("agadir", &["agadir", "taghazout", "imsouane"]),
    ("souss", &["taroudant", "agadir", "tafraoute"]),
    ("dades", &["dades", "boumalne-dades", "msemrir"]),
    ("todra", &["todra", "tinghir"]),
    ("draa", &["draa", "agdz", "zagora", "tamegroute"]),
    ("ouarzazate", &["ouarzazate", "ait-benhaddou", "skoura"]),
    ("kasbah", &["ait-benhaddou", "skoura", "telouet", "ouarzazate"]),
    ("oasis", &["skoura", "fint", "tinghir", "agdz", "figuig"]),
    ("rabat", &["rabat", "sale"]),
    ("casablanca", &["casablanca"]),
    ("oriental", &["figuig", "oujda", "saidia"]),
];

/// Journey focus labels and the story tags that speak to them
const FOCUS_TAGS: &[(&str, &[&str])] = &[
    ("desert", &["sahara", "desert", "dunes", "erg", "nomad", "camel"]),
    ("culture", &["culture", "history", "heritage", "music", "festival", "religion", "medina", "tradition"]),
    ("food", &["food", "cuisine", "cooking", "market", "souk", "tagine", "tea", "spice"]),
    ("mountains", &["atlas", "mountains", "trekking", "hiking", "berber", "amazigh", "village"]),
    ("coast", &["coast", "ocean", "beach", "surf", "fishing", "atlantic"]),
    ("craft", &["craft", "crafts", "artisan", "weaving", "pottery", "carpet", "zellige", "leather"]),
    ("architecture", &["architecture", "riad", "kasbah", "ksar", "mosque", "medersa", "design"]),
    ("nature", &["nature", "oasis", "palm", "birds", "gorge", "valley", "wildlife"]),
    ("wellness", &["hammam", "wellness", "retreat", "slow", "argan"]),
];

/// The static tables the matcher reads from
#[derive(Debug, Clone, Copy)]
pub struct MatchTables {
    pub regions: KeywordTable,
    pub focus_tags: KeywordTable,
}

impl MatchTables {
    pub const fn new(regions: KeywordTable, focus_tags: KeywordTable) -> Self {
        Self { regions, focus_tags }
    }

    /// The tables shipped with the site
    pub const fn morocco() -> Self {
        Self::new(KeywordTable::new(REGION_SYNONYMS), KeywordTable::new(FOCUS_TAGS))
    }
}

impl Default for MatchTables {
    fn default() -> Self {
        Self::morocco()
    }
}
