use serde::{Deserialize, Serialize};

// ─── Word Record ─────────────────────────────────────────────────

/// One vocabulary entry: an English word, its Spanish translation, and the
/// game metadata the Discord bot plays with.
///
/// Rust field names are English; the wire (persisted documents and HTTP
/// bodies) keeps the Spanish keys. `category` and `difficulty`
/// default to empty on read so hand-edited documents that omit them still
/// load; the stats engine buckets those under sentinel keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    #[serde(rename = "palabra")]
    pub word: String,
    #[serde(rename = "traduccion")]
    pub translation: String,
    /// Free-form tag: animals, colors, food, objects, actions, ...
    #[serde(rename = "categoria", default)]
    pub category: String,
    /// Conventionally one of easy / medium / hard.
    #[serde(rename = "dificultad", default)]
    pub difficulty: String,
    /// Alternative accepted translations.
    #[serde(rename = "alternativas", default)]
    pub alternatives: Vec<String>,
    #[serde(rename = "pista", default)]
    pub hint: String,
    #[serde(rename = "ejemplo", default)]
    pub example: String,
}

// ─── Persisted stores ────────────────────────────────────────────

/// Identifies one of the two persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreId {
    /// Everyday vocabulary.
    Normal,
    /// The Warframe mod vocabulary subset.
    Warframe,
}

impl StoreId {
    /// Document this collection persists to, under the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            StoreId::Normal => "palabras_normales.json",
            StoreId::Warframe => "palabras_warframe.json",
        }
    }
}

impl std::fmt::Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreId::Normal => write!(f, "normal"),
            StoreId::Warframe => write!(f, "warframe"),
        }
    }
}

// ─── Query scope ─────────────────────────────────────────────────

/// Which logical collection a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    Normal,
    Warframe,
    /// Normal + warframe concatenated, normal first. Derived per query,
    /// never persisted.
    #[default]
    Mixed,
}

impl Scope {
    /// Parse a `tipo` wire value. Unknown values fall through to the
    /// combined scope.
    pub fn parse(tipo: &str) -> Scope {
        match tipo {
            "normal" => Scope::Normal,
            "warframe" => Scope::Warframe,
            _ => Scope::Mixed,
        }
    }

    /// Parse an optional `tipo` query value; absence selects combined.
    pub fn from_param(tipo: Option<&str>) -> Scope {
        tipo.map(Scope::parse).unwrap_or_default()
    }

    /// The persisted stores this scope reads, in concatenation order.
    pub fn stores(&self) -> &'static [StoreId] {
        match self {
            Scope::Normal => &[StoreId::Normal],
            Scope::Warframe => &[StoreId::Warframe],
            Scope::Mixed => &[StoreId::Normal, StoreId::Warframe],
        }
    }

    /// Wire name of this scope.
    pub fn label(&self) -> &'static str {
        match self {
            Scope::Normal => "normal",
            Scope::Warframe => "warframe",
            Scope::Mixed => "mixto",
        }
    }
}

// ─── Insertion routing ───────────────────────────────────────────

/// Reserved category tag for the Warframe mod vocabulary.
pub const WARFRAME_MODS_CATEGORY: &str = "specialized_mods";

/// Category tag → target store. This table is the sole mechanism
/// partitioning the two persisted collections; kept as data so new
/// reserved tags need no code change.
const CATEGORY_ROUTES: &[(&str, StoreId)] = &[(WARFRAME_MODS_CATEGORY, StoreId::Warframe)];

/// Store a record with the given category is inserted into.
pub fn target_store(category: &str) -> StoreId {
    CATEGORY_ROUTES
        .iter()
        .find(|(tag, _)| *tag == category)
        .map(|(_, id)| *id)
        .unwrap_or(StoreId::Normal)
}

// ─── Query filter ────────────────────────────────────────────────

/// Optional conjunctive filter for random-word queries. Comparisons are
/// exact; only the lookup engine folds case.
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

impl WordFilter {
    /// Build from wire query values. A parameter sent with an empty value
    /// (`?categoria=`) counts as absent and filters nothing.
    pub fn from_params(category: Option<String>, difficulty: Option<String>) -> WordFilter {
        WordFilter {
            category: category.filter(|c| !c.is_empty()),
            difficulty: difficulty.filter(|d| !d.is_empty()),
        }
    }

    /// A record survives when every set criterion matches.
    pub fn matches(&self, record: &WordRecord) -> bool {
        self.category.as_deref().map_or(true, |c| record.category == c)
            && self.difficulty.as_deref().map_or(true, |d| record.difficulty == d)
    }
}

// ─── Simple RNG (xorshift64) ─────────────────────────────────────

/// Minimal xorshift64 generator; plenty for picking one record out of a
/// few hundred.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Seed from the system clock. Selection only has to vary call to
    /// call; reproducibility matters in tests, which seed explicitly.
    pub fn from_clock() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E37_79B9_7F4A_7C15);
        Self::new(nanos)
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform index into a slice of length `len`. `len` must be nonzero.
    pub fn next_index(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(word: &str, category: &str, difficulty: &str) -> WordRecord {
        WordRecord {
            word: word.to_string(),
            translation: String::new(),
            category: category.to_string(),
            difficulty: difficulty.to_string(),
            alternatives: Vec::new(),
            hint: String::new(),
            example: String::new(),
        }
    }

    #[test]
    fn filter_is_a_conjunction() {
        let cat = record("cat", "animals", "easy");

        let unfiltered = WordFilter::default();
        assert!(unfiltered.matches(&cat));

        let by_category = WordFilter {
            category: Some("animals".into()),
            difficulty: None,
        };
        assert!(by_category.matches(&cat));

        let both = WordFilter {
            category: Some("animals".into()),
            difficulty: Some("hard".into()),
        };
        assert!(!both.matches(&cat), "difficulty mismatch must eliminate the record");

        let wrong_category = WordFilter {
            category: Some("colors".into()),
            difficulty: Some("easy".into()),
        };
        assert!(!wrong_category.matches(&cat));
    }

    #[test]
    fn empty_wire_params_filter_nothing() {
        let cat = record("cat", "animals", "easy");

        let blank = WordFilter::from_params(Some(String::new()), Some(String::new()));
        assert!(blank.category.is_none());
        assert!(blank.difficulty.is_none());
        assert!(blank.matches(&cat));

        let set = WordFilter::from_params(Some("animals".into()), Some(String::new()));
        assert_eq!(set.category.as_deref(), Some("animals"));
        assert!(set.difficulty.is_none());
    }

    #[test]
    fn filter_comparisons_are_exact() {
        let cat = record("cat", "animals", "easy");
        let filter = WordFilter {
            category: Some("Animals".into()),
            difficulty: None,
        };
        assert!(!filter.matches(&cat), "category filtering does not fold case");
    }

    #[test]
    fn scope_parse_falls_through_to_mixed() {
        assert_eq!(Scope::parse("normal"), Scope::Normal);
        assert_eq!(Scope::parse("warframe"), Scope::Warframe);
        assert_eq!(Scope::parse("mixto"), Scope::Mixed);
        assert_eq!(Scope::parse("anything-else"), Scope::Mixed);
        assert_eq!(Scope::from_param(None), Scope::Mixed);
        assert_eq!(Scope::from_param(Some("warframe")), Scope::Warframe);
    }

    #[test]
    fn mixed_scope_reads_normal_first() {
        assert_eq!(Scope::Mixed.stores(), &[StoreId::Normal, StoreId::Warframe]);
        assert_eq!(Scope::Normal.stores(), &[StoreId::Normal]);
        assert_eq!(Scope::Warframe.stores(), &[StoreId::Warframe]);
    }

    #[test]
    fn routing_only_reserves_the_mod_tag() {
        assert_eq!(target_store(WARFRAME_MODS_CATEGORY), StoreId::Warframe);
        assert_eq!(target_store("animals"), StoreId::Normal);
        assert_eq!(target_store(""), StoreId::Normal);
        // No case folding here: the reserved tag is exact
        assert_eq!(target_store("Specialized_Mods"), StoreId::Normal);
    }

    #[test]
    fn stored_records_tolerate_missing_optional_fields() {
        let json = r#"{"palabra": "cat", "traduccion": "gato"}"#;
        let record: WordRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.word, "cat");
        assert_eq!(record.translation, "gato");
        assert_eq!(record.category, "");
        assert_eq!(record.difficulty, "");
        assert!(record.alternatives.is_empty());
        assert_eq!(record.hint, "");
        assert_eq!(record.example, "");
    }

    #[test]
    fn records_serialize_with_spanish_keys() {
        let record = record("cat", "animals", "easy");
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("palabra").is_some());
        assert!(value.get("categoria").is_some());
        assert!(value.get("dificultad").is_some());
        assert!(value.get("word").is_none(), "English field names must not leak onto the wire");
    }

    #[test]
    fn rng_indices_stay_in_bounds() {
        let mut rng = SimpleRng::new(42);
        for _ in 0..1000 {
            assert!(rng.next_index(7) < 7);
        }
        // Zero seeds must not wedge the generator
        let mut zero = SimpleRng::new(0);
        assert_ne!(zero.next_u64(), 0);
    }
}
