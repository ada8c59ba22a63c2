use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Requested counts are clamped into `MIN_COUNT..=MAX_COUNT`.
pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 100;
/// Count used when the caller does not ask for one.
pub const DEFAULT_COUNT: usize = 10;

// ---------------------------------------------------------------------------
// Scoring primitives
// ---------------------------------------------------------------------------

/// Four heuristic ratings, each an integer in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    /// How easy the product is to build and launch.
    pub ease: u8,
    pub demand: u8,
    /// How unique the offer is against competitors.
    pub differentiation: u8,
    /// How quickly it can ship. 10 = days.
    pub time_to_ship: u8,
}

impl Scores {
    pub const fn new(ease: u8, demand: u8, differentiation: u8, time_to_ship: u8) -> Self {
        Scores { ease, demand, differentiation, time_to_ship }
    }

    /// Dimensions in draw order: ease, demand, differentiation, time-to-ship.
    pub fn dimensions(self) -> [u8; 4] {
        [self.ease, self.demand, self.differentiation, self.time_to_ship]
    }
}

/// Tag used to look up a score baseline and the narrative text for an idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKeyword {
    Template,
    Course,
    Printable,
    Apparel,
    Plugin,
    Guide,
    Toolkit,
    Analytics,
    Community,
    Default,
}

impl TypeKeyword {
    pub const ALL: [TypeKeyword; 10] = [
        TypeKeyword::Template,
        TypeKeyword::Course,
        TypeKeyword::Printable,
        TypeKeyword::Apparel,
        TypeKeyword::Plugin,
        TypeKeyword::Guide,
        TypeKeyword::Toolkit,
        TypeKeyword::Analytics,
        TypeKeyword::Community,
        TypeKeyword::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TypeKeyword::Template  => "template",
            TypeKeyword::Course    => "course",
            TypeKeyword::Printable => "printable",
            TypeKeyword::Apparel   => "apparel",
            TypeKeyword::Plugin    => "plugin",
            TypeKeyword::Guide     => "guide",
            TypeKeyword::Toolkit   => "toolkit",
            TypeKeyword::Analytics => "analytics",
            TypeKeyword::Community => "community",
            TypeKeyword::Default   => "default",
        }
    }
}

impl fmt::Display for TypeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub title: String,
    pub why_it_will_sell: String,
    pub what_is_included: String,
    pub who_is_it_for: String,
    pub scores: Scores,
}

/// Which product catalog an idea came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Downloadable products (Gumroad-style storefronts).
    Digital,
    /// Physical and print-on-demand products (Etsy-style storefronts).
    Physical,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Digital  => write!(f, "Digital"),
            Category::Physical => write!(f, "Physical"),
        }
    }
}

/// Input for [`generate_bundle`](crate::idea_engine::generate_bundle).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    /// `None` picks a fresh seed; the chosen value is recorded in the bundle.
    pub seed: Option<u64>,
    /// Requested ideas per category. Clamped to `1..=100` by the generator.
    pub count: usize,
}

impl GenerationRequest {
    /// Request with a random seed and the default count of 10.
    pub fn new(topic: impl Into<String>) -> Self {
        GenerationRequest { topic: topic.into(), seed: None, count: DEFAULT_COUNT }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set or clear the seed. `None` keeps the random-seed behaviour.
    pub fn with_seed_opt(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

/// Everything one generation call produces.
///
/// For a fixed `(topic, seed, count)` every field except `generated_at` is
/// identical across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedBundle {
    pub topic: String,
    pub seed: u64,
    /// Count after clamping. The idea lists may be shorter when a catalog
    /// holds fewer templates than this.
    pub count: usize,
    pub digital_ideas: Vec<Idea>,
    pub physical_ideas: Vec<Idea>,
    pub prompts: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedBundle {
    pub fn ideas(&self, category: Category) -> &[Idea] {
        match category {
            Category::Digital  => &self.digital_ideas,
            Category::Physical => &self.physical_ideas,
        }
    }

    /// Compare everything except the timestamp.
    pub fn same_content(&self, other: &GeneratedBundle) -> bool {
        self.topic == other.topic
            && self.seed == other.seed
            && self.count == other.count
            && self.digital_ideas == other.digital_ideas
            && self.physical_ideas == other.physical_ideas
            && self.prompts == other.prompts
    }
}
