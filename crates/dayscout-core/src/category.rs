use serde::{Deserialize, Serialize};

/// The fixed category vocabulary shared between the source retrieval layer
/// and the planning pipeline.
///
/// Category strings arriving from sources are matched case-insensitively;
/// anything outside the vocabulary collapses to [`Category::Other`], which
/// the bucket classifier and the pricing defaults both treat via their
/// fallback paths.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(from = "String")]
pub enum Category {
    Food,
    Park,
    Movie,
    Fun,
    Mall,
    Beach,
    Pilgrimage,
    Activities,
    Hotels,
    #[default]
    Other,
}

impl Category {
    /// Parse a free-text category tag, case-insensitively.
    ///
    /// Unrecognized tags map to [`Category::Other`] rather than failing,
    /// so one mislabelled record cannot abort a batch.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "food" => Category::Food,
            "park" => Category::Park,
            "movie" => Category::Movie,
            "fun" => Category::Fun,
            "mall" => Category::Mall,
            "beach" => Category::Beach,
            "pilgrimage" => Category::Pilgrimage,
            "activities" => Category::Activities,
            "hotels" => Category::Hotels,
            _ => Category::Other,
        }
    }

    /// The canonical string form of this category, as agreed with the
    /// source retrieval collaborators.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Park => "Park",
            Category::Movie => "Movie",
            Category::Fun => "Fun",
            Category::Mall => "Mall",
            Category::Beach => "Beach",
            Category::Pilgrimage => "Pilgrimage",
            Category::Activities => "Activities",
            Category::Hotels => "Hotels",
            Category::Other => "Other",
        }
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        Category::parse(&tag)
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Category::parse(tag)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Category::parse("food"), Category::Food);
        assert_eq!(Category::parse("FOOD"), Category::Food);
        assert_eq!(Category::parse("  Park "), Category::Park);
    }

    #[test]
    fn parse_unknown_tag_is_other() {
        assert_eq!(Category::parse("Karaoke"), Category::Other);
        assert_eq!(Category::parse(""), Category::Other);
    }

    #[test]
    fn deserializes_from_json_string() {
        let cat: Category = serde_json::from_str("\"Beach\"").unwrap();
        assert_eq!(cat, Category::Beach);
    }

    #[test]
    fn deserializes_unknown_string_to_other() {
        let cat: Category = serde_json::from_str("\"spa\"").unwrap();
        assert_eq!(cat, Category::Other);
    }

    #[test]
    fn serializes_to_variant_name() {
        assert_eq!(
            serde_json::to_string(&Category::Pilgrimage).unwrap(),
            "\"Pilgrimage\""
        );
    }

    #[test]
    fn display_matches_vocabulary() {
        assert_eq!(Category::Activities.to_string(), "Activities");
    }
}
