//! Domain records shared by the gateway, the controller and the widgets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level view mode. Only explicit user actions move between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Landing,
    Exploring,
}

/// A resolved place: coordinates plus the display name used for news queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationState {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}

impl LocationState {
    pub fn new(lat: f64, lng: f64, name: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            name: name.into(),
        }
    }

    pub fn has_valid_coordinates(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Readout used by the map widget and the CLI, e.g. `25.2048N 55.2708E`.
    pub fn coordinate_label(&self) -> String {
        format!("{:.4}N {:.4}E", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Community,
    Technology,
    Health,
    Environment,
    Culture,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Community,
        Category::Technology,
        Category::Health,
        Category::Environment,
        Category::Culture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Community => "Community",
            Category::Technology => "Technology",
            Category::Health => "Health",
            Category::Environment => "Environment",
            Category::Culture => "Culture",
        }
    }

    /// Coerce the free-form label sent by the model into the closed set.
    ///
    /// The response schema only describes the allowed values, so the model may
    /// answer "tech", "Science & Technology" or something unrelated entirely.
    /// Exact names win, then a handful of synonyms matched against the start
    /// of each word, then `Community`.
    pub fn from_model_label(label: &str) -> Category {
        let normalized = label.trim().to_ascii_lowercase();

        if let Some(exact) = Category::ALL
            .iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(&normalized))
        {
            return *exact;
        }

        const SYNONYMS: &[(&str, Category)] = &[
            ("tech", Category::Technology),
            ("science", Category::Technology),
            ("innovation", Category::Technology),
            ("startup", Category::Technology),
            ("aerospace", Category::Technology),
            ("health", Category::Health),
            ("medic", Category::Health),
            ("surg", Category::Health),
            ("wellbeing", Category::Health),
            ("environment", Category::Environment),
            ("climate", Category::Environment),
            ("nature", Category::Environment),
            ("earth", Category::Environment),
            ("conservation", Category::Environment),
            ("energy", Category::Environment),
            ("cultur", Category::Culture),
            ("art", Category::Culture),
            ("music", Category::Culture),
            ("sport", Category::Culture),
            ("heritage", Category::Culture),
            ("community", Category::Community),
            ("social", Category::Community),
            ("education", Category::Community),
        ];

        let words: Vec<&str> = normalized
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|word| !word.is_empty())
            .collect();

        SYNONYMS
            .iter()
            .find(|(needle, _)| words.iter().any(|word| word.starts_with(*needle)))
            .map(|(_, category)| *category)
            .unwrap_or(Category::Community)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub publisher: String,
    pub url: String,
}

/// A single dispatch for a location/year pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub category: Category,
    pub location: String,
    pub year: i32,
    pub sources: Vec<Source>,
}

impl NewsItem {
    pub fn make_id(location: &str, year: i32, index: usize) -> String {
        format!("{location}-{year}-{index}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_matches_exact_names_case_insensitively() {
        assert_eq!(Category::from_model_label("Technology"), Category::Technology);
        assert_eq!(Category::from_model_label("  health "), Category::Health);
        assert_eq!(Category::from_model_label("CULTURE"), Category::Culture);
    }

    #[test]
    fn category_maps_synonyms_and_falls_back_to_community() {
        assert_eq!(
            Category::from_model_label("Science & Tech"),
            Category::Technology
        );
        assert_eq!(Category::from_model_label("Climate"), Category::Environment);
        assert_eq!(Category::from_model_label("Medicine"), Category::Health);
        assert_eq!(Category::from_model_label("Sports"), Category::Culture);
        assert_eq!(Category::from_model_label("Economy"), Category::Community);
        assert_eq!(Category::from_model_label(""), Category::Community);
    }

    #[test]
    fn synonyms_only_match_at_word_starts() {
        assert_eq!(Category::from_model_label("Earth Day"), Category::Environment);
        assert_eq!(Category::from_model_label("Heart surgery"), Category::Health);
        assert_eq!(Category::from_model_label("Startups"), Category::Technology);
        assert_eq!(Category::from_model_label("Smart city"), Category::Community);
        assert_eq!(Category::from_model_label("Public space"), Category::Community);
        assert_eq!(Category::from_model_label("Arts & Crafts"), Category::Culture);
    }

    #[test]
    fn news_ids_follow_location_year_index() {
        assert_eq!(NewsItem::make_id("Dubai, UAE", 2021, 0), "Dubai, UAE-2021-0");
    }

    #[test]
    fn coordinate_validation_rejects_out_of_range_values() {
        assert!(LocationState::new(25.2048, 55.2708, "Dubai").has_valid_coordinates());
        assert!(!LocationState::new(91.0, 0.0, "North of north").has_valid_coordinates());
        assert!(!LocationState::new(0.0, -180.5, "Dateline").has_valid_coordinates());
        assert!(!LocationState::new(f64::NAN, 0.0, "Nowhere").has_valid_coordinates());
    }

    #[test]
    fn coordinate_label_uses_four_decimals() {
        let dubai = LocationState::new(25.2048, 55.2708, "Dubai, UAE");
        assert_eq!(dubai.coordinate_label(), "25.2048N 55.2708E");
    }
}
