//! Catalog Models
//!
//! Records served by the catalog API (`/activities`, `/category`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Attraction identifier (`activity_id` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttractionId(pub u32);

impl fmt::Display for AttractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category identifier (`category_id` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: CategoryId,
    pub name: String,
}

/// Attraction data structure (matches the `/activities` payload)
///
/// The park map only needs id, name, short description and position;
/// everything else defaults so a reduced record still places its marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub activity_id: AttractionId,
    pub name: String,
    pub description_short: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub minimal_age: u32,
    /// 0 when the payload omits it
    #[serde(default)]
    pub capacity: u32,
    /// Horizontal position, percent of the map image width
    pub x: f64,
    /// Vertical position, percent of the map image height
    pub y: f64,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Attraction {
    /// True if any of the attraction's categories has this id
    pub fn has_category(&self, category_id: CategoryId) -> bool {
        self.categories
            .iter()
            .any(|category| category.category_id == category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_attraction_payload() {
        let payload = json!({
            "activity_id": 3,
            "name": "Zombie Train",
            "description_short": "Un train hanté",
            "description": "Un long voyage",
            "minimal_age": 8,
            "capacity": 40,
            "x": 42.5,
            "y": 61,
            "categories": [{ "category_id": 10, "name": "Horror" }]
        });

        let attraction: Attraction = serde_json::from_value(payload).unwrap();
        assert_eq!(attraction.activity_id, AttractionId(3));
        assert_eq!(attraction.y, 61.0);
        assert!(attraction.has_category(CategoryId(10)));
        assert!(!attraction.has_category(CategoryId(20)));
    }

    #[test]
    fn test_optional_fields_default() {
        let payload = json!({
            "activity_id": 4,
            "name": "Crypt",
            "description_short": "Sombre",
            "minimal_age": 0,
            "capacity": 5,
            "x": 1.0,
            "y": 2.0
        });

        let attraction: Attraction = serde_json::from_value(payload).unwrap();
        assert!(attraction.description.is_empty());
        assert!(attraction.categories.is_empty());
    }

    #[test]
    fn test_map_shaped_record_decodes() {
        let payload = json!([
            { "activity_id": 1, "name": "Crypt", "description_short": "Sombre", "x": 12.5, "y": 80 },
            { "activity_id": 2, "name": "Train", "description_short": "Hanté", "x": 50, "y": 20,
              "minimal_age": 6, "capacity": 30 }
        ]);

        let attractions: Vec<Attraction> = serde_json::from_value(payload).unwrap();
        assert_eq!(attractions.len(), 2);
        assert_eq!(attractions[0].capacity, 0);
        assert_eq!(attractions[0].minimal_age, 0);
        assert_eq!(attractions[0].x, 12.5);
        assert_eq!(attractions[1].capacity, 30);
    }

    #[test]
    fn test_ids_display_as_plain_numbers() {
        assert_eq!(AttractionId(7).to_string(), "7");
        assert_eq!(CategoryId(12).to_string(), "12");
    }
}
