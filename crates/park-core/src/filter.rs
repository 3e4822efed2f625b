//! Attraction Filter
//!
//! Category and name search over the attraction list. Both criteria must
//! match; either can be reset on its own.

use crate::catalog::{CatalogSlot, LoadStatus};
use crate::models::{Attraction, CategoryId};

/// Visible attractions for the given criteria, in catalog order
pub fn filter(
    attractions: &[Attraction],
    selected_category: Option<CategoryId>,
    search_term: &str,
) -> Vec<Attraction> {
    let needle = search_term.to_lowercase();
    attractions
        .iter()
        .filter(|attraction| {
            matches_category(attraction, selected_category) && matches_search(attraction, &needle)
        })
        .cloned()
        .collect()
}

fn matches_category(attraction: &Attraction, selected_category: Option<CategoryId>) -> bool {
    match selected_category {
        None => true,
        Some(id) => attraction.has_category(id),
    }
}

/// `needle` must already be lowercase
fn matches_search(attraction: &Attraction, needle: &str) -> bool {
    needle.is_empty() || attraction.name.to_lowercase().contains(needle)
}

/// Value of the category `<select>`: "" is the placeholder option
pub fn parse_category_choice(value: &str) -> Option<CategoryId> {
    value.trim().parse::<u32>().ok().map(CategoryId)
}

/// Filter inputs owned by the attractions page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub selected_category: Option<CategoryId>,
    pub search_term: String,
}

impl FilterCriteria {
    pub fn apply(&self, attractions: &[Attraction]) -> Vec<Attraction> {
        filter(attractions, self.selected_category, &self.search_term)
    }

    pub fn set_category_choice(&mut self, value: &str) {
        self.selected_category = parse_category_choice(value);
    }

    /// Select value matching the current category ("" when unset)
    pub fn category_choice(&self) -> String {
        self.selected_category
            .map(|id| id.to_string())
            .unwrap_or_default()
    }

    pub fn clear_category(&mut self) {
        self.selected_category = None;
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    pub fn is_active(&self) -> bool {
        self.selected_category.is_some() || !self.search_term.is_empty()
    }
}

/// Message shown in place of an empty attraction list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListNotice {
    /// The catalog could not be loaded; carries the cause
    LoadFailed(String),
    /// Attractions exist but none pass the current criteria
    NoMatch,
    /// The catalog loaded and is empty
    Empty,
}

impl ListNotice {
    pub fn message(&self) -> String {
        match self {
            ListNotice::LoadFailed(cause) => {
                format!("Impossible de charger les attractions ({}).", cause)
            }
            ListNotice::NoMatch => "Aucune attraction ne correspond à votre recherche.".to_string(),
            ListNotice::Empty => "Aucune attraction pour le moment.".to_string(),
        }
    }
}

/// Notice for the attractions list, `None` while loading or when something is visible
pub fn list_notice(
    attractions: &CatalogSlot<Attraction>,
    criteria: &FilterCriteria,
    visible: usize,
) -> Option<ListNotice> {
    if visible > 0 {
        return None;
    }
    match attractions.status() {
        LoadStatus::Loading => None,
        LoadStatus::Failed => Some(ListNotice::LoadFailed(
            attractions
                .error()
                .map(|err| err.to_string())
                .unwrap_or_default(),
        )),
        LoadStatus::Ready if criteria.is_active() && !attractions.items().is_empty() => {
            Some(ListNotice::NoMatch)
        }
        LoadStatus::Ready => Some(ListNotice::Empty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{attraction, category, small_catalog};
    use crate::error::FetchError;
    use crate::models::AttractionId;

    fn ids(attractions: &[Attraction]) -> Vec<u32> {
        attractions.iter().map(|a| a.activity_id.0).collect()
    }

    fn park() -> Vec<Attraction> {
        let horror = category(10, "Horror");
        let family = category(20, "Family");
        let thrill = category(30, "Thrill");
        vec![
            attraction(5, "Zombie Coaster", vec![horror.clone(), thrill.clone()]),
            attraction(1, "Haunted House", vec![horror.clone()]),
            attraction(9, "Carrousel", vec![family.clone()]),
            attraction(3, "Zombie Kids", vec![family, horror]),
            attraction(7, "Drop Tower", vec![thrill]),
            attraction(8, "Picnic Area", vec![]),
        ]
    }

    #[test]
    fn test_scenario_small_catalog() {
        let catalog = small_catalog();
        assert_eq!(ids(&filter(&catalog, Some(CategoryId(10)), "")), vec![1]);
        assert_eq!(ids(&filter(&catalog, None, "wheel")), vec![2]);
        assert_eq!(ids(&filter(&catalog, Some(CategoryId(20)), "wheel")), vec![2]);
        assert!(filter(&catalog, Some(CategoryId(10)), "wheel").is_empty());
    }

    #[test]
    fn test_unset_criteria_is_identity() {
        let catalog = park();
        assert_eq!(filter(&catalog, None, ""), catalog);
        assert!(filter(&[], None, "").is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let catalog = park();
        let source_ids = ids(&catalog);
        for category in [None, Some(CategoryId(10)), Some(CategoryId(20)), Some(CategoryId(99))] {
            for term in ["", "z", "ZOMBIE", "o", "nothing"] {
                let result = ids(&filter(&catalog, category, term));
                let mut cursor = source_ids.iter();
                for id in &result {
                    assert!(cursor.any(|s| s == id), "{:?} not a subsequence", result);
                }
            }
        }
    }

    #[test]
    fn test_attraction_matches_its_own_first_category() {
        let catalog = park();
        for a in catalog.iter().filter(|a| !a.categories.is_empty()) {
            let result = filter(&catalog, Some(a.categories[0].category_id), "");
            assert!(result.iter().any(|r| r.activity_id == a.activity_id));
        }
    }

    #[test]
    fn test_any_category_matches() {
        // Zombie Kids is Family and Horror
        let catalog = park();
        assert_eq!(ids(&filter(&catalog, Some(CategoryId(20)), "")), vec![9, 3]);
        assert_eq!(ids(&filter(&catalog, Some(CategoryId(10)), "")), vec![5, 1, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = park();
        let upper = filter(&catalog, None, "ZOMB");
        let lower = filter(&catalog, None, "zomb");
        assert_eq!(upper, lower);
        assert_eq!(ids(&upper), vec![5, 3]);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let catalog = park();
        assert_eq!(ids(&filter(&catalog, Some(CategoryId(30)), "zombie")), vec![5]);
        assert!(filter(&catalog, Some(CategoryId(30)), "house").is_empty());
    }

    #[test]
    fn test_filter_does_not_touch_source() {
        let catalog = park();
        let before = catalog.clone();
        let first = filter(&catalog, Some(CategoryId(10)), "h");
        let second = filter(&catalog, Some(CategoryId(10)), "h");
        assert_eq!(first, second);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_parse_category_choice() {
        assert_eq!(parse_category_choice(""), None);
        assert_eq!(parse_category_choice("12"), Some(CategoryId(12)));
        assert_eq!(parse_category_choice(" 3 "), Some(CategoryId(3)));
        assert_eq!(parse_category_choice("horror"), None);
        assert_eq!(parse_category_choice("-1"), None);
    }

    #[test]
    fn test_criteria_reset_independently() {
        let catalog = park();
        let mut criteria = FilterCriteria::default();
        assert!(!criteria.is_active());

        criteria.set_category_choice("10");
        criteria.search_term = "house".to_string();
        assert_eq!(criteria.category_choice(), "10");
        assert_eq!(ids(&criteria.apply(&catalog)), vec![1]);

        criteria.clear_category();
        assert_eq!(criteria.search_term, "house");
        assert_eq!(criteria.category_choice(), "");
        assert_eq!(ids(&criteria.apply(&catalog)), vec![1]);

        criteria.set_category_choice("20");
        criteria.clear_search();
        assert_eq!(criteria.selected_category, Some(CategoryId(20)));
        assert_eq!(ids(&criteria.apply(&catalog)), vec![9, 3]);

        criteria.set_category_choice("");
        assert!(!criteria.is_active());
        assert_eq!(criteria.apply(&catalog).len(), catalog.len());
        assert!(criteria.apply(&catalog).iter().any(|a| a.activity_id == AttractionId(8)));
    }

    #[test]
    fn test_list_notice_while_loading() {
        let slot = CatalogSlot::<Attraction>::default();
        assert_eq!(list_notice(&slot, &FilterCriteria::default(), 0), None);
    }

    #[test]
    fn test_list_notice_reports_load_failure() {
        let mut slot = CatalogSlot::default();
        slot.apply(Err(FetchError::Network("connection refused".to_string())));

        let notice = list_notice(&slot, &FilterCriteria::default(), 0);
        assert_eq!(
            notice,
            Some(ListNotice::LoadFailed("Network error: connection refused".to_string()))
        );
        let message = notice.unwrap().message();
        assert!(message.starts_with("Impossible de charger les attractions"));
        assert!(!message.contains("recherche"));
    }

    #[test]
    fn test_list_notice_no_match_vs_empty() {
        let mut slot = CatalogSlot::default();
        slot.apply(Ok(park()));
        let criteria = FilterCriteria {
            selected_category: None,
            search_term: "nothing here".to_string(),
        };
        let visible = criteria.apply(slot.items()).len();
        assert_eq!(list_notice(&slot, &criteria, visible), Some(ListNotice::NoMatch));
        assert_eq!(list_notice(&slot, &FilterCriteria::default(), slot.items().len()), None);

        let mut empty = CatalogSlot::default();
        empty.apply(Ok(vec![]));
        assert_eq!(list_notice(&empty, &criteria, 0), Some(ListNotice::Empty));
        assert_eq!(list_notice(&empty, &FilterCriteria::default(), 0), Some(ListNotice::Empty));
    }
}
