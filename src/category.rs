use std::collections::HashMap;

use crate::constants::DEFAULT_CATEGORY_ID;

/// Immutable mapping from the API's free-text category labels to the local
/// numeric category ids. Labels the table does not know fall back to the
/// default bucket instead of failing.
#[derive(Debug, Clone)]
pub struct CategoryMap {
    labels: HashMap<String, i64>,
    default_id: i64,
}

impl CategoryMap {
    pub fn new(labels: HashMap<String, i64>, default_id: i64) -> Self {
        Self { labels, default_id }
    }

    /// The built-in table: 1=Geography, 2=Science, 3=General/History, 4=Arts.
    pub fn builtin() -> Self {
        let labels = HashMap::from([
            ("geography".to_string(), 1),
            ("science".to_string(), 2),
            ("history".to_string(), 3),
            ("arts_and_literature".to_string(), 4),
            ("film_and_tv".to_string(), 4),
            ("music".to_string(), 4),
            ("sport_and_leisure".to_string(), 3),
            ("society_and_culture".to_string(), 3),
            ("food_and_drink".to_string(), 3),
            ("general_knowledge".to_string(), 3),
        ]);
        Self::new(labels, DEFAULT_CATEGORY_ID)
    }

    pub fn lookup(&self, label: &str) -> i64 {
        self.labels.get(label).copied().unwrap_or(self.default_id)
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_maps_known_labels() {
        let categories = CategoryMap::builtin();
        assert_eq!(categories.lookup("geography"), 1);
        assert_eq!(categories.lookup("science"), 2);
        assert_eq!(categories.lookup("film_and_tv"), 4);
        assert_eq!(categories.lookup("food_and_drink"), 3);
    }

    #[test]
    fn unknown_label_falls_back_to_default() {
        let categories = CategoryMap::builtin();
        assert_eq!(categories.lookup("mythology"), 3);
        assert_eq!(categories.lookup(""), 3);
    }

    #[test]
    fn custom_table_is_respected() {
        let categories = CategoryMap::new(HashMap::from([("cats".to_string(), 9)]), 42);
        assert_eq!(categories.lookup("cats"), 9);
        assert_eq!(categories.lookup("dogs"), 42);
    }
}
