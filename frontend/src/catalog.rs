use std::borrow::Cow;

/// Sentinel key meaning "no filtering".
pub const ALL_KEY: &str = "all";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Domestic,
    International,
    Adventure,
    Culture,
    Food,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Domestic,
        Category::International,
        Category::Adventure,
        Category::Culture,
        Category::Food,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Domestic => "domestic",
            Category::International => "international",
            Category::Adventure => "adventure",
            Category::Culture => "culture",
            Category::Food => "food",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Anything the gallery, services or destinations grids can filter.
pub trait Categorized {
    fn category(&self) -> Category;
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { key: ALL_KEY, label: "All Photos", icon: "📸" },
    CategoryInfo { key: "domestic", label: "Domestic", icon: "🇮🇳" },
    CategoryInfo { key: "international", label: "International", icon: "🌍" },
    CategoryInfo { key: "adventure", label: "Adventure", icon: "🏔️" },
    CategoryInfo { key: "culture", label: "Culture", icon: "🏛️" },
    CategoryInfo { key: "food", label: "Food", icon: "🍜" },
];

pub fn category_info(key: &str) -> Option<&'static CategoryInfo> {
    CATEGORIES.iter().find(|info| info.key == key)
}

/// Returns the items whose category matches `selected`, keeping their order.
///
/// `"all"` hands back the input slice untouched. A key that names no category
/// yields an empty list rather than an error.
pub fn filter_by_category<'a, T>(items: &'a [T], selected: &str) -> Cow<'a, [T]>
where
    T: Categorized + Clone,
{
    if selected == ALL_KEY {
        return Cow::Borrowed(items);
    }

    match Category::from_key(selected) {
        Some(category) => Cow::Owned(
            items
                .iter()
                .filter(|item| item.category() == category)
                .cloned()
                .collect(),
        ),
        None => Cow::Owned(Vec::new()),
    }
}

/// Caption shown above a filtered grid, e.g. "Showing 4 photos in Culture category".
pub fn filter_summary(count: usize, selected: &str) -> String {
    let mut summary = format!("Showing {} photos", count);
    if selected != ALL_KEY {
        if let Some(info) = category_info(selected) {
            summary.push_str(&format!(" in {} category", info.label));
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: u32,
        category: Category,
    }

    impl Categorized for Item {
        fn category(&self) -> Category {
            self.category
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            Item { id: 1, category: Category::Food },
            Item { id: 2, category: Category::Domestic },
            Item { id: 3, category: Category::Food },
            Item { id: 4, category: Category::Culture },
            Item { id: 5, category: Category::Domestic },
        ]
    }

    #[test]
    fn all_returns_input_unchanged() {
        let items = sample();
        let result = filter_by_category(&items, ALL_KEY);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result.as_ref(), items.as_slice());
    }

    #[test]
    fn selects_matching_items_in_catalog_order() {
        let items = sample();
        let ids: Vec<u32> = filter_by_category(&items, "domestic").iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 5]);

        for category in Category::ALL {
            let filtered = filter_by_category(&items, category.key());
            assert!(filtered.len() <= items.len());
            assert!(filtered.iter().all(|i| i.category == category));
        }
    }

    #[test]
    fn unknown_or_absent_category_is_empty() {
        let items = sample();
        assert!(filter_by_category(&items, "beaches").is_empty());
        assert!(filter_by_category(&items, "adventure").is_empty());
        assert!(filter_by_category::<Item>(&[], "food").is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let items = sample();
        let once = filter_by_category(&items, "food").into_owned();
        let twice = filter_by_category(&once, "food").into_owned();
        assert_eq!(once, twice);
        assert_eq!(filter_by_category(&items, "food").into_owned(), once);
    }

    #[test]
    fn keys_round_trip_through_the_table() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
            assert!(category_info(category.key()).is_some());
        }
        assert_eq!(Category::from_key(ALL_KEY), None);
        assert_eq!(CATEGORIES[0].key, ALL_KEY);
    }

    #[test]
    fn summary_mentions_category_label() {
        assert_eq!(filter_summary(23, ALL_KEY), "Showing 23 photos");
        assert_eq!(filter_summary(3, "culture"), "Showing 3 photos in Culture category");
        assert_eq!(filter_summary(0, "nowhere"), "Showing 0 photos");
    }
}
