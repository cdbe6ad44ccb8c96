//! Built-in seed data shown when no data file is configured.

use super::InterestItem;

/// The default list of interests.
pub fn seed_interests() -> Vec<InterestItem> {
    vec![
        InterestItem::new("Accessibilities", "account_circle")
            .completed(true)
            .with_category("UI/UX"),
        InterestItem::new("Android Auto", "build").with_category("Automotive"),
        InterestItem::new("Android Studio Tools", "menu")
            .completed(true)
            .with_category("Development"),
        InterestItem::new("Android TVs", "date_range").with_category("TV & Entertainment"),
        InterestItem::new("Architecture", "mail_outline")
            .completed(true)
            .with_category("Development"),
        InterestItem::new("Camera and Media 2", "info").with_category("Multimedia"),
        InterestItem::new("Compose", "shopping_cart")
            .completed(true)
            .with_category("UI Framework"),
        InterestItem::new("Kotlin 3", "menu")
            .completed(true)
            .with_category("Development"),
        InterestItem::new("Material Design", "star")
            .completed(true)
            .with_category("UI/UX"),
        InterestItem::new("Wear Operating System 2", "date_range")
            .completed(true)
            .with_category("Wearables")
            .new_badge(true),
        InterestItem::new("Firebase control", "info")
            .completed(true)
            .with_category("Backend")
            .new_badge(true),
        InterestItem::new("Machine Learning", "mail_outline")
            .with_category("AI/ML")
            .new_badge(true),
        InterestItem::new("Security", "lock")
            .completed(true)
            .with_category("Development"),
        InterestItem::new("Testing 2", "clear").with_category("Development"),
        InterestItem::new("Performance", "search")
            .completed(true)
            .with_category("Development"),
        InterestItem::new("Gaming", "shopping_cart").with_category("Entertainment"),
        InterestItem::new("Health & Fitness", "favorite")
            .completed(true)
            .with_category("Lifestyle")
            .new_badge(true),
        InterestItem::new("Productivity", "check_circle")
            .completed(true)
            .with_category("Tools")
            .new_badge(true),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_size() {
        assert_eq!(seed_interests().len(), 18);
    }

    #[test]
    fn test_seed_titles_unique() {
        let items = seed_interests();
        let titles: HashSet<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles.len(), items.len());
    }

    #[test]
    fn test_seed_completion_counts() {
        let items = seed_interests();
        let completed = items.iter().filter(|i| i.completed).count();
        assert_eq!(completed, 12);
    }
}
