#[cfg(test)]
mod tests {
    use hazmap_core::entities::*;
    use hazmap_core::repositories::*;
    use hazmap_core::usecases::*;
    use hazmap_core::usecases::Error;
    use hazmap_db_mem::MemStore;

    fn store_with_categories() -> MemStore {
        let store = MemStore::default();
        let mut wildlife = Category::new("wildlife", "Wildlife");
        wildlife.keywords = vec!["bear".into(), "snake".into(), "boar".into()];
        let mut weather = Category::new("weather", "Weather");
        weather.keywords = vec!["storm".into(), "ice".into(), "flood".into()];
        let mut obstacle = Category::new("obstacle", "Obstacle");
        obstacle.keywords = vec!["tree".into(), "rockfall".into()];
        for category in [&wildlife, &weather, &obstacle] {
            store.create_category(category).unwrap();
        }
        store
    }

    #[test]
    fn matches_are_ranked_by_hit_count() {
        let store = store_with_categories();
        let suggestions = suggest_categories(
            &store,
            "Bear and boar",
            "Saw a bear crossing near the fallen tree",
        )
        .unwrap();
        assert_eq!(2, suggestions.len());
        assert_eq!("wildlife", suggestions[0].category.id.as_str());
        assert_eq!(2, suggestions[0].matches);
        assert_eq!("obstacle", suggestions[1].category.id.as_str());
    }

    #[test]
    fn matching_ignores_case_and_punctuation() {
        let store = store_with_categories();
        let suggestions = suggest_categories(&store, "STORM!", "").unwrap();
        assert_eq!(1, suggestions.len());
        assert_eq!("weather", suggestions[0].category.id.as_str());
    }

    #[test]
    fn partial_words_do_not_match() {
        let store = store_with_categories();
        // "bears" is not the keyword "bear".
        let suggestions = suggest_categories(&store, "bears", "").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn no_match_yields_empty() {
        let store = store_with_categories();
        assert!(suggest_categories(&store, "nothing", "relevant")
            .unwrap()
            .is_empty());
    }
}
