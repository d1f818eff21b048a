#[cfg(test)]
mod tests {
    use saponify::auth::AuthSession;
    use saponify::journal::{is_my_recipe, RecipeJournal};

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut journal = RecipeJournal::new();

        journal.add_entry(3, "Batch one, 33% coconut");
        journal.add_entry(3, "Too cleansing, dropping to 25%");
        journal.add_entry(3, "Batch two cured nicely");

        let bodies: Vec<&str> = journal.entries().iter().map(|e| e.body.as_str()).collect();
        assert_eq!(
            bodies,
            vec!["Batch one, 33% coconut", "Too cleansing, dropping to 25%", "Batch two cured nicely"]
        );
    }

    #[test]
    fn test_entry_ids_and_timestamps_increase() {
        let mut journal = RecipeJournal::new();
        journal.add_entry(3, "first");
        journal.add_entry(3, "second");

        let entries = journal.entries();
        assert!(entries[0].id < entries[1].id);
        assert!(entries[0].created_at <= entries[1].created_at);
    }

    #[test]
    fn test_latest_caps_at_available_entries() {
        let mut journal = RecipeJournal::new();
        journal.add_entry(1, "only entry");

        assert_eq!(journal.latest(5).len(), 1);
        assert!(journal.latest(0).is_empty());
    }

    #[test]
    fn test_authoring_gate() {
        let owner = AuthSession::authenticated(3);
        let visitor = AuthSession::authenticated(4);
        let anonymous = AuthSession::anonymous();

        assert!(is_my_recipe(&owner, 3));
        assert!(!is_my_recipe(&visitor, 3));
        assert!(!is_my_recipe(&anonymous, 3));
    }

    #[test]
    fn test_empty_journal() {
        let journal = RecipeJournal::new();
        assert!(journal.is_empty());
        assert_eq!(journal.len(), 0);
        assert!(journal.latest(3).is_empty());
    }
}
