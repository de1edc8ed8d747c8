#[cfg(test)]
mod tests {
    use hazmap_core::entities::*;
    use hazmap_core::repositories::*;
    use hazmap_core::usecases::*;
    use hazmap_core::usecases::Error;
    use hazmap_db_mem::MemStore;
    use hazmap_entities::builders::*;

    #[test]
    fn moderator_resolves_a_hazard() {
        let store = MemStore::default();
        store.create_hazard(Hazard::build().id("h1").finish()).unwrap();
        let moderator = User::build().id("mod-1").role(Role::Moderator).finish();
        let now = Timestamp::from_secs(1_000_000);

        let resolved = resolve_hazard(&store, &moderator, "h1", None, now).unwrap();
        assert_eq!(Some(now), resolved.expiration.resolved_at);
        assert_eq!(Some(Id::from("mod-1")), resolved.expiration.resolved_by);
        assert_eq!(
            Some("Resolved by moderator".to_string()),
            resolved.expiration.resolution_note
        );
        assert_eq!(1, store.audit_entries_of_subject("h1").unwrap().len());
    }

    #[test]
    fn plain_users_may_not_resolve() {
        let store = MemStore::default();
        store.create_hazard(Hazard::build().id("h1").finish()).unwrap();
        let user = User::build().role(Role::User).finish();
        assert!(matches!(
            resolve_hazard(&store, &user, "h1", None, Timestamp::now()),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn double_resolution_is_an_error() {
        let store = MemStore::default();
        store.create_hazard(Hazard::build().id("h1").finish()).unwrap();
        let moderator = User::build().role(Role::Moderator).finish();
        resolve_hazard(&store, &moderator, "h1", Some("cleared".into()), Timestamp::now())
            .unwrap();
        assert!(matches!(
            resolve_hazard(&store, &moderator, "h1", None, Timestamp::now()),
            Err(Error::AlreadyResolved)
        ));
    }
}
