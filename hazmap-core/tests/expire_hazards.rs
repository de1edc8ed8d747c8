#[cfg(test)]
mod tests {
    use hazmap_core::entities::*;
    use hazmap_core::repositories::*;
    use hazmap_core::usecases::*;
    use hazmap_core::usecases::Error;
    use hazmap_db_mem::MemStore;
    use hazmap_entities::builders::*;

    fn auto_expiring(id: &str, expires_at: Timestamp) -> Hazard {
        Hazard::build()
            .id(id)
            .expiration(Expiration::auto_expire(expires_at))
            .finish()
    }

    #[test]
    fn transition_past_expiry() {
        let store = MemStore::default();
        let now = Timestamp::from_secs(1_000_000);
        store
            .create_hazard(auto_expiring("h1", now - Duration::from_hours(2)))
            .unwrap();

        assert!(expire_hazard_if_needed(&store, "h1", now).unwrap());

        let resolved = store.get_hazard("h1").unwrap();
        assert_eq!(Some(now), resolved.expiration.resolved_at);
        assert_eq!(None, resolved.expiration.resolved_by);
        let note = resolved.expiration.resolution_note.unwrap();
        assert!(note.contains("2 hour(s)"), "unexpected note: {note}");

        // An audit entry was recorded for the hazard.
        assert_eq!(1, store.audit_entries_of_subject("h1").unwrap().len());
    }

    #[test]
    fn no_transition_before_expiry() {
        let store = MemStore::default();
        let now = Timestamp::from_secs(1_000_000);
        store
            .create_hazard(auto_expiring("h1", now + Duration::from_hours(1)))
            .unwrap();
        assert!(!expire_hazard_if_needed(&store, "h1", now).unwrap());
        assert!(store.get_hazard("h1").unwrap().expiration.resolved_at.is_none());
    }

    #[test]
    fn expire_batch_is_idempotent() {
        let store = MemStore::default();
        let now = Timestamp::from_secs(1_000_000);
        store
            .create_hazard(auto_expiring("h1", now - Duration::from_hours(1)))
            .unwrap();
        store
            .create_hazard(auto_expiring("h2", now - Duration::from_hours(30)))
            .unwrap();
        store
            .create_hazard(auto_expiring("h3", now + Duration::from_hours(1)))
            .unwrap();

        assert_eq!(2, expire_all_expired_hazards(&store, now).unwrap());
        // Already-resolved records are excluded from the candidate query.
        assert_eq!(0, expire_all_expired_hazards(&store, now).unwrap());
    }

    #[test]
    fn view_filter_drops_expired_and_resolved() {
        let now = Timestamp::from_secs(1_000_000);
        let expired = auto_expiring("expired", now - Duration::from_hours(1));
        let active = auto_expiring("active", now + Duration::from_hours(1));
        let resolved = Hazard::build()
            .id("resolved")
            .expiration(Expiration {
                kind: ExpirationKind::AutoExpire,
                expires_at: Some(now + Duration::from_hours(1)),
                resolved_at: Some(now),
                ..Default::default()
            })
            .finish();

        let visible = filter_expired_hazards(vec![expired, active, resolved], now);
        assert_eq!(1, visible.len());
        assert_eq!("active", visible[0].id.as_str());

        // Idempotent.
        let again = filter_expired_hazards(visible.clone(), now);
        assert_eq!(visible, again);
    }
}
