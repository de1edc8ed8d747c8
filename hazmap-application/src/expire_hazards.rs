use super::*;
use hazmap_core::util::retry_n;

/// Periodic sweep that auto-resolves all expired hazards.
///
/// The whole sweep is retried once on failure; individual records that
/// keep failing are skipped inside the usecase and picked up again by the
/// next sweep.
pub fn sweep_expired_hazards<D: Db>(db: &D, now: Timestamp) -> Result<usize> {
    let expired = retry_n(2, || usecases::expire_all_expired_hazards(db, now))?;
    Ok(expired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazmap_db_mem::MemStore;
    use hazmap_entities::builders::*;

    #[test]
    fn sweep_resolves_expired_hazards() {
        let store = MemStore::default();
        let now = Timestamp::from_secs(1_000_000);
        store
            .create_hazard(
                Hazard::build()
                    .id("h1")
                    .expiration(Expiration::auto_expire(now - Duration::from_hours(3)))
                    .finish(),
            )
            .unwrap();

        assert_eq!(1, sweep_expired_hazards(&store, now).unwrap());
        assert!(store
            .get_hazard("h1")
            .unwrap()
            .expiration
            .is_resolved());
        // The next sweep finds nothing to do.
        assert_eq!(0, sweep_expired_hazards(&store, now).unwrap());
    }
}
