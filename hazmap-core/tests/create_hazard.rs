#[cfg(test)]
mod tests {
    use hazmap_core::entities::*;
    use hazmap_core::repositories::*;
    use hazmap_core::usecases::*;
    use hazmap_core::usecases::Error;
    use hazmap_core::geometry::SimplifyConfig;
    use hazmap_db_mem::MemStore;
    use hazmap_entities::builders::*;

    fn store_with_category() -> MemStore {
        let store = MemStore::default();
        let mut category = Category::new("wildlife", "Wildlife");
        category.auto_expire_hours = Some(48);
        store.create_category(&category).unwrap();
        store
    }

    fn valid_submission() -> NewHazard {
        NewHazard {
            title: "Bear sighting".into(),
            description: "A brown bear near the trailhead".into(),
            category: "wildlife".into(),
            severity: 4,
            lat: 47.5,
            lng: 11.1,
            area: None,
            expires_in_hours: None,
        }
    }

    #[test]
    fn create_with_category_expire_default() {
        let store = store_with_category();
        let user = User::build().finish();
        let now = Timestamp::from_secs(1_000_000);
        let hazard = create_hazard(
            &store,
            &user,
            valid_submission(),
            &SimplifyConfig::default(),
            now,
        )
        .unwrap();
        assert_eq!(HazardStatus::Pending, hazard.status);
        assert_eq!(ExpirationKind::AutoExpire, hazard.expiration.kind);
        assert_eq!(
            Some(now + Duration::from_hours(48)),
            hazard.expiration.expires_at
        );
        assert_eq!(hazard, store.get_hazard(hazard.id.as_str()).unwrap());
    }

    #[test]
    fn reject_empty_title() {
        let store = store_with_category();
        let user = User::build().finish();
        let submission = NewHazard {
            title: "   ".into(),
            ..valid_submission()
        };
        assert!(matches!(
            create_hazard(
                &store,
                &user,
                submission,
                &SimplifyConfig::default(),
                Timestamp::now()
            ),
            Err(Error::Title)
        ));
    }

    #[test]
    fn reject_unknown_category() {
        let store = MemStore::default();
        let user = User::build().finish();
        assert!(matches!(
            create_hazard(
                &store,
                &user,
                valid_submission(),
                &SimplifyConfig::default(),
                Timestamp::now()
            ),
            Err(Error::Category)
        ));
    }

    #[test]
    fn reject_invalid_position() {
        let store = store_with_category();
        let user = User::build().finish();
        let submission = NewHazard {
            lat: 91.0,
            ..valid_submission()
        };
        assert!(matches!(
            create_hazard(
                &store,
                &user,
                submission,
                &SimplifyConfig::default(),
                Timestamp::now()
            ),
            Err(Error::Position)
        ));
    }

    #[test]
    fn drawn_area_is_simplified_and_closed() {
        let store = store_with_category();
        let user = User::build().finish();
        let submission = NewHazard {
            area: Some(vec![
                (0.0, 0.0),
                (0.0, 10.0),
                (10.0, 10.0),
                (10.0, 0.0),
            ]),
            ..valid_submission()
        };
        let hazard = create_hazard(
            &store,
            &user,
            submission,
            &SimplifyConfig::default(),
            Timestamp::now(),
        )
        .unwrap();
        let area = hazard.area.unwrap();
        assert!(area.is_closed());
        assert!(area.vertex_count() <= 16);
    }
}
