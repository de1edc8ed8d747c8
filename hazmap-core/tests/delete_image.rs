#[cfg(test)]
mod tests {
    use hazmap_core::entities::*;
    use hazmap_core::repositories::*;
    use hazmap_core::usecases::*;
    use hazmap_core::usecases::Error;
    use hazmap_db_mem::MemStore;
    use hazmap_entities::builders::*;

    fn store_with_image() -> MemStore {
        let store = MemStore::default();
        store
            .create_image(&HazardImage {
                id: "img-1".into(),
                hazard_id: "h1".into(),
                storage_key: "hazards/h1/img-1.jpg".into(),
                moderation_status: ImageModerationStatus::Approved,
                uploaded_at: Timestamp::now(),
            })
            .unwrap();
        store
    }

    #[test]
    fn moderator_deletes_an_image() {
        let store = store_with_image();
        let moderator = User::build().id("mod-1").role(Role::Moderator).finish();

        delete_image(&store, &moderator, "img-1", Timestamp::now()).unwrap();
        assert!(matches!(
            store.get_image("img-1"),
            Err(hazmap_core::RepoError::NotFound)
        ));
        assert_eq!(1, store.audit_entries_of_subject("img-1").unwrap().len());
    }

    #[test]
    fn plain_users_may_not_delete_images() {
        let store = store_with_image();
        let user = User::build().role(Role::User).finish();
        assert!(matches!(
            delete_image(&store, &user, "img-1", Timestamp::now()),
            Err(Error::Forbidden)
        ));
        assert!(store.get_image("img-1").is_ok());
    }

    #[test]
    fn deleting_an_unknown_image_is_not_found() {
        let store = MemStore::default();
        let moderator = User::build().role(Role::Moderator).finish();
        assert!(matches!(
            delete_image(&store, &moderator, "nope", Timestamp::now()),
            Err(Error::Repo(hazmap_core::RepoError::NotFound))
        ));
    }
}
