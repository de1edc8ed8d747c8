#[cfg(test)]
mod tests {
    use hazmap_core::entities::*;
    use hazmap_core::repositories::*;
    use hazmap_core::usecases::*;
    use hazmap_core::usecases::Error;
    use hazmap_db_mem::MemStore;
    use hazmap_entities::builders::*;

    fn pending_item(id: &str, priority: QueuePriority, created_at: i64) -> QueueItem {
        QueueItem::build()
            .id(id)
            .priority(priority)
            .created_at(Timestamp::from_secs(created_at))
            .finish()
    }

    #[test]
    fn claim_is_idempotent_for_the_same_moderator() {
        let store = MemStore::default();
        store
            .add_queue_item(pending_item("a", QueuePriority::Medium, 100))
            .unwrap();
        let moderator = Id::from("mod-1");

        let first = next_queue_item(&store, &moderator).unwrap().unwrap();
        assert_eq!("a", first.id.as_str());
        assert_eq!(Some(moderator.clone()), first.assigned_moderator);

        let second = next_queue_item(&store, &moderator).unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn claimed_items_are_invisible_to_other_moderators() {
        let store = MemStore::default();
        store
            .add_queue_item(pending_item("a", QueuePriority::High, 100))
            .unwrap();
        store
            .add_queue_item(pending_item("b", QueuePriority::Low, 200))
            .unwrap();
        let alice = Id::from("alice");
        let bob = Id::from("bob");

        let for_alice = next_queue_item(&store, &alice).unwrap().unwrap();
        assert_eq!("a", for_alice.id.as_str());
        let for_bob = next_queue_item(&store, &bob).unwrap().unwrap();
        assert_eq!("b", for_bob.id.as_str());
    }

    #[test]
    fn priority_beats_age() {
        let store = MemStore::default();
        store
            .add_queue_item(pending_item("old-low", QueuePriority::Low, 100))
            .unwrap();
        store
            .add_queue_item(pending_item("new-urgent", QueuePriority::Urgent, 900))
            .unwrap();
        let moderator = Id::from("mod-1");
        let item = next_queue_item(&store, &moderator).unwrap().unwrap();
        assert_eq!("new-urgent", item.id.as_str());
    }

    #[test]
    fn oldest_first_within_the_same_priority() {
        let store = MemStore::default();
        store
            .add_queue_item(pending_item("newer", QueuePriority::Medium, 500))
            .unwrap();
        store
            .add_queue_item(pending_item("older", QueuePriority::Medium, 100))
            .unwrap();
        let moderator = Id::from("mod-1");
        let item = next_queue_item(&store, &moderator).unwrap().unwrap();
        assert_eq!("older", item.id.as_str());
    }

    #[test]
    fn empty_queue_is_not_an_error() {
        let store = MemStore::default();
        assert_eq!(None, next_queue_item(&store, &Id::from("mod-1")).unwrap());
    }

    #[test]
    fn claim_specific_item() {
        let store = MemStore::default();
        store
            .add_queue_item(pending_item("a", QueuePriority::Medium, 100))
            .unwrap();
        let alice = Id::from("alice");
        let bob = Id::from("bob");

        let item = claim_queue_item(&store, "a", &alice).unwrap().unwrap();
        assert_eq!(Some(alice.clone()), item.assigned_moderator);
        // Claimed by somebody else.
        assert_eq!(None, claim_queue_item(&store, "a", &bob).unwrap());
        // Missing items yield None, not an error.
        assert_eq!(None, claim_queue_item(&store, "missing", &alice).unwrap());
    }

    #[test]
    fn approve_propagates_to_hazard() {
        let store = MemStore::default();
        let hazard = Hazard::build().id("h1").finish();
        store.create_hazard(hazard).unwrap();
        store
            .add_queue_item(
                QueueItem::build()
                    .id("q1")
                    .kind(ContentKind::Hazard)
                    .content_id("h1")
                    .finish(),
            )
            .unwrap();
        let moderator = Id::from("mod-1");
        let action = ModerationAction {
            decision: ModerationDecision::Approve,
            reason: None,
            notes: Some("looks legit".into()),
        };
        let now = Timestamp::from_secs(1_000);

        let item = process_queue_item(&store, "q1", action, &moderator, now).unwrap();
        assert_eq!(QueueStatus::Approved, item.status);
        assert_eq!(Some(now), item.resolved_at);
        assert_eq!(Some("looks legit".into()), item.moderator_notes);
        assert_eq!(
            HazardStatus::Approved,
            store.get_hazard("h1").unwrap().status
        );
    }

    #[test]
    fn reject_propagates_template_vocabulary() {
        let store = MemStore::default();
        store
            .create_template(&Template {
                id: "t1".into(),
                title: "Snakebite first aid".into(),
                body: "".into(),
                category: None,
                status: TemplateStatus::Draft,
                created_at: Timestamp::from_secs(0),
            })
            .unwrap();
        store
            .add_queue_item(
                QueueItem::build()
                    .id("q1")
                    .kind(ContentKind::Template)
                    .content_id("t1")
                    .finish(),
            )
            .unwrap();
        let action = ModerationAction {
            decision: ModerationDecision::Reject,
            reason: None,
            notes: None,
        };
        process_queue_item(&store, "q1", action, &Id::from("mod-1"), Timestamp::now()).unwrap();
        assert_eq!(
            TemplateStatus::Rejected,
            store.get_template("t1").unwrap().status
        );
    }

    #[test]
    fn flag_keeps_the_item_pending() {
        let store = MemStore::default();
        store
            .add_queue_item(pending_item("q1", QueuePriority::Medium, 100))
            .unwrap();
        let action = ModerationAction {
            decision: ModerationDecision::Flag,
            reason: Some("possible duplicate".into()),
            notes: Some("check nearby reports".into()),
        };
        let item =
            process_queue_item(&store, "q1", action, &Id::from("mod-1"), Timestamp::now()).unwrap();
        assert_eq!(QueueStatus::Pending, item.status);
        assert_eq!(None, item.resolved_at);
        assert_eq!(
            vec![
                "possible duplicate".to_string(),
                "check nearby reports".to_string()
            ],
            item.flagged_reasons
        );
    }

    #[test]
    fn flag_without_reason_gets_a_generic_one() {
        let store = MemStore::default();
        store
            .add_queue_item(pending_item("q1", QueuePriority::Medium, 100))
            .unwrap();
        let action = ModerationAction {
            decision: ModerationDecision::Flag,
            reason: None,
            notes: Some("  ".into()),
        };
        let item =
            process_queue_item(&store, "q1", action, &Id::from("mod-1"), Timestamp::now()).unwrap();
        assert_eq!(vec![GENERIC_FLAG_REASON.to_string()], item.flagged_reasons);
    }

    #[test]
    fn terminal_items_cannot_be_processed_again() {
        let store = MemStore::default();
        let hazard = Hazard::build().id("h1").finish();
        store.create_hazard(hazard).unwrap();
        store
            .add_queue_item(
                QueueItem::build()
                    .id("q1")
                    .kind(ContentKind::Hazard)
                    .content_id("h1")
                    .finish(),
            )
            .unwrap();
        let approve = ModerationAction {
            decision: ModerationDecision::Approve,
            reason: None,
            notes: None,
        };
        let moderator = Id::from("mod-1");
        process_queue_item(&store, "q1", approve.clone(), &moderator, Timestamp::now()).unwrap();
        assert!(matches!(
            process_queue_item(&store, "q1", approve, &moderator, Timestamp::now()),
            Err(Error::AlreadyResolved)
        ));
        // Terminal items are never served again.
        assert_eq!(None, next_queue_item(&store, &moderator).unwrap());
    }

    #[test]
    fn queue_page_ordering() {
        let store = MemStore::default();
        store
            .add_queue_item(pending_item("p-low", QueuePriority::Low, 100))
            .unwrap();
        store
            .add_queue_item(pending_item("p-high", QueuePriority::High, 200))
            .unwrap();
        store
            .add_queue_item(
                QueueItem::build()
                    .id("r-old")
                    .status(QueueStatus::Approved)
                    .resolved_at(Timestamp::from_secs(1_000))
                    .finish(),
            )
            .unwrap();
        store
            .add_queue_item(
                QueueItem::build()
                    .id("r-new")
                    .status(QueueStatus::Rejected)
                    .resolved_at(Timestamp::from_secs(2_000))
                    .finish(),
            )
            .unwrap();

        let pending = queue_page(
            &store,
            Some(QueueStatus::Pending),
            &Pagination::default(),
        )
        .unwrap();
        assert_eq!(
            vec!["p-high", "p-low"],
            pending.iter().map(|i| i.id.as_str()).collect::<Vec<_>>()
        );

        let approved = queue_page(
            &store,
            Some(QueueStatus::Approved),
            &Pagination::default(),
        )
        .unwrap();
        assert_eq!(1, approved.len());

        // Unfiltered listings include everything, resolved most-recent first
        // after the pending block.
        let all = queue_page(&store, None, &Pagination::default()).unwrap();
        assert_eq!(4, all.len());

        assert!(matches!(
            queue_page(
                &store,
                None,
                &Pagination {
                    offset: None,
                    limit: Some(0)
                }
            ),
            Err(Error::InvalidLimit)
        ));
    }
}
