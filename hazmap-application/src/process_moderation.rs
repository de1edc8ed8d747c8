use super::*;

pub const REPORT_APPROVED_POINTS: TrustScore = 10;
pub const REPORT_REJECTED_POINTS: TrustScore = -2;
pub const MODERATION_ACTION_POINTS: TrustScore = 1;

/// Applies a moderator decision and settles the follow-ups: trust points
/// for the submitter and the moderator, plus an audit trail entry.
/// Follow-up failures are logged, the decision itself is never rolled back.
pub fn process_moderation_action<D: Db>(
    db: &D,
    moderator: &User,
    item_id: &str,
    action: usecases::ModerationAction,
    now: Timestamp,
) -> Result<QueueItem> {
    usecases::authorize_role(moderator, Role::Moderator)?;
    let decision = action.decision;
    let item = usecases::process_queue_item(db, item_id, action, &moderator.id, now)?;

    if item.status.is_terminal() {
        if let Some(submitter) = &item.submitted_by {
            let (kind, points) = match item.status {
                QueueStatus::Approved => (TrustEventKind::ReportApproved, REPORT_APPROVED_POINTS),
                _ => (TrustEventKind::ReportRejected, REPORT_REJECTED_POINTS),
            };
            if let Err(err) = usecases::apply_trust_delta(
                db,
                submitter.as_str(),
                kind,
                points,
                Some(item.content_id.clone()),
                None,
                now,
            ) {
                warn!("Failed to settle submitter points for queue item {item_id}: {err}");
            }
        }
        if let Err(err) = usecases::apply_trust_delta(
            db,
            moderator.id.as_str(),
            TrustEventKind::ModerationAction,
            MODERATION_ACTION_POINTS,
            Some(item.content_id.clone()),
            None,
            now,
        ) {
            warn!("Failed to award moderation points to {}: {err}", moderator.id);
        }
    }

    let audit_action = match decision {
        usecases::ModerationDecision::Approve => "moderation.approved",
        usecases::ModerationDecision::Reject => "moderation.rejected",
        usecases::ModerationDecision::Flag => "moderation.flagged",
    };
    let entry = AuditEntry::new(
        item.content_id.clone(),
        audit_action,
        ActivityLog {
            activity: Activity::at(now, Some(moderator.id.clone())),
            context: Some("moderation".to_string()),
            comment: item.moderator_notes.clone(),
        },
    );
    if let Err(err) = db.append_audit_entry(&entry) {
        warn!("Failed to write audit entry for queue item {item_id}: {err}");
    }

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazmap_db_mem::MemStore;
    use hazmap_entities::builders::*;

    fn store_with_pending_hazard() -> (MemStore, User) {
        let store = MemStore::default();
        store
            .create_user(&User::build().id("reporter").trust_score(20).finish())
            .unwrap();
        let moderator = User::build().id("mod-1").role(Role::Moderator).finish();
        store.create_user(&moderator).unwrap();
        store
            .create_hazard(Hazard::build().id("h1").finish())
            .unwrap();
        store
            .add_queue_item(
                QueueItem::build()
                    .id("q1")
                    .kind(ContentKind::Hazard)
                    .content_id("h1")
                    .submitted_by("reporter")
                    .finish(),
            )
            .unwrap();
        (store, moderator)
    }

    fn approve() -> usecases::ModerationAction {
        usecases::ModerationAction {
            decision: usecases::ModerationDecision::Approve,
            reason: None,
            notes: None,
        }
    }

    #[test]
    fn approval_settles_points_and_audit_trail() {
        let (store, moderator) = store_with_pending_hazard();
        let now = Timestamp::from_secs(1_000_000);

        let item = process_moderation_action(&store, &moderator, "q1", approve(), now).unwrap();
        assert_eq!(QueueStatus::Approved, item.status);
        assert_eq!(
            HazardStatus::Approved,
            store.get_hazard("h1").unwrap().status
        );
        assert_eq!(
            20 + REPORT_APPROVED_POINTS,
            store.get_user("reporter").unwrap().trust_score
        );
        assert_eq!(
            MODERATION_ACTION_POINTS,
            store.get_user("mod-1").unwrap().trust_score
        );
        assert_eq!(1, store.audit_entries_of_subject("h1").unwrap().len());
    }

    #[test]
    fn rejection_deducts_submitter_points() {
        let (store, moderator) = store_with_pending_hazard();
        let action = usecases::ModerationAction {
            decision: usecases::ModerationDecision::Reject,
            reason: None,
            notes: None,
        };
        process_moderation_action(&store, &moderator, "q1", action, Timestamp::now()).unwrap();
        assert_eq!(
            20 + REPORT_REJECTED_POINTS,
            store.get_user("reporter").unwrap().trust_score
        );
    }

    #[test]
    fn flagging_settles_no_points() {
        let (store, moderator) = store_with_pending_hazard();
        let action = usecases::ModerationAction {
            decision: usecases::ModerationDecision::Flag,
            reason: Some("needs a second look".into()),
            notes: None,
        };
        process_moderation_action(&store, &moderator, "q1", action, Timestamp::now()).unwrap();
        assert_eq!(20, store.get_user("reporter").unwrap().trust_score);
        assert_eq!(0, store.get_user("mod-1").unwrap().trust_score);
        // Flagging still leaves an audit trace.
        assert_eq!(1, store.audit_entries_of_subject("h1").unwrap().len());
    }

    #[test]
    fn plain_users_are_rejected() {
        let (store, _) = store_with_pending_hazard();
        let user = User::build().role(Role::User).finish();
        assert!(
            process_moderation_action(&store, &user, "q1", approve(), Timestamp::now()).is_err()
        );
    }
}
