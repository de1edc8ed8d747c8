use super::prelude::*;

/// Terminal or flagging decision of a moderator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationDecision {
    Approve,
    Reject,
    Flag,
}

#[derive(Debug, Clone)]
pub struct ModerationAction {
    pub decision: ModerationDecision,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

pub const GENERIC_FLAG_REASON: &str = "Flagged for further review";

/// Fetches the next reviewable item for the given moderator and claims it.
///
/// Items are served by priority (descending) and then oldest first so that
/// long-waiting submissions are not starved. An unassigned item is claimed
/// by the caller; repeated calls by the same moderator return the same item
/// until it is processed. An empty queue yields `None`.
pub fn next_queue_item<R>(repo: &R, moderator: &Id) -> Result<Option<QueueItem>>
where
    R: QueueRepo,
{
    let Some(mut item) = repo.next_pending_item(moderator)? else {
        return Ok(None);
    };
    if item.assigned_moderator.is_none() {
        item.assigned_moderator = Some(moderator.clone());
        repo.update_queue_item(&item)?;
        log::debug!("Moderator {moderator} claimed queue item {}", item.id);
    }
    Ok(Some(item))
}

/// Claims a specific item by id with the same semantics as
/// [`next_queue_item`]. Yields `None` if the item is missing, not pending
/// anymore or already claimed by somebody else.
pub fn claim_queue_item<R>(repo: &R, item_id: &str, moderator: &Id) -> Result<Option<QueueItem>>
where
    R: QueueRepo,
{
    let mut item = match repo.get_queue_item(item_id) {
        Ok(item) => item,
        Err(crate::RepoError::NotFound) => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    if item.status != QueueStatus::Pending {
        return Ok(None);
    }
    match &item.assigned_moderator {
        Some(assigned) if assigned != moderator => return Ok(None),
        Some(_) => (),
        None => {
            item.assigned_moderator = Some(moderator.clone());
            repo.update_queue_item(&item)?;
        }
    }
    Ok(Some(item))
}

/// Applies a moderator decision to a queue item.
///
/// Approve/reject are terminal and propagate to the underlying content with
/// the vocabulary of its kind; flagging keeps the item pending and replaces
/// its `flagged_reasons`.
pub fn process_queue_item<R>(
    repo: &R,
    item_id: &str,
    action: ModerationAction,
    moderator: &Id,
    now: Timestamp,
) -> Result<QueueItem>
where
    R: QueueRepo + HazardRepo + ImageRepo + TemplateRepo,
{
    let mut item = repo.get_queue_item(item_id)?;
    if item.status.is_terminal() {
        return Err(Error::AlreadyResolved);
    }
    let ModerationAction {
        decision,
        reason,
        notes,
    } = action;
    match decision {
        ModerationDecision::Approve | ModerationDecision::Reject => {
            item.status = if decision == ModerationDecision::Approve {
                QueueStatus::Approved
            } else {
                QueueStatus::Rejected
            };
            item.resolved_at = Some(now);
            item.assigned_moderator = Some(moderator.clone());
            if notes.is_some() {
                item.moderator_notes = notes;
            }
            repo.update_queue_item(&item)?;
            propagate_decision(repo, &item)?;
            log::info!(
                "Moderator {moderator} resolved queue item {} as {}",
                item.id,
                item.status
            );
        }
        ModerationDecision::Flag => {
            let mut reasons: Vec<String> = reason
                .into_iter()
                .chain(notes)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if reasons.is_empty() {
                reasons.push(GENERIC_FLAG_REASON.to_string());
            }
            item.flagged_reasons = reasons;
            // The item stays pending; flagging never terminates.
            repo.update_queue_item(&item)?;
            log::info!("Moderator {moderator} flagged queue item {}", item.id);
        }
    }
    Ok(item)
}

fn propagate_decision<R>(repo: &R, item: &QueueItem) -> Result<()>
where
    R: HazardRepo + ImageRepo + TemplateRepo,
{
    debug_assert!(item.status.is_terminal());
    let approved = item.status == QueueStatus::Approved;
    let content_id = item.content_id.as_str();
    match item.kind {
        ContentKind::Hazard => {
            let status = if approved {
                HazardStatus::Approved
            } else {
                HazardStatus::Rejected
            };
            repo.set_hazard_status(content_id, status)?;
        }
        ContentKind::Template => {
            // Approved templates are *published*.
            let status = if approved {
                TemplateStatus::Published
            } else {
                TemplateStatus::Rejected
            };
            repo.set_template_status(content_id, status)?;
        }
        ContentKind::Image => {
            let status = if approved {
                ImageModerationStatus::Approved
            } else {
                ImageModerationStatus::Rejected
            };
            repo.set_image_moderation_status(content_id, status)?;
        }
        // User reports have no content table to update.
        ContentKind::UserReport => (),
    }
    Ok(())
}

/// Inserts new content into the moderation queue with status `Pending`.
pub fn enqueue_content<R>(
    repo: &R,
    kind: ContentKind,
    content_id: Id,
    submitted_by: Option<Id>,
    priority: QueuePriority,
    flagged_reasons: Vec<String>,
    now: Timestamp,
) -> Result<QueueItem>
where
    R: QueueRepo,
{
    let item = QueueItem {
        id: Id::new(),
        kind,
        content_id,
        submitted_by,
        flagged_reasons,
        priority,
        status: QueueStatus::Pending,
        assigned_moderator: None,
        moderator_notes: None,
        created_at: now,
        resolved_at: None,
    };
    repo.add_queue_item(item.clone())?;
    Ok(item)
}

/// Paginated queue listing; the sort order depends on the status filter
/// (see [`QueueRepo::queue_page`]).
pub fn queue_page<R>(
    repo: &R,
    status: Option<QueueStatus>,
    pagination: &Pagination,
) -> Result<Vec<QueueItem>>
where
    R: QueueRepo,
{
    if let Some(limit) = pagination.limit {
        if limit == 0 {
            return Err(Error::InvalidLimit);
        }
    }
    Ok(repo.queue_page(status, pagination)?)
}
