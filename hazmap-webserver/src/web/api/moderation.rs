use anyhow::anyhow;

use super::*;
use hazmap_boundary as json;

type NoStoreResult<T> = result::Result<NoStore<Json<T>>, ApiError>;

fn decision_from_json(from: json::ModerationDecision) -> usecases::ModerationDecision {
    use usecases::ModerationDecision as D;
    match from {
        json::ModerationDecision::Approve => D::Approve,
        json::ModerationDecision::Reject => D::Reject,
        json::ModerationDecision::Flag => D::Flag,
    }
}

#[get("/moderation/next")]
pub fn get_next_queue_item(
    db: &State<MemStore>,
    auth: Auth,
) -> NoStoreResult<Option<json::QueueItem>> {
    let moderator = auth.user_with_min_role(db.inner(), Role::Moderator)?;
    let item = usecases::next_queue_item(db.inner(), &moderator.id)?;
    Ok(NoStore(Json(item.map(Into::into))))
}

#[get("/moderation/queue?<status>&<offset>&<limit>")]
pub fn get_queue(
    db: &State<MemStore>,
    auth: Auth,
    status: Option<String>,
    offset: Option<u64>,
    limit: Option<u64>,
) -> NoStoreResult<Vec<json::QueueItem>> {
    auth.user_with_min_role(db.inner(), Role::Moderator)?;
    let status = status
        .map(|status| {
            status.parse::<QueueStatus>().map_err(|_| {
                ApiError::OtherWithStatus(
                    anyhow!("Invalid status filter: {status}"),
                    Status::BadRequest,
                )
            })
        })
        .transpose()?;
    let pagination = Pagination { offset, limit };
    let items = usecases::queue_page(db.inner(), status, &pagination)?;
    Ok(NoStore(Json(items.into_iter().map(Into::into).collect())))
}

#[get("/moderation/stats")]
pub fn get_queue_stats(db: &State<MemStore>, auth: Auth) -> NoStoreResult<json::QueueStats> {
    auth.user_with_min_role(db.inner(), Role::Moderator)?;
    let stats = usecases::queue_stats(db.inner(), Timestamp::now())?;
    let usecases::QueueStats {
        pending,
        approved_today,
        rejected_today,
        avg_review_minutes,
        pending_by_priority,
    } = stats;
    Ok(NoStore(Json(json::QueueStats {
        pending,
        approved_today,
        rejected_today,
        avg_review_minutes,
        pending_by_priority: pending_by_priority
            .into_iter()
            .map(|(priority, count)| json::PriorityCount {
                priority: priority.into(),
                count,
            })
            .collect(),
    })))
}

#[post("/moderation/process", data = "<process>")]
pub fn post_process_queue_item(
    db: &State<MemStore>,
    auth: Auth,
    process: JsonResult<json::ProcessQueueItem>,
) -> NoStoreResult<json::QueueItem> {
    let moderator = auth.user_with_min_role(db.inner(), Role::Moderator)?;
    let json::ProcessQueueItem {
        item_id,
        action,
        reason,
        notes,
    } = process?.into_inner();
    let action = usecases::ModerationAction {
        decision: decision_from_json(action),
        reason,
        notes,
    };
    let item =
        flows::process_moderation_action(db.inner(), &moderator, &item_id, action, Timestamp::now())?;
    Ok(NoStore(Json(item.into())))
}
