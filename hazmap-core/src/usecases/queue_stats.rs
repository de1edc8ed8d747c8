use super::prelude::*;

/// Average review time is sampled over the most recent resolutions
/// instead of the whole history.
pub const REVIEW_TIME_SAMPLE_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct QueueStats {
    pub pending: u64,
    pub approved_today: u64,
    pub rejected_today: u64,
    /// `None` while no resolved items exist yet.
    pub avg_review_minutes: Option<f64>,
    pub pending_by_priority: Vec<(QueuePriority, u64)>,
}

/// Dashboard summary of the moderation queue. "Today" is bounded by
/// UTC midnight.
pub fn queue_stats<R>(repo: &R, now: Timestamp) -> Result<QueueStats>
where
    R: QueueRepo,
{
    let pending_by_priority = repo.count_pending_by_priority()?;
    let pending = pending_by_priority.iter().map(|(_, count)| count).sum();

    let today = repo.resolved_since(now.start_of_day())?;
    let approved_today = today
        .iter()
        .filter(|item| item.status == QueueStatus::Approved)
        .count() as u64;
    let rejected_today = today
        .iter()
        .filter(|item| item.status == QueueStatus::Rejected)
        .count() as u64;

    let sample = repo.recently_resolved(REVIEW_TIME_SAMPLE_SIZE)?;
    let review_minutes: Vec<f64> = sample
        .iter()
        .filter_map(QueueItem::review_duration)
        .map(|duration| duration.as_secs() as f64 / 60.0)
        .collect();
    let avg_review_minutes = if review_minutes.is_empty() {
        None
    } else {
        Some(review_minutes.iter().sum::<f64>() / review_minutes.len() as f64)
    };

    Ok(QueueStats {
        pending,
        approved_today,
        rejected_today,
        avg_review_minutes,
        pending_by_priority,
    })
}
