use super::*;
use hazmap_core::geometry::SimplifyConfig;

pub const REPORT_SUBMITTED_POINTS: TrustScore = 5;

#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub hazard: Hazard,
    pub queue_item: QueueItem,
    pub screening: usecases::Screening,
}

/// Full submission flow: pre-screen, validate and store the hazard,
/// enqueue it for moderation and award the submission points.
///
/// The screening verdict only seeds the queue priority and the flagged
/// reasons; it never approves or rejects on its own. The trust award is
/// best-effort.
pub fn submit_hazard<D: Db>(
    db: &D,
    submitter: &User,
    submission: usecases::NewHazard,
    region: &RegionPolicy,
    simplify: &SimplifyConfig,
    now: Timestamp,
) -> Result<SubmissionOutcome> {
    let existing = db.all_hazards()?;
    let screening = usecases::prescreen_submission(&submission, region, &existing);
    if !screening.reasons.is_empty() {
        info!(
            "Screening of submission by user {}: {:?} ({:?})",
            submitter.id, screening.recommendation, screening.reasons
        );
    }

    let hazard = usecases::create_hazard(db, submitter, submission, simplify, now)?;
    let priority = usecases::initial_priority(hazard.severity, &screening);
    let queue_item = usecases::enqueue_content(
        db,
        ContentKind::Hazard,
        hazard.id.clone(),
        Some(submitter.id.clone()),
        priority,
        screening.reasons.clone(),
        now,
    )?;

    if let Err(err) = usecases::apply_trust_delta(
        db,
        submitter.id.as_str(),
        TrustEventKind::ReportSubmitted,
        REPORT_SUBMITTED_POINTS,
        Some(hazard.id.clone()),
        None,
        now,
    ) {
        warn!(
            "Failed to award submission points to user {}: {err}",
            submitter.id
        );
    }

    Ok(SubmissionOutcome {
        hazard,
        queue_item,
        screening,
    })
}
