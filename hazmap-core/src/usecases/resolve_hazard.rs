use super::authorize::authorize_role;
use super::prelude::*;

/// Manual resolution of a hazard by a moderator.
///
/// Resolution is orthogonal to the review status; a pending hazard can be
/// resolved, too. Resolving twice is an error.
pub fn resolve_hazard<R>(
    repo: &R,
    moderator: &User,
    id: &str,
    note: Option<String>,
    now: Timestamp,
) -> Result<Hazard>
where
    R: HazardRepo + AuditLogRepo,
{
    authorize_role(moderator, Role::Moderator)?;
    let hazard = repo.get_hazard(id)?;
    if hazard.expiration.is_resolved() {
        return Err(Error::AlreadyResolved);
    }
    let note = note
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Resolved by moderator".to_string());
    let activity = Activity::at(now, Some(moderator.id.clone()));
    repo.mark_hazard_resolved(id, &activity, &note)?;
    log::info!("Moderator {} resolved hazard {id}", moderator.id);

    let entry = AuditEntry::new(
        hazard.id.clone(),
        "hazard.resolved",
        ActivityLog {
            activity,
            context: Some("moderation".to_string()),
            comment: Some(note),
        },
    );
    if let Err(err) = repo.append_audit_entry(&entry) {
        log::warn!("Failed to write audit entry for resolved hazard {id}: {err}");
    }
    repo.get_hazard(id).map_err(Into::into)
}
