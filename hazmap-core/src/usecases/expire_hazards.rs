use super::prelude::*;

/// Pure view filter that hides expired and resolved records without
/// touching the database. Idempotent under repeated application.
pub fn filter_expired_hazards(hazards: Vec<Hazard>, now: Timestamp) -> Vec<Hazard> {
    hazards
        .into_iter()
        .filter(|hazard| !hazard.is_expired(now) && !hazard.expiration.is_resolved())
        .collect()
}

fn resolution_note(elapsed: Duration) -> String {
    format!(
        "Automatically resolved after expiration ({} hour(s) past expiry)",
        elapsed.whole_hours()
    )
}

/// Resolves a single hazard iff it is past its expiry.
///
/// The predicate is re-checked against a fresh copy of the record to narrow
/// the window between read and write. Returns whether a transition occurred.
/// The audit-log insert is best-effort; its failure is only warned.
pub fn expire_hazard_if_needed<R>(repo: &R, id: &str, now: Timestamp) -> Result<bool>
where
    R: HazardRepo + AuditLogRepo,
{
    let hazard = repo.get_hazard(id)?;
    if !hazard.is_expired(now) {
        return Ok(false);
    }
    let expires_at = hazard
        .expiration
        .expires_at
        .expect("expired hazard has an expiry timestamp");
    let note = resolution_note(now - expires_at);
    // `by == None`: system-triggered resolution.
    let activity = Activity::at(now, None);
    repo.mark_hazard_resolved(id, &activity, &note)?;
    log::info!("Auto-resolved expired hazard {id}");

    let entry = AuditEntry::new(
        hazard.id,
        "hazard.auto_expired",
        ActivityLog {
            activity,
            context: Some("expiration".to_string()),
            comment: Some(note),
        },
    );
    if let Err(err) = repo.append_audit_entry(&entry) {
        log::warn!("Failed to write audit entry for expired hazard {id}: {err}");
    }
    Ok(true)
}

/// Resolves all hazards that are past their expiry.
///
/// Individual failures are logged and skipped; the returned count covers
/// the successful transitions only. Safe to call repeatedly.
pub fn expire_all_expired_hazards<R>(repo: &R, now: Timestamp) -> Result<usize>
where
    R: HazardRepo + AuditLogRepo,
{
    let candidates = repo.expired_hazard_candidates(now)?;
    let mut expired = 0;
    for hazard in candidates {
        match expire_hazard_if_needed(repo, hazard.id.as_str(), now) {
            Ok(true) => expired += 1,
            Ok(false) => (),
            Err(err) => {
                log::warn!("Failed to expire hazard {}: {err}", hazard.id);
            }
        }
    }
    log::info!("Auto-resolved {expired} expired hazard(s)");
    Ok(expired)
}
