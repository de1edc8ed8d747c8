use super::authorize::authorize_role;
use super::prelude::*;

pub const CONFIRMATIONS_TO_RESOLVE: usize = 3;

/// Community confirmation that a hazard is gone.
///
/// Each signed-in user counts at most once. Once enough distinct users
/// have confirmed, the hazard is resolved with a system activity record,
/// the same way the expiration sweep resolves it.
pub fn confirm_resolution<R>(repo: &R, user: &User, id: &str, now: Timestamp) -> Result<Hazard>
where
    R: HazardRepo + AuditLogRepo,
{
    authorize_role(user, Role::User)?;
    let mut hazard = repo.get_hazard(id)?;
    if hazard.expiration.is_resolved() {
        return Err(Error::AlreadyResolved);
    }
    if !hazard.resolution_confirmations.contains(&user.id) {
        hazard.resolution_confirmations.push(user.id.clone());
        repo.update_hazard(&hazard)?;
    }
    if hazard.resolution_confirmations.len() < CONFIRMATIONS_TO_RESOLVE {
        return repo.get_hazard(id).map_err(Into::into);
    }

    let note = format!(
        "Resolved after {} community confirmations",
        hazard.resolution_confirmations.len()
    );
    let activity = Activity::at(now, None);
    repo.mark_hazard_resolved(id, &activity, &note)?;
    log::info!("Hazard {id} resolved by community confirmation");

    let entry = AuditEntry::new(
        hazard.id.clone(),
        "hazard.resolved",
        ActivityLog {
            activity,
            context: Some("confirmation".to_string()),
            comment: Some(note),
        },
    );
    if let Err(err) = repo.append_audit_entry(&entry) {
        log::warn!("Failed to write audit entry for confirmed hazard {id}: {err}");
    }
    repo.get_hazard(id).map_err(Into::into)
}
