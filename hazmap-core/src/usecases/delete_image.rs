use super::authorize::authorize_role;
use super::prelude::*;

/// Removes a hazard image record. The object-storage blob behind the
/// storage key is owned by the external storage service and is cleaned
/// up out of band.
pub fn delete_image<R>(repo: &R, moderator: &User, id: &str, now: Timestamp) -> Result<()>
where
    R: ImageRepo + AuditLogRepo,
{
    authorize_role(moderator, Role::Moderator)?;
    let image = repo.get_image(id)?;
    repo.delete_image(id)?;
    log::info!(
        "Moderator {} deleted image {id} of hazard {}",
        moderator.id,
        image.hazard_id
    );

    let entry = AuditEntry::new(
        image.id,
        "image.deleted",
        ActivityLog {
            activity: Activity::at(now, Some(moderator.id.clone())),
            context: Some("moderation".to_string()),
            comment: None,
        },
    );
    if let Err(err) = repo.append_audit_entry(&entry) {
        log::warn!("Failed to write audit entry for deleted image {id}: {err}");
    }
    Ok(())
}
