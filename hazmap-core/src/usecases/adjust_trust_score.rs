use super::authorize::authorize_role;
use super::prelude::*;

/// Applies a trust score change to a user and appends the corresponding
/// [`TrustEvent`]. Scores never drop below zero. The event insert is
/// best-effort; its failure leaves the score updated and is only warned.
pub fn apply_trust_delta<R>(
    repo: &R,
    user_id: &str,
    kind: TrustEventKind,
    delta: TrustScore,
    related_content: Option<Id>,
    note: Option<String>,
    now: Timestamp,
) -> Result<User>
where
    R: UserRepo + TrustEventRepo,
{
    let mut user = repo.get_user(user_id)?;
    let previous_score = user.trust_score;
    user.trust_score = (previous_score + delta).max(0);
    repo.update_user(&user)?;
    log::info!(
        "Trust score of user {user_id}: {previous_score} -> {} ({kind})",
        user.trust_score
    );

    let event = TrustEvent {
        id: Id::new(),
        user_id: user.id.clone(),
        kind,
        delta,
        previous_score,
        new_score: user.trust_score,
        related_content,
        note,
        created_at: now,
    };
    if let Err(err) = repo.append_trust_event(&event) {
        log::warn!("Failed to record trust event for user {user_id}: {err}");
    }
    Ok(user)
}

/// Manual score correction, restricted to admins.
pub fn adjust_trust_score<R>(
    repo: &R,
    admin: &User,
    user_id: &str,
    delta: TrustScore,
    note: Option<String>,
    now: Timestamp,
) -> Result<User>
where
    R: UserRepo + TrustEventRepo,
{
    authorize_role(admin, Role::Admin)?;
    apply_trust_delta(
        repo,
        user_id,
        TrustEventKind::AdminAdjustment,
        delta,
        None,
        note,
        now,
    )
}
