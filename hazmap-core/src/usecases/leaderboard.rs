use super::prelude::*;
use crate::trust::{tier_for_score, TrustTier};

pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;
pub const MAX_LEADERBOARD_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub user_id: Id,
    pub trust_score: TrustScore,
    pub tier: &'static TrustTier,
}

/// Users with the highest trust scores. Ordering ties are broken by id so
/// repeated queries yield a stable ranking.
pub fn leaderboard<R>(repo: &R, limit: Option<usize>) -> Result<Vec<LeaderboardEntry>>
where
    R: UserRepo,
{
    let limit = match limit {
        Some(0) => return Err(Error::InvalidLimit),
        Some(limit) => limit.min(MAX_LEADERBOARD_LIMIT),
        None => DEFAULT_LEADERBOARD_LIMIT,
    };
    let users = repo.top_users_by_trust_score(limit)?;
    Ok(users
        .into_iter()
        .map(|user| LeaderboardEntry {
            tier: tier_for_score(user.trust_score),
            user_id: user.id,
            trust_score: user.trust_score,
        })
        .collect())
}
