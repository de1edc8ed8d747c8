use super::*;
use hazmap_boundary as json;
use hazmap_core::trust::{tier_for_score, tier_progress, TrustTier};

fn tier_to_json(tier: &'static TrustTier) -> json::TrustTier {
    json::TrustTier {
        name: tier.name.to_string(),
        min_score: tier.min_score,
        icon: tier.icon.to_string(),
        color: tier.color.to_string(),
    }
}

fn trust_summary(user: &User) -> json::TrustSummary {
    json::TrustSummary {
        user_id: user.id.to_string(),
        score: user.trust_score,
        tier: tier_to_json(tier_for_score(user.trust_score)),
        progress: tier_progress(user.trust_score),
    }
}

#[get("/users/<id>/trust")]
pub fn get_user_trust(db: &State<MemStore>, id: String) -> Result<json::TrustSummary> {
    let user = db.get_user(&id)?;
    Ok(Json(trust_summary(&user)))
}

#[get("/trust/leaderboard?<limit>")]
pub fn get_leaderboard(
    db: &State<MemStore>,
    limit: Option<usize>,
) -> Result<Vec<json::LeaderboardEntry>> {
    let entries = usecases::leaderboard(db.inner(), limit)?;
    Ok(Json(
        entries
            .into_iter()
            .map(|entry| json::LeaderboardEntry {
                user_id: entry.user_id.to_string(),
                score: entry.trust_score,
                tier: entry.tier.name.to_string(),
            })
            .collect(),
    ))
}

#[post("/admin/trust/adjust", data = "<adjust>")]
pub fn post_adjust_trust_score(
    db: &State<MemStore>,
    auth: Auth,
    adjust: JsonResult<json::AdjustTrustScore>,
) -> Result<json::TrustSummary> {
    let admin = auth.user_with_min_role(db.inner(), Role::Admin)?;
    let json::AdjustTrustScore {
        user_id,
        delta,
        note,
    } = adjust?.into_inner();
    let user = usecases::adjust_trust_score(
        db.inner(),
        &admin,
        &user_id,
        delta,
        note,
        Timestamp::now(),
    )?;
    Ok(Json(trust_summary(&user)))
}
