use super::*;
use hazmap_boundary as json;
use hazmap_core::util::filter;

/// Upper bound of markers a single map view request may return.
const DEFAULT_MARKER_BUDGET: usize = 500;

#[get("/hazards?<bbox>&<limit>")]
pub fn get_hazards(
    db: &State<MemStore>,
    bbox: Option<String>,
    limit: Option<usize>,
    if_none_match: IfNoneMatch,
) -> result::Result<CachedJson, ApiError> {
    let now = Timestamp::now();
    let bbox = bbox
        .map(|bbox| bbox.parse::<MapBbox>().map_err(|_| ParameterError::Bbox))
        .transpose()?;
    let budget = match limit {
        Some(0) => return Err(ParameterError::InvalidLimit.into()),
        Some(limit) => limit.min(DEFAULT_MARKER_BUDGET),
        None => DEFAULT_MARKER_BUDGET,
    };

    let approved: Vec<Hazard> = db
        .all_hazards()?
        .into_iter()
        .filter(|hazard| hazard.status.is_visible())
        .collect();
    let active = usecases::filter_expired_hazards(approved, now);
    let visible = match &bbox {
        Some(bbox) => filter::within_viewport(&active, bbox),
        None => active.iter().collect(),
    };
    let markers: Vec<json::Hazard> = filter::apply_marker_budget(&visible, budget)
        .into_iter()
        .cloned()
        .map(Into::into)
        .collect();
    CachedJson::new(ResourceKind::Hazards, &markers, if_none_match.0.as_deref())
}

fn submission_from_json(from: json::NewHazard) -> usecases::NewHazard {
    let json::NewHazard {
        title,
        description,
        category,
        severity,
        lat,
        lng,
        area,
        expires_in_hours,
    } = from;
    usecases::NewHazard {
        title,
        description,
        category,
        severity,
        lat,
        lng,
        area: area.map(|points| points.into_iter().map(|c| (c.lat, c.lng)).collect()),
        expires_in_hours,
    }
}

fn screening_to_json(from: &usecases::Screening) -> json::Screening {
    use usecases::ScreeningRecommendation as S;
    json::Screening {
        recommendation: match from.recommendation {
            S::Approve => json::ScreeningRecommendation::Approve,
            S::Review => json::ScreeningRecommendation::Review,
            S::Flag => json::ScreeningRecommendation::Flag,
            S::Reject => json::ScreeningRecommendation::Reject,
        },
        confidence: from.confidence,
        reasons: from.reasons.clone(),
    }
}

#[post("/hazards", data = "<new_hazard>")]
pub fn post_hazard(
    db: &State<MemStore>,
    cfg: &State<Cfg>,
    auth: Auth,
    new_hazard: JsonResult<json::NewHazard>,
) -> Result<json::SubmissionResponse> {
    let user = auth.user_with_min_role(db.inner(), Role::User)?;
    let submission = submission_from_json(new_hazard?.into_inner());
    let outcome = flows::submit_hazard(
        db.inner(),
        &user,
        submission,
        &cfg.region,
        &cfg.simplify,
        Timestamp::now(),
    )?;
    Ok(Json(json::SubmissionResponse {
        hazard: outcome.hazard.into(),
        queue_item_id: outcome.queue_item.id.into(),
        screening: screening_to_json(&outcome.screening),
    }))
}

#[post("/hazards/<id>/resolve", data = "<resolve>")]
pub fn post_resolve_hazard(
    db: &State<MemStore>,
    auth: Auth,
    id: String,
    resolve: JsonResult<json::ResolveHazard>,
) -> Result<json::Hazard> {
    let moderator = auth.user_with_min_role(db.inner(), Role::Moderator)?;
    let note = resolve?.into_inner().note;
    let hazard = usecases::resolve_hazard(db.inner(), &moderator, &id, note, Timestamp::now())?;
    Ok(Json(hazard.into()))
}

#[post("/hazards/<id>/resolution-confirmation")]
pub fn post_confirm_resolution(
    db: &State<MemStore>,
    auth: Auth,
    id: String,
) -> Result<json::Hazard> {
    let user = auth.user_with_min_role(db.inner(), Role::User)?;
    let hazard = usecases::confirm_resolution(db.inner(), &user, &id, Timestamp::now())?;
    Ok(Json(hazard.into()))
}
