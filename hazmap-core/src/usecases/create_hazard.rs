use super::prelude::*;
use crate::geometry::{auto_simplify_polygon, SimplifyConfig};

pub const MAX_TITLE_LEN: usize = 120;
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Raw submission parameters as they arrive over the wire.
#[derive(Debug, Clone)]
pub struct NewHazard {
    pub title: String,
    pub description: String,
    pub category: String,
    pub severity: SeverityPrimitive,
    pub lat: f64,
    pub lng: f64,
    /// Optional user-drawn area as (lat, lng) pairs.
    pub area: Option<Vec<(f64, f64)>>,
    /// Overrides the category's auto-expire default.
    pub expires_in_hours: Option<i64>,
}

/// Validates a submission and stores the resulting hazard record with
/// status `Pending`. Any drawn area is simplified to its vertex budget
/// before it is persisted.
pub fn create_hazard<R>(
    repo: &R,
    submitter: &User,
    new_hazard: NewHazard,
    simplify: &SimplifyConfig,
    now: Timestamp,
) -> Result<Hazard>
where
    R: HazardRepo + CategoryRepo,
{
    let NewHazard {
        title,
        description,
        category,
        severity,
        lat,
        lng,
        area,
        expires_in_hours,
    } = new_hazard;

    let title = title.trim().to_string();
    if title.is_empty() || title.len() > MAX_TITLE_LEN {
        return Err(Error::Title);
    }
    let description = description.trim().to_string();
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(Error::Description);
    }
    let severity = Severity::try_from(severity)?;
    let position = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::Position)?;

    let category = match repo.get_category(&category) {
        Ok(category) => category,
        Err(crate::RepoError::NotFound) => return Err(Error::Category),
        Err(err) => return Err(err.into()),
    };

    let area = area
        .map(|points| {
            points
                .into_iter()
                .map(|(lat, lng)| {
                    MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::Position)
                })
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?
        .map(|points| auto_simplify_polygon(&Polygon::new(points), simplify));

    let expire_hours = expires_in_hours.or(category.auto_expire_hours);
    let expiration = match expire_hours {
        Some(hours) if hours > 0 => Expiration::auto_expire(now + Duration::from_hours(hours)),
        _ => Expiration::default(),
    };

    let hazard = Hazard {
        id: Id::new(),
        title,
        description,
        category: category.id,
        severity,
        position,
        area,
        status: HazardStatus::Pending,
        expiration,
        resolution_confirmations: vec![],
        created: Activity::at(now, Some(submitter.id.clone())),
    };
    log::info!("Creating hazard {} ({})", hazard.id, hazard.title);
    repo.create_hazard(hazard.clone())?;
    Ok(hazard)
}
