use super::create_hazard::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use super::prelude::*;

/// Validates a single submission field ahead of the full submission.
///
/// `position` expects a `"lat,lng"` pair in degrees. Unknown field names
/// are an error, not a silent pass.
pub fn validate_field<R>(repo: &R, field: &str, value: &str) -> Result<()>
where
    R: CategoryRepo,
{
    match field {
        "title" => {
            let trimmed = value.trim();
            if trimmed.is_empty() || trimmed.len() > MAX_TITLE_LEN {
                return Err(Error::Title);
            }
        }
        "description" => {
            if value.trim().len() > MAX_DESCRIPTION_LEN {
                return Err(Error::Description);
            }
        }
        "severity" => {
            let primitive: SeverityPrimitive =
                value.trim().parse().map_err(|_| Error::Severity)?;
            Severity::try_from(primitive)?;
        }
        "position" => {
            value.parse::<MapPoint>()?;
        }
        "category" => match repo.get_category(value) {
            Ok(_) => (),
            Err(crate::RepoError::NotFound) => return Err(Error::Category),
            Err(err) => return Err(err.into()),
        },
        _ => return Err(Error::UnknownField),
    }
    Ok(())
}
