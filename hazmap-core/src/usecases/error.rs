use thiserror::Error;

use crate::repositories;
use hazmap_entities::{geo::CoordParseError, hazard::SeverityOutOfRange};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("The description is invalid")]
    Description,
    #[error("Unknown category")]
    Category,
    #[error("Severity out of range")]
    Severity,
    #[error("Invalid position")]
    Position,
    #[error("Bounding box is invalid")]
    Bbox,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("The item has already been resolved")]
    AlreadyResolved,
    #[error("Unknown field")]
    UnknownField,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<SeverityOutOfRange> for Error {
    fn from(_: SeverityOutOfRange) -> Self {
        Self::Severity
    }
}

impl From<CoordParseError> for Error {
    fn from(_: CoordParseError) -> Self {
        Self::Position
    }
}
