use strum::EnumString;

use crate::{id::*, time::*};

/// Moderation state of an uploaded hazard image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, strum::Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ImageModerationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Reference to an uploaded image in the external object storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HazardImage {
    pub id: Id,
    pub hazard_id: Id,
    pub storage_key: String,
    pub moderation_status: ImageModerationStatus,
    pub uploaded_at: Timestamp,
}
