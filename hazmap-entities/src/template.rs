use strum::EnumString;

use crate::{id::*, time::*};

/// Publication state of an educational template.
///
/// Note that templates use a different status vocabulary than hazards:
/// an approved template is *published*.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, strum::Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TemplateStatus {
    #[default]
    Draft,
    Published,
    Rejected,
}

/// Educational content about a hazard type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: Id,
    pub title: String,
    pub body: String,
    pub category: Option<Id>,
    pub status: TemplateStatus,
    pub created_at: Timestamp,
}
