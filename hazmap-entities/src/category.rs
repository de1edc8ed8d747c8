use crate::id::*;

/// A hazard category (plant, animal, terrain, weather, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Id,
    pub name: String,
    /// Lowercase keywords used for submission-time category suggestions.
    pub keywords: Vec<String>,
    /// Default lifetime in hours for auto-expiring hazards of this
    /// category, if any.
    pub auto_expire_hours: Option<i64>,
}

impl Category {
    pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            keywords: vec![],
            auto_expire_hours: None,
        }
    }
}
