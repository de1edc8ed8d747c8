use crate::{id::*, time::*};

/// Who did what and when.
///
/// `by == None` identifies the system actor, e.g. for automatically
/// resolved hazards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub at: Timestamp,
    pub by: Option<Id>,
}

impl Activity {
    pub fn now(by: Option<Id>) -> Self {
        Self {
            at: Timestamp::now(),
            by,
        }
    }

    pub fn at(at: Timestamp, by: Option<Id>) -> Self {
        Self { at, by }
    }
}

/// An activity enriched with free-form context for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    pub activity: Activity,
    pub context: Option<String>,
    pub comment: Option<String>,
}
