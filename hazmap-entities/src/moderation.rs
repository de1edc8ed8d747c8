use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{EnumCount, EnumIter, EnumString};
use thiserror::Error;

use crate::{id::*, time::*};

/// Kind of content a moderation queue item refers to.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, EnumString, strum::Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ContentKind {
    Hazard,
    Image,
    Template,
    UserReport,
}

pub type QueuePriorityPrimitive = i16;

/// Retrieval priority of a queue item.
///
///// Together with `created_at` this defines the queue order:
/// priority descending, then oldest first.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum QueuePriority {
    Low    = 0,
    Medium = 1,
    High   = 2,
    Urgent = 3,
}

impl QueuePriority {
    pub const fn default() -> Self {
        Self::Medium
    }
}

#[derive(Debug, Error)]
#[error("Invalid queue priority primitive: {0}")]
pub struct InvalidQueuePriorityPrimitive(QueuePriorityPrimitive);

impl TryFrom<QueuePriorityPrimitive> for QueuePriority {
    type Error = InvalidQueuePriorityPrimitive;
    fn try_from(from: QueuePriorityPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidQueuePriorityPrimitive(from))
    }
}

impl From<QueuePriority> for QueuePriorityPrimitive {
    fn from(from: QueuePriority) -> Self {
        from.to_i16().expect("queue priority primitive")
    }
}

/// Review status of a queue item.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, EnumString, strum::Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum QueueStatus {
    Pending,
    Approved,
    Rejected,
    NeedsReview,
}

impl QueueStatus {
    pub const fn default() -> Self {
        Self::Pending
    }

    /// Terminal statuses permit no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

/// One entry of the pending-review worklist.
///
/// Invariant: `resolved_at` is set iff the status is terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueItem {
    pub id: Id,
    pub kind: ContentKind,
    pub content_id: Id,
    pub submitted_by: Option<Id>,
    pub flagged_reasons: Vec<String>,
    pub priority: QueuePriority,
    pub status: QueueStatus,
    pub assigned_moderator: Option<Id>,
    pub moderator_notes: Option<String>,
    pub created_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
}

impl QueueItem {
    pub fn review_duration(&self) -> Option<Duration> {
        self.resolved_at.map(|resolved_at| resolved_at - self.created_at)
    }
}
