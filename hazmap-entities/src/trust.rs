use strum::EnumString;

use crate::{id::*, time::*};

pub type TrustScore = i64;

/// What kind of activity produced a trust score change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum::Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TrustEventKind {
    ReportSubmitted,
    ReportApproved,
    ReportRejected,
    VoteCast,
    VoteReceived,
    ModerationAction,
    AdminAdjustment,
}

/// Append-only audit record of a trust score change.
///
/// The current score of a user is the stored running total, not recomputed
/// from these events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustEvent {
    pub id: Id,
    pub user_id: Id,
    pub kind: TrustEventKind,
    pub delta: TrustScore,
    pub previous_score: TrustScore,
    pub new_score: TrustScore,
    pub related_content: Option<Id>,
    pub note: Option<String>,
    pub created_at: Timestamp,
}
