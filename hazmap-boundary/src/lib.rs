//! # hazmap-boundary
//!
//! Serializable, anemic data structures of the JSON API. All timestamps
//! are UNIX seconds.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// JSON body of all error responses.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum HazardStatus {
    Pending,
    Approved,
    Rejected,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Hazard {
    pub id              : String,
    pub title           : String,
    pub description     : String,
    pub category        : String,
    pub severity        : u8,
    pub lat             : f64,
    pub lng             : f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area            : Option<Vec<Coordinate>>,
    pub status          : HazardStatus,
    #[serde(default)]
    pub confirmations   : usize,
    pub created_at      : i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by      : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at      : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at     : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_note : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewHazard {
    pub title: String,
    pub description: String,
    pub category: String,
    pub severity: u8,
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<Vec<Coordinate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_hours: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Hazard,
    Image,
    Template,
    UserReport,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum QueuePriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum QueueStatus {
    Pending,
    Approved,
    Rejected,
    NeedsReview,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct QueueItem {
    pub id                 : String,
    pub kind               : ContentKind,
    pub content_id         : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_by       : Option<String>,
    pub flagged_reasons    : Vec<String>,
    pub priority           : QueuePriority,
    pub status             : QueueStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_moderator : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator_notes    : Option<String>,
    pub created_at         : i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at        : Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum ModerationDecision {
    Approve,
    Reject,
    Flag,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ProcessQueueItem {
    pub item_id: String,
    pub action: ModerationDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct PriorityCount {
    pub priority: QueuePriority,
    pub count: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct QueueStats {
    pub pending: u64,
    pub approved_today: u64,
    pub rejected_today: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_review_minutes: Option<f64>,
    pub pending_by_priority: Vec<PriorityCount>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct TrustTier {
    pub name      : String,
    pub min_score : i64,
    pub icon      : String,
    pub color     : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct TrustSummary {
    pub user_id: String,
    pub score: i64,
    pub tier: TrustTier,
    /// Percentage progress towards the next tier, 100 at the top.
    pub progress: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub score: i64,
    pub tier: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct AdjustTrustScore {
    pub user_id: String,
    pub delta: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Category {
    pub id: String,
    pub name: String,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_expire_hours: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SuggestCategories {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CategorySuggestion {
    pub category_id: String,
    pub name: String,
    pub matches: usize,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ValidateField {
    pub field: String,
    pub value: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct FieldValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ResolveHazard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningRecommendation {
    Approve,
    Review,
    Flag,
    Reject,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Screening {
    pub recommendation: ScreeningRecommendation,
    pub confidence: f64,
    pub reasons: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SubmissionResponse {
    pub hazard: Hazard,
    pub queue_item_id: String,
    pub screening: Screening,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SweepResponse {
    pub expired: usize,
}
