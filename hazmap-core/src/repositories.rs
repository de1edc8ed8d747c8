// Low-level database access traits.
// Each repository is responsible for a single entity and its relationships.
// Related entities are only referenced by their id and never modified or
// loaded by another repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub trait HazardRepo {
    fn create_hazard(&self, hazard: Hazard) -> Result<()>;
    fn update_hazard(&self, hazard: &Hazard) -> Result<()>;

    fn get_hazard(&self, id: &str) -> Result<Hazard>;
    fn all_hazards(&self) -> Result<Vec<Hazard>>;
    fn count_hazards(&self) -> Result<usize>;

    fn set_hazard_status(&self, id: &str, status: HazardStatus) -> Result<()>;

    /// All auto-expiring, unresolved hazards whose expiry has passed.
    fn expired_hazard_candidates(&self, now: Timestamp) -> Result<Vec<Hazard>>;

    /// Marks a hazard as resolved. `activity.by == None` records a
    /// system-triggered resolution.
    fn mark_hazard_resolved(&self, id: &str, activity: &Activity, note: &str) -> Result<()>;
}

pub trait QueueRepo {
    fn add_queue_item(&self, item: QueueItem) -> Result<()>;
    fn update_queue_item(&self, item: &QueueItem) -> Result<()>;

    fn get_queue_item(&self, id: &str) -> Result<QueueItem>;

    /// The first pending item that is either unassigned or already assigned
    /// to the given moderator, ordered by priority (descending) and then by
    /// creation time (oldest first).
    fn next_pending_item(&self, moderator: &Id) -> Result<Option<QueueItem>>;

    /// Pending items are ordered like `next_pending_item`, resolved items
    /// by `resolved_at` (most recent first).
    fn queue_page(
        &self,
        status: Option<QueueStatus>,
        pagination: &Pagination,
    ) -> Result<Vec<QueueItem>>;

    fn count_pending_by_priority(&self) -> Result<Vec<(QueuePriority, u64)>>;

    /// Terminally resolved items with `resolved_at >= since`.
    fn resolved_since(&self, since: Timestamp) -> Result<Vec<QueueItem>>;

    /// The most recently resolved items, newest first, at most `limit`.
    fn recently_resolved(&self, limit: usize) -> Result<Vec<QueueItem>>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user_by_token(&self, token: &str) -> Result<Option<User>>;

    fn all_users(&self) -> Result<Vec<User>>;

    /// Users with the highest trust scores, ties broken by id.
    fn top_users_by_trust_score(&self, limit: usize) -> Result<Vec<User>>;
}

pub trait CategoryRepo {
    fn create_category(&self, category: &Category) -> Result<()>;
    fn get_category(&self, id: &str) -> Result<Category>;
    fn all_categories(&self) -> Result<Vec<Category>>;
}

pub trait ImageRepo {
    fn create_image(&self, image: &HazardImage) -> Result<()>;
    fn get_image(&self, id: &str) -> Result<HazardImage>;
    fn set_image_moderation_status(&self, id: &str, status: ImageModerationStatus) -> Result<()>;
    fn delete_image(&self, id: &str) -> Result<()>;
}

pub trait TemplateRepo {
    fn create_template(&self, template: &Template) -> Result<()>;
    fn get_template(&self, id: &str) -> Result<Template>;
    fn set_template_status(&self, id: &str, status: TemplateStatus) -> Result<()>;
}

pub trait TrustEventRepo {
    fn append_trust_event(&self, event: &TrustEvent) -> Result<()>;
    fn trust_events_of_user(&self, user_id: &str) -> Result<Vec<TrustEvent>>;
}

/// Append-only audit trail entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: Id,
    pub subject: Id,
    pub action: String,
    pub log: ActivityLog,
}

impl AuditEntry {
    pub fn new(subject: Id, action: impl Into<String>, log: ActivityLog) -> Self {
        Self {
            id: Id::new(),
            subject,
            action: action.into(),
            log,
        }
    }
}

pub trait AuditLogRepo {
    fn append_audit_entry(&self, entry: &AuditEntry) -> Result<()>;
    fn audit_entries_of_subject(&self, subject: &str) -> Result<Vec<AuditEntry>>;
}
