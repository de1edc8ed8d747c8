//! # hazmap-db-mem
//!
//! In-memory implementation of the repository traits. Stands in for the
//! hosted storage backend and doubles as the test fixture of the other
//! crates.

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;

use hazmap_core::{
    entities::*,
    repositories::{self, *},
};

type Result<T> = std::result::Result<T, repositories::Error>;

/// Clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    hazards: RwLock<HashMap<Id, Hazard>>,
    queue: RwLock<HashMap<Id, QueueItem>>,
    users: RwLock<HashMap<Id, User>>,
    categories: RwLock<HashMap<Id, Category>>,
    images: RwLock<HashMap<Id, HazardImage>>,
    templates: RwLock<HashMap<Id, Template>>,
    trust_events: RwLock<Vec<TrustEvent>>,
    audit_log: RwLock<Vec<AuditEntry>>,
}

fn insert_new<T>(map: &mut HashMap<Id, T>, id: Id, record: T) -> Result<()> {
    if map.contains_key(&id) {
        return Err(Error::AlreadyExists);
    }
    map.insert(id, record);
    Ok(())
}

fn replace<T>(map: &mut HashMap<Id, T>, id: &Id, record: T) -> Result<()> {
    if !map.contains_key(id) {
        return Err(Error::NotFound);
    }
    map.insert(id.clone(), record);
    Ok(())
}

// Priority descending, then oldest first.
fn pending_order(a: &QueueItem, b: &QueueItem) -> std::cmp::Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| a.created_at.cmp(&b.created_at))
}

// Most recently resolved first.
fn resolved_order(a: &QueueItem, b: &QueueItem) -> std::cmp::Ordering {
    b.resolved_at.cmp(&a.resolved_at)
}

fn paginate<T>(records: Vec<T>, pagination: &Pagination) -> Vec<T> {
    let offset = pagination.offset.unwrap_or(0) as usize;
    let limit = pagination.limit.map(|l| l as usize).unwrap_or(usize::MAX);
    records.into_iter().skip(offset).take(limit).collect()
}

impl HazardRepo for MemStore {
    fn create_hazard(&self, hazard: Hazard) -> Result<()> {
        insert_new(&mut self.inner.hazards.write(), hazard.id.clone(), hazard)
    }

    fn update_hazard(&self, hazard: &Hazard) -> Result<()> {
        replace(&mut self.inner.hazards.write(), &hazard.id, hazard.clone())
    }

    fn get_hazard(&self, id: &str) -> Result<Hazard> {
        self.inner.hazards.read().get(id).cloned().ok_or(Error::NotFound)
    }

    fn all_hazards(&self) -> Result<Vec<Hazard>> {
        let mut hazards: Vec<_> = self.inner.hazards.read().values().cloned().collect();
        hazards.sort_by(|a, b| a.created.at.cmp(&b.created.at).then_with(|| a.id.cmp(&b.id)));
        Ok(hazards)
    }

    fn count_hazards(&self) -> Result<usize> {
        Ok(self.inner.hazards.read().len())
    }

    fn set_hazard_status(&self, id: &str, status: HazardStatus) -> Result<()> {
        let mut hazards = self.inner.hazards.write();
        let hazard = hazards.get_mut(id).ok_or(Error::NotFound)?;
        hazard.status = status;
        Ok(())
    }

    fn expired_hazard_candidates(&self, now: Timestamp) -> Result<Vec<Hazard>> {
        let mut candidates: Vec<_> = self
            .inner
            .hazards
            .read()
            .values()
            .filter(|hazard| hazard.is_expired(now))
            .cloned()
            .collect();
        candidates.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(candidates)
    }

    fn mark_hazard_resolved(&self, id: &str, activity: &Activity, note: &str) -> Result<()> {
        let mut hazards = self.inner.hazards.write();
        let hazard = hazards.get_mut(id).ok_or(Error::NotFound)?;
        hazard.expiration.resolved_at = Some(activity.at);
        hazard.expiration.resolved_by = activity.by.clone();
        hazard.expiration.resolution_note = Some(note.to_string());
        Ok(())
    }
}

impl QueueRepo for MemStore {
    fn add_queue_item(&self, item: QueueItem) -> Result<()> {
        insert_new(&mut self.inner.queue.write(), item.id.clone(), item)
    }

    fn update_queue_item(&self, item: &QueueItem) -> Result<()> {
        replace(&mut self.inner.queue.write(), &item.id, item.clone())
    }

    fn get_queue_item(&self, id: &str) -> Result<QueueItem> {
        self.inner.queue.read().get(id).cloned().ok_or(Error::NotFound)
    }

    fn next_pending_item(&self, moderator: &Id) -> Result<Option<QueueItem>> {
        Ok(self
            .inner
            .queue
            .read()
            .values()
            .filter(|item| item.status == QueueStatus::Pending)
            .filter(|item| {
                item.assigned_moderator.is_none()
                    || item.assigned_moderator.as_ref() == Some(moderator)
            })
            .min_by(|a, b| pending_order(a, b))
            .cloned())
    }

    fn queue_page(
        &self,
        status: Option<QueueStatus>,
        pagination: &Pagination,
    ) -> Result<Vec<QueueItem>> {
        let queue = self.inner.queue.read();
        let mut items: Vec<_> = queue
            .values()
            .filter(|item| status.map_or(true, |status| item.status == status))
            .cloned()
            .collect();
        // Pending block in worklist order, resolved block by recency.
        items.sort_by(|a, b| match (a.status.is_terminal(), b.status.is_terminal()) {
            (false, false) => pending_order(a, b),
            (true, true) => resolved_order(a, b),
            (false, true) => std::cmp::Ordering::Less,
            (true, false) => std::cmp::Ordering::Greater,
        });
        Ok(paginate(items, pagination))
    }

    fn count_pending_by_priority(&self) -> Result<Vec<(QueuePriority, u64)>> {
        let queue = self.inner.queue.read();
        let mut counts: Vec<(QueuePriority, u64)> = [
            QueuePriority::Urgent,
            QueuePriority::High,
            QueuePriority::Medium,
            QueuePriority::Low,
        ]
        .into_iter()
        .map(|priority| (priority, 0))
        .collect();
        for item in queue.values() {
            if item.status != QueueStatus::Pending {
                continue;
            }
            if let Some(entry) = counts.iter_mut().find(|(p, _)| *p == item.priority) {
                entry.1 += 1;
            }
        }
        Ok(counts)
    }

    fn resolved_since(&self, since: Timestamp) -> Result<Vec<QueueItem>> {
        let mut items: Vec<_> = self
            .inner
            .queue
            .read()
            .values()
            .filter(|item| item.status.is_terminal())
            .filter(|item| item.resolved_at.map_or(false, |at| at >= since))
            .cloned()
            .collect();
        items.sort_by(resolved_order);
        Ok(items)
    }

    fn recently_resolved(&self, limit: usize) -> Result<Vec<QueueItem>> {
        let mut items: Vec<_> = self
            .inner
            .queue
            .read()
            .values()
            .filter(|item| item.status.is_terminal() && item.resolved_at.is_some())
            .cloned()
            .collect();
        items.sort_by(resolved_order);
        items.truncate(limit);
        Ok(items)
    }
}

impl UserRepo for MemStore {
    fn create_user(&self, user: &User) -> Result<()> {
        insert_new(&mut self.inner.users.write(), user.id.clone(), user.clone())
    }

    fn update_user(&self, user: &User) -> Result<()> {
        replace(&mut self.inner.users.write(), &user.id, user.clone())
    }

    fn get_user(&self, id: &str) -> Result<User> {
        self.inner.users.read().get(id).cloned().ok_or(Error::NotFound)
    }

    fn try_get_user_by_token(&self, token: &str) -> Result<Option<User>> {
        Ok(self
            .inner
            .users
            .read()
            .values()
            .find(|user| user.api_token.as_deref() == Some(token))
            .cloned())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        let mut users: Vec<_> = self.inner.users.read().values().cloned().collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(users)
    }

    fn top_users_by_trust_score(&self, limit: usize) -> Result<Vec<User>> {
        let mut users: Vec<_> = self.inner.users.read().values().cloned().collect();
        users.sort_by(|a, b| {
            b.trust_score
                .cmp(&a.trust_score)
                .then_with(|| a.id.cmp(&b.id))
        });
        users.truncate(limit);
        Ok(users)
    }
}

impl CategoryRepo for MemStore {
    fn create_category(&self, category: &Category) -> Result<()> {
        insert_new(
            &mut self.inner.categories.write(),
            category.id.clone(),
            category.clone(),
        )
    }

    fn get_category(&self, id: &str) -> Result<Category> {
        self.inner.categories
            .read()
            .get(id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_categories(&self) -> Result<Vec<Category>> {
        let mut categories: Vec<_> = self.inner.categories.read().values().cloned().collect();
        categories.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(categories)
    }
}

impl ImageRepo for MemStore {
    fn create_image(&self, image: &HazardImage) -> Result<()> {
        insert_new(&mut self.inner.images.write(), image.id.clone(), image.clone())
    }

    fn get_image(&self, id: &str) -> Result<HazardImage> {
        self.inner.images.read().get(id).cloned().ok_or(Error::NotFound)
    }

    fn set_image_moderation_status(&self, id: &str, status: ImageModerationStatus) -> Result<()> {
        let mut images = self.inner.images.write();
        let image = images.get_mut(id).ok_or(Error::NotFound)?;
        image.moderation_status = status;
        Ok(())
    }

    fn delete_image(&self, id: &str) -> Result<()> {
        self.inner.images.write().remove(id).map(|_| ()).ok_or(Error::NotFound)
    }
}

impl TemplateRepo for MemStore {
    fn create_template(&self, template: &Template) -> Result<()> {
        insert_new(
            &mut self.inner.templates.write(),
            template.id.clone(),
            template.clone(),
        )
    }

    fn get_template(&self, id: &str) -> Result<Template> {
        self.inner.templates
            .read()
            .get(id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn set_template_status(&self, id: &str, status: TemplateStatus) -> Result<()> {
        let mut templates = self.inner.templates.write();
        let template = templates.get_mut(id).ok_or(Error::NotFound)?;
        template.status = status;
        Ok(())
    }
}

impl TrustEventRepo for MemStore {
    fn append_trust_event(&self, event: &TrustEvent) -> Result<()> {
        self.inner.trust_events.write().push(event.clone());
        Ok(())
    }

    fn trust_events_of_user(&self, user_id: &str) -> Result<Vec<TrustEvent>> {
        Ok(self
            .inner
            .trust_events
            .read()
            .iter()
            .filter(|event| event.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }
}

impl AuditLogRepo for MemStore {
    fn append_audit_entry(&self, entry: &AuditEntry) -> Result<()> {
        self.inner.audit_log.write().push(entry.clone());
        Ok(())
    }

    fn audit_entries_of_subject(&self, subject: &str) -> Result<Vec<AuditEntry>> {
        Ok(self
            .inner
            .audit_log
            .read()
            .iter()
            .filter(|entry| entry.subject.as_str() == subject)
            .cloned()
            .collect())
    }
}
