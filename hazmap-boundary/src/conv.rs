use super::*;
use hazmap_entities as e;

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl From<e::hazard::HazardStatus> for HazardStatus {
    fn from(from: e::hazard::HazardStatus) -> Self {
        use e::hazard::HazardStatus::*;
        match from {
            Pending => HazardStatus::Pending,
            Approved => HazardStatus::Approved,
            Rejected => HazardStatus::Rejected,
        }
    }
}

impl From<e::hazard::Hazard> for Hazard {
    fn from(from: e::hazard::Hazard) -> Self {
        let e::hazard::Hazard {
            id,
            title,
            description,
            category,
            severity,
            position,
            area,
            status,
            expiration,
            resolution_confirmations,
            created,
        } = from;
        let (lat, lng) = position.to_lat_lng_deg();
        Self {
            id: id.into(),
            title,
            description,
            category: category.into(),
            severity: severity.to_primitive(),
            lat,
            lng,
            area: area.map(|polygon| {
                polygon
                    .into_points()
                    .into_iter()
                    .map(Into::into)
                    .collect()
            }),
            status: status.into(),
            confirmations: resolution_confirmations.len(),
            created_at: created.at.as_secs(),
            created_by: created.by.map(Into::into),
            expires_at: expiration.expires_at.map(|at| at.as_secs()),
            resolved_at: expiration.resolved_at.map(|at| at.as_secs()),
            resolution_note: expiration.resolution_note,
        }
    }
}

impl From<e::moderation::ContentKind> for ContentKind {
    fn from(from: e::moderation::ContentKind) -> Self {
        use e::moderation::ContentKind::*;
        match from {
            Hazard => ContentKind::Hazard,
            Image => ContentKind::Image,
            Template => ContentKind::Template,
            UserReport => ContentKind::UserReport,
        }
    }
}

impl From<e::moderation::QueuePriority> for QueuePriority {
    fn from(from: e::moderation::QueuePriority) -> Self {
        use e::moderation::QueuePriority::*;
        match from {
            Low => QueuePriority::Low,
            Medium => QueuePriority::Medium,
            High => QueuePriority::High,
            Urgent => QueuePriority::Urgent,
        }
    }
}

impl From<QueuePriority> for e::moderation::QueuePriority {
    fn from(from: QueuePriority) -> Self {
        use e::moderation::QueuePriority::*;
        match from {
            QueuePriority::Low => Low,
            QueuePriority::Medium => Medium,
            QueuePriority::High => High,
            QueuePriority::Urgent => Urgent,
        }
    }
}

impl From<e::moderation::QueueStatus> for QueueStatus {
    fn from(from: e::moderation::QueueStatus) -> Self {
        use e::moderation::QueueStatus::*;
        match from {
            Pending => QueueStatus::Pending,
            Approved => QueueStatus::Approved,
            Rejected => QueueStatus::Rejected,
            NeedsReview => QueueStatus::NeedsReview,
        }
    }
}

impl From<QueueStatus> for e::moderation::QueueStatus {
    fn from(from: QueueStatus) -> Self {
        use e::moderation::QueueStatus::*;
        match from {
            QueueStatus::Pending => Pending,
            QueueStatus::Approved => Approved,
            QueueStatus::Rejected => Rejected,
            QueueStatus::NeedsReview => NeedsReview,
        }
    }
}

impl From<e::moderation::QueueItem> for QueueItem {
    fn from(from: e::moderation::QueueItem) -> Self {
        let e::moderation::QueueItem {
            id,
            kind,
            content_id,
            submitted_by,
            flagged_reasons,
            priority,
            status,
            assigned_moderator,
            moderator_notes,
            created_at,
            resolved_at,
        } = from;
        Self {
            id: id.into(),
            kind: kind.into(),
            content_id: content_id.into(),
            submitted_by: submitted_by.map(Into::into),
            flagged_reasons,
            priority: priority.into(),
            status: status.into(),
            assigned_moderator: assigned_moderator.map(Into::into),
            moderator_notes,
            created_at: created_at.as_secs(),
            resolved_at: resolved_at.map(|at| at.as_secs()),
        }
    }
}

impl From<e::category::Category> for Category {
    fn from(from: e::category::Category) -> Self {
        let e::category::Category {
            id,
            name,
            keywords,
            auto_expire_hours,
        } = from;
        Self {
            id: id.into(),
            name,
            keywords,
            auto_expire_hours,
        }
    }
}
