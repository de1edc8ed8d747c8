pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{hazard_builder::*, queue_item_builder::*, user_builder::*};

pub mod hazard_builder {

    use super::*;
    use crate::{activity::*, geo::*, hazard::*, id::*, time::*};

    #[derive(Debug)]
    pub struct HazardBuild {
        hazard: Hazard,
    }

    impl HazardBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.hazard.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.hazard.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.hazard.description = desc.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.hazard.category = category.into();
            self
        }
        pub fn severity(mut self, severity: SeverityPrimitive) -> Self {
            self.hazard.severity = severity.try_into().unwrap();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.hazard.position = pos;
            self
        }
        pub fn area(mut self, area: Polygon) -> Self {
            self.hazard.area = Some(area);
            self
        }
        pub fn status(mut self, status: HazardStatus) -> Self {
            self.hazard.status = status;
            self
        }
        pub fn expiration(mut self, expiration: Expiration) -> Self {
            self.hazard.expiration = expiration;
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.hazard.created.at = at;
            self
        }
        pub fn created_by(mut self, by: &str) -> Self {
            self.hazard.created.by = Some(by.into());
            self
        }
        pub fn finish(self) -> Hazard {
            self.hazard
        }
    }

    impl Builder for Hazard {
        type Build = HazardBuild;
        fn build() -> HazardBuild {
            HazardBuild {
                hazard: Hazard {
                    id: Id::new(),
                    title: "".into(),
                    description: "".into(),
                    category: Id::default(),
                    severity: Severity::try_from(Severity::MIN).unwrap(),
                    position: MapPoint::try_from_lat_lng_deg(0.0, 0.0).unwrap(),
                    area: None,
                    status: HazardStatus::default(),
                    expiration: Expiration::default(),
                    resolution_confirmations: vec![],
                    created: Activity::now(None),
                },
            }
        }
    }
}

pub mod queue_item_builder {

    use super::*;
    use crate::{id::*, moderation::*, time::*};

    #[derive(Debug)]
    pub struct QueueItemBuild {
        item: QueueItem,
    }

    impl QueueItemBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.item.id = id.into();
            self
        }
        pub fn kind(mut self, kind: ContentKind) -> Self {
            self.item.kind = kind;
            self
        }
        pub fn content_id(mut self, id: &str) -> Self {
            self.item.content_id = id.into();
            self
        }
        pub fn submitted_by(mut self, id: &str) -> Self {
            self.item.submitted_by = Some(id.into());
            self
        }
        pub fn priority(mut self, priority: QueuePriority) -> Self {
            self.item.priority = priority;
            self
        }
        pub fn status(mut self, status: QueueStatus) -> Self {
            self.item.status = status;
            self
        }
        pub fn assigned_moderator(mut self, id: &str) -> Self {
            self.item.assigned_moderator = Some(id.into());
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.item.created_at = at;
            self
        }
        pub fn resolved_at(mut self, at: Timestamp) -> Self {
            self.item.resolved_at = Some(at);
            self
        }
        pub fn finish(self) -> QueueItem {
            self.item
        }
    }

    impl Builder for QueueItem {
        type Build = QueueItemBuild;
        fn build() -> QueueItemBuild {
            QueueItemBuild {
                item: QueueItem {
                    id: Id::new(),
                    kind: ContentKind::Hazard,
                    content_id: Id::new(),
                    submitted_by: None,
                    flagged_reasons: vec![],
                    priority: QueuePriority::default(),
                    status: QueueStatus::default(),
                    assigned_moderator: None,
                    moderator_notes: None,
                    created_at: Timestamp::now(),
                    resolved_at: None,
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{id::*, trust::TrustScore, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.into();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn trust_score(mut self, score: TrustScore) -> Self {
            self.user.trust_score = score;
            self
        }
        pub fn api_token(mut self, token: &str) -> Self {
            self.user.api_token = Some(token.into());
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    email: "".into(),
                    role: Role::default(),
                    trust_score: 0,
                    api_token: None,
                },
            }
        }
    }
}
