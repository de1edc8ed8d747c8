//! # hazmap-core
//!
//! Business logic of the hazardmap backend: repository abstractions,
//! usecases and the pure algorithms (polygon simplification, map filters,
//! trust tiers, automated pre-screening).

pub mod geometry;
pub mod repositories;
pub mod trust;
pub mod usecases;
pub mod util;

pub use repositories::Error as RepoError;

pub mod entities {
    pub use hazmap_entities::{
        activity::*, category::*, geo::*, hazard::*, id::*, image::*, moderation::*, template::*,
        time::*, trust::*, user::*,
    };
}

use entities::*;

/// Everything the webserver needs from a storage backend.
pub trait Db:
    repositories::AuditLogRepo
    + repositories::CategoryRepo
    + repositories::HazardRepo
    + repositories::ImageRepo
    + repositories::QueueRepo
    + repositories::TemplateRepo
    + repositories::TrustEventRepo
    + repositories::UserRepo
{
}

impl<T> Db for T where
    T: repositories::AuditLogRepo
        + repositories::CategoryRepo
        + repositories::HazardRepo
        + repositories::ImageRepo
        + repositories::QueueRepo
        + repositories::TemplateRepo
        + repositories::TrustEventRepo
        + repositories::UserRepo
{
}

/// Region the deployment accepts submissions for.
#[derive(Debug, Clone)]
pub struct RegionPolicy {
    pub name: String,
    pub bounds: MapBbox,
    /// Two submissions closer than this are considered potential duplicates.
    pub duplicate_radius: Option<Distance>,
}
