//! # hazmap-application
//!
//! Multi-step flows that compose usecases with trust scoring and audit
//! logging. The bundled store has no transactions; follow-up writes are
//! best-effort and their failures are logged, never rolled back.

#[macro_use]
extern crate log;

mod expire_hazards;
mod process_moderation;
mod submit_hazard;

pub mod prelude {
    pub use super::{expire_hazards::*, process_moderation::*, submit_hazard::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use hazmap_core::{entities::*, repositories::*, usecases, Db, RegionPolicy};
