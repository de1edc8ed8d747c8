#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # hazmap-entities
//!
//! Reusable, agnostic domain entities for the hazardmap backend.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod activity;
pub mod category;
pub mod geo;
pub mod hazard;
pub mod id;
pub mod image;
pub mod moderation;
pub mod template;
pub mod time;
pub mod trust;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
