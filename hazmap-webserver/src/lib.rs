//! # hazmap-webserver
//!
//! JSON API of the hazardmap backend on rocket.

#[macro_use]
extern crate log;

mod web;

pub use web::{run, Cfg};
