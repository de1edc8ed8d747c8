use std::{fmt::Display, result};

use hazmap_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, Responder},
    routes, Route, State,
};

use super::{
    caching::{CachedJson, NoStore, ResourceKind},
    guards::*,
    Cfg,
};
use hazmap_application::prelude as flows;
use hazmap_core::{entities::*, repositories::*, usecases};
use hazmap_db_mem::MemStore;

mod categories;
mod error;
mod hazards;
mod images;
mod moderation;
mod trust;

pub use self::error::{Error as ApiError, ParameterError};


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   hazards   --- //
        hazards::get_hazards,
        hazards::post_hazard,
        hazards::post_resolve_hazard,
        hazards::post_confirm_resolution,
        // ---   images   --- //
        images::delete_image,
        // ---   moderation   --- //
        moderation::get_next_queue_item,
        moderation::get_queue,
        moderation::get_queue_stats,
        moderation::post_process_queue_item,
        // ---   trust   --- //
        trust::get_user_trust,
        trust::get_leaderboard,
        trust::post_adjust_trust_score,
        // ---   categories & validation   --- //
        categories::get_categories,
        categories::post_suggest_categories,
        categories::post_create_category,
        categories::post_validate_field,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
