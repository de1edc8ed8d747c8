mod adjust_trust_score;
mod authorize;
mod confirm_resolution;
mod create_category;
mod create_hazard;
mod delete_image;
mod error;
mod expire_hazards;
mod leaderboard;
mod moderation;
mod prescreen;
mod queue_stats;
mod resolve_hazard;
mod suggest_categories;
mod validate_field;

pub use self::{
    adjust_trust_score::*, authorize::*, confirm_resolution::*, create_category::*,
    create_hazard::*, delete_image::*, error::Error, expire_hazards::*, leaderboard::*,
    moderation::*, prescreen::*, queue_stats::*, resolve_hazard::*, suggest_categories::*,
    validate_field::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
