use num_derive::{FromPrimitive, ToPrimitive};

use crate::{id::*, trust::TrustScore};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id          : Id,
    pub email       : String,
    pub role        : Role,
    pub trust_score : TrustScore,
    pub api_token   : Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Role {
    #[default]
    Guest     = 0,
    User      = 1,
    Moderator = 2,
    Admin     = 3,
}
