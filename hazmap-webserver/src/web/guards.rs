use rocket::{
    self,
    request::{FromRequest, Outcome, Request},
};

use hazmap_application::error::AppError;
use hazmap_core::{
    entities::{Role, User},
    repositories::UserRepo,
    usecases,
    usecases::Error as ParameterError,
};

type Result<T> = std::result::Result<T, AppError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// Credentials extracted from the request headers. Resolving them against
/// the user store is deferred to the route handlers.
#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
}

impl Auth {
    pub fn user_with_min_role<R>(&self, repo: &R, min_required_role: Role) -> Result<User>
    where
        R: UserRepo,
    {
        let token = self
            .bearer_tokens
            .first()
            .ok_or(ParameterError::Unauthorized)?;
        let user = usecases::authorize_user_by_token(repo, token)?;
        usecases::authorize_role(&user, min_required_role)?;
        Ok(user)
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        Outcome::Success(Self { bearer_tokens })
    }
}

/// `If-None-Match` header for conditional cache revalidation.
#[derive(Debug)]
pub struct IfNoneMatch(pub Option<String>);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for IfNoneMatch {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let etag = request
            .headers()
            .get_one("If-None-Match")
            .map(ToOwned::to_owned);
        Outcome::Success(Self(etag))
    }
}
