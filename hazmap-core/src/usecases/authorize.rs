use super::prelude::*;

/// Resolves a bearer token to a user.
pub fn authorize_user_by_token<R>(repo: &R, token: &str) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user_by_token(token)?.ok_or(Error::Unauthorized)
}

/// Verifies that the user holds at least the required role.
pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if user.role >= min_required_role {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}
