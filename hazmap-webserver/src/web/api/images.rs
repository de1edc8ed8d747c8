use rocket::delete;

use super::*;

#[delete("/images/<id>")]
pub fn delete_image(db: &State<MemStore>, auth: Auth, id: String) -> Result<()> {
    let moderator = auth.user_with_min_role(db.inner(), Role::Moderator)?;
    usecases::delete_image(db.inner(), &moderator, &id, Timestamp::now())?;
    Ok(Json(()))
}
