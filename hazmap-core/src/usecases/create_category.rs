use super::authorize::authorize_role;
use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub id: String,
    pub name: String,
    pub keywords: Vec<String>,
    pub auto_expire_hours: Option<i64>,
}

/// Admin-only creation of a hazard category. Keywords are normalized to
/// lowercase for the submission-time suggestion matching.
pub fn create_category<R>(repo: &R, admin: &User, new_category: NewCategory) -> Result<Category>
where
    R: CategoryRepo,
{
    authorize_role(admin, Role::Admin)?;
    let NewCategory {
        id,
        name,
        keywords,
        auto_expire_hours,
    } = new_category;
    let id = id.trim().to_string();
    let name = name.trim().to_string();
    if id.is_empty() || name.is_empty() {
        return Err(Error::Category);
    }
    let mut category = Category::new(id, name);
    category.keywords = keywords
        .into_iter()
        .map(|keyword| keyword.trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .collect();
    category.auto_expire_hours = auto_expire_hours.filter(|hours| *hours > 0);
    repo.create_category(&category)?;
    log::info!("Admin {} created category {}", admin.id, category.id);
    Ok(category)
}
