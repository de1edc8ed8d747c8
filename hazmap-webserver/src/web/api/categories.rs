use super::*;
use hazmap_boundary as json;

#[get("/categories")]
pub fn get_categories(
    db: &State<MemStore>,
    if_none_match: IfNoneMatch,
) -> result::Result<CachedJson, ApiError> {
    let categories: Vec<json::Category> = db
        .all_categories()?
        .into_iter()
        .map(Into::into)
        .collect();
    CachedJson::new(
        ResourceKind::Categories,
        &categories,
        if_none_match.0.as_deref(),
    )
}

#[post("/categories/suggest", data = "<query>")]
pub fn post_suggest_categories(
    db: &State<MemStore>,
    query: JsonResult<json::SuggestCategories>,
) -> Result<Vec<json::CategorySuggestion>> {
    let json::SuggestCategories { title, description } = query?.into_inner();
    let suggestions = usecases::suggest_categories(db.inner(), &title, &description)?;
    Ok(Json(
        suggestions
            .into_iter()
            .map(|suggestion| json::CategorySuggestion {
                category_id: suggestion.category.id.into(),
                name: suggestion.category.name,
                matches: suggestion.matches,
            })
            .collect(),
    ))
}

#[post("/admin/categories", data = "<new_category>")]
pub fn post_create_category(
    db: &State<MemStore>,
    auth: Auth,
    new_category: JsonResult<json::Category>,
) -> Result<json::Category> {
    let admin = auth.user_with_min_role(db.inner(), Role::Admin)?;
    let json::Category {
        id,
        name,
        keywords,
        auto_expire_hours,
    } = new_category?.into_inner();
    let new_category = usecases::NewCategory {
        id,
        name,
        keywords,
        auto_expire_hours,
    };
    let category = usecases::create_category(db.inner(), &admin, new_category)?;
    Ok(Json(category.into()))
}

#[post("/validation/field", data = "<body>")]
pub fn post_validate_field(
    db: &State<MemStore>,
    body: JsonResult<json::ValidateField>,
) -> Result<json::FieldValidation> {
    let json::ValidateField { field, value } = body?.into_inner();
    let validation = match usecases::validate_field(db.inner(), &field, &value) {
        Ok(()) => json::FieldValidation {
            valid: true,
            message: None,
        },
        // A rejected value is a regular answer, not an error response.
        Err(
            err @ (ParameterError::Title
            | ParameterError::Description
            | ParameterError::Severity
            | ParameterError::Position
            | ParameterError::Category),
        ) => json::FieldValidation {
            valid: false,
            message: Some(err.to_string()),
        },
        Err(err) => return Err(err.into()),
    };
    Ok(Json(validation))
}
