use super::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySuggestion {
    pub category: Category,
    /// Number of keyword hits; suggestions are ordered by this, descending.
    pub matches: usize,
}

/// Ranks categories by keyword hits in the submitted title and description.
/// Categories without any hit are omitted. Matching is case-insensitive on
/// whole words.
pub fn suggest_categories<R>(
    repo: &R,
    title: &str,
    description: &str,
) -> Result<Vec<CategorySuggestion>>
where
    R: CategoryRepo,
{
    let text = format!("{title} {description}").to_lowercase();
    let words: Vec<&str> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();

    let mut suggestions: Vec<CategorySuggestion> = repo
        .all_categories()?
        .into_iter()
        .filter_map(|category| {
            let matches = category
                .keywords
                .iter()
                .filter(|keyword| {
                    let keyword = keyword.to_lowercase();
                    words.iter().any(|word| *word == keyword)
                })
                .count();
            (matches > 0).then_some(CategorySuggestion { category, matches })
        })
        .collect();
    suggestions.sort_by(|a, b| {
        b.matches
            .cmp(&a.matches)
            .then_with(|| a.category.id.cmp(&b.category.id))
    });
    Ok(suggestions)
}
