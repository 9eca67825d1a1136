use lf_core::Category;

/// Normalize a category to its canonical label.
///
/// Blank input passes through untouched so validation can name the field.
pub fn parse_category(raw: &str) -> anyhow::Result<String> {
    if raw.trim().is_empty() {
        return Ok(raw.to_string());
    }
    Category::parse(raw)
        .map(|category| category.as_str().to_string())
        .ok_or_else(|| {
            let known = Category::ALL.map(Category::as_str).join(", ");
            anyhow::anyhow!("invalid category '{raw}': expected one of {known}")
        })
}
