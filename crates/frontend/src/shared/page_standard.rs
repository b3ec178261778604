//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_vendor_product--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from the
//! DOM inspector, paste into IDE search, and you land in the matching
//! `domain/` or `dashboards/` directory.

/// Table of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Shell-level pages (placeholders, not found).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_vendor_product--list"));
        assert!(is_valid_page_id("d001_category_charts--dashboard"));
        assert!(!is_valid_page_id("vendors"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_DASHBOARD));
        assert!(!is_known_category("legacy"));
    }
}
