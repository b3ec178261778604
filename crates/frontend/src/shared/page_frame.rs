//! PageFrame: standard root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  `"{entity}--{category}"`, e.g. `"a001_vendor_product--list"`
//!   - `data-page-category`  one of the PAGE_CAT_* constants
//!
//! Usage:
//! ```ignore
//! use crate::shared::page_frame::PageFrame;
//! use crate::shared::page_standard::PAGE_CAT_LIST;
//!
//! #[component]
//! pub fn MyList() -> impl IntoView {
//!     view! {
//!         <PageFrame page_id="a001_vendor_product--list" category=PAGE_CAT_LIST>
//!             <div class="page__content">...</div>
//!         </PageFrame>
//!     }
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every page.
///
/// Adds the BEM modifier class based on category:
/// - `list`      → `page`
/// - `dashboard` → `page page--dashboard`
/// - `system`    → `page page--system`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");
    debug_assert!(is_known_category(category), "unknown page category: {category}");

    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    view! {
        <div
            id=page_id
            class=class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
