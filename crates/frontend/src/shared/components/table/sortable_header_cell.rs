//! Sortable table header cell
//!
//! ```ignore
//! <SortableHeaderCell
//!     column=Column::Pricing
//!     current_sort=sort_column
//!     sort_ascending=sort_ascending
//!     on_sort=Callback::new(move |column| toggle_sort(column))
//! />
//! ```

use contracts::domain::a001_vendor_product::Column;
use leptos::prelude::*;
use thaw::*;

/// Arrow shown next to a header caption
pub fn sort_indicator(current: Option<Column>, column: Column, ascending: bool) -> &'static str {
    match current {
        Some(c) if c == column && ascending => " ▲",
        Some(c) if c == column => " ▼",
        _ => " ⇅",
    }
}

/// CSS class of the indicator
pub fn sort_class(current: Option<Column>, column: Column) -> &'static str {
    if current == Some(column) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// Header cell for one schema column; click reports the column to `on_sort`
#[component]
pub fn SortableHeaderCell(
    column: Column,

    /// Column the table is currently sorted by, if any
    #[prop(into)]
    current_sort: Signal<Option<Column>>,

    #[prop(into)]
    sort_ascending: Signal<bool>,

    on_sort: Callback<Column>,

    #[prop(optional, default = 110.0)]
    min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=true min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(column)
            >
                {column.title()}
                <span class=move || sort_class(current_sort.get(), column)>
                    {move || sort_indicator(current_sort.get(), column, sort_ascending.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator(None, Column::Vendor, true), " ⇅");
        assert_eq!(sort_indicator(Some(Column::Vendor), Column::Vendor, true), " ▲");
        assert_eq!(sort_indicator(Some(Column::Vendor), Column::Vendor, false), " ▼");
        assert_eq!(sort_indicator(Some(Column::Pricing), Column::Vendor, false), " ⇅");
    }

    #[test]
    fn test_sort_class() {
        assert_eq!(sort_class(Some(Column::Size), Column::Size), "sort-icon active");
        assert_eq!(sort_class(None, Column::Size), "sort-icon");
    }
}
