use crate::domain::a001_vendor_product::api;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_vendor_product::{sorted_rows, Column, Dataset, Row};
use contracts::shared::error::DashboardError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Every loaded row, columns in schema order.
///
/// Rows start in file order; a header click sorts a copy of the dataset.
#[component]
pub fn ProductCategoriesList() -> impl IntoView {
    let (dataset, set_dataset) = signal(Dataset::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<DashboardError>);
    let (sort_column, set_sort_column) = signal(None::<Column>);
    let (sort_ascending, set_sort_ascending) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_dataset().await {
                Ok(loaded) => set_dataset.set(loaded),
                Err(err) => {
                    match err.status() {
                        Some(status) => log::error!("Error fetching CSV data (HTTP {}): {}", status, err),
                        None => log::error!("Error fetching CSV data: {}", err),
                    }
                    set_error.set(Some(err));
                }
            }
            set_loading.set(false);
        });
    });

    let visible_rows = Memo::new(move |_| {
        let column = sort_column.get();
        let ascending = sort_ascending.get();
        dataset.with(|dataset| match column {
            Some(column) => sorted_rows(dataset.rows(), column, ascending),
            None => dataset.rows().to_vec(),
        })
    });

    let toggle_sort = move |column: Column| {
        if sort_column.get_untracked() == Some(column) {
            set_sort_ascending.update(|ascending| *ascending = !*ascending);
        } else {
            set_sort_column.set(Some(column));
            set_sort_ascending.set(true);
        }
    };

    let subtitle = Signal::derive(move || {
        if loading.get() {
            "Loading data...".to_string()
        } else {
            format!("{} products", dataset.with(Dataset::len))
        }
    });

    view! {
        <PageFrame page_id="a001_vendor_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Product Categories" subtitle=subtitle />

            {move || error.get().map(|err| view! {
                <p class="page__error" style="color: red;">"Error: " {err.to_string()}</p>
            })}

            <div class="page__content product-categories-table">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {Column::ALL
                                .into_iter()
                                .map(|column| view! {
                                    <SortableHeaderCell
                                        column=column
                                        current_sort=sort_column
                                        sort_ascending=sort_ascending
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            visible_rows
                                .get()
                                .into_iter()
                                .map(|row| view! { <ProductRow row=row /> })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}

#[component]
fn ProductRow(row: Row) -> impl IntoView {
    view! {
        <TableRow>
            {Column::ALL
                .into_iter()
                .map(|column| {
                    let cell = row.cell(column).to_string();
                    view! {
                        <TableCell>
                            <TableCellLayout>{cell}</TableCellLayout>
                        </TableCell>
                    }
                })
                .collect_view()}
        </TableRow>
    }
}
