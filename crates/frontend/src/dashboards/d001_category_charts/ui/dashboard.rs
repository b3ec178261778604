use super::chart_card::{ChartCard, ChartCardProps};
use crate::domain::a001_vendor_product::api;
use crate::shared::chart_js::{render_chart, ChartJsHandle};
use crate::shared::components::ui::Select;
use crate::shared::components::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d001_category_charts::{
    filter_by_selection, CategoryProjection, ChartConfig, ChartSlot, Selection, SlotRegistry,
};
use contracts::domain::a001_vendor_product::Dataset;
use contracts::shared::error::DashboardError;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Category charts dashboard: pick a product category, see pricing/size/weight
/// per vendor and certification/compatibility shares.
#[component]
pub fn CategoryChartsDashboard() -> impl IntoView {
    let (dataset, set_dataset) = signal(Dataset::default());
    let (selection, set_selection) = signal(Selection::none());
    let (projection, set_projection) = signal(None::<CategoryProjection>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<DashboardError>);

    // Chart.js handles are JS objects, keep them local to this page
    let charts = StoredValue::new_local(SlotRegistry::<ChartJsHandle>::new());

    let categories = Memo::new(move |_| dataset.with(Dataset::categories));

    // Load CSV on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_dataset().await {
                Ok(loaded) => {
                    log::info!(
                        "Dashboard: {} rows in {} categories",
                        loaded.len(),
                        loaded.categories().len()
                    );
                    set_dataset.set(loaded);
                }
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

    // Dispose every chart, then redraw all slots for the current selection
    Effect::new(move |_| {
        let current = selection.get();
        let next = dataset.with(|dataset| {
            if current.is_empty() {
                return None;
            }
            let rows = filter_by_selection(dataset.rows(), &current);
            Some(CategoryProjection::from_rows(&rows))
        });

        let mut outcome: Result<(), DashboardError> = Ok(());
        charts.update_value(|registry| {
            let slots = match next {
                Some(_) => ChartSlot::ALL.to_vec(),
                None => Vec::new(),
            };
            outcome = registry.redraw(slots, |slot| {
                let series = next
                    .as_ref()
                    .and_then(|projection| projection.series(slot))
                    .ok_or_else(|| {
                        DashboardError::processing(format!("no series for {}", slot.canvas_id()))
                    })?;
                render_chart(slot.canvas_id(), &ChartConfig::for_slot(slot, series))
            });
        });

        if let Err(err) = outcome {
            log::error!("{}", err);
            set_error.set(Some(err));
        }
        if let (Some(category), Some(projection)) = (current.category(), &next) {
            report_dropped(category, projection);
        }
        set_projection.set(next);
    });

    let options = Signal::derive(move || {
        categories
            .get()
            .into_iter()
            .filter(|category| !category.is_empty())
            .map(|category| (category.clone(), category))
            .collect::<Vec<_>>()
    });

    view! {
        <PageFrame page_id="d001_category_charts--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard" />

            <div class="dropdown-container">
                <Select
                    id="categoryDropdown"
                    label="Select Product Category:"
                    placeholder="-- Select Category --"
                    value=Signal::derive(move || selection.with(Selection::control_value))
                    options=options
                    on_change=Callback::new(move |value: String| {
                        set_selection.set(Selection::from_control_value(value));
                    })
                    disabled=loading
                />
            </div>

            {move || loading.get().then(|| view! {
                <div class="page__loading">"Loading data..."</div>
            })}

            <div
                class="charts-container"
                style=move || {
                    if selection.with(Selection::is_empty) { "display: none;" } else { "" }
                }
            >
                {ChartSlot::ALL
                    .into_iter()
                    .map(|slot| {
                        let dropped = Signal::derive(move || {
                            projection.with(|p| {
                                p.as_ref()
                                    .and_then(|p| p.series(slot))
                                    .map(|series| series.dropped())
                                    .unwrap_or(0)
                            })
                        });
                        ChartCard(ChartCardProps::builder().slot(slot).dropped(dropped).build())
                    })
                    .collect_view()}
            </div>

            {move || error.get().map(|err| view! {
                <p class="page__error" style="color: red;">"Error: " {err.to_string()}</p>
            })}
        </PageFrame>
    }
}

fn report_dropped(category: &str, projection: &CategoryProjection) {
    for (slot, series) in projection.iter() {
        let dropped = series.dropped();
        if dropped > 0 {
            log::warn!(
                "{} / {}: {} values left out of the chart",
                category,
                slot.metric(),
                dropped
            );
        }
    }
}
