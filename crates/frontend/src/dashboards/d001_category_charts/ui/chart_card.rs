use contracts::dashboards::d001_category_charts::{ChartKind, ChartSlot};
use leptos::prelude::*;

/// Muted note for values a chart could not show
pub fn dropped_note(slot: ChartSlot, dropped: usize) -> Option<String> {
    if dropped == 0 {
        return None;
    }
    let noun = if dropped == 1 { "value" } else { "values" };
    Some(match slot.kind() {
        ChartKind::Bar => format!("{} {} not readable as a number", dropped, noun),
        ChartKind::Pie => format!(
            "{} {} outside {} not counted",
            dropped,
            noun,
            slot.tally_labels().join("/")
        ),
    })
}

/// Canvas placeholder of one chart slot
#[component]
pub fn ChartCard(
    slot: ChartSlot,
    /// Values of the current projection the chart left out
    #[prop(into)]
    dropped: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="chart" data-slot=slot.canvas_id()>
            <h3>{slot.title()}</h3>
            <canvas id=slot.canvas_id()></canvas>
            {move || dropped_note(slot, dropped.get()).map(|note| view! {
                <div class="chart__note">{note}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropped_note() {
        assert_eq!(dropped_note(ChartSlot::Pricing, 0), None);
        assert_eq!(
            dropped_note(ChartSlot::Pricing, 1).as_deref(),
            Some("1 value not readable as a number")
        );
        assert_eq!(
            dropped_note(ChartSlot::CeCertification, 2).as_deref(),
            Some("2 values outside Yes/No/TBD not counted")
        );
    }
}
