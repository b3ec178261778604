pub mod chart_config;
pub mod filter;
pub mod projection;
pub mod slot;
pub mod slot_registry;

pub use chart_config::ChartConfig;
pub use filter::{filter_by_category, filter_by_selection, Selection};
pub use projection::{CategoricalTally, CategoryProjection, NumericSeries, SlotSeries};
pub use slot::{ChartKind, ChartSlot};
pub use slot_registry::{DisposableChart, SlotRegistry};
