use super::slot::{ChartKind, ChartSlot};
use crate::domain::a001_vendor_product::{parse_measure, Column, Row};
use serde::{Deserialize, Serialize};

/// Per-vendor numeric values of one bar slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericSeries {
    /// Vendor names, one per filtered row
    pub labels: Vec<String>,
    /// Same length as `labels`; unreadable cells are `NaN`
    pub values: Vec<f64>,
}

impl NumericSeries {
    pub fn project(rows: &[&Row], column: Column) -> Self {
        let labels = rows.iter().map(|row| row.vendor().to_string()).collect();
        let values = match column.unit() {
            Some(unit) => rows
                .iter()
                .map(|row| parse_measure(row.cell(column), unit))
                .collect(),
            None => vec![f64::NAN; rows.len()],
        };
        Self { labels, values }
    }

    /// Number of values that did not read as a number
    pub fn unparsed(&self) -> usize {
        self.values.iter().filter(|v| v.is_nan()).count()
    }
}

/// Counts of a categorical column against a fixed label set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalTally {
    pub labels: Vec<String>,
    /// Same length as `labels`
    pub counts: Vec<u32>,
    /// Values matching none of the labels; not part of any count
    pub unmatched: usize,
}

impl CategoricalTally {
    pub fn tally<'a, I>(values: I, labels: &[&str]) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = vec![0u32; labels.len()];
        let mut unmatched = 0;
        for value in values {
            match labels.iter().position(|label| *label == value) {
                Some(idx) => counts[idx] += 1,
                None => unmatched += 1,
            }
        }
        Self {
            labels: labels.iter().map(|label| label.to_string()).collect(),
            counts,
            unmatched,
        }
    }

    pub fn project(rows: &[&Row], column: Column, labels: &[&str]) -> Self {
        Self::tally(rows.iter().map(|row| row.cell(column)), labels)
    }

    /// Sum of all counts, unmatched values excluded
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn count_of(&self, label: &str) -> Option<u32> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|idx| self.counts[idx])
    }
}

/// Chart-ready data of a single slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlotSeries {
    Numeric(NumericSeries),
    Categorical(CategoricalTally),
}

impl SlotSeries {
    /// Axis or legend labels
    pub fn labels(&self) -> &[String] {
        match self {
            SlotSeries::Numeric(series) => &series.labels,
            SlotSeries::Categorical(tally) => &tally.labels,
        }
    }

    /// Plotted values, counts widened to `f64`
    pub fn data(&self) -> Vec<f64> {
        match self {
            SlotSeries::Numeric(series) => series.values.clone(),
            SlotSeries::Categorical(tally) => tally.counts.iter().map(|c| *c as f64).collect(),
        }
    }

    /// Values left out of the chart or drawn as gaps
    pub fn dropped(&self) -> usize {
        match self {
            SlotSeries::Numeric(series) => series.unparsed(),
            SlotSeries::Categorical(tally) => tally.unmatched,
        }
    }
}

/// Projection of the rows of one category onto every chart slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProjection {
    slots: Vec<(ChartSlot, SlotSeries)>,
}

impl CategoryProjection {
    pub fn from_rows(rows: &[&Row]) -> Self {
        let slots = ChartSlot::ALL
            .iter()
            .map(|slot| (*slot, project_slot(rows, *slot)))
            .collect();
        Self { slots }
    }

    pub fn series(&self, slot: ChartSlot) -> Option<&SlotSeries> {
        self.slots
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, series)| series)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChartSlot, &SlotSeries)> {
        self.slots.iter().map(|(slot, series)| (*slot, series))
    }

    pub fn numeric(&self, slot: ChartSlot) -> Option<&NumericSeries> {
        match self.series(slot)? {
            SlotSeries::Numeric(series) => Some(series),
            SlotSeries::Categorical(_) => None,
        }
    }

    pub fn tally(&self, slot: ChartSlot) -> Option<&CategoricalTally> {
        match self.series(slot)? {
            SlotSeries::Categorical(tally) => Some(tally),
            SlotSeries::Numeric(_) => None,
        }
    }
}

fn project_slot(rows: &[&Row], slot: ChartSlot) -> SlotSeries {
    match slot.kind() {
        ChartKind::Bar => SlotSeries::Numeric(NumericSeries::project(rows, slot.column())),
        ChartKind::Pie => SlotSeries::Categorical(CategoricalTally::project(
            rows,
            slot.column(),
            slot.tally_labels(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d001_category_charts::filter::filter_by_category;

    fn wearables() -> Vec<Row> {
        vec![
            [
                "Wearables", "VendorA", "SKU1", "", "", "$10.00", "100 mm", "5 oz", "Yes", "No",
                "", "Yes", "No",
            ]
            .into_iter()
            .collect(),
            [
                "Wearables", "VendorB", "SKU2", "", "", "$20.00", "200 mm", "10 oz", "No", "Yes",
                "", "No", "Yes",
            ]
            .into_iter()
            .collect(),
        ]
    }

    #[test]
    fn test_wearables_scenario() {
        let rows = wearables();
        let filtered = filter_by_category(&rows, "Wearables");
        let projection = CategoryProjection::from_rows(&filtered);

        let pricing = projection.numeric(ChartSlot::Pricing).unwrap();
        assert_eq!(pricing.labels, vec!["VendorA", "VendorB"]);
        assert_eq!(pricing.values, vec![10.0, 20.0]);

        let size = projection.numeric(ChartSlot::Size).unwrap();
        assert_eq!(size.values, vec![100.0, 200.0]);
        let weight = projection.numeric(ChartSlot::Weight).unwrap();
        assert_eq!(weight.values, vec![5.0, 10.0]);

        let fda = projection.tally(ChartSlot::FdaApproved).unwrap();
        assert_eq!(fda.count_of("Yes"), Some(1));
        assert_eq!(fda.count_of("No"), Some(1));

        let ce = projection.tally(ChartSlot::CeCertification).unwrap();
        assert_eq!(ce.counts, vec![1, 1, 0]);
        let ios = projection.tally(ChartSlot::IosCompatible).unwrap();
        assert_eq!(ios.counts, vec![1, 1]);
    }

    #[test]
    fn test_tally_excludes_unmatched_values() {
        let tally = CategoricalTally::tally(["Yes", "No", "Yes", "Maybe"], &["Yes", "No"]);
        assert_eq!(tally.count_of("Yes"), Some(2));
        assert_eq!(tally.count_of("No"), Some(1));
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.unmatched, 1);
        assert_eq!(tally.count_of("Maybe"), None);
    }

    #[test]
    fn test_tally_is_case_sensitive() {
        let tally = CategoricalTally::tally(["yes", "YES", "Yes "], &["Yes", "No"]);
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.unmatched, 3);
    }

    #[test]
    fn test_zero_matching_rows_yield_empty_series() {
        let rows = wearables();
        let filtered = filter_by_category(&rows, "Treadmills");
        let projection = CategoryProjection::from_rows(&filtered);

        assert_eq!(projection.iter().count(), ChartSlot::ALL.len());
        for (slot, series) in projection.iter() {
            match slot.kind() {
                ChartKind::Bar => {
                    assert!(series.labels().is_empty());
                    assert!(series.data().is_empty());
                }
                ChartKind::Pie => {
                    assert_eq!(series.labels().len(), slot.tally_labels().len());
                    assert!(series.data().iter().all(|v| *v == 0.0));
                }
            }
            assert_eq!(series.dropped(), 0);
        }
    }

    #[test]
    fn test_unreadable_numbers_stay_nan() {
        let rows: Vec<Row> = vec![
            ["Rings", "VendorC", "", "", "", "Call us", "8 mm", "N/A"]
                .into_iter()
                .collect(),
            ["Rings", "VendorD"].into_iter().collect(),
        ];
        let filtered = filter_by_category(&rows, "Rings");
        let projection = CategoryProjection::from_rows(&filtered);

        let pricing = projection.numeric(ChartSlot::Pricing).unwrap();
        assert_eq!(pricing.values.len(), 2);
        assert!(pricing.values.iter().all(|v| v.is_nan()));
        assert_eq!(pricing.unparsed(), 2);

        let size = projection.numeric(ChartSlot::Size).unwrap();
        assert_eq!(size.values[0], 8.0);
        assert!(size.values[1].is_nan());

        // missing cells are unmatched, never counted
        let android = projection.tally(ChartSlot::AndroidCompatible).unwrap();
        assert_eq!(android.total(), 0);
        assert_eq!(android.unmatched, 2);
    }
}
