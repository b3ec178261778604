use crate::domain::a001_vendor_product::Column;
use serde::{Deserialize, Serialize};

/// Chart type understood by Chart.js
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
}

/// One of the fixed visualization placeholders of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChartSlot {
    Pricing,
    Size,
    Weight,
    FdaApproved,
    CeCertification,
    IosCompatible,
    AndroidCompatible,
}

const YES_NO: &[&str] = &["Yes", "No"];
const YES_NO_TBD: &[&str] = &["Yes", "No", "TBD"];

impl ChartSlot {
    /// Display order: bars first, then pies
    pub const ALL: [ChartSlot; 7] = [
        ChartSlot::Pricing,
        ChartSlot::Size,
        ChartSlot::Weight,
        ChartSlot::FdaApproved,
        ChartSlot::CeCertification,
        ChartSlot::IosCompatible,
        ChartSlot::AndroidCompatible,
    ];

    pub fn column(self) -> Column {
        match self {
            ChartSlot::Pricing => Column::Pricing,
            ChartSlot::Size => Column::Size,
            ChartSlot::Weight => Column::Weight,
            ChartSlot::FdaApproved => Column::FdaApproved,
            ChartSlot::CeCertification => Column::CeCertification,
            ChartSlot::IosCompatible => Column::IosCompatible,
            ChartSlot::AndroidCompatible => Column::AndroidCompatible,
        }
    }

    pub fn kind(self) -> ChartKind {
        match self {
            ChartSlot::Pricing | ChartSlot::Size | ChartSlot::Weight => ChartKind::Bar,
            _ => ChartKind::Pie,
        }
    }

    /// Metric name, also the bar dataset label
    pub fn metric(self) -> &'static str {
        match self {
            ChartSlot::Pricing => "Pricing",
            ChartSlot::Size => "Size",
            ChartSlot::Weight => "Weight",
            ChartSlot::FdaApproved => "FDA Approved",
            ChartSlot::CeCertification => "CE Certification",
            ChartSlot::IosCompatible => "iOS Compatible",
            ChartSlot::AndroidCompatible => "Android Compatible",
        }
    }

    pub fn title(self) -> String {
        format!("{} vs Vendors", self.metric())
    }

    /// DOM id of the slot's canvas
    pub fn canvas_id(self) -> &'static str {
        match self {
            ChartSlot::Pricing => "pricingChart",
            ChartSlot::Size => "sizeChart",
            ChartSlot::Weight => "weightChart",
            ChartSlot::FdaApproved => "fdaApprovedChart",
            ChartSlot::CeCertification => "ceCertificationChart",
            ChartSlot::IosCompatible => "iOSCompatibleChart",
            ChartSlot::AndroidCompatible => "androidCompatibleChart",
        }
    }

    /// Fixed label set of a pie slot, empty for bar slots
    pub fn tally_labels(self) -> &'static [&'static str] {
        match self {
            ChartSlot::CeCertification => YES_NO_TBD,
            ChartSlot::FdaApproved | ChartSlot::IosCompatible | ChartSlot::AndroidCompatible => {
                YES_NO
            }
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_bars_four_pies() {
        let bars = ChartSlot::ALL
            .iter()
            .filter(|s| s.kind() == ChartKind::Bar)
            .count();
        assert_eq!(bars, 3);
        assert_eq!(ChartSlot::ALL.len() - bars, 4);
    }

    #[test]
    fn test_pie_label_sets() {
        for slot in ChartSlot::ALL {
            match slot.kind() {
                ChartKind::Bar => assert!(slot.tally_labels().is_empty()),
                ChartKind::Pie => assert!(!slot.tally_labels().is_empty()),
            }
        }
        assert_eq!(ChartSlot::CeCertification.tally_labels(), &["Yes", "No", "TBD"]);
        assert_eq!(ChartSlot::FdaApproved.column(), Column::FdaApproved);
        assert_eq!(ChartSlot::CeCertification.column().index(), 8);
    }

    #[test]
    fn test_canvas_ids_are_unique() {
        let mut ids: Vec<_> = ChartSlot::ALL.iter().map(|s| s.canvas_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ChartSlot::ALL.len());
        assert_eq!(ChartSlot::Weight.title(), "Weight vs Vendors");
    }
}
