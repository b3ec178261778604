use serde::{Deserialize, Serialize};

/// Number of positional columns in the vendor product CSV
pub const COLUMN_COUNT: usize = 13;

/// Positional column of a vendor product row, in header order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Category,
    Vendor,
    SkuName,
    FormFactor,
    MetricsTracked,
    Pricing,
    Size,
    Weight,
    CeCertification,
    FdaApproved,
    BatteryLife,
    IosCompatible,
    AndroidCompatible,
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Category,
        Column::Vendor,
        Column::SkuName,
        Column::FormFactor,
        Column::MetricsTracked,
        Column::Pricing,
        Column::Size,
        Column::Weight,
        Column::CeCertification,
        Column::FdaApproved,
        Column::BatteryLife,
        Column::IosCompatible,
        Column::AndroidCompatible,
    ];

    /// Zero-based cell position
    pub fn index(self) -> usize {
        self as usize
    }

    /// Header caption shown in the table view
    pub fn title(self) -> &'static str {
        match self {
            Column::Category => "Product Category",
            Column::Vendor => "Vendor",
            Column::SkuName => "SKU name",
            Column::FormFactor => "Form factor",
            Column::MetricsTracked => "Metrics tracked",
            Column::Pricing => "Pricing",
            Column::Size => "Size",
            Column::Weight => "Weight",
            Column::CeCertification => "CE Certification",
            Column::FdaApproved => "FDA Approved",
            Column::BatteryLife => "Battery life",
            Column::IosCompatible => "iOS compatible",
            Column::AndroidCompatible => "Android compatible",
        }
    }
}

/// One data record of the CSV source.
///
/// Cells are kept verbatim and never validated against the schema: a row may
/// be shorter or longer than [`COLUMN_COUNT`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Cell at the given column, empty string when the row is too short
    pub fn cell(&self, column: Column) -> &str {
        self.cells
            .get(column.index())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn category(&self) -> &str {
        self.cell(Column::Category)
    }

    pub fn vendor(&self) -> &str {
        self.cell(Column::Vendor)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_order_matches_index() {
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), i);
        }
        assert_eq!(Column::Pricing.index(), 5);
        assert_eq!(Column::AndroidCompatible.index(), 12);
    }

    #[test]
    fn test_short_row_reads_empty_cells() {
        let row: Row = ["Wearables", "VendorA"].into_iter().collect();
        assert_eq!(row.category(), "Wearables");
        assert_eq!(row.vendor(), "VendorA");
        assert_eq!(row.cell(Column::Weight), "");
        assert_eq!(row.len(), 2);
    }
}
