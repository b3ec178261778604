use crate::domain::a001_vendor_product::Row;

/// Category chosen in the dashboard selector.
///
/// The selector reports "no category" as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selection(Option<String>);

impl Selection {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn from_control_value(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self(None)
        } else {
            Self(Some(value))
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Value to put back into the selector
    pub fn control_value(&self) -> String {
        self.0.clone().unwrap_or_default()
    }
}

/// Rows whose category cell equals `category` exactly, order preserved
pub fn filter_by_category<'a, I>(rows: I, category: &str) -> Vec<&'a Row>
where
    I: IntoIterator<Item = &'a Row>,
{
    rows.into_iter()
        .filter(|row| row.category() == category)
        .collect()
}

/// Applies a selection; an empty selection matches nothing
pub fn filter_by_selection<'a>(rows: &'a [Row], selection: &Selection) -> Vec<&'a Row> {
    match selection.category() {
        Some(category) => filter_by_category(rows, category),
        None => Vec::new(),
    }
}
