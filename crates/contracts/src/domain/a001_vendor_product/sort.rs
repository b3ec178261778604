use super::measure::parse_measure;
use super::schema::{Column, Row};
use std::cmp::Ordering;

/// Compares two rows by one column.
///
/// Numeric columns compare by their measured value with `NaN` after every
/// number; other columns compare as plain strings.
pub fn compare_by_column(a: &Row, b: &Row, column: Column) -> Ordering {
    match column.unit() {
        Some(unit) => {
            let left = parse_measure(a.cell(column), unit);
            let right = parse_measure(b.cell(column), unit);
            match (left.is_nan(), right.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => left.total_cmp(&right),
            }
        }
        None => a.cell(column).cmp(b.cell(column)),
    }
}

/// Returns a sorted copy of `rows`; ties keep their original order
pub fn sorted_rows(rows: &[Row], column: Column, ascending: bool) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let cmp = compare_by_column(a, b, column);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(vendor: &str, price: &str) -> Row {
        ["Wearables", vendor, "", "", "", price].into_iter().collect()
    }

    fn vendors(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(Row::vendor).collect()
    }

    #[test]
    fn test_price_sorts_numerically() {
        let rows = vec![row("A", "$1,200.00"), row("B", "$99.00"), row("C", "$350.00")];
        let sorted = sorted_rows(&rows, Column::Pricing, true);
        assert_eq!(vendors(&sorted), vec!["B", "C", "A"]);
        let sorted = sorted_rows(&rows, Column::Pricing, false);
        assert_eq!(vendors(&sorted), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_unparseable_values_sort_last_ascending() {
        let rows = vec![row("A", "n/a"), row("B", "$5.00"), row("C", "$1.00")];
        let sorted = sorted_rows(&rows, Column::Pricing, true);
        assert_eq!(vendors(&sorted), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_text_column_sort_is_stable() {
        let rows = vec![row("B", "1"), row("A", "2"), row("B", "3")];
        let sorted = sorted_rows(&rows, Column::Vendor, true);
        assert_eq!(vendors(&sorted), vec!["A", "B", "B"]);
        assert_eq!(sorted[1].cell(Column::Pricing), "1");
        assert_eq!(sorted[2].cell(Column::Pricing), "3");
        // source left untouched
        assert_eq!(vendors(&rows), vec!["B", "A", "B"]);
    }
}
