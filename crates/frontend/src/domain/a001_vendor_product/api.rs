use contracts::domain::a001_vendor_product::{Dataset, CSV_PATH};
use contracts::shared::error::DashboardError;
use gloo_net::http::Request;

/// Fetch and parse the vendor product CSV.
///
/// Every call goes to the network; pages load their own copy on mount.
pub async fn fetch_dataset() -> Result<Dataset, DashboardError> {
    let response = Request::get(CSV_PATH)
        .send()
        .await
        .map_err(DashboardError::fetch_failed)?;

    if !response.ok() {
        return Err(DashboardError::fetch_status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(DashboardError::fetch_failed)?;

    let dataset = Dataset::from_csv_text(&text);
    if dataset.skipped_records() > 0 {
        log::warn!(
            "{}: skipped {} unreadable records",
            CSV_PATH,
            dataset.skipped_records()
        );
    }
    log::debug!("{}: loaded {} rows", CSV_PATH, dataset.len());

    Ok(dataset)
}
