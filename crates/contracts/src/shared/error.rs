use thiserror::Error;

/// Failure surfaced by a page as a single inline message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// Network failure, non-success status or unreadable body
    #[error("{message}")]
    Fetch {
        status: Option<u16>,
        message: String,
    },

    /// Anything that went wrong while filtering, projecting or rendering
    #[error("Error processing data: {0}")]
    Processing(String),
}

impl DashboardError {
    pub fn fetch_status(status: u16) -> Self {
        Self::Fetch {
            status: Some(status),
            message: format!("Failed to fetch CSV file. Status: {}", status),
        }
    }

    pub fn fetch_failed(reason: impl std::fmt::Display) -> Self {
        Self::Fetch {
            status: None,
            message: format!("Failed to fetch CSV file: {}", reason),
        }
    }

    pub fn processing(reason: impl Into<String>) -> Self {
        Self::Processing(reason.into())
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    /// HTTP status of a fetch that got a response, `None` otherwise
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => *status,
            Self::Processing(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            DashboardError::fetch_status(404).to_string(),
            "Failed to fetch CSV file. Status: 404"
        );
        assert_eq!(
            DashboardError::fetch_failed("connection refused").to_string(),
            "Failed to fetch CSV file: connection refused"
        );
        assert_eq!(
            DashboardError::processing("canvas pricingChart not found").to_string(),
            "Error processing data: canvas pricingChart not found"
        );
    }

    #[test]
    fn test_kind() {
        assert!(DashboardError::fetch_status(500).is_fetch());
        assert!(!DashboardError::processing("x").is_fetch());
    }

    #[test]
    fn test_status() {
        assert_eq!(DashboardError::fetch_status(404).status(), Some(404));
        assert_eq!(DashboardError::fetch_failed("offline").status(), None);
        assert_eq!(DashboardError::processing("x").status(), None);
    }
}
