use rosteraudit_fetch::FetchError;
use thiserror::Error;

/// Errors that abort a whole compliance run.
///
/// Per-player problems never surface here; they are recorded in the report.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to fetch all teams page: {status}")]
    RosterUnavailable { status: u16 },

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_unavailable_message() {
        let err = ScanError::RosterUnavailable { status: 503 };
        assert_eq!(err.to_string(), "Failed to fetch all teams page: 503");
    }

    #[test]
    fn test_fetch_error_is_transparent() {
        let err: ScanError = FetchError::InvalidUrl("nowhere".to_string()).into();
        assert_eq!(err.to_string(), "invalid URL: nowhere");
    }
}
