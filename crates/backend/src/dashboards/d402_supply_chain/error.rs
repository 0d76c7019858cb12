use axum::http::StatusCode;
use chrono::NaiveDate;
use thiserror::Error;

/// Ошибки дашборда D402
#[derive(Debug, Error)]
pub enum SupplyChainError {
    #[error("invalid date range: {end} is before {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("date range of {days} days exceeds the limit of {limit} days")]
    RangeTooLarge { days: i64, limit: i64 },

    #[error("unknown region: {0:?}")]
    UnknownRegion(String),

    #[error("invalid distribution parameters: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl SupplyChainError {
    /// Selection errors are caused by the request, everything else is ours.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SupplyChainError::UnknownRegion(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            SupplyChainError::UnknownRegion("Central".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let err = SupplyChainError::InvalidDateRange { start, end };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "invalid date range: 2024-01-01 is before 2024-02-01"
        );
    }
}
