use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-success status or an empty body. The literal message is a
    /// diagnostic the dashboard error log depends on.
    #[error("Unsuccessful response")]
    UnsuccessfulResponse,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsuccessful_response_diagnostic_is_stable() {
        assert_eq!(
            ApiError::UnsuccessfulResponse.to_string(),
            "Unsuccessful response"
        );
    }
}
