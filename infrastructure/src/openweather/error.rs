//! Error types for the OpenWeatherMap adapter

use aqi_application::ProviderError;
use thiserror::Error;

/// Result type alias for OpenWeatherMap operations
pub type Result<T> = std::result::Result<T, OpenWeatherError>;

/// Errors that can occur when talking to the OpenWeatherMap API
#[derive(Error, Debug)]
pub enum OpenWeatherError {
    #[error("API key not configured (set {0})")]
    MissingApiKey(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Empty pollution list for {0}")]
    EmptyList(String),
}

impl From<OpenWeatherError> for ProviderError {
    fn from(err: OpenWeatherError) -> Self {
        match err {
            OpenWeatherError::MissingApiKey(_) => ProviderError::MissingApiKey,
            OpenWeatherError::ClientBuild(msg) => ProviderError::Request(msg),
            OpenWeatherError::Request(e) if e.is_timeout() => ProviderError::Timeout,
            OpenWeatherError::Request(e) if e.is_decode() => {
                ProviderError::InvalidResponse(e.to_string())
            }
            OpenWeatherError::Request(e) => ProviderError::Request(e.to_string()),
            OpenWeatherError::Http { status, message } => ProviderError::Http { status, message },
            OpenWeatherError::ParseError(msg) => ProviderError::InvalidResponse(msg),
            OpenWeatherError::EmptyList(city) => ProviderError::NoData(city),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_provider_error() {
        assert_eq!(
            ProviderError::from(OpenWeatherError::MissingApiKey("OPENWEATHER_API_KEY".into())),
            ProviderError::MissingApiKey
        );
        assert_eq!(
            ProviderError::from(OpenWeatherError::Http {
                status: 401,
                message: "Invalid API key".into()
            }),
            ProviderError::Http {
                status: 401,
                message: "Invalid API key".into()
            }
        );
        assert_eq!(
            ProviderError::from(OpenWeatherError::EmptyList("Delhi".into())),
            ProviderError::NoData("Delhi".into())
        );
        assert!(matches!(
            ProviderError::from(OpenWeatherError::ParseError("eof".into())),
            ProviderError::InvalidResponse(_)
        ));
    }
}
