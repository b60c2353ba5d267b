//! Validation of clinic website addresses.

use url::Url;

/// Reasons a website address is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WebsiteError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// The address is stored exactly as submitted; this only rejects values a
/// browser could not open, including `javascript:` and `data:` URLs.
///
/// # Errors
///
/// Returns [`WebsiteError::InvalidFormat`] for malformed URLs.
/// Returns [`WebsiteError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`WebsiteError::MissingHost`] when no host is present.
pub fn validate_website(input: &str) -> Result<(), WebsiteError> {
    let url = Url::parse(input).map_err(|e| WebsiteError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(WebsiteError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(WebsiteError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_website("http://clinica.example.com").is_ok());
        assert!(validate_website("https://clinica.example.com/sede?id=2").is_ok());
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            validate_website("clinica.example.com"),
            Err(WebsiteError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        assert_eq!(
            validate_website("javascript:alert(1)"),
            Err(WebsiteError::UnsupportedProtocol)
        );
        assert_eq!(
            validate_website("ftp://files.example.com"),
            Err(WebsiteError::UnsupportedProtocol)
        );
    }
}
