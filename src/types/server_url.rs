use crate::errors::InvalidServerUrl;
use aliri_braid::braid;

/// A [ServerUrl] is the root URL of a Nextcloud installation, e.g.
/// `https://cloud.example.com`. Endpoint paths begin with a slash, so the
/// URL must not end with one.
#[braid(validator, serde)]
pub struct ServerUrl(String);

impl aliri_braid::Validator for ServerUrl {
    type Error = InvalidServerUrl;

    fn validate(s: &str) -> Result<(), Self::Error> {
        if !(s.starts_with("http://") || s.starts_with("https://")) {
            Err(InvalidServerUrl::Protocol(s.to_string()))
        } else if s.ends_with('/') {
            Err(InvalidServerUrl::TrailingSlash(s.to_string()))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("http://localhost")]
    #[case("http://localhost:8080")]
    #[case("https://cloud.example.com")]
    #[case("https://example.com/nextcloud")]
    fn test_parse_url(#[case] url: &str) {
        assert!(ServerUrl::try_from(url).is_ok());
    }

    #[rstest]
    #[case("idk://cloud.example.com")]
    #[case("cloud.example.com")]
    fn test_reject_bad_protocol(#[case] url: &str) {
        assert!(matches!(
            ServerUrl::try_from(url).unwrap_err(),
            InvalidServerUrl::Protocol { .. }
        ))
    }

    #[rstest]
    #[case("http://localhost/")]
    #[case("https://cloud.example.com/")]
    fn test_reject_trailing_slash(#[case] url: &str) {
        assert!(matches!(
            ServerUrl::try_from(url).unwrap_err(),
            InvalidServerUrl::TrailingSlash { .. }
        ))
    }
}
