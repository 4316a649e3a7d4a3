/// Sign-up endpoint baked in at build time. Empty or unset disables submission.
pub fn get_signup_url() -> Option<String> {
    normalize_url(option_env!("GOOGLE_SCRIPT_URL"))
}

/// Whether sign-ups are sent in `cors` mode so the endpoint's reply can be read.
pub fn read_signup_response() -> bool {
    parse_flag(option_env!("SIGNUP_READ_RESPONSE"))
}

fn normalize_url(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1") | Some("true")
    )
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupConfig {
    pub endpoint: Option<String>,
    pub read_response: bool,
}

impl SignupConfig {
    pub fn from_build_env() -> Self {
        Self {
            endpoint: get_signup_url(),
            read_response: read_signup_response(),
        }
    }

    #[cfg(test)]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let endpoint: String = endpoint.into();
        Self {
            endpoint: normalize_url(Some(&endpoint)),
            read_response: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_url_is_unconfigured() {
        assert_eq!(normalize_url(None), None);
        assert_eq!(normalize_url(Some("")), None);
        assert_eq!(normalize_url(Some("   ")), None);
        assert_eq!(
            normalize_url(Some(" https://script.google.com/macros/s/abc/exec ")),
            Some("https://script.google.com/macros/s/abc/exec".to_string())
        );
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("1")));
        assert!(parse_flag(Some("TRUE")));
        assert!(!parse_flag(Some("0")));
        assert!(!parse_flag(Some("yes please")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn test_with_endpoint() {
        let config = SignupConfig::with_endpoint("https://example.com/exec");
        assert_eq!(config.endpoint.as_deref(), Some("https://example.com/exec"));
        assert!(!config.read_response);
        assert_eq!(SignupConfig::with_endpoint("").endpoint, None);
    }
}
