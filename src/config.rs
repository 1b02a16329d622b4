/// Fallback extraction API address used when `AIFOLIO_API_URL` is unset at
/// build time.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Base URL of the CV extraction backend.
pub fn api_base() -> &'static str {
    option_env!("AIFOLIO_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Endpoint receiving multipart CV uploads.
pub fn upload_url() -> String {
    format!("{}/upload-cv", api_base().trim_end_matches('/'))
}

/// GoTrue-compatible auth server, if one was configured at build time.
pub fn auth_url() -> Option<&'static str> {
    option_env!("AIFOLIO_AUTH_URL")
}

/// Publishable API key that goes with [`auth_url`].
pub fn auth_anon_key() -> Option<&'static str> {
    option_env!("AIFOLIO_AUTH_KEY")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_appends_route() {
        let url = upload_url();
        assert!(url.ends_with("/upload-cv"));
        assert!(!url.contains("//upload-cv"));
    }

    #[test]
    fn test_api_base_has_scheme() {
        assert!(api_base().starts_with("http"));
    }
}
