use crate::error::Error;

/// Environment variable holding the project base URL.
pub const URL_VAR: &str = "SUPABASE_URL";
/// Environment variable holding the publishable anon key.
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Connection settings for the hosted Supabase project.
///
/// Both values are baked into the binary at build time, mirroring how the
/// site is deployed as a static bundle with no runtime environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Project base URL, normalized to have no trailing slash.
    pub url: String,
    /// Publishable anon key sent with every request.
    pub anon_key: String,
}

impl Config {
    /// Build a config from explicit values.
    ///
    /// Blank values are rejected so a missing build-time variable cannot
    /// silently produce a client that targets an empty URL.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self, Error> {
        let url = url.into().trim().trim_end_matches('/').to_string();
        let anon_key = anon_key.into().trim().to_string();
        if url.is_empty() {
            return Err(Error::MissingConfig(URL_VAR));
        }
        if anon_key.is_empty() {
            return Err(Error::MissingConfig(ANON_KEY_VAR));
        }
        Ok(Self { url, anon_key })
    }

    /// Read the connection settings captured at compile time.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(
            option_env!("SUPABASE_URL").unwrap_or_default(),
            option_env!("SUPABASE_ANON_KEY").unwrap_or_default(),
        )
    }

    /// REST endpoint for a table.
    pub(crate) fn rest_endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_complete_settings() {
        let config = Config::new("https://demo.supabase.co", "anon-key").unwrap();
        assert_eq!(config.url, "https://demo.supabase.co");
        assert_eq!(config.anon_key, "anon-key");
    }

    #[test]
    fn test_strips_trailing_slash_from_url() {
        let config = Config::new("https://demo.supabase.co/", "anon-key").unwrap();
        assert_eq!(
            config.rest_endpoint("projects"),
            "https://demo.supabase.co/rest/v1/projects"
        );
    }

    #[test]
    fn test_rejects_missing_url() {
        let err = Config::new("", "anon-key").unwrap_err();
        assert_eq!(err, Error::MissingConfig(URL_VAR));
    }

    #[test]
    fn test_rejects_blank_anon_key() {
        let err = Config::new("https://demo.supabase.co", "   ").unwrap_err();
        assert_eq!(err, Error::MissingConfig(ANON_KEY_VAR));
    }
}
