//! Error type shared by every remote operation.

use serde::Deserialize;
use thiserror::Error;

/// Errors reported by the remote data layer.
///
/// Variants carry plain strings rather than source errors so the type stays
/// `Clone + PartialEq` and can sit inside view state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A required build-time variable was absent or blank.
    #[error("missing Supabase configuration: {0} is not set")]
    MissingConfig(&'static str),

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Http(String),

    /// The service answered with a non-success status.
    ///
    /// `message` is the service's own description, shown to visitors
    /// verbatim. It is empty when the response body carried none.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("{0}")]
    Decode(String),
}

/// Error payload shape PostgREST uses for non-success responses.
#[derive(Deserialize)]
struct ServiceBody {
    #[serde(default)]
    message: String,
}

impl Error {
    pub(crate) fn http(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }

    pub(crate) fn decode(table: &str, err: reqwest::Error) -> Self {
        Error::Decode(format!("unexpected response from {table}: {err}"))
    }

    /// Build a service error from a non-success response body.
    ///
    /// Bodies that are not the usual `{"message": ...}` JSON yield an empty
    /// message; callers substitute their own wording for those.
    pub(crate) fn service(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ServiceBody>(body)
            .map(|body| body.message)
            .unwrap_or_default();
        Error::Service { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_displays_the_service_message_verbatim() {
        let err = Error::service(
            404,
            r#"{"message":"relation \"public.projects\" does not exist"}"#,
        );
        assert_eq!(err.to_string(), "relation \"public.projects\" does not exist");
    }

    #[test]
    fn test_service_error_ignores_extra_payload_fields() {
        let err = Error::service(
            401,
            r#"{"message":"JWT expired","code":"PGRST301","hint":null}"#,
        );
        assert_eq!(err.to_string(), "JWT expired");
    }

    #[test]
    fn test_service_error_without_json_body_displays_nothing() {
        let err = Error::service(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err,
            Error::Service {
                status: 502,
                message: String::new(),
            }
        );
        assert_eq!(err.to_string(), "");
    }

    #[test]
    fn test_missing_config_names_the_variable() {
        assert_eq!(
            Error::MissingConfig(crate::config::URL_VAR).to_string(),
            "missing Supabase configuration: SUPABASE_URL is not set"
        );
    }
}
