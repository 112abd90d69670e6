use crate::error::ApiError;
use configuration::SessionConfig;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use std::fmt;

/// Header carrying the signed-in admin's identity.
pub const IDENTITY_HEADER: HeaderName = HeaderName::from_static("x-user-email");

/// The authentication context of the signed-in admin.
///
/// A session is created on login, cleared on logout and handed to the HTTP
/// client when it is built. Every request made by that client carries it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<String>,
    token: Option<String>,
}

impl Session {
    /// A session with no credentials. Requests are sent without auth headers.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn login(identity: impl Into<String>) -> Self {
        Self {
            identity: non_blank(Some(identity.into())),
            token: None,
        }
    }

    /// An empty token is the same as no token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = non_blank(Some(token.into()));
        self
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            identity: non_blank(config.identity.clone()),
            token: non_blank(config.token.clone()),
        }
    }

    pub fn logout(&mut self) {
        self.identity = None;
        self.token = None;
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some() || self.token.is_some()
    }

    /// Renders the session as default request headers.
    pub(crate) fn headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();

        if let Some(identity) = &self.identity {
            let value = HeaderValue::from_str(identity)
                .map_err(|e| ApiError::InvalidSession(format!("identity: {}", e)))?;
            headers.insert(IDENTITY_HEADER, value);
        }

        if let Some(token) = &self.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::InvalidSession(format!("token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// Hand-written so the token never ends up in logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("identity", &self.identity)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_session_sends_no_headers() {
        let headers = Session::anonymous().headers().unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn login_and_token_become_headers() {
        let session = Session::login("admin@shop.test").with_token("s3cret");
        let headers = session.headers().unwrap();

        assert_eq!(headers.get(&IDENTITY_HEADER).unwrap(), "admin@shop.test");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer s3cret");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn logout_clears_credentials() {
        let mut session = Session::login("admin@shop.test").with_token("s3cret");
        assert!(session.is_authenticated());

        session.logout();

        assert!(!session.is_authenticated());
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn blank_credentials_are_dropped() {
        let config = SessionConfig {
            identity: Some("admin@shop.test".to_string()),
            token: Some(String::new()),
        };
        let session = Session::from_config(&config);

        assert_eq!(session.identity(), Some("admin@shop.test"));
        let headers = session.headers().unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(headers.get(&IDENTITY_HEADER).unwrap(), "admin@shop.test");

        let session = Session::login("  ").with_token("");
        assert!(!session.is_authenticated());
        assert!(session.headers().unwrap().is_empty());
    }

    #[test]
    fn debug_output_redacts_token() {
        let session = Session::login("admin@shop.test").with_token("s3cret");
        let debug = format!("{:?}", session);
        assert!(debug.contains("admin@shop.test"));
        assert!(!debug.contains("s3cret"));
    }

    #[test]
    fn control_characters_are_rejected() {
        let session = Session::login("admin\n@shop.test");
        assert!(matches!(
            session.headers(),
            Err(ApiError::InvalidSession(_))
        ));
    }
}
