use std::sync::{Arc, RwLock};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::Extension;
use tracing::{info, warn};

use crate::errors::RequestError;
use crate::fixtures::demo_user;
use crate::models::User;
use crate::AppState;

/// Who is signed in right now, if anyone.
///
/// Signing in never checks credentials: it always establishes the demo
/// identity. There is one session per process.
#[derive(Debug, Default)]
pub struct Session {
    user: RwLock<Option<User>>,
}

impl Session {
    /// A session that starts signed in as the demo user.
    pub fn signed_in() -> Self {
        Self {
            user: RwLock::new(Some(demo_user())),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<User> {
        match self.user.read() {
            Ok(user) => user.clone(),
            Err(_) => {
                warn!("Session lock poisoned, treating as signed out");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    pub fn sign_in(&self, email: &str, _password: &str) -> User {
        let mut user = demo_user();
        let email = email.trim();
        if !email.is_empty() {
            user.email = email.to_owned();
        }
        info!("Signed in as {}", user.email);
        if let Ok(mut slot) = self.user.write() {
            *slot = Some(user.clone());
        }
        user
    }

    pub fn sign_out(&self) {
        if let Ok(mut slot) = self.user.write() {
            if slot.take().is_some() {
                info!("Signed out");
            }
        }
    }
}

pub struct MaybeUser(pub Option<User>);

#[axum::async_trait]
impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync + 'static,
{
    type Rejection = RequestError;
    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let Extension(app) = Extension::<Arc<AppState>>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                warn!("Session requested without shared state attached: {}", e);
                RequestError::ServerError
            })?;
        Ok(MaybeUser(app.session.current()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_then_sign_out() {
        let session = Session::signed_out();
        assert!(!session.is_authenticated());

        let user = session.sign_in("reader@example.com", "anything");
        assert_eq!(user.email, "reader@example.com");
        assert_eq!(session.current().map(|u| u.name), Some("Alex Reader".to_owned()));

        session.sign_out();
        assert!(session.current().is_none());
    }

    #[test]
    fn blank_email_keeps_the_demo_address() {
        let session = Session::signed_out();
        let user = session.sign_in("   ", "");
        assert_eq!(user.email, "alex@example.com");
    }

    #[test]
    fn new_sessions_start_as_the_demo_user() {
        let session = Session::signed_in();
        assert_eq!(session.current().map(|u| u.id), Some("1".to_owned()));
    }
}
