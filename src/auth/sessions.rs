// src/auth/sessions.rs
use crate::auth::identity::AuthenticatedUser;
use crate::auth::token::{hash_token, new_session_token};
use std::collections::HashMap;
use std::sync::Mutex;

pub const SESSION_COOKIE: &str = "session";
const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days

/// A signed-in visitor. Holds the identity provider's ID token so
/// outbound calls could present it; everything else is for the navbar.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub id_token: String,
    pub expires_at: i64,
}

/// In-memory session store keyed by hashed cookie token. The marketplace
/// owns no storage, so sessions live and die with the process; signing in
/// again after a restart is the expected recovery.
#[derive(Default)]
pub struct SessionStore {
    inner: Mutex<HashMap<[u8; 32], Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for a freshly authenticated user and return the
    /// raw cookie token (never stored).
    pub fn create(&self, user: &AuthenticatedUser, now: i64) -> String {
        let raw_token = new_session_token();
        let session = Session {
            user_id: user.local_id.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone().unwrap_or_default(),
            id_token: user.id_token.clone(),
            expires_at: now + SESSION_TTL_SECS,
        };

        let mut inner = self.inner.lock().expect("session store poisoned");
        inner.insert(hash_token(&raw_token), session);
        raw_token
    }

    /// Look up a session by raw cookie token. Expired entries are dropped
    /// on the way out.
    pub fn get(&self, raw_token: &str, now: i64) -> Option<Session> {
        let key = hash_token(raw_token);
        let mut inner = self.inner.lock().expect("session store poisoned");

        match inner.get(&key) {
            Some(session) if session.expires_at > now => Some(session.clone()),
            Some(_) => {
                inner.remove(&key);
                None
            }
            None => None,
        }
    }

    pub fn revoke(&self, raw_token: &str) {
        let mut inner = self.inner.lock().expect("session store poisoned");
        inner.remove(&hash_token(raw_token));
    }
}

/// Pull the session token out of a `Cookie` request header.
pub fn cookie_token(cookie_header: &str) -> Option<&str> {
    cookie_header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}

/// `Set-Cookie` value that establishes the session.
pub fn session_cookie(raw_token: &str) -> String {
    format!("{SESSION_COOKIE}={raw_token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_TTL_SECS}")
}

/// `Set-Cookie` value that clears it.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
