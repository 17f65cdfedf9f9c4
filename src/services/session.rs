use std::sync::RwLock;

use tokio::sync::broadcast;
use uuid::Uuid;

/// What the external identity provider yields for a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug, Clone)]
pub enum AuthEvent {
    SignedIn(Identity),
    SignedOut,
    TokenRefreshed,
}

/// Session holder constructed once at application start and passed by
/// reference to everything that needs the acting identity. The identity
/// provider feeds it through the `handle_*` methods; lifecycle services
/// only ever read `current_user`.
pub struct AuthContext {
    session: RwLock<Option<Identity>>,
    events: broadcast::Sender<AuthEvent>,
}

const EVENT_CAPACITY: usize = 16;

impl AuthContext {
    pub fn new() -> Self {
        Self {
            session: RwLock::new(None),
            events: broadcast::channel(EVENT_CAPACITY).0,
        }
    }

    pub fn current_user(&self) -> Option<Identity> {
        self.session
            .read()
            .expect("auth session lock poisoned")
            .clone()
    }

    pub fn handle_signed_in(&self, identity: Identity) {
        *self.session.write().expect("auth session lock poisoned") = Some(identity.clone());
        let _ = self.events.send(AuthEvent::SignedIn(identity));
    }

    pub fn handle_token_refreshed(&self) {
        let signed_in = self
            .session
            .read()
            .expect("auth session lock poisoned")
            .is_some();
        if signed_in {
            let _ = self.events.send(AuthEvent::TokenRefreshed);
        }
    }

    /// Clears the local session first; the remote revocation hook runs
    /// afterwards and its failure only gets logged. Sign-out must never
    /// leave a locally cached session behind.
    pub fn sign_out<F>(&self, revoke_remote: F)
    where
        F: FnOnce() -> Result<(), Box<dyn std::error::Error + Send + Sync>>,
    {
        *self.session.write().expect("auth session lock poisoned") = None;
        let _ = self.events.send(AuthEvent::SignedOut);

        if let Err(e) = revoke_remote() {
            tracing::warn!(error = %e, "remote session revocation failed; local session cleared anyway");
        }
    }

    pub fn on_auth_state_change(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            id: Uuid::new_v4(),
            email: "someone@example.com".to_string(),
        }
    }

    #[test]
    fn starts_signed_out() {
        let auth = AuthContext::new();
        assert_eq!(auth.current_user(), None);
    }

    #[test]
    fn signed_in_identity_is_visible() {
        let auth = AuthContext::new();
        let me = identity();
        auth.handle_signed_in(me.clone());
        assert_eq!(auth.current_user(), Some(me));
    }

    #[test]
    fn sign_out_clears_session_even_when_remote_fails() {
        let auth = AuthContext::new();
        auth.handle_signed_in(identity());

        auth.sign_out(|| Err("network unreachable".into()));
        assert_eq!(auth.current_user(), None);
    }

    #[test]
    fn auth_events_are_delivered_in_order() {
        let auth = AuthContext::new();
        let mut rx = auth.on_auth_state_change();

        auth.handle_signed_in(identity());
        auth.handle_token_refreshed();
        auth.sign_out(|| Ok(()));

        assert!(matches!(rx.try_recv(), Ok(AuthEvent::SignedIn(_))));
        assert!(matches!(rx.try_recv(), Ok(AuthEvent::TokenRefreshed)));
        assert!(matches!(rx.try_recv(), Ok(AuthEvent::SignedOut)));
    }

    #[test]
    fn token_refresh_without_session_emits_nothing() {
        let auth = AuthContext::new();
        let mut rx = auth.on_auth_state_change();
        auth.handle_token_refreshed();
        assert!(rx.try_recv().is_err());
    }
}
