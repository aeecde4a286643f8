//! Session state and the authorization gate for protected navigation.
//!
//! One [`Session`] exists per running app. It is explicitly constructed and
//! handed to the components that need it (tests build isolated instances);
//! only [`set_token`](Session::set_token), [`login`](Session::login) and
//! [`logout`](Session::logout) mutate it. The session trusts the token's
//! embedded claims until logout or token replacement — there is no server
//! round-trip to validate.
//!
//! Route guards do not hold state of their own: they call
//! [`Session::admission`] with the route's role requirement on every
//! navigation attempt.

use std::collections::BTreeSet;

use crate::claims;
use crate::credentials::CredentialStore;

/// Role required for the admin console.
pub const ADMIN_ROLE: &str = "Administrator";

/// Decision for one protected navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Authenticated and the role requirement is satisfied: render the view.
    Granted,
    /// Not authenticated: redirect to the login page.
    LoginRequired,
    /// Authenticated but the role requirement is not met: redirect to the
    /// unauthorized page.
    Forbidden,
}

/// The current user's identity, derived from the most recently set token.
#[derive(Clone, Debug)]
pub struct Session<S> {
    credentials: S,
    is_authenticated: bool,
    roles: BTreeSet<String>,
    username: String,
}

impl<S: CredentialStore> Session<S> {
    /// A fresh, unauthenticated session over the given credential store.
    pub fn new(credentials: S) -> Self {
        Self {
            credentials,
            is_authenticated: false,
            roles: BTreeSet::new(),
            username: String::new(),
        }
    }

    /// Re-apply a credential persisted by an earlier page load, if any.
    pub fn restore(&mut self) {
        if let Some(token) = self.credentials.load() {
            self.apply_token(&token);
        }
    }

    /// Adopt the identity embedded in `token`, or reset to the
    /// unauthenticated state on `None`.
    pub fn set_token(&mut self, token: Option<&str>) {
        match token {
            Some(token) => self.apply_token(token),
            None => self.reset(),
        }
    }

    /// Persist the credential, then adopt its identity.
    pub fn login(&mut self, token: &str) {
        self.credentials.save(token);
        self.apply_token(token);
    }

    /// Erase the persisted credential and reset to unauthenticated. After
    /// this, a page reload cannot re-authenticate from storage. Server-side
    /// invalidation, if any, is not this component's job.
    pub fn logout(&mut self) {
        self.credentials.clear();
        self.reset();
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Display name extracted from the token claims; empty when logged out.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn roles(&self) -> &BTreeSet<String> {
        &self.roles
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|role| self.has_role(role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }

    /// Admission decision for a route requiring any of `required`. An empty
    /// requirement only needs authentication.
    pub fn admission(&self, required: &[&str]) -> Admission {
        if !self.is_authenticated {
            Admission::LoginRequired
        } else if required.is_empty() || self.has_any_role(required) {
            Admission::Granted
        } else {
            Admission::Forbidden
        }
    }

    fn apply_token(&mut self, token: &str) {
        match claims::decode(token) {
            Ok(claims) => {
                self.username = claims.display_name().to_string();
                self.roles = claims.roles;
                self.is_authenticated = true;
            }
            Err(err) => {
                tracing::warn!(error = %err, "rejecting malformed bearer token");
                self.reset();
            }
        }
    }

    fn reset(&mut self) {
        self.is_authenticated = false;
        self.roles.clear();
        self.username.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::testing::token_with;
    use crate::credentials::MemoryCredentials;
    use serde_json::json;

    fn token(sub: &str, role_claim: Option<serde_json::Value>) -> String {
        let mut claims = json!({
            "sub": sub,
            "email": format!("{sub}@liftdesk.example"),
            "iat": 1_700_000_000,
            "exp": 1_800_000_000,
        });
        if let Some(roles) = role_claim {
            claims[claims::ROLE_CLAIM] = roles;
        }
        token_with(claims)
    }

    fn session() -> Session<MemoryCredentials> {
        Session::new(MemoryCredentials::new())
    }

    #[test]
    fn single_role_claim_becomes_one_element_set() {
        let mut session = session();
        session.set_token(Some(&token("dana", Some(json!("Administrator")))));

        assert!(session.is_authenticated());
        assert_eq!(session.username(), "dana");
        assert_eq!(
            session.roles().iter().collect::<Vec<_>>(),
            vec!["Administrator"]
        );
        assert!(session.is_admin());
    }

    #[test]
    fn array_role_claim_keeps_every_role() {
        let mut session = session();
        session.set_token(Some(&token(
            "dana",
            Some(json!(["Administrator", "User"])),
        )));

        assert!(session.has_role("Administrator"));
        assert!(session.has_role("User"));
        assert_eq!(session.roles().len(), 2);
    }

    #[test]
    fn absent_role_claim_yields_empty_set() {
        let mut session = session();
        session.set_token(Some(&token("dana", None)));

        assert!(session.is_authenticated());
        assert!(session.roles().is_empty());
        assert!(!session.is_admin());
    }

    #[test]
    fn unauthenticated_navigation_requires_login() {
        assert_eq!(session().admission(&[ADMIN_ROLE]), Admission::LoginRequired);
        assert_eq!(session().admission(&[]), Admission::LoginRequired);
    }

    #[test]
    fn wrong_role_is_forbidden_not_sent_to_login() {
        let mut session = session();
        session.set_token(Some(&token("casey", Some(json!("User")))));

        assert_eq!(session.admission(&[ADMIN_ROLE]), Admission::Forbidden);
    }

    #[test]
    fn matching_role_is_granted() {
        let mut session = session();
        session.set_token(Some(&token(
            "dana",
            Some(json!(["Administrator", "User"])),
        )));

        assert_eq!(session.admission(&[ADMIN_ROLE]), Admission::Granted);
        // empty requirement only needs authentication
        assert_eq!(session.admission(&[]), Admission::Granted);
    }

    #[test]
    fn logout_resets_identity_and_erases_the_credential() {
        let credentials = MemoryCredentials::new();
        let mut session = Session::new(credentials.clone());
        session.login(&token("dana", Some(json!("Administrator"))));
        assert!(credentials.load().is_some());

        session.logout();

        assert!(!session.is_authenticated());
        assert!(session.roles().is_empty());
        assert_eq!(session.username(), "");
        assert_eq!(credentials.load(), None);

        // a fresh page load sees nothing to restore
        let mut reloaded = Session::new(credentials);
        reloaded.restore();
        assert!(!reloaded.is_authenticated());
    }

    #[test]
    fn restore_reauthenticates_from_the_persisted_credential() {
        let credentials = MemoryCredentials::new();
        let mut session = Session::new(credentials.clone());
        session.login(&token("dana", Some(json!("Administrator"))));

        let mut reloaded = Session::new(credentials);
        reloaded.restore();
        assert!(reloaded.is_authenticated());
        assert!(reloaded.is_admin());
    }

    #[test]
    fn malformed_token_resets_to_unauthenticated() {
        let mut session = session();
        session.set_token(Some(&token("dana", Some(json!("Administrator")))));

        session.set_token(Some("garbage"));
        assert!(!session.is_authenticated());
        assert!(session.roles().is_empty());

        session.set_token(Some(&token("dana", None)));
        session.set_token(None);
        assert!(!session.is_authenticated());
        assert_eq!(session.username(), "");
    }
}
