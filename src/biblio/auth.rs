//! Credential verification and member registration.
//!
//! Passwords are hashed with bcrypt (work factor [`bcrypt::DEFAULT_COST`])
//! and checked with `bcrypt::verify`; plaintext is never stored and hashes
//! are never compared as strings. Successful logins hand back a
//! [`Session`] value — the caller (normally [`crate::api::LibraryApi`])
//! decides how long to hold it.

use crate::config::BiblioConfig;
use crate::error::{BiblioError, Result};
use crate::model::{Member, Role, Session};
use crate::store::DataStore;
use chrono::NaiveDate;

/// Development-grade default for the librarian account, used only when the
/// config file carries no hash. Not a production credential store.
const DEFAULT_ADMIN_PASSWORD: &str = "LibAdmin@2024";

pub struct Auth {
    admin_username: String,
    admin_hash: String,
}

impl Auth {
    pub fn new(config: &BiblioConfig) -> Result<Self> {
        let admin_hash = match &config.admin_password_hash {
            Some(hash) => hash.clone(),
            None => bcrypt::hash(DEFAULT_ADMIN_PASSWORD, bcrypt::DEFAULT_COST)?,
        };
        Ok(Self {
            admin_username: config.admin_username.clone(),
            admin_hash,
        })
    }

    /// Register a new member. Fails with `DuplicateKey` (and performs no
    /// write) if the member id is already taken.
    pub fn register_member<S: DataStore>(
        &self,
        store: &mut S,
        member_id: &str,
        name: &str,
        password: &str,
        email: &str,
        today: NaiveDate,
    ) -> Result<Member> {
        if store.get_member(member_id)?.is_some() {
            return Err(BiblioError::DuplicateKey(format!(
                "Member ID '{member_id}' already exists"
            )));
        }

        let member = Member {
            member_id: member_id.to_string(),
            name: name.to_string(),
            password_hash: bcrypt::hash(password, bcrypt::DEFAULT_COST)?,
            email: email.to_string(),
            join_date: today,
        };
        store.add_member(&member)?;
        Ok(member)
    }

    /// Verify credentials for the given role and hand back a session.
    ///
    /// Librarian logins check the configured admin credential; member logins
    /// use the member id as username and verify against the stored hash.
    pub fn login<S: DataStore>(
        &self,
        store: &S,
        role: Role,
        username: &str,
        password: &str,
    ) -> Result<Session> {
        let verified = match role {
            Role::Librarian => {
                username == self.admin_username && bcrypt::verify(password, &self.admin_hash)?
            }
            Role::Member => match store.get_member(username)? {
                Some(member) => bcrypt::verify(password, &member.password_hash)?,
                None => false,
            },
        };

        if verified {
            Ok(Session {
                role,
                user_id: username.to_string(),
            })
        } else {
            Err(BiblioError::Unauthorized("Invalid credentials".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn auth() -> Auth {
        Auth::new(&BiblioConfig::default()).unwrap()
    }

    #[test]
    fn register_then_login_succeeds() {
        let mut store = InMemoryStore::new();
        let auth = auth();
        auth.register_member(
            &mut store,
            "M001",
            "Ada",
            "correct horse",
            "ada@example.com",
            date("2024-01-01"),
        )
        .unwrap();

        let session = auth
            .login(&store, Role::Member, "M001", "correct horse")
            .unwrap();
        assert!(session.is_member());
        assert_eq!(session.user_id, "M001");
    }

    #[test]
    fn register_never_stores_plaintext() {
        let mut store = InMemoryStore::new();
        let member = auth()
            .register_member(
                &mut store,
                "M001",
                "Ada",
                "secret",
                "ada@example.com",
                date("2024-01-01"),
            )
            .unwrap();
        assert_ne!(member.password_hash, "secret");
        assert!(member.password_hash.starts_with("$2"));
    }

    #[test]
    fn duplicate_member_id_is_rejected_without_a_write() {
        let mut store = InMemoryStore::new();
        let auth = auth();
        auth.register_member(&mut store, "M001", "Ada", "pw", "a@example.com", date("2024-01-01"))
            .unwrap();

        let err = auth
            .register_member(&mut store, "M001", "Bob", "pw2", "b@example.com", date("2024-01-02"))
            .unwrap_err();
        assert!(matches!(err, BiblioError::DuplicateKey(_)));
        assert_eq!(store.list_members().unwrap().len(), 1);
    }

    #[test]
    fn wrong_password_fails() {
        let mut store = InMemoryStore::new();
        let auth = auth();
        auth.register_member(&mut store, "M001", "Ada", "pw", "a@example.com", date("2024-01-01"))
            .unwrap();

        let err = auth.login(&store, Role::Member, "M001", "nope").unwrap_err();
        assert!(matches!(err, BiblioError::Unauthorized(_)));
    }

    #[test]
    fn unknown_member_fails() {
        let store = InMemoryStore::new();
        let err = auth().login(&store, Role::Member, "ghost", "pw").unwrap_err();
        assert!(matches!(err, BiblioError::Unauthorized(_)));
    }

    #[test]
    fn default_admin_can_log_in_as_librarian() {
        let store = InMemoryStore::new();
        let session = auth()
            .login(&store, Role::Librarian, "admin", "LibAdmin@2024")
            .unwrap();
        assert!(session.is_librarian());
    }

    #[test]
    fn member_credentials_do_not_grant_librarian_role() {
        let mut store = InMemoryStore::new();
        let auth = auth();
        auth.register_member(&mut store, "M001", "Ada", "pw", "a@example.com", date("2024-01-01"))
            .unwrap();

        let err = auth.login(&store, Role::Librarian, "M001", "pw").unwrap_err();
        assert!(matches!(err, BiblioError::Unauthorized(_)));
    }
}
