//! # API Facade
//!
//! [`LibraryApi`] is the single entry point for presentation shells. It is a
//! thin facade over the command layer: it holds the active session, stamps
//! operations with the current date, and dispatches — no business logic, no
//! I/O formatting.
//!
//! Generic over [`DataStore`] so the same facade runs against the production
//! `FileStore` or the in-memory test store.
//!
//! At most one session is active at a time: a successful login overwrites
//! the held session, a failed one leaves it untouched, logout clears it.

use crate::auth::Auth;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::{BiblioError, Result};
use crate::model::{Role, Session};
use crate::store::DataStore;
use chrono::{Local, NaiveDate};

pub struct LibraryApi<S: DataStore> {
    store: S,
    auth: Auth,
    session: Option<Session>,
}

impl<S: DataStore> LibraryApi<S> {
    pub fn new(store: S, auth: Auth) -> Self {
        Self {
            store,
            auth,
            session: None,
        }
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    fn session(&self) -> Result<Session> {
        self.session
            .clone()
            .ok_or_else(|| BiblioError::Unauthorized("No active session".to_string()))
    }

    // --- Authentication ---

    /// Open to anyone: both the public sign-up flow and the librarian's
    /// register-member action land here.
    pub fn register_member(
        &mut self,
        member_id: &str,
        name: &str,
        password: &str,
        email: &str,
    ) -> Result<CmdResult> {
        let member = self.auth.register_member(
            &mut self.store,
            member_id,
            name,
            password,
            email,
            Self::today(),
        )?;

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Member registered: {}",
            member.member_id
        )));
        Ok(result.with_members(vec![member]))
    }

    /// Replaces the held session on success; a failed login leaves any
    /// existing session untouched.
    pub fn login(&mut self, role: Role, username: &str, password: &str) -> Result<()> {
        let session = self.auth.login(&self.store, role, username, password)?;
        self.session = Some(session);
        Ok(())
    }

    pub fn logout(&mut self) {
        self.session = None;
    }

    pub fn current_user(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_librarian(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_librarian)
    }

    pub fn is_member(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_member)
    }

    // --- Library operations ---

    pub fn add_book(
        &mut self,
        isbn: &str,
        title: &str,
        author: &str,
        copies: &str,
    ) -> Result<CmdResult> {
        let session = self.session()?;
        commands::add_book::run(&mut self.store, &session, isbn, title, author, copies)
    }

    pub fn search_catalogue(&self, keyword: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, keyword)
    }

    pub fn issue_book(&mut self, isbn: &str, member_id: &str) -> Result<CmdResult> {
        let session = self.session()?;
        commands::issue::issue(&mut self.store, &session, isbn, member_id, Self::today())
    }

    pub fn borrow_book(&mut self, isbn: &str) -> Result<CmdResult> {
        let session = self.session()?;
        commands::issue::borrow(&mut self.store, &session, isbn, Self::today())
    }

    pub fn return_book(&mut self, loan_id: &str) -> Result<CmdResult> {
        let session = self.session()?;
        commands::return_book::run(&mut self.store, &session, loan_id, Self::today())
    }

    pub fn view_my_loans(&self) -> Result<CmdResult> {
        let session = self.session()?;
        commands::my_loans::run(&self.store, &session)
    }

    pub fn overdue_list(&self) -> Result<CmdResult> {
        let session = self.session()?;
        commands::overdue::run(&self.store, &session, Self::today())
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::books(&self.store)
    }

    pub fn list_members(&self) -> Result<CmdResult> {
        let session = self.session()?;
        commands::list::members(&self.store, &session)
    }

    pub fn list_loans(&self) -> Result<CmdResult> {
        let session = self.session()?;
        commands::list::loans(&self.store, &session)
    }
}

pub use crate::commands::{MessageLevel, OverdueLoan};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BiblioConfig;
    use crate::store::memory::InMemoryStore;

    fn api() -> LibraryApi<InMemoryStore> {
        let auth = Auth::new(&BiblioConfig::default()).unwrap();
        LibraryApi::new(InMemoryStore::new(), auth)
    }

    #[test]
    fn operations_require_a_session() {
        let mut api = api();
        let err = api.add_book("978-0", "Dune", "Herbert", "1").unwrap_err();
        assert!(matches!(err, BiblioError::Unauthorized(_)));
        assert!(api.current_user().is_none());
    }

    #[test]
    fn login_logout_lifecycle() {
        let mut api = api();
        api.login(Role::Librarian, "admin", "LibAdmin@2024").unwrap();
        assert!(api.is_librarian());
        assert_eq!(api.current_user().unwrap().user_id, "admin");

        api.logout();
        assert!(!api.is_librarian());
        assert!(api.current_user().is_none());
    }

    #[test]
    fn failed_login_keeps_the_previous_session() {
        let mut api = api();
        api.login(Role::Librarian, "admin", "LibAdmin@2024").unwrap();

        let err = api.login(Role::Member, "ghost", "pw").unwrap_err();
        assert!(matches!(err, BiblioError::Unauthorized(_)));
        assert!(api.is_librarian());
    }

    #[test]
    fn new_login_overwrites_the_session() {
        let mut api = api();
        api.register_member("M001", "Ada", "pw", "ada@example.com").unwrap();
        api.login(Role::Librarian, "admin", "LibAdmin@2024").unwrap();
        api.login(Role::Member, "M001", "pw").unwrap();
        assert!(api.is_member());
        assert_eq!(api.current_user().unwrap().user_id, "M001");
    }

    #[test]
    fn issue_flows_through_to_the_store() {
        let mut api = api();
        api.register_member("M001", "Ada", "pw", "ada@example.com").unwrap();
        api.login(Role::Librarian, "admin", "LibAdmin@2024").unwrap();
        api.add_book("978-0", "Dune", "Herbert", "2").unwrap();
        api.issue_book("978-0", "M001").unwrap();

        let books = api.list_books().unwrap().books;
        assert_eq!(books[0].copies_available, 1);

        api.login(Role::Member, "M001", "pw").unwrap();
        let loans = api.view_my_loans().unwrap().loans;
        assert_eq!(loans.len(), 1);
        assert_eq!(loans[0].isbn, "978-0");
    }

    #[test]
    fn search_works_without_any_session() {
        let mut api = api();
        api.login(Role::Librarian, "admin", "LibAdmin@2024").unwrap();
        api.add_book("978-0", "Dune", "Herbert", "1").unwrap();
        api.logout();

        let result = api.search_catalogue("dune").unwrap();
        assert_eq!(result.books.len(), 1);
    }
}
