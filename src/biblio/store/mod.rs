//! # Storage Layer
//!
//! Storage is abstracted behind the [`DataStore`] trait so business logic
//! never touches the filesystem directly:
//!
//! - [`fs::FileStore`]: production storage — one CSV file per collection
//!   (`books.csv`, `members.csv`, `loans.csv`), header row first, one record
//!   per line, rewritten whole when a record changes.
//! - [`memory::InMemoryStore`]: in-memory storage for fast, isolated tests.
//!
//! The primitive operations are "list all", "append one" and "replace all".
//! Replace-whole-collection is how single-record updates are persisted: the
//! backing format has no random-access update, so an availability change or a
//! return rewrites the file. Lookups are linear scans over "list all",
//! provided as default methods here so both backends share them.
//!
//! Stores do not enforce uniqueness of ISBNs or member ids; that is the
//! command layer's job. Records handed out are owned copies — mutating them
//! does nothing until saved back.

use crate::error::Result;
use crate::model::{Book, Loan, Member};
use chrono::NaiveDate;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Ensure the backing store exists. Idempotent.
    fn init(&self) -> Result<()>;

    /// Every stored book, in storage (insertion) order.
    fn list_books(&self) -> Result<Vec<Book>>;

    /// Append one book. No duplicate check; callers verify first.
    fn add_book(&mut self, book: &Book) -> Result<()>;

    /// Replace the entire book collection.
    fn save_books(&mut self, books: &[Book]) -> Result<()>;

    fn list_members(&self) -> Result<Vec<Member>>;

    /// Append one member. Caller must have verified id uniqueness.
    fn add_member(&mut self, member: &Member) -> Result<()>;

    fn list_loans(&self) -> Result<Vec<Loan>>;

    fn add_loan(&mut self, loan: &Loan) -> Result<()>;

    /// Replace the entire loan collection (used when a loan is returned).
    fn save_loans(&mut self, loans: &[Loan]) -> Result<()>;

    /// First member with the given id, if any.
    fn get_member(&self, member_id: &str) -> Result<Option<Member>> {
        Ok(self
            .list_members()?
            .into_iter()
            .find(|m| m.member_id == member_id))
    }

    /// All loans for the given member, in storage order.
    ///
    /// Must scan the whole collection: a member's loans are not necessarily
    /// contiguous, so returning after the first matching run drops records.
    fn member_loans(&self, member_id: &str) -> Result<Vec<Loan>> {
        Ok(self
            .list_loans()?
            .into_iter()
            .filter(|l| l.member_id == member_id)
            .collect())
    }

    /// All outstanding loans whose due date is strictly before `today`.
    fn overdue_loans(&self, today: NaiveDate) -> Result<Vec<Loan>> {
        Ok(self
            .list_loans()?
            .into_iter()
            .filter(|l| l.is_overdue(today))
            .collect())
    }
}
