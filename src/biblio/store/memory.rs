use super::DataStore;
use crate::error::Result;
use crate::model::{Book, Loan, Member};

/// In-memory storage for testing and development.
/// Does NOT persist data. Insertion order is storage order, as on disk.
#[derive(Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    members: Vec<Member>,
    loans: Vec<Loan>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn init(&self) -> Result<()> {
        Ok(())
    }

    fn list_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn add_book(&mut self, book: &Book) -> Result<()> {
        self.books.push(book.clone());
        Ok(())
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        self.books = books.to_vec();
        Ok(())
    }

    fn list_members(&self) -> Result<Vec<Member>> {
        Ok(self.members.clone())
    }

    fn add_member(&mut self, member: &Member) -> Result<()> {
        self.members.push(member.clone());
        Ok(())
    }

    fn list_loans(&self) -> Result<Vec<Loan>> {
        Ok(self.loans.clone())
    }

    fn add_loan(&mut self, loan: &Loan) -> Result<()> {
        self.loans.push(loan.clone());
        Ok(())
    }

    fn save_loans(&mut self, loans: &[Loan]) -> Result<()> {
        self.loans = loans.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_book(mut self, isbn: &str, title: &str, copies: u32) -> Self {
            let book = Book::new(isbn.to_string(), title.to_string(), "Author".to_string(), copies);
            self.store.add_book(&book).unwrap();
            self
        }

        /// Member with an opaque placeholder hash, for tests that never log in.
        pub fn with_member(mut self, member_id: &str, name: &str) -> Self {
            let member = Member {
                member_id: member_id.to_string(),
                name: name.to_string(),
                password_hash: "$2b$12$placeholder".to_string(),
                email: format!("{member_id}@example.com"),
                join_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            };
            self.store.add_member(&member).unwrap();
            self
        }

        pub fn with_loan(mut self, member_id: &str, isbn: &str, issue_date: NaiveDate) -> Self {
            let loan = Loan::new(member_id.to_string(), isbn.to_string(), issue_date);
            self.store.add_loan(&loan).unwrap();
            self
        }
    }
}
