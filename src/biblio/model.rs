use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed loan term: due date is always issue date + 14 days.
pub const LOAN_PERIOD_DAYS: u64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Librarian,
    Member,
}

/// The authenticated identity a caller holds after a successful login.
///
/// Sessions are plain values handed out by `Auth::login` and passed into
/// gated commands. There is no ambient global session; `LibraryApi` keeps
/// at most one alive at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub user_id: String,
}

impl Session {
    pub fn is_librarian(&self) -> bool {
        self.role == Role::Librarian
    }

    pub fn is_member(&self) -> bool {
        self.role == Role::Member
    }
}

// Serde renames match the CSV header row of each collection file.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "ISBN")]
    pub isbn: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "CopiesTotal")]
    pub copies_total: u32,
    #[serde(rename = "CopiesAvailable")]
    pub copies_available: u32,
}

impl Book {
    pub fn new(isbn: String, title: String, author: String, copies: u32) -> Self {
        Self {
            isbn,
            title,
            author,
            copies_total: copies,
            copies_available: copies,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "MemberID")]
    pub member_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "PasswordHash")]
    pub password_hash: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "JoinDate")]
    pub join_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    #[serde(rename = "LoanID")]
    pub loan_id: Uuid,
    #[serde(rename = "MemberID")]
    pub member_id: String,
    #[serde(rename = "ISBN")]
    pub isbn: String,
    #[serde(rename = "IssueDate")]
    pub issue_date: NaiveDate,
    #[serde(rename = "DueDate")]
    pub due_date: NaiveDate,
    // Empty CSV field means the loan is still outstanding
    #[serde(rename = "ReturnDate")]
    pub return_date: Option<NaiveDate>,
}

impl Loan {
    pub fn new(member_id: String, isbn: String, issue_date: NaiveDate) -> Self {
        Self {
            loan_id: Uuid::new_v4(),
            member_id,
            isbn,
            issue_date,
            due_date: issue_date + Days::new(LOAN_PERIOD_DAYS),
            return_date: None,
        }
    }

    pub fn is_outstanding(&self) -> bool {
        self.return_date.is_none()
    }

    /// A loan is overdue iff it is outstanding and its due date has passed.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_outstanding() && self.due_date < today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn new_loan_is_due_fourteen_days_out() {
        let loan = Loan::new("M001".into(), "978-0".into(), date("2024-01-01"));
        assert_eq!(loan.due_date, date("2024-01-15"));
        assert!(loan.is_outstanding());
    }

    #[test]
    fn overdue_requires_past_due_date_and_no_return() {
        let mut loan = Loan::new("M001".into(), "978-0".into(), date("2024-01-01"));
        assert!(loan.is_overdue(date("2024-06-01")));
        // Due date itself is not overdue yet
        assert!(!loan.is_overdue(date("2024-01-15")));

        loan.return_date = Some(date("2024-02-01"));
        assert!(!loan.is_overdue(date("2024-06-01")));
    }

    #[test]
    fn new_book_starts_with_all_copies_available() {
        let book = Book::new("978-0".into(), "Dune".into(), "Herbert".into(), 3);
        assert_eq!(book.copies_available, book.copies_total);
    }
}
