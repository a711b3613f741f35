use crate::model::{Book, Loan, Member};

pub mod add_book;
pub mod helpers;
pub mod issue;
pub mod list;
pub mod my_loans;
pub mod overdue;
pub mod return_book;
pub mod search;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An overdue loan joined with the owning member's display name.
#[derive(Debug, Clone)]
pub struct OverdueLoan {
    pub loan: Loan,
    pub member_name: String,
}

/// Structured outcome of a command, rendered by the presentation shell.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub books: Vec<Book>,
    pub members: Vec<Member>,
    pub loans: Vec<Loan>,
    pub overdue: Vec<OverdueLoan>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = books;
        self
    }

    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = members;
        self
    }

    pub fn with_loans(mut self, loans: Vec<Loan>) -> Self {
        self.loans = loans;
        self
    }

    pub fn with_overdue(mut self, overdue: Vec<OverdueLoan>) -> Self {
        self.overdue = overdue;
        self
    }
}
