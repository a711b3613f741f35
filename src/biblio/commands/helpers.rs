use crate::error::{BiblioError, Result};
use crate::model::{Book, Session};

pub fn require_librarian(session: &Session) -> Result<()> {
    if session.is_librarian() {
        Ok(())
    } else {
        Err(BiblioError::Unauthorized(
            "This action requires librarian access".to_string(),
        ))
    }
}

/// Returns the member id from the session, or fails for non-member sessions.
pub fn require_member(session: &Session) -> Result<&str> {
    if session.is_member() {
        Ok(&session.user_id)
    } else {
        Err(BiblioError::Unauthorized(
            "This action requires a member login".to_string(),
        ))
    }
}

pub fn find_book(books: &[Book], isbn: &str) -> Option<usize> {
    books.iter().position(|b| b.isbn == isbn)
}
