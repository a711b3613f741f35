use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BiblioError, Result};
use crate::model::{Book, Session};
use crate::store::DataStore;

use super::helpers::{find_book, require_librarian};

pub fn run<S: DataStore>(
    store: &mut S,
    session: &Session,
    isbn: &str,
    title: &str,
    author: &str,
    copies: &str,
) -> Result<CmdResult> {
    require_librarian(session)?;

    let copies: u32 = copies.trim().parse().map_err(|_| {
        BiblioError::InvalidInput("Number of copies must be a non-negative integer".to_string())
    })?;

    let books = store.list_books()?;
    if find_book(&books, isbn).is_some() {
        return Err(BiblioError::DuplicateKey(format!(
            "A book with ISBN '{isbn}' already exists"
        )));
    }

    let book = Book::new(isbn.to_string(), title.to_string(), author.to_string(), copies);
    store.add_book(&book)?;

    let mut result = CmdResult::default().with_books(vec![book]);
    result.add_message(CmdMessage::success(format!("Book added: {title}")));
    Ok(result)
}
