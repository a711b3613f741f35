use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BiblioError, Result};
use crate::model::{Loan, Session};
use crate::store::DataStore;
use chrono::NaiveDate;

use super::helpers::{find_book, require_librarian, require_member};

/// Librarian-initiated issue: the member is looked up and must exist.
pub fn issue<S: DataStore>(
    store: &mut S,
    session: &Session,
    isbn: &str,
    member_id: &str,
    today: NaiveDate,
) -> Result<CmdResult> {
    require_librarian(session)?;

    if store.get_member(member_id)?.is_none() {
        return Err(BiblioError::NotFound(format!("Member '{member_id}'")));
    }
    create_loan(store, isbn, member_id, today)
}

/// Member-initiated borrow: the member id comes from the session.
pub fn borrow<S: DataStore>(
    store: &mut S,
    session: &Session,
    isbn: &str,
    today: NaiveDate,
) -> Result<CmdResult> {
    let member_id = require_member(session)?.to_string();
    create_loan(store, isbn, &member_id, today)
}

fn create_loan<S: DataStore>(
    store: &mut S,
    isbn: &str,
    member_id: &str,
    today: NaiveDate,
) -> Result<CmdResult> {
    let mut books = store.list_books()?;
    let idx = find_book(&books, isbn)
        .ok_or_else(|| BiblioError::NotFound(format!("Book '{isbn}'")))?;

    if books[idx].copies_available == 0 {
        return Err(BiblioError::NoCopiesAvailable(isbn.to_string()));
    }

    let loan = Loan::new(member_id.to_string(), isbn.to_string(), today);
    books[idx].copies_available -= 1;

    // Two writes; not atomic. Single writer process assumed.
    store.save_books(&books)?;
    store.add_loan(&loan)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book issued. Due on {}",
        loan.due_date.format("%d-%b-%Y")
    )));
    Ok(result.with_loans(vec![loan]))
}
