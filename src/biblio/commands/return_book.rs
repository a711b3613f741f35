use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BiblioError, Result};
use crate::model::Session;
use crate::store::DataStore;
use chrono::NaiveDate;
use uuid::Uuid;

use super::helpers::{find_book, require_librarian};

pub fn run<S: DataStore>(
    store: &mut S,
    session: &Session,
    loan_id: &str,
    today: NaiveDate,
) -> Result<CmdResult> {
    require_librarian(session)?;

    let id: Uuid = loan_id
        .trim()
        .parse()
        .map_err(|_| BiblioError::InvalidInput(format!("'{loan_id}' is not a valid loan id")))?;

    let mut loans = store.list_loans()?;
    let idx = loans
        .iter()
        .position(|l| l.loan_id == id && l.is_outstanding())
        .ok_or_else(|| BiblioError::NotFound(format!("No outstanding loan with id {id}")))?;

    loans[idx].return_date = Some(today);
    let loan = loans[idx].clone();
    store.save_loans(&loans)?;

    // Restock the copy, capped at the total. The book row may be gone if the
    // collections drifted out of sync; the return still counts then.
    let mut books = store.list_books()?;
    if let Some(b) = find_book(&books, &loan.isbn) {
        if books[b].copies_available < books[b].copies_total {
            books[b].copies_available += 1;
        }
        store.save_books(&books)?;
    }

    let mut result = CmdResult::default().with_loans(vec![loan]);
    result.add_message(CmdMessage::success("Book returned"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::issue;
    use crate::model::Role;
    use crate::store::memory::fixtures::StoreFixture;

    fn librarian() -> Session {
        Session {
            role: Role::Librarian,
            user_id: "admin".into(),
        }
    }

    fn member(id: &str) -> Session {
        Session {
            role: Role::Member,
            user_id: id.into(),
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn return_marks_the_loan_and_restocks_the_copy() {
        let fixture = StoreFixture::new()
            .with_book("978-0", "Dune", 2)
            .with_member("M001", "Ada");
        let mut store = fixture.store;

        let issued =
            issue::issue(&mut store, &librarian(), "978-0", "M001", date("2024-01-01")).unwrap();
        let loan_id = issued.loans[0].loan_id.to_string();

        let result = run(&mut store, &librarian(), &loan_id, date("2024-01-10")).unwrap();
        assert_eq!(result.loans[0].return_date, Some(date("2024-01-10")));

        let books = store.list_books().unwrap();
        assert_eq!(books[0].copies_available, 2);

        let loans = store.list_loans().unwrap();
        assert!(!loans[0].is_outstanding());
    }

    #[test]
    fn returning_twice_fails_the_second_time() {
        let fixture = StoreFixture::new()
            .with_book("978-0", "Dune", 1)
            .with_member("M001", "Ada");
        let mut store = fixture.store;

        let issued =
            issue::issue(&mut store, &librarian(), "978-0", "M001", date("2024-01-01")).unwrap();
        let loan_id = issued.loans[0].loan_id.to_string();

        run(&mut store, &librarian(), &loan_id, date("2024-01-10")).unwrap();
        let err = run(&mut store, &librarian(), &loan_id, date("2024-01-11")).unwrap_err();
        assert!(matches!(err, BiblioError::NotFound(_)));

        // The second attempt must not restock past the total
        assert_eq!(store.list_books().unwrap()[0].copies_available, 1);
    }

    #[test]
    fn availability_never_exceeds_the_total() {
        // Copies already at total: a stray return leaves the count alone
        let fixture = StoreFixture::new()
            .with_book("978-0", "Dune", 1)
            .with_loan("M001", "978-0", date("2024-01-01"));
        let mut store = fixture.store;

        let loan_id = store.list_loans().unwrap()[0].loan_id.to_string();
        run(&mut store, &librarian(), &loan_id, date("2024-01-10")).unwrap();
        assert_eq!(store.list_books().unwrap()[0].copies_available, 1);
    }

    #[test]
    fn unknown_loan_id_is_not_found() {
        let fixture = StoreFixture::new().with_book("978-0", "Dune", 1);
        let mut store = fixture.store;

        let id = uuid::Uuid::new_v4().to_string();
        let err = run(&mut store, &librarian(), &id, date("2024-01-10")).unwrap_err();
        assert!(matches!(err, BiblioError::NotFound(_)));
    }

    #[test]
    fn malformed_loan_id_is_invalid_input() {
        let fixture = StoreFixture::new();
        let mut store = fixture.store;

        let err = run(&mut store, &librarian(), "not-a-uuid", date("2024-01-10")).unwrap_err();
        assert!(matches!(err, BiblioError::InvalidInput(_)));
    }

    #[test]
    fn members_cannot_return_books() {
        let fixture = StoreFixture::new();
        let mut store = fixture.store;

        let id = uuid::Uuid::new_v4().to_string();
        let err = run(&mut store, &member("M001"), &id, date("2024-01-10")).unwrap_err();
        assert!(matches!(err, BiblioError::Unauthorized(_)));
    }
}
