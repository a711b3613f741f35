use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Session;
use crate::store::DataStore;

use super::helpers::require_librarian;

/// Full catalogue listing for display tables. Not role-gated, like search.
pub fn books<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_books(store.list_books()?))
}

pub fn members<S: DataStore>(store: &S, session: &Session) -> Result<CmdResult> {
    require_librarian(session)?;
    Ok(CmdResult::default().with_members(store.list_members()?))
}

pub fn loans<S: DataStore>(store: &S, session: &Session) -> Result<CmdResult> {
    require_librarian(session)?;
    Ok(CmdResult::default().with_loans(store.list_loans()?))
}
