use crate::commands::{CmdResult, OverdueLoan};
use crate::error::Result;
use crate::model::Session;
use crate::store::DataStore;
use chrono::NaiveDate;

use super::helpers::require_librarian;

/// Overdue loans joined with each owning member's display name.
pub fn run<S: DataStore>(store: &S, session: &Session, today: NaiveDate) -> Result<CmdResult> {
    require_librarian(session)?;

    let mut overdue = Vec::new();
    for loan in store.overdue_loans(today)? {
        let member_name = store
            .get_member(&loan.member_id)?
            .map(|m| m.name)
            .unwrap_or_else(|| loan.member_id.clone());
        overdue.push(OverdueLoan { loan, member_name });
    }

    Ok(CmdResult::default().with_overdue(overdue))
}
