use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Session;
use crate::store::DataStore;

use super::helpers::require_member;

pub fn run<S: DataStore>(store: &S, session: &Session) -> Result<CmdResult> {
    let member_id = require_member(session)?;
    let loans = store.member_loans(member_id)?;
    Ok(CmdResult::default().with_loans(loans))
}
