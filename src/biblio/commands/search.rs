use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Case-insensitive substring match against title or author.
/// Read-only and open to any caller, logged in or not.
pub fn run<S: DataStore>(store: &S, keyword: &str) -> Result<CmdResult> {
    let keyword = keyword.to_lowercase();
    let matches = store
        .list_books()?
        .into_iter()
        .filter(|b| {
            b.title.to_lowercase().contains(&keyword) || b.author.to_lowercase().contains(&keyword)
        })
        .collect();

    Ok(CmdResult::default().with_books(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn matches_title_case_insensitively() {
        let fixture = StoreFixture::new().with_book("978-0", "Dune Messiah", 1);
        let result = run(&fixture.store, "dune").unwrap();
        assert_eq!(result.books.len(), 1);
        assert_eq!(result.books[0].isbn, "978-0");
    }

    #[test]
    fn matches_author() {
        let fixture = StoreFixture::new().with_book("978-0", "Dune", 1);
        // Fixture books share the author "Author"
        let result = run(&fixture.store, "AUTH").unwrap();
        assert_eq!(result.books.len(), 1);
    }

    #[test]
    fn no_match_returns_empty() {
        let fixture = StoreFixture::new().with_book("978-0", "Dune", 1);
        let result = run(&fixture.store, "neuromancer").unwrap();
        assert!(result.books.is_empty());
    }
}
