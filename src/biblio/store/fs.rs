use super::DataStore;
use crate::error::Result;
use crate::model::{Book, Loan, Member};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

const BOOKS_FILE: &str = "books.csv";
const MEMBERS_FILE: &str = "members.csv";
const LOANS_FILE: &str = "loans.csv";

const BOOKS_HEADER: [&str; 5] = ["ISBN", "Title", "Author", "CopiesTotal", "CopiesAvailable"];
const MEMBERS_HEADER: [&str; 5] = ["MemberID", "Name", "PasswordHash", "Email", "JoinDate"];
const LOANS_HEADER: [&str; 6] = [
    "LoanID",
    "MemberID",
    "ISBN",
    "IssueDate",
    "DueDate",
    "ReturnDate",
];

/// CSV-backed store rooted at a data directory.
///
/// Reads are fail-fast: a malformed row (wrong column count, unparseable
/// date) aborts the whole read with `CorruptRecord` rather than silently
/// skipping rows.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn books_path(&self) -> PathBuf {
        self.root.join(BOOKS_FILE)
    }

    fn members_path(&self) -> PathBuf {
        self.root.join(MEMBERS_FILE)
    }

    fn loans_path(&self) -> PathBuf {
        self.root.join(LOANS_FILE)
    }

    fn ensure_file(&self, path: &Path, header: &[&str]) -> Result<()> {
        if path.exists() {
            return Ok(());
        }
        let mut wtr = csv::WriterBuilder::new().from_path(path)?;
        wtr.write_record(header)?;
        wtr.flush()?;
        Ok(())
    }

    fn read_all<T: DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = csv::Reader::from_path(path)?;
        let mut rows = Vec::new();
        for row in rdr.deserialize() {
            rows.push(row?);
        }
        Ok(rows)
    }

    fn write_all<T: Serialize>(&self, path: &Path, header: &[&str], rows: &[T]) -> Result<()> {
        // Header is written by hand so an empty collection still gets one.
        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
        wtr.write_record(header)?;
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn append_one<T: Serialize>(&self, path: &Path, row: &T) -> Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.serialize(row)?;
        wtr.flush()?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn init(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        self.ensure_file(&self.books_path(), &BOOKS_HEADER)?;
        self.ensure_file(&self.members_path(), &MEMBERS_HEADER)?;
        self.ensure_file(&self.loans_path(), &LOANS_HEADER)?;
        Ok(())
    }

    fn list_books(&self) -> Result<Vec<Book>> {
        self.read_all(&self.books_path())
    }

    fn add_book(&mut self, book: &Book) -> Result<()> {
        self.append_one(&self.books_path(), book)
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        self.write_all(&self.books_path(), &BOOKS_HEADER, books)
    }

    fn list_members(&self) -> Result<Vec<Member>> {
        self.read_all(&self.members_path())
    }

    fn add_member(&mut self, member: &Member) -> Result<()> {
        self.append_one(&self.members_path(), member)
    }

    fn list_loans(&self) -> Result<Vec<Loan>> {
        self.read_all(&self.loans_path())
    }

    fn add_loan(&mut self, loan: &Loan) -> Result<()> {
        self.append_one(&self.loans_path(), loan)
    }

    fn save_loans(&mut self, loans: &[Loan]) -> Result<()> {
        self.write_all(&self.loans_path(), &LOANS_HEADER, loans)
    }
}
