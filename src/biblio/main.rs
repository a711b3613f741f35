use biblio::api::LibraryApi;
use biblio::commands::{CmdMessage, CmdResult, MessageLevel, OverdueLoan};
use biblio::error::Result;
use biblio::init;
use biblio::model::{Book, Loan, Role};
use biblio::store::fs::FileStore;
use clap::Parser;
use colored::*;
use console::Term;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "biblio", version, about = "Library management system")]
struct Cli {
    /// Directory for the catalogue data files
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init::initialize(cli.data_dir)?;
    let mut api = ctx.api;
    let term = Term::stdout();

    loop {
        println!("\n=== Library Management System ===");
        println!("1. Login as Librarian");
        println!("2. Login as Member");
        println!("3. Sign Up as New Member");
        println!("4. Exit");

        let Some(choice) = prompt("> ")? else { break };
        match choice.as_str() {
            "1" => {
                let Some(username) = prompt("Username: ")? else { break };
                let password = prompt_password(&term, "Password: ")?;
                match api.login(Role::Librarian, &username, &password) {
                    Ok(()) => librarian_menu(&mut api, &term)?,
                    Err(_) => println!("{}", "Invalid credentials".red()),
                }
            }
            "2" => {
                let Some(member_id) = prompt("Member ID: ")? else { break };
                let password = prompt_password(&term, "Password: ")?;
                match api.login(Role::Member, &member_id, &password) {
                    Ok(()) => member_menu(&mut api, &term)?,
                    Err(_) => println!("{}", "Invalid credentials".red()),
                }
            }
            "3" => handle_register(&mut api, &term)?,
            "4" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("{}", "Invalid choice. Please try again.".yellow()),
        }
    }
    Ok(())
}

fn librarian_menu(api: &mut LibraryApi<FileStore>, term: &Term) -> Result<()> {
    loop {
        println!("\n=== Librarian Dashboard ===");
        println!("1. Add Book");
        println!("2. Register Member");
        println!("3. Issue Book");
        println!("4. Return Book");
        println!("5. Overdue List");
        println!("6. Logout");

        let Some(choice) = prompt("> ")? else { break };
        match choice.as_str() {
            "1" => handle_add_book(api)?,
            "2" => handle_register(api, term)?,
            "3" => handle_issue(api)?,
            "4" => handle_return(api)?,
            "5" => handle_overdue(api),
            "6" => break,
            _ => println!("{}", "Invalid choice. Please try again.".yellow()),
        }
    }
    api.logout();
    Ok(())
}

fn member_menu(api: &mut LibraryApi<FileStore>, _term: &Term) -> Result<()> {
    loop {
        println!("\n=== Member Dashboard ===");
        println!("1. Search Catalogue");
        println!("2. Borrow Book");
        println!("3. My Loans");
        println!("4. Logout");

        let Some(choice) = prompt("> ")? else { break };
        match choice.as_str() {
            "1" => handle_search(api)?,
            "2" => handle_borrow(api)?,
            "3" => handle_my_loans(api),
            "4" => break,
            _ => println!("{}", "Invalid choice. Please try again.".yellow()),
        }
    }
    api.logout();
    Ok(())
}

fn handle_add_book(api: &mut LibraryApi<FileStore>) -> Result<()> {
    let Some(isbn) = prompt("Enter ISBN: ")? else { return Ok(()) };
    let Some(title) = prompt("Enter Title: ")? else { return Ok(()) };
    let Some(author) = prompt("Enter Author: ")? else { return Ok(()) };
    let Some(copies) = prompt("Enter number of copies: ")? else { return Ok(()) };

    render(api.add_book(&isbn, &title, &author, &copies));
    Ok(())
}

fn handle_register(api: &mut LibraryApi<FileStore>, term: &Term) -> Result<()> {
    let Some(member_id) = prompt("Enter Member ID: ")? else { return Ok(()) };
    let Some(name) = prompt("Enter Name: ")? else { return Ok(()) };
    let Some(email) = prompt("Enter Email: ")? else { return Ok(()) };

    // Email shape is checked here, at the presentation boundary only
    if !looks_like_email(&email) {
        println!("{}", "Error: Email must look like local@domain.tld".red());
        return Ok(());
    }

    let password = prompt_password(term, "Enter Password: ")?;
    render(api.register_member(&member_id, &name, &password, &email));
    Ok(())
}

fn handle_issue(api: &mut LibraryApi<FileStore>) -> Result<()> {
    let Some(isbn) = prompt("ISBN to issue: ")? else { return Ok(()) };
    let Some(member_id) = prompt("Member ID: ")? else { return Ok(()) };
    render(api.issue_book(&isbn, &member_id));
    Ok(())
}

fn handle_return(api: &mut LibraryApi<FileStore>) -> Result<()> {
    let Some(loan_id) = prompt("Enter Loan ID: ")? else { return Ok(()) };
    render(api.return_book(&loan_id));
    Ok(())
}

fn handle_overdue(api: &LibraryApi<FileStore>) {
    match api.overdue_list() {
        Ok(result) if result.overdue.is_empty() => println!("No overdue books"),
        Ok(result) => {
            println!("\nOverdue Books:");
            for entry in &result.overdue {
                print_overdue(entry);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
}

fn handle_search(api: &LibraryApi<FileStore>) -> Result<()> {
    let Some(keyword) = prompt("Enter search keyword (title/author): ")? else {
        return Ok(());
    };
    match api.search_catalogue(&keyword) {
        Ok(result) if result.books.is_empty() => {
            println!("No books found matching your search")
        }
        Ok(result) => {
            println!("\nSearch Results:");
            for book in &result.books {
                print_book(book);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
    Ok(())
}

fn handle_borrow(api: &mut LibraryApi<FileStore>) -> Result<()> {
    let Some(isbn) = prompt("Enter ISBN of the book to borrow: ")? else {
        return Ok(());
    };
    render(api.borrow_book(&isbn));
    Ok(())
}

fn handle_my_loans(api: &LibraryApi<FileStore>) {
    match api.view_my_loans() {
        Ok(result) if result.loans.is_empty() => println!("No loan history found"),
        Ok(result) => {
            println!("\nYour Loan History:");
            for loan in &result.loans {
                print_loan(loan);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
}

// --- Rendering ---

fn render(outcome: Result<CmdResult>) {
    match outcome {
        Ok(result) => print_messages(&result.messages),
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{} {}", "✔".green(), message.content),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
            MessageLevel::Info => println!("{}", message.content),
        }
    }
}

fn print_book(book: &Book) {
    println!("ISBN: {}", book.isbn);
    println!("Title: {}", book.title);
    println!("Author: {}", book.author);
    println!(
        "Available Copies: {}/{}\n",
        book.copies_available, book.copies_total
    );
}

fn print_loan(loan: &Loan) {
    println!("Loan ID: {}", loan.loan_id);
    println!("ISBN: {}", loan.isbn);
    println!("Issue Date: {}", loan.issue_date.format("%d-%b-%Y"));
    println!("Due Date: {}", loan.due_date.format("%d-%b-%Y"));
    if let Some(returned) = loan.return_date {
        println!("Returned: {}", returned.format("%d-%b-%Y"));
    }
    println!();
}

fn print_overdue(entry: &OverdueLoan) {
    println!("Loan ID: {}", entry.loan.loan_id);
    println!(
        "Member: {} (ID: {})",
        entry.member_name, entry.loan.member_id
    );
    println!("ISBN: {}", entry.loan.isbn);
    println!("Due Date: {}\n", entry.loan.due_date.format("%d-%b-%Y"));
}

// --- Input ---

/// Prompt on stdout, read one trimmed line from stdin. `None` means EOF.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_password(term: &Term, label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    if term.features().is_attended() {
        Ok(term.read_secure_line()?)
    } else {
        // Piped stdin (tests, scripts): fall back to a plain read
        Ok(prompt("")?.unwrap_or_default())
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}
