use anyhow::Result;
use argh::FromArgs;
use circulation::{Book, Console, Desk, Member};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(FromArgs)]
/// Interactive, in-memory library catalog and lending tracker.
struct Args {
    /// preload a small demo catalog and member list before the menu starts
    #[argh(switch)]
    demo: bool,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    // Initialize logging; menu output stays on stdout, logs on stderr.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut console = Console::default();
    if args.demo {
        seed_demo(console.desk_mut())?;
    }
    console.repl()?;
    Ok(())
}

/// Preload the demonstration catalog: two classics, two members, and 1984
/// checked out to the second member.
fn seed_demo(desk: &mut Desk) -> Result<()> {
    let library = &mut desk.library;
    library.add_book(Book::new(
        "The Great Gatsby",
        "F. Scott Fitzgerald",
        "9780743273565",
        1925,
    ));
    library.add_book(Book::new("1984", "George Orwell", "9780451524935", 1949));

    let john = Member::new("John Doe", "john@example.com");
    let john_id = john.member_id().to_owned();
    library.add_member(john);
    let jane = Member::new("Jane Smith", "jane@example.com");
    let jane_id = jane.member_id().to_owned();
    library.add_member(jane);

    library.issue_book("9780743273565", &john_id)?;
    library.return_book("9780743273565", &john_id)?;
    library.issue_book("9780451524935", &jane_id)?;
    Ok(())
}
