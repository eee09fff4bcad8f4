use std::io::Write;

use anyhow::Result;

use crate::book::Book;
use crate::command::{ActionFactory, ExecutableAction, MenuEntry};
use crate::console::Factory;
use crate::desk::Desk;
use crate::input::LineReader;
use crate::member::Member;

/// Menu actions known to the console at compile time.
///
/// Each action is a plain struct holding the fields it prompted for.
/// Creation (prompting) and execution are separate steps, so a half-entered
/// action never touches the desk.
pub(crate) trait MenuAction: Sized {
    /// The menu number that selects this action.
    fn choice() -> u8;

    /// Label shown on the action's menu line.
    fn label() -> &'static str;

    /// Collect the action's fields from prompted input.
    fn read(input: &mut dyn LineReader) -> Result<Self>;

    /// Run the action against the desk, writing status lines to `output`.
    fn execute(self, output: &mut dyn Write, desk: &mut Desk) -> Result<()>;
}

impl<T: MenuAction> ExecutableAction for T {
    fn execute(self: Box<Self>, output: &mut dyn Write, desk: &mut Desk) -> Result<()> {
        match <T as MenuAction>::execute(*self, output, desk) {
            Ok(()) => Ok(()),
            // every failure becomes a status line; the menu loop continues
            Err(err) => {
                writeln!(output, "{err}")?;
                Ok(())
            }
        }
    }
}

impl<T: MenuAction + 'static> ActionFactory for Factory<T> {
    fn entry(&self) -> MenuEntry {
        MenuEntry {
            choice: T::choice(),
            label: T::label(),
        }
    }

    fn try_create(
        &self,
        choice: u8,
        input: &mut dyn LineReader,
    ) -> Option<Result<Box<dyn ExecutableAction>>> {
        if choice == T::choice() {
            Some(T::read(input).map(|action| Box::new(action) as Box<dyn ExecutableAction>))
        } else {
            None
        }
    }
}

/// Register a new book in the catalog.
#[derive(Debug)]
pub(crate) struct AddBook {
    pub name: String,
    pub author: String,
    pub isbn: String,
    pub publication_year: i32,
}

impl MenuAction for AddBook {
    fn choice() -> u8 {
        1
    }

    fn label() -> &'static str {
        "Add Book"
    }

    fn read(input: &mut dyn LineReader) -> Result<Self> {
        let name = input.read_line("Enter book name: ")?;
        let author = input.read_line("Enter author: ")?;
        let isbn = input.read_line("Enter ISBN: ")?;
        let publication_year = input
            .read_line("Enter publication year: ")?
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid publication year. Please try again."))?;
        Ok(Self {
            name,
            author,
            isbn,
            publication_year,
        })
    }

    fn execute(self, output: &mut dyn Write, desk: &mut Desk) -> Result<()> {
        desk.library
            .add_book(Book::new(self.name, self.author, self.isbn, self.publication_year));
        writeln!(output, "Book added successfully!")?;
        Ok(())
    }
}

/// Remove a book from the catalog by ISBN.
pub(crate) struct RemoveBook {
    pub isbn: String,
}

impl MenuAction for RemoveBook {
    fn choice() -> u8 {
        2
    }

    fn label() -> &'static str {
        "Remove Book"
    }

    fn read(input: &mut dyn LineReader) -> Result<Self> {
        Ok(Self {
            isbn: input.read_line("Enter ISBN of the book to remove: ")?,
        })
    }

    fn execute(self, output: &mut dyn Write, desk: &mut Desk) -> Result<()> {
        desk.library.remove_book(&self.isbn)?;
        writeln!(output, "Book with ISBN {} removed successfully.", self.isbn)?;
        Ok(())
    }
}

/// Register a new member; the generated ID is echoed back.
pub(crate) struct AddMember {
    pub name: String,
    pub email: String,
}

impl MenuAction for AddMember {
    fn choice() -> u8 {
        3
    }

    fn label() -> &'static str {
        "Add Member"
    }

    fn read(input: &mut dyn LineReader) -> Result<Self> {
        let name = input.read_line("Enter member name: ")?;
        let email = input.read_line("Enter member email: ")?;
        Ok(Self { name, email })
    }

    fn execute(self, output: &mut dyn Write, desk: &mut Desk) -> Result<()> {
        let member = Member::new(self.name, self.email);
        let member_id = member.member_id().to_owned();
        desk.library.add_member(member);
        writeln!(output, "Member added successfully! ID: {member_id}")?;
        Ok(())
    }
}

/// Remove a member by ID.
pub(crate) struct RemoveMember {
    pub member_id: String,
}

impl MenuAction for RemoveMember {
    fn choice() -> u8 {
        4
    }

    fn label() -> &'static str {
        "Remove Member"
    }

    fn read(input: &mut dyn LineReader) -> Result<Self> {
        Ok(Self {
            member_id: input.read_line("Enter member ID to remove: ")?,
        })
    }

    fn execute(self, output: &mut dyn Write, desk: &mut Desk) -> Result<()> {
        desk.library.remove_member(&self.member_id)?;
        writeln!(output, "Member with ID {} removed successfully.", self.member_id)?;
        Ok(())
    }
}

/// Issue an available book to a member.
pub(crate) struct IssueBook {
    pub isbn: String,
    pub member_id: String,
}

impl MenuAction for IssueBook {
    fn choice() -> u8 {
        5
    }

    fn label() -> &'static str {
        "Issue Book"
    }

    fn read(input: &mut dyn LineReader) -> Result<Self> {
        let isbn = input.read_line("Enter ISBN of the book to issue: ")?;
        let member_id = input.read_line("Enter member ID to issue book: ")?;
        Ok(Self { isbn, member_id })
    }

    fn execute(self, output: &mut dyn Write, desk: &mut Desk) -> Result<()> {
        desk.library.issue_book(&self.isbn, &self.member_id)?;
        writeln!(output, "Book issued successfully to Member ID: {}", self.member_id)?;
        Ok(())
    }
}

/// Return an issued book from a member.
pub(crate) struct ReturnBook {
    pub isbn: String,
    pub member_id: String,
}

impl MenuAction for ReturnBook {
    fn choice() -> u8 {
        6
    }

    fn label() -> &'static str {
        "Return Book"
    }

    fn read(input: &mut dyn LineReader) -> Result<Self> {
        let isbn = input.read_line("Enter ISBN of the book to return: ")?;
        let member_id = input.read_line("Enter member ID to return book: ")?;
        Ok(Self { isbn, member_id })
    }

    fn execute(self, output: &mut dyn Write, desk: &mut Desk) -> Result<()> {
        desk.library.return_book(&self.isbn, &self.member_id)?;
        writeln!(output, "Book returned successfully by Member ID: {}", self.member_id)?;
        Ok(())
    }
}

/// List every book in the catalog with its availability.
pub(crate) struct ViewBooks {}

impl MenuAction for ViewBooks {
    fn choice() -> u8 {
        7
    }

    fn label() -> &'static str {
        "View All Books"
    }

    fn read(_input: &mut dyn LineReader) -> Result<Self> {
        Ok(Self {})
    }

    fn execute(self, output: &mut dyn Write, desk: &mut Desk) -> Result<()> {
        writeln!(output, "Books in Library:")?;
        for book in desk.library.books() {
            writeln!(
                output,
                "Name: {}, Author: {}, ISBN: {}, Available: {}",
                book.name(),
                book.author(),
                book.isbn(),
                if book.is_available() { "yes" } else { "no" },
            )?;
        }
        Ok(())
    }
}

/// List every registered member with their issued-book count.
pub(crate) struct ViewMembers {}

impl MenuAction for ViewMembers {
    fn choice() -> u8 {
        8
    }

    fn label() -> &'static str {
        "View All Members"
    }

    fn read(_input: &mut dyn LineReader) -> Result<Self> {
        Ok(Self {})
    }

    fn execute(self, output: &mut dyn Write, desk: &mut Desk) -> Result<()> {
        writeln!(output, "Members in Library:")?;
        for member in desk.library.members() {
            writeln!(
                output,
                "ID: {}, Name: {}, Books Issued: {}",
                member.member_id(),
                member.name(),
                member.issued_count(),
            )?;
        }
        Ok(())
    }
}

/// Leave the menu loop.
pub(crate) struct Exit {}

impl MenuAction for Exit {
    fn choice() -> u8 {
        9
    }

    fn label() -> &'static str {
        "Exit"
    }

    fn read(_input: &mut dyn LineReader) -> Result<Self> {
        Ok(Self {})
    }

    fn execute(self, _output: &mut dyn Write, desk: &mut Desk) -> Result<()> {
        desk.should_exit = true;
        Ok(())
    }
}
