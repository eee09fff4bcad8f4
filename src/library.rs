use std::collections::HashMap;

use tracing::debug;

use crate::book::Book;
use crate::error::LendingError;
use crate::member::Member;

/// Maximum number of books a member may hold at once.
pub const ISSUE_LIMIT: usize = 5;

/// The registry of books and members, and every lending rule.
///
/// Books are keyed by ISBN and members by member ID. A loan is represented
/// twice — the book's availability flag and the ISBN in the member's issued
/// list — and only [`Library::issue_book`] and [`Library::return_book`] keep
/// the two in step, so all mutation should go through the registry.
#[derive(Debug, Default)]
pub struct Library {
    books: HashMap<String, Book>,
    members: HashMap<String, Member>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `book` to the catalog, keyed by its ISBN.
    ///
    /// Re-adding an ISBN silently replaces the existing record; the most
    /// recent fields win and no conflict is reported.
    pub fn add_book(&mut self, book: Book) {
        debug!(isbn = book.isbn(), name = book.name(), "book added");
        self.books.insert(book.isbn().to_owned(), book);
    }

    /// Remove the book with `isbn`, if present.
    ///
    /// Outstanding loans are not checked: a member may keep holding a record
    /// of the removed ISBN, and returning it later is a book-side no-op.
    pub fn remove_book(&mut self, isbn: &str) -> Result<(), LendingError> {
        if self.books.remove(isbn).is_none() {
            return Err(LendingError::BookNotFound(isbn.to_owned()));
        }
        debug!(isbn, "book removed");
        Ok(())
    }

    /// Register `member`, keyed by its generated member ID.
    pub fn add_member(&mut self, member: Member) {
        debug!(member_id = member.member_id(), "member added");
        self.members.insert(member.member_id().to_owned(), member);
    }

    /// Remove the member with `member_id`, if present.
    ///
    /// Books the member still holds are neither returned nor reconciled.
    pub fn remove_member(&mut self, member_id: &str) -> Result<(), LendingError> {
        if self.members.remove(member_id).is_none() {
            return Err(LendingError::MemberNotFound(member_id.to_owned()));
        }
        debug!(member_id, "member removed");
        Ok(())
    }

    /// Issue the book with `isbn` to the member with `member_id`.
    ///
    /// Checked in order: the book exists and is available, the member
    /// exists, the member is under [`ISSUE_LIMIT`]. Exactly one error is
    /// reported per attempt and nothing is mutated on failure.
    pub fn issue_book(&mut self, isbn: &str, member_id: &str) -> Result<(), LendingError> {
        let book = match self.books.get_mut(isbn) {
            Some(book) if book.is_available() => book,
            _ => return Err(LendingError::BookUnavailable(isbn.to_owned())),
        };
        let member = self
            .members
            .get_mut(member_id)
            .ok_or_else(|| LendingError::MemberNotFound(member_id.to_owned()))?;
        if member.issued_count() >= ISSUE_LIMIT {
            return Err(LendingError::MemberAtLimit);
        }

        book.set_available(false);
        member.issue_book(isbn);
        debug!(isbn, member_id, "book issued");
        Ok(())
    }

    /// Return the book with `isbn` from the member with `member_id`.
    ///
    /// Succeeds whenever the member holds that ISBN. The availability flag
    /// is flipped back only if the book is still in the catalog; a book
    /// removed mid-loan is skipped silently.
    pub fn return_book(&mut self, isbn: &str, member_id: &str) -> Result<(), LendingError> {
        let member = self
            .members
            .get_mut(member_id)
            .ok_or_else(|| LendingError::MemberNotFound(member_id.to_owned()))?;
        if !member.has_book(isbn) {
            return Err(LendingError::BookNotHeld(isbn.to_owned()));
        }

        member.return_book(isbn);
        if let Some(book) = self.books.get_mut(isbn) {
            book.set_available(true);
        }
        debug!(isbn, member_id, "book returned");
        Ok(())
    }

    /// Look up a single book by ISBN.
    pub fn book(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    /// Look up a single member by ID.
    pub fn member(&self, member_id: &str) -> Option<&Member> {
        self.members.get(member_id)
    }

    /// All books, in map order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    /// All members, in map order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }
}

#[cfg(test)]
mod tests {
    use super::{ISSUE_LIMIT, Library};
    use crate::book::Book;
    use crate::error::LendingError;
    use crate::member::Member;

    fn library_with_member() -> (Library, String) {
        let mut library = Library::new();
        let member = Member::new("John Doe", "john@example.com");
        let member_id = member.member_id().to_owned();
        library.add_member(member);
        (library, member_id)
    }

    #[test]
    fn duplicate_isbn_add_overwrites_silently() {
        let mut library = Library::new();
        library.add_book(Book::new("First Edition", "A. Author", "111", 1990));
        library.add_book(Book::new("Second Edition", "A. Author", "111", 2005));

        assert_eq!(library.books().count(), 1);
        let book = library.book("111").unwrap();
        assert_eq!(book.name(), "Second Edition");
        assert_eq!(book.publication_year(), 2005);
    }

    #[test]
    fn issue_and_return_round_trip() {
        let (mut library, member_id) = library_with_member();
        library.add_book(Book::new("The Great Gatsby", "F. Scott Fitzgerald", "111", 1925));

        library.issue_book("111", &member_id).unwrap();
        assert!(!library.book("111").unwrap().is_available());
        assert_eq!(library.member(&member_id).unwrap().issued_count(), 1);

        // checked out means unavailable, even to the holder
        assert_eq!(
            library.issue_book("111", &member_id),
            Err(LendingError::BookUnavailable("111".into()))
        );

        library.return_book("111", &member_id).unwrap();
        assert!(library.book("111").unwrap().is_available());
        assert_eq!(library.member(&member_id).unwrap().issued_count(), 0);

        assert_eq!(
            library.return_book("111", &member_id),
            Err(LendingError::BookNotHeld("111".into()))
        );
    }

    #[test]
    fn issuing_an_unknown_isbn_leaves_the_member_untouched() {
        let (mut library, member_id) = library_with_member();
        assert_eq!(
            library.issue_book("999", &member_id),
            Err(LendingError::BookUnavailable("999".into()))
        );
        assert_eq!(library.member(&member_id).unwrap().issued_count(), 0);
    }

    #[test]
    fn issuing_to_an_unknown_member_leaves_the_book_available() {
        let mut library = Library::new();
        library.add_book(Book::new("1984", "George Orwell", "222", 1949));
        assert_eq!(
            library.issue_book("222", "M0"),
            Err(LendingError::MemberNotFound("M0".into()))
        );
        assert!(library.book("222").unwrap().is_available());
    }

    #[test]
    fn issue_limit_is_enforced_at_five() {
        let (mut library, member_id) = library_with_member();
        for i in 0..ISSUE_LIMIT {
            let isbn = format!("isbn-{i}");
            library.add_book(Book::new("Title", "Author", isbn.as_str(), 2000));
            library.issue_book(&isbn, &member_id).unwrap();
        }
        assert_eq!(library.member(&member_id).unwrap().issued_count(), ISSUE_LIMIT);

        library.add_book(Book::new("One Too Many", "Author", "isbn-5", 2000));
        assert_eq!(
            library.issue_book("isbn-5", &member_id),
            Err(LendingError::MemberAtLimit)
        );

        // the refused issue mutated nothing on either side
        assert_eq!(library.member(&member_id).unwrap().issued_count(), ISSUE_LIMIT);
        assert!(library.book("isbn-5").unwrap().is_available());
    }

    #[test]
    fn returning_a_book_removed_mid_loan_still_updates_the_member() {
        let (mut library, member_id) = library_with_member();
        library.add_book(Book::new("Ephemeral", "Author", "333", 2010));
        library.issue_book("333", &member_id).unwrap();
        library.remove_book("333").unwrap();

        library.return_book("333", &member_id).unwrap();
        assert_eq!(library.member(&member_id).unwrap().issued_count(), 0);
        assert!(library.book("333").is_none());
    }

    #[test]
    fn removal_reports_not_found() {
        let mut library = Library::new();
        assert_eq!(
            library.remove_book("404"),
            Err(LendingError::BookNotFound("404".into()))
        );
        assert_eq!(
            library.remove_member("M0"),
            Err(LendingError::MemberNotFound("M0".into()))
        );
    }

    #[test]
    fn removing_a_member_does_not_release_their_books() {
        let (mut library, member_id) = library_with_member();
        library.add_book(Book::new("Stranded", "Author", "444", 2015));
        library.issue_book("444", &member_id).unwrap();

        library.remove_member(&member_id).unwrap();
        assert!(!library.book("444").unwrap().is_available());
    }

    #[test]
    fn member_ids_are_not_reused_after_removal() {
        let mut library = Library::new();
        let first = Member::new("First", "first@example.com");
        let first_id = first.member_id().to_owned();
        library.add_member(first);
        library.remove_member(&first_id).unwrap();

        let second = Member::new("Second", "second@example.com");
        assert_ne!(second.member_id(), first_id);
    }
}
