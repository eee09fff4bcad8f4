use thiserror::Error;

/// Reportable outcomes of registry operations.
///
/// None of these are fatal: the console renders the message as a status line
/// and returns to the menu. A user mistake (an unknown member ID) and a
/// stale reference (a book removed while on loan) surface the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LendingError {
    /// No book with this ISBN is in the catalog.
    #[error("Book with ISBN {0} not found!")]
    BookNotFound(String),

    /// The book is checked out, or was never added.
    #[error("Book with ISBN {0} is unavailable or does not exist!")]
    BookUnavailable(String),

    /// No member with this ID is registered.
    #[error("Member with ID {0} not found!")]
    MemberNotFound(String),

    /// The member already holds the maximum number of books.
    #[error("Member has reached the maximum book limit!")]
    MemberAtLimit,

    /// The member does not currently hold this ISBN.
    #[error("Member does not have the book with ISBN {0}!")]
    BookNotHeld(String),
}
