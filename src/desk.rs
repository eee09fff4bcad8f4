use crate::library::Library;

/// Mutable session state threaded through every menu action.
///
/// The desk holds:
/// - `library`: the registry of books and members that actions operate on.
/// - `should_exit`: a flag the interactive loop checks to know when to
///   terminate. Only the exit action sets it.
#[derive(Debug, Default)]
pub struct Desk {
    /// The book and member registry.
    pub library: Library,
    /// When set to true, indicates that the interactive loop should exit.
    pub should_exit: bool,
}

impl Desk {
    /// An empty desk: no books, no members, not exiting.
    pub fn new() -> Self {
        Self::default()
    }
}
