//! A tiny, interactive library catalog and lending tracker.
//!
//! This crate keeps a single-process, in-memory registry of books and
//! members and drives it through a numbered text menu: register and remove
//! books and members, issue and return books under a per-member limit, and
//! list current holdings. There is no persistence and no concurrency; one
//! command fully completes before the next is read.
//!
//! The main entry point is [`Console`], which renders the menu, collects
//! the fields each action needs via line prompts, and dispatches to the
//! [`Library`] registry. The public modules [`command`], [`desk`], and
//! [`input`] expose the traits and types for wiring custom actions and for
//! driving the console from scripted input.

mod actions;
mod book;
pub mod command;
mod console;
pub mod desk;
mod error;
pub mod input;
mod library;
mod member;

pub use book::Book;
pub use console::Console;
pub use desk::Desk;
pub use error::LendingError;
pub use input::{EditorReader, LineReader, ScriptedReader};
pub use library::{ISSUE_LIMIT, Library};
pub use member::Member;
