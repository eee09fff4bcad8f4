use std::io::Write;

use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result};

use crate::command::{ActionFactory, ExecutableAction, MenuEntry};
use crate::desk::Desk;
use crate::input::{EditorReader, LineReader};

/// Factory allows creating instances of ExecutableAction.
///
/// Only supports the menu actions defined in this crate, through the
/// blanket impls in the actions module.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// The interactive menu console.
///
/// The console owns a [`Desk`] and a list of [`ActionFactory`] objects that
/// are queried to build actions from menu choices. See [`Default`] for the
/// standard nine-line menu.
///
/// Example
/// ```
/// use circulation::{Console, ScriptedReader};
/// let mut console = Console::default();
/// let mut input = ScriptedReader::new(&[]);
/// let mut output = Vec::new();
/// console.dispatch("7", &mut input, &mut output).unwrap();
/// let listing = String::from_utf8(output).unwrap();
/// assert!(listing.starts_with("Books in Library:"));
/// ```
pub struct Console {
    desk: Desk,
    actions: Vec<Box<dyn ActionFactory>>,
}

impl Console {
    /// Create a console with a custom set of action factories.
    pub fn new(actions: Vec<Box<dyn ActionFactory>>) -> Self {
        Self {
            desk: Desk::new(),
            actions,
        }
    }

    pub fn desk(&self) -> &Desk {
        &self.desk
    }

    pub fn desk_mut(&mut self) -> &mut Desk {
        &mut self.desk
    }

    /// Print the numbered menu, one line per registered action.
    pub fn render_menu(&self, output: &mut dyn Write) -> std::io::Result<()> {
        writeln!(output, "\nLibrary System Menu:")?;
        for factory in &self.actions {
            let MenuEntry { choice, label } = factory.entry();
            writeln!(output, "{choice}. {label}")?;
        }
        Ok(())
    }

    /// Route one menu choice to its action.
    ///
    /// Unrecognized or non-numeric choices print an invalid-choice line;
    /// prompting and action failures are likewise reported to `output`. The
    /// caller's loop always continues — nothing here terminates the shell.
    pub fn dispatch(
        &mut self,
        line: &str,
        input: &mut dyn LineReader,
        output: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let Ok(choice) = line.trim().parse::<u8>() else {
            writeln!(output, "Invalid choice. Please try again.")?;
            return Ok(());
        };
        for factory in &self.actions {
            match factory.try_create(choice, input) {
                Some(Ok(action)) => return action.execute(output, &mut self.desk),
                Some(Err(err)) => {
                    writeln!(output, "{err}")?;
                    return Ok(());
                }
                None => {}
            }
        }
        writeln!(output, "Invalid choice. Please try again.")?;
        Ok(())
    }

    /// The interactive menu loop.
    ///
    /// Renders the menu, reads the choice and any follow-up fields through
    /// a rustyline editor, and keeps looping until the exit action sets the
    /// desk flag or the operator closes the input stream.
    pub fn repl(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        while !self.desk.should_exit {
            self.render_menu(&mut std::io::stdout())?;
            match rl.readline("Enter your choice: ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    let mut input = EditorReader::new(&mut rl);
                    if let Err(err) = self.dispatch(&line, &mut input, &mut std::io::stdout()) {
                        println!("Error: {err:?}");
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    break;
                }
                Err(err) => {
                    println!("Error: {err:?}");
                    break;
                }
            }
        }

        Ok(())
    }
}

impl Default for Console {
    /// Create a console with the standard menu:
    /// add/remove book, add/remove member, issue, return, the two listings,
    /// and exit.
    fn default() -> Self {
        use crate::actions::*;
        Self::new(vec![
            Box::new(Factory::<AddBook>::default()),
            Box::new(Factory::<RemoveBook>::default()),
            Box::new(Factory::<AddMember>::default()),
            Box::new(Factory::<RemoveMember>::default()),
            Box::new(Factory::<IssueBook>::default()),
            Box::new(Factory::<ReturnBook>::default()),
            Box::new(Factory::<ViewBooks>::default()),
            Box::new(Factory::<ViewMembers>::default()),
            Box::new(Factory::<Exit>::default()),
        ])
    }
}
