use std::collections::VecDeque;

use anyhow::Result;
use rustyline::DefaultEditor;

/// Source of prompted, line-oriented operator input.
///
/// Menu actions collect their fields through this trait, so the same action
/// code can be driven by the interactive editor in the REPL and by scripted
/// lines in tests.
pub trait LineReader {
    /// Display `prompt` and read one line, without the trailing newline.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Interactive reader backed by a rustyline editor.
///
/// Every accepted line is added to the editor history.
pub struct EditorReader<'a> {
    editor: &'a mut DefaultEditor,
}

impl<'a> EditorReader<'a> {
    pub fn new(editor: &'a mut DefaultEditor) -> Self {
        Self { editor }
    }
}

impl LineReader for EditorReader<'_> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let line = self.editor.readline(prompt)?;
        self.editor.add_history_entry(line.as_str())?;
        Ok(line)
    }
}

/// Canned input for driving actions in tests.
///
/// Yields the provided lines in order and errors once they run out.
pub struct ScriptedReader {
    lines: VecDeque<String>,
}

impl ScriptedReader {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| (*line).to_owned()).collect(),
        }
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.lines
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("scripted input exhausted at prompt {prompt:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::{LineReader, ScriptedReader};

    #[test]
    fn scripted_reader_yields_lines_in_order_then_errors() {
        let mut reader = ScriptedReader::new(&["first", "second"]);
        assert_eq!(reader.read_line("a: ").unwrap(), "first");
        assert_eq!(reader.read_line("b: ").unwrap(), "second");
        assert!(reader.read_line("c: ").is_err());
    }
}
