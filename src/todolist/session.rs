//! The interactive loop: read a line, turn it into gestures, feed the coordinator.

use crate::coordinator::Coordinator;
use crate::error::Result;
use crate::persistence::Persistence;
use crate::view::terminal::{parse_line, Command, TerminalView, HELP};
use crate::view::{Gesture, GestureTranslator};
use std::io::{BufRead, Write};
use tracing::debug;

pub struct Session<P: Persistence, W: Write + 'static> {
    coordinator: Coordinator<P, TerminalView<W>>,
    translator: GestureTranslator,
}

impl<P: Persistence, W: Write + 'static> Session<P, W> {
    pub fn new(coordinator: Coordinator<P, TerminalView<W>>) -> Self {
        Self {
            coordinator,
            translator: GestureTranslator::new(),
        }
    }

    pub fn coordinator(&self) -> &Coordinator<P, TerminalView<W>> {
        &self.coordinator
    }

    /// Runs until `quit` or end of input. Only a failed read ends it early.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();
        while let Some(line) = lines.next() {
            let line = line?;
            match parse_line(&line) {
                Ok(Command::Gestures(gestures)) => {
                    for gesture in gestures {
                        self.gesture(gesture);
                    }
                }
                Ok(Command::Edit(id)) => {
                    self.gesture(Gesture::EditFocus(id));
                    self.coordinator
                        .presenter_mut()
                        .prompt(&format!("edit {}> ", id));
                    if let Some(text) = lines.next() {
                        self.gesture(Gesture::EditInput(text?.trim().to_string()));
                    }
                    self.gesture(Gesture::EditBlur);
                }
                Ok(Command::List) => self.coordinator.refresh(),
                Ok(Command::Help) => self.coordinator.presenter_mut().message(HELP),
                Ok(Command::Quit) => break,
                Ok(Command::Nothing) => {}
                Err(err) => self.coordinator.presenter_mut().message(&err.to_string()),
            }
        }
        debug!("session ended");
        Ok(())
    }

    fn gesture(&mut self, gesture: Gesture) {
        self.translator.handle(gesture, &mut self.coordinator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::memory::InMemoryStore;
    use crate::store::Store;
    use crate::view::render::{Renderer, TODO_THEME};
    use std::io::Cursor;

    fn session() -> Session<InMemoryStore, Vec<u8>> {
        let renderer = Renderer::new(TODO_THEME.clone(), false, 80).unwrap();
        let view = TerminalView::new(Vec::new(), renderer);
        let store = Store::load(InMemoryStore::new(), false);
        Session::new(Coordinator::new(store, view))
    }

    fn output(session: &Session<InMemoryStore, Vec<u8>>) -> String {
        String::from_utf8(session.coordinator().presenter().output().clone()).unwrap()
    }

    #[test]
    fn drives_store_from_lines() {
        let mut s = session();
        s.run(Cursor::new("add Buy milk\nadd Walk dog\nx 0\nrm 0\nadd Read book\n"))
            .unwrap();

        let ids: Vec<_> = s.coordinator().store().todos().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(s.coordinator().presenter().frames(), 6);
    }

    #[test]
    fn prompted_edit_uses_next_line() {
        let mut s = session();
        s.run(Cursor::new("add Walk dog\nedit 0\nWalk cat\n")).unwrap();

        assert_eq!(s.coordinator().store().get(0).unwrap().text, "Walk cat");
        assert!(output(&s).contains("edit 0> "));
    }

    #[test]
    fn prompted_edit_with_blank_line_changes_nothing() {
        let mut s = session();
        s.run(Cursor::new("add Walk dog\nedit 0\n\n")).unwrap();
        assert_eq!(s.coordinator().store().get(0).unwrap().text, "Walk dog");
        assert_eq!(s.coordinator().presenter().frames(), 2);
    }

    #[test]
    fn quit_stops_reading() {
        let mut s = session();
        s.run(Cursor::new("add one\nquit\nadd two\n")).unwrap();
        assert_eq!(s.coordinator().store().len(), 1);
    }

    #[test]
    fn bad_lines_are_reported_and_skipped() {
        let mut s = session();
        s.run(Cursor::new("toggle abc\nadd fine\n")).unwrap();
        assert!(output(&s).contains("Invalid todo id: abc"));
        assert_eq!(s.coordinator().store().len(), 1);
    }

    #[test]
    fn help_and_list() {
        let mut s = session();
        s.run(Cursor::new("help\nlist\n")).unwrap();
        assert!(output(&s).contains("Commands:"));
        assert_eq!(s.coordinator().presenter().frames(), 2);
    }
}
