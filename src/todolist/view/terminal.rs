//! Line-oriented terminal front end.
//!
//! [`TerminalView`] is a [`Presenter`] that redraws the whole list into any
//! [`Write`] sink on every notification. [`parse_line`] maps one line of user input
//! to the gestures a pointer-driven UI would have produced.

use super::render::Renderer;
use super::screen::Screen;
use super::{Gesture, Presenter};
use crate::error::{Result, TodoError};
use crate::model::{Todo, TodoId};
use std::io::Write;
use tracing::{trace, warn};

pub const HELP: &str = "\
Commands:
  add <text>          Add a todo                   (a)
  toggle <id>         Mark done / not done         (t, x)
  delete <id>         Delete a todo                (rm, d)
  edit <id> [text]    Change the text of a todo    (e)
  list                Show the list again          (ls)
  help                Show this help               (h, ?)
  quit                Leave                        (q, exit)";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Gestures(Vec<Gesture>),
    /// Start editing `id`; the next input line is the new text.
    Edit(TodoId),
    List,
    Help,
    Quit,
    Nothing,
}

pub fn parse_line(line: &str) -> Result<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Nothing);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "add" | "a" => Command::Gestures(vec![Gesture::Submit(rest.to_string())]),
        "toggle" | "t" | "x" => Command::Gestures(vec![Gesture::ClickCheckbox(parse_id(rest)?)]),
        "delete" | "rm" | "d" => Command::Gestures(vec![Gesture::ClickDelete(parse_id(rest)?)]),
        "edit" | "e" => match rest.split_once(char::is_whitespace) {
            Some((id, text)) => {
                let id = parse_id(id)?;
                Command::Gestures(vec![
                    Gesture::EditFocus(id),
                    Gesture::EditInput(text.trim().to_string()),
                    Gesture::EditBlur,
                ])
            }
            None => Command::Edit(parse_id(rest)?),
        },
        "list" | "ls" => Command::List,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => {
            return Err(TodoError::Parse(format!(
                "Unknown command: {} (try `help`)",
                other
            )))
        }
    };
    Ok(command)
}

fn parse_id(s: &str) -> Result<TodoId> {
    if s.is_empty() {
        return Err(TodoError::Parse("Missing todo id".to_string()));
    }
    s.parse()
        .map_err(|_| TodoError::Parse(format!("Invalid todo id: {}", s)))
}

pub struct TerminalView<W: Write> {
    out: W,
    renderer: Renderer,
    frames: usize,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, renderer: Renderer) -> Self {
        Self {
            out,
            renderer,
            frames: 0,
        }
    }

    /// Number of times the list has been drawn.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn message(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!(error = %err, "could not write to terminal");
        }
    }

    pub fn prompt(&mut self, text: &str) {
        if let Err(err) = write!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!(error = %err, "could not write to terminal");
        }
    }

    fn draw(&mut self, todos: &[Todo]) -> Result<()> {
        let text = self.renderer.render(&Screen::build(todos))?;
        writeln!(self.out, "{}\n", text)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Presenter for TerminalView<W> {
    fn render(&mut self, todos: &[Todo]) {
        self.frames += 1;
        trace!(frame = self.frames, count = todos.len(), "render");
        if let Err(err) = self.draw(todos) {
            warn!(error = %err, "could not render todo list");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::render::TODO_THEME;
    use crate::view::screen::EMPTY_MESSAGE;

    fn view() -> TerminalView<Vec<u8>> {
        let renderer = Renderer::new(TODO_THEME.clone(), false, 80).unwrap();
        TerminalView::new(Vec::new(), renderer)
    }

    fn text(view: &TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.output().clone()).unwrap()
    }

    #[test]
    fn parses_add() {
        assert_eq!(
            parse_line("add  Buy milk ").unwrap(),
            Command::Gestures(vec![Gesture::Submit("Buy milk".into())])
        );
        assert_eq!(
            parse_line("a").unwrap(),
            Command::Gestures(vec![Gesture::Submit(String::new())])
        );
    }

    #[test]
    fn parses_clicks() {
        assert_eq!(
            parse_line("x 3").unwrap(),
            Command::Gestures(vec![Gesture::ClickCheckbox(3)])
        );
        assert_eq!(
            parse_line("rm 12").unwrap(),
            Command::Gestures(vec![Gesture::ClickDelete(12)])
        );
    }

    #[test]
    fn parses_inline_edit_as_focus_input_blur() {
        assert_eq!(
            parse_line("edit 1 Walk the cat").unwrap(),
            Command::Gestures(vec![
                Gesture::EditFocus(1),
                Gesture::EditInput("Walk the cat".into()),
                Gesture::EditBlur,
            ])
        );
        assert_eq!(parse_line("e 4").unwrap(), Command::Edit(4));
    }

    #[test]
    fn parses_session_words() {
        assert_eq!(parse_line("   ").unwrap(), Command::Nothing);
        assert_eq!(parse_line("ls").unwrap(), Command::List);
        assert_eq!(parse_line("?").unwrap(), Command::Help);
        assert_eq!(parse_line("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(parse_line("toggle"), Err(TodoError::Parse(_))));
        assert!(matches!(parse_line("delete one"), Err(TodoError::Parse(_))));
        assert!(matches!(parse_line("edit -1 x"), Err(TodoError::Parse(_))));
        let err = parse_line("frobnicate 1").unwrap_err();
        assert!(err.to_string().contains("Unknown command: frobnicate"));
    }

    #[test]
    fn renders_full_frame_each_time() {
        let mut view = view();
        view.render(&[]);
        view.render(&[Todo::new(0, "Buy milk")]);

        assert_eq!(view.frames(), 2);
        let out = text(&view);
        assert_eq!(out.matches("Todos").count(), 2);
        assert_eq!(out.matches(EMPTY_MESSAGE).count(), 1);
        assert!(out.contains("[ ] 0  Buy milk"));
    }

    #[test]
    fn message_and_prompt() {
        let mut view = view();
        view.prompt("edit 1> ");
        view.message("hello");
        assert_eq!(text(&view), "edit 1> hello\n");
    }
}
