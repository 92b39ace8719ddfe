//! # View Layer
//!
//! The view has two jobs that never touch each other:
//!
//! - **Rendering**: a [`Presenter`] receives the full list and redraws it from
//!   scratch. [`screen::Screen`] is the technology-neutral render tree;
//!   [`terminal::TerminalView`] draws it on a terminal.
//! - **Intents**: a [`GestureTranslator`] turns raw user [`Gesture`]s into calls on
//!   an [`IntentHandler`]. It holds the only view-side state, the buffer of an open
//!   edit session.
//!
//! Neither half knows about the store. The coordinator implements
//! [`IntentHandler`] and registers the presenter as the store's observer.

use crate::model::{Todo, TodoId};
use tracing::trace;

pub mod render;
pub mod screen;
pub mod terminal;

/// A render surface.
pub trait Presenter {
    /// Redraws the whole list. Must reflect exactly `todos`, nothing older.
    fn render(&mut self, todos: &[Todo]);
}

/// Receiver of the four user intents.
pub trait IntentHandler {
    fn submit_new_text(&mut self, text: String);
    fn request_delete(&mut self, id: TodoId);
    fn request_toggle(&mut self, id: TodoId);
    fn request_edit(&mut self, id: TodoId, text: String);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SubmitNewText(String),
    RequestDelete(TodoId),
    RequestToggle(TodoId),
    RequestEdit(TodoId, String),
}

impl Intent {
    pub fn dispatch<H: IntentHandler + ?Sized>(self, handler: &mut H) {
        match self {
            Intent::SubmitNewText(text) => handler.submit_new_text(text),
            Intent::RequestDelete(id) => handler.request_delete(id),
            Intent::RequestToggle(id) => handler.request_toggle(id),
            Intent::RequestEdit(id, text) => handler.request_edit(id, text),
        }
    }
}

/// Records intents instead of acting on them.
impl IntentHandler for Vec<Intent> {
    fn submit_new_text(&mut self, text: String) {
        self.push(Intent::SubmitNewText(text));
    }

    fn request_delete(&mut self, id: TodoId) {
        self.push(Intent::RequestDelete(id));
    }

    fn request_toggle(&mut self, id: TodoId) {
        self.push(Intent::RequestToggle(id));
    }

    fn request_edit(&mut self, id: TodoId, text: String) {
        self.push(Intent::RequestEdit(id, text));
    }
}

/// Raw user input, independent of the input device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// The new-todo form was submitted with this text.
    Submit(String),
    ClickCheckbox(TodoId),
    ClickDelete(TodoId),
    /// Text editing of a row started.
    EditFocus(TodoId),
    /// The text being edited now reads this.
    EditInput(String),
    /// Text editing stopped.
    EditBlur,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct EditSession {
    id: TodoId,
    buffer: String,
}

/// Turns gestures into intents.
#[derive(Debug, Default)]
pub struct GestureTranslator {
    editing: Option<EditSession>,
}

impl GestureTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the row being edited, if any.
    pub fn editing(&self) -> Option<TodoId> {
        self.editing.as_ref().map(|s| s.id)
    }

    pub fn handle<H: IntentHandler + ?Sized>(&mut self, gesture: Gesture, handler: &mut H) {
        trace!(?gesture, "gesture");
        match gesture {
            Gesture::Submit(text) => {
                if !text.is_empty() {
                    handler.submit_new_text(text);
                }
            }
            Gesture::ClickCheckbox(id) => handler.request_toggle(id),
            Gesture::ClickDelete(id) => handler.request_delete(id),
            Gesture::EditFocus(id) => {
                self.editing = Some(EditSession {
                    id,
                    buffer: String::new(),
                });
            }
            Gesture::EditInput(text) => {
                if let Some(session) = self.editing.as_mut() {
                    session.buffer = text;
                }
            }
            Gesture::EditBlur => {
                if let Some(session) = self.editing.take() {
                    if !session.buffer.is_empty() {
                        handler.request_edit(session.id, session.buffer);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(gestures: Vec<Gesture>) -> Vec<Intent> {
        let mut translator = GestureTranslator::new();
        let mut intents: Vec<Intent> = Vec::new();
        for gesture in gestures {
            translator.handle(gesture, &mut intents);
        }
        intents
    }

    #[test]
    fn clicks_map_one_to_one() {
        let intents = translate(vec![Gesture::ClickCheckbox(3), Gesture::ClickDelete(4)]);
        assert_eq!(
            intents,
            vec![Intent::RequestToggle(3), Intent::RequestDelete(4)]
        );
    }

    #[test]
    fn empty_submit_emits_nothing() {
        let intents = translate(vec![
            Gesture::Submit(String::new()),
            Gesture::Submit("Buy milk".into()),
        ]);
        assert_eq!(intents, vec![Intent::SubmitNewText("Buy milk".into())]);
    }

    #[test]
    fn edit_emits_latest_buffer_on_blur() {
        let intents = translate(vec![
            Gesture::EditFocus(2),
            Gesture::EditInput("Wal".into()),
            Gesture::EditInput("Walk cat".into()),
            Gesture::EditBlur,
        ]);
        assert_eq!(intents, vec![Intent::RequestEdit(2, "Walk cat".into())]);
    }

    #[test]
    fn blur_without_input_emits_nothing() {
        let intents = translate(vec![Gesture::EditFocus(2), Gesture::EditBlur]);
        assert!(intents.is_empty());
    }

    #[test]
    fn buffer_is_cleared_after_emission() {
        let intents = translate(vec![
            Gesture::EditFocus(1),
            Gesture::EditInput("first".into()),
            Gesture::EditBlur,
            Gesture::EditFocus(1),
            Gesture::EditBlur,
        ]);
        assert_eq!(intents, vec![Intent::RequestEdit(1, "first".into())]);
    }

    #[test]
    fn refocus_discards_previous_session() {
        let mut translator = GestureTranslator::new();
        let mut intents: Vec<Intent> = Vec::new();
        translator.handle(Gesture::EditFocus(1), &mut intents);
        translator.handle(Gesture::EditInput("for one".into()), &mut intents);
        translator.handle(Gesture::EditFocus(2), &mut intents);
        assert_eq!(translator.editing(), Some(2));
        translator.handle(Gesture::EditBlur, &mut intents);
        assert!(intents.is_empty());
        assert_eq!(translator.editing(), None);
    }

    #[test]
    fn input_outside_session_is_ignored() {
        let intents = translate(vec![Gesture::EditInput("stray".into()), Gesture::EditBlur]);
        assert!(intents.is_empty());
    }

    #[test]
    fn dispatch_replays_recorded_intents() {
        let recorded = vec![
            Intent::SubmitNewText("a".into()),
            Intent::RequestToggle(0),
            Intent::RequestEdit(0, "b".into()),
            Intent::RequestDelete(0),
        ];
        let mut replayed: Vec<Intent> = Vec::new();
        for intent in recorded.clone() {
            intent.dispatch(&mut replayed);
        }
        assert_eq!(replayed, recorded);
    }
}
