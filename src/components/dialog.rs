use bevy::prelude::*;

/// Effect of picking a dialog option.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DialogAction {
    /// Close the dialog and return to the map.
    Dismiss,
    /// Shout back; the dialog stays open.
    Taunt,
    /// Buy the referenced item, then close the dialog.
    Buy { item: Entity },
}

/// One selectable reply in a dialog.
#[derive(Clone, Debug)]
pub struct DialogOption {
    pub reply: String,
    pub action: DialogAction,
}

/// Conversation state opened by a collision with an army or a town.
/// Pure data: a UI layer renders it, the choice-resolution pass mutates
/// it via `DialogChoice` events.
#[derive(Clone, Component, Debug, Default)]
pub struct Dialog {
    pub lines: Vec<String>,
    pub current_line: usize,
    pub options: Vec<DialogOption>,
}

impl Dialog {
    pub fn line(&self) -> Option<&str> {
        self.lines.get(self.current_line).map(String::as_str)
    }
}
