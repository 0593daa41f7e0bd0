//! Two-state dialogue toggle gating movement input.
use serde::Serialize;

/// Whether a dialogue line is on screen. Only one line is ever active.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DialogueState {
    #[default]
    Hidden,
    Visible { text: String },
}

impl DialogueState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Visible { text } => Some(text.as_str()),
            Self::Hidden => None,
        }
    }

    /// Shows `text`. Returns `false` (and changes nothing) if a line is
    /// already visible.
    pub fn show(&mut self, text: impl Into<String>) -> bool {
        if self.is_visible() {
            return false;
        }
        *self = Self::Visible { text: text.into() };
        true
    }

    /// Hides the current line. Returns `false` if nothing was visible.
    pub fn hide(&mut self) -> bool {
        if !self.is_visible() {
            return false;
        }
        *self = Self::Hidden;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_between_hidden_and_visible() {
        let mut state = DialogueState::default();
        assert!(!state.is_visible());
        assert_eq!(state.text(), None);

        assert!(state.show("Hey kid... don't bother me."));
        assert_eq!(state.text(), Some("Hey kid... don't bother me."));

        assert!(!state.show("second line"));
        assert_eq!(state.text(), Some("Hey kid... don't bother me."));

        assert!(state.hide());
        assert!(!state.hide());
        assert_eq!(state, DialogueState::Hidden);
    }
}
