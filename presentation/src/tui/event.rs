//! Key handling — maps terminal input to page intents
//!
//! The mapping depends on whether the modal is open: a card grid wants focus
//! movement, an open modal wants body scrolling and its own dismiss keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Semantic input actions for the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    None,
    Quit,
    /// Move card focus forward / backward in listed order
    FocusNext,
    FocusPrev,
    /// Activate the focused card (opens the modal)
    Activate,
    /// Dismiss the modal
    CloseModal,
    /// Scroll the modal body
    BodyScrollUp,
    BodyScrollDown,
    /// Scroll the page behind the grid
    PageScrollUp,
    PageScrollDown,
    /// Modal contact actions (copy + navigate)
    ContactTelegram,
    ContactEmail,
    /// Nav-bar shortcuts (navigate only)
    NavTelegram,
    NavEmail,
}

/// Translate a key event given the current modal state
pub fn action_for_key(key: KeyEvent, modal_open: bool) -> UiAction {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return UiAction::Quit;
    }

    if modal_open {
        match key.code {
            KeyCode::Esc | KeyCode::Char('x') => UiAction::CloseModal,
            KeyCode::Up | KeyCode::Char('k') => UiAction::BodyScrollUp,
            KeyCode::Down | KeyCode::Char('j') => UiAction::BodyScrollDown,
            KeyCode::Char('t') => UiAction::ContactTelegram,
            KeyCode::Char('e') => UiAction::ContactEmail,
            KeyCode::Char('q') => UiAction::Quit,
            _ => UiAction::None,
        }
    } else {
        match key.code {
            KeyCode::Char('q') => UiAction::Quit,
            KeyCode::Right | KeyCode::Down | KeyCode::Tab | KeyCode::Char('l') => {
                UiAction::FocusNext
            }
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab | KeyCode::Char('h') => {
                UiAction::FocusPrev
            }
            KeyCode::Enter | KeyCode::Char(' ') => UiAction::Activate,
            KeyCode::Char('j') | KeyCode::PageDown => UiAction::PageScrollDown,
            KeyCode::Char('k') | KeyCode::PageUp => UiAction::PageScrollUp,
            KeyCode::Char('t') => UiAction::NavTelegram,
            KeyCode::Char('e') => UiAction::NavEmail,
            _ => UiAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_activates_focused_card() {
        assert_eq!(action_for_key(key(KeyCode::Enter), false), UiAction::Activate);
    }

    #[test]
    fn test_esc_closes_only_when_open() {
        assert_eq!(action_for_key(key(KeyCode::Esc), true), UiAction::CloseModal);
        assert_eq!(action_for_key(key(KeyCode::Esc), false), UiAction::None);
    }

    #[test]
    fn test_jk_scroll_body_when_open_page_when_closed() {
        assert_eq!(
            action_for_key(key(KeyCode::Char('j')), true),
            UiAction::BodyScrollDown
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('j')), false),
            UiAction::PageScrollDown
        );
    }

    #[test]
    fn test_contact_keys_depend_on_modal() {
        assert_eq!(
            action_for_key(key(KeyCode::Char('t')), true),
            UiAction::ContactTelegram
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('t')), false),
            UiAction::NavTelegram
        );
    }

    #[test]
    fn test_ctrl_c_quits_in_both_states() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(ctrl_c, true), UiAction::Quit);
        assert_eq!(action_for_key(ctrl_c, false), UiAction::Quit);
    }
}
