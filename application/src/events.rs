//! Page commands and effects
//!
//! Commands flow from input handling into [`PageController::handle`];
//! effects flow back out. State mutation happens inside the controller,
//! synchronously; effects are side channels (clipboard, link opening) or
//! deferred UI actions.
//!
//! [`PageController::handle`]: crate::controller::PageController::handle

use folio_domain::ServiceId;

/// User-intent commands handled by the page controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    /// A service card was activated (click or Enter)
    Select(ServiceId),
    /// The modal was dismissed (close control, backdrop click, or Esc)
    CloseModal,
    /// Nav-bar telegram shortcut: navigate only
    OpenTelegram,
    /// Nav-bar email shortcut: navigate only
    OpenEmail,
    /// Modal contact action: copy the raw handle, then navigate
    ContactTelegram,
    /// Modal contact action: copy the address, then navigate
    ContactEmail,
}

/// Side effects produced by command handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    /// Best-effort clipboard write of the exact literal string
    CopyToClipboard(String),
    /// Open a link with the platform handler
    OpenUrl(String),
    /// Reset the modal body scroll to top on the next scheduling tick
    ResetModalScroll,
}
