//! Page controller — owns the selection state
//!
//! The single writer of [`SelectionState`]. Every mutation happens inside
//! [`PageController::handle`], synchronously with the triggering command, so
//! the presenter can rely on selection and modal-open always agreeing.

use crate::events::{PageCommand, PageEffect};
use folio_domain::{Catalog, SelectionState, ServiceRecord};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct PageController {
    catalog: Arc<Catalog>,
    selection: SelectionState,
}

impl PageController {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            selection: SelectionState::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The record behind the current selection, if any
    pub fn selected_service(&self) -> Option<&ServiceRecord> {
        let id = self.selection.selected()?;
        self.catalog.get(id).ok()
    }

    /// Apply a command. Selection mutations happen here and nowhere else.
    pub fn handle(&mut self, command: PageCommand) -> Vec<PageEffect> {
        match command {
            PageCommand::Select(id) => {
                if self.catalog.get(&id).is_err() {
                    warn!(service = %id, "ignoring selection of unknown service");
                    return Vec::new();
                }
                let was_open = self.selection.is_open();
                let replaced = self.selection.select(id);
                debug!(service = ?self.selection.selected(), "service selected");
                // Switching A -> B while open: stale body scroll must reset
                if was_open && replaced.is_some() {
                    vec![PageEffect::ResetModalScroll]
                } else {
                    Vec::new()
                }
            }

            PageCommand::CloseModal => {
                self.selection.clear();
                Vec::new()
            }

            PageCommand::OpenTelegram => {
                vec![PageEffect::OpenUrl(self.catalog.contact().telegram_url())]
            }

            PageCommand::OpenEmail => {
                vec![PageEffect::OpenUrl(self.catalog.contact().email_url())]
            }

            PageCommand::ContactTelegram => {
                let contact = self.catalog.contact();
                vec![
                    // Raw handle, "@" included - the link strips it, the copy does not
                    PageEffect::CopyToClipboard(contact.telegram.clone()),
                    PageEffect::OpenUrl(contact.telegram_url()),
                ]
            }

            PageCommand::ContactEmail => {
                let contact = self.catalog.contact();
                vec![
                    PageEffect::CopyToClipboard(contact.email.clone()),
                    PageEffect::OpenUrl(contact.email_url()),
                ]
            }
        }
    }
}
