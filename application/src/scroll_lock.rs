//! Page scroll lock — a process-wide resource with an owning guard
//!
//! While a modal is open, background page scroll is suppressed and the
//! layout shift of the disappearing scrollbar is compensated with right
//! padding. Both must be restored to their exact prior values on every exit
//! path (close control, backdrop click, teardown), so the mutation lives in
//! a guard whose `Drop` performs the release.
//!
//! At most one holder exists at a time; only one modal can be open, so
//! contention never arises, but the discipline is enforced anyway.

use std::sync::{Arc, Mutex};

/// Document-level chrome state shared between the page and the modal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageChrome {
    /// Whether the underlying page responds to scroll input
    pub scroll_enabled: bool,
    /// Right padding in logical units (scrollbar compensation)
    pub pad_right: f32,
}

impl Default for PageChrome {
    fn default() -> Self {
        Self {
            scroll_enabled: true,
            pad_right: 0.0,
        }
    }
}

struct LockState {
    chrome: PageChrome,
    held: bool,
}

/// The shared scroll-lock resource
#[derive(Clone)]
pub struct ScrollLock {
    state: Arc<Mutex<LockState>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(LockState {
                chrome: PageChrome::default(),
                held: false,
            })),
        }
    }

    /// Current chrome values, read by the page renderer every frame
    pub fn chrome(&self) -> PageChrome {
        self.state.lock().unwrap().chrome
    }

    pub fn is_locked(&self) -> bool {
        self.state.lock().unwrap().held
    }

    /// Acquire the lock: suppress scroll, add scrollbar compensation.
    ///
    /// Returns `None` if the lock is already held. The guard restores the
    /// exact prior values when dropped.
    pub fn acquire(&self, scrollbar_width: f32) -> Option<ScrollLockGuard> {
        let mut state = self.state.lock().unwrap();
        if state.held {
            return None;
        }
        let saved = state.chrome;
        state.chrome.scroll_enabled = false;
        state.chrome.pad_right = saved.pad_right + scrollbar_width;
        state.held = true;
        Some(ScrollLockGuard {
            state: Arc::clone(&self.state),
            saved,
        })
    }
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self::new()
    }
}

/// Owning guard over the locked page chrome.
///
/// Dropping it restores the pre-open values regardless of how the close
/// happened.
pub struct ScrollLockGuard {
    state: Arc<Mutex<LockState>>,
    saved: PageChrome,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.chrome = self.saved;
        state.held = false;
    }
}
