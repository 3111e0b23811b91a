//! The page elements the renderer writes to.
//!
//! `ResultsSurface` is the only way the renderer touches the page. `PageState`
//! is the in-memory implementation used by the terminal front-end and tests:
//! a page-root class list, the results container's visibility and the grid.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::view::GridContent;

/// Page-root class present until the first selection
pub const INITIAL_LAYOUT_CLASS: &str = "state-initial";

/// Write access to the page for the recommendation renderer.
pub trait ResultsSurface: Send + Sync {
    /// Drop the initial-layout class from the page root (idempotent)
    fn remove_initial_layout(&self);

    /// Unhide the results container (idempotent)
    fn reveal_results(&self);

    /// Replace the whole grid content in one write
    fn replace_grid(&self, content: GridContent);
}

/// Point-in-time copy of the page
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    pub root_classes: BTreeSet<String>,
    pub results_hidden: bool,
    pub grid: GridContent,
    /// Number of grid replacements so far
    pub grid_writes: usize,
}

impl PageSnapshot {
    pub fn has_initial_layout(&self) -> bool {
        self.root_classes.contains(INITIAL_LAYOUT_CLASS)
    }
}

#[derive(Debug)]
pub struct PageState {
    inner: Mutex<PageSnapshot>,
}

impl PageState {
    /// A freshly loaded page: initial layout, hidden results, empty grid
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(PageSnapshot {
                root_classes: BTreeSet::from([INITIAL_LAYOUT_CLASS.to_string()]),
                results_hidden: true,
                grid: GridContent::Blank,
                grid_writes: 0,
            }),
        }
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.lock().clone()
    }

    pub fn grid(&self) -> GridContent {
        self.lock().grid.clone()
    }

    pub fn grid_html(&self) -> String {
        self.lock().grid.render_html()
    }

    pub fn has_initial_layout(&self) -> bool {
        self.lock().has_initial_layout()
    }

    pub fn results_visible(&self) -> bool {
        !self.lock().results_hidden
    }

    // A panic while holding the lock cannot leave the snapshot half-written,
    // so a poisoned lock is still safe to read.
    fn lock(&self) -> MutexGuard<'_, PageSnapshot> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsSurface for PageState {
    fn remove_initial_layout(&self) {
        self.lock().root_classes.remove(INITIAL_LAYOUT_CLASS);
    }

    fn reveal_results(&self) {
        self.lock().results_hidden = false;
    }

    fn replace_grid(&self, content: GridContent) {
        let mut page = self.lock();
        page.grid = content;
        page.grid_writes += 1;
    }
}
