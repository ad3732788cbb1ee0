//! Tab navigation state
//!
//! Each tab owns an independent back stack whose first entry is the tab's
//! root destination. The navigator tracks which tab is active; switching
//! tabs never touches any stack, so every tab resumes where it was left.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::Destination;
use crate::error::{PetviewError, Result};

/// Top-level navigation context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Home,
    Favorites,
    About,
}

impl Tab {
    /// Every tab, in default tab bar order
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Favorites, Tab::About];

    /// Root destination of this tab's back stack
    pub fn root(self) -> Destination {
        match self {
            Tab::Home => Destination::Home,
            Tab::Favorites => Destination::Favorites,
            Tab::About => Destination::About,
        }
    }

    /// Display name for the tab bar
    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Favorites => "Favorites",
            Tab::About => "About",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" | "pets" => Ok(Tab::Home),
            "favorites" | "favourites" | "fav" => Ok(Tab::Favorites),
            "about" | "info" => Ok(Tab::About),
            _ => Err(()),
        }
    }
}

/// What the caller should do when back is pressed at a tab's root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootBackPolicy {
    /// Stay on the root screen
    #[default]
    Ignore,
    /// Leave the application
    Exit,
}

/// Result of popping the active back stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopOutcome {
    /// The given destination was removed
    Popped(Destination),
    /// The stack only holds its root; nothing changed
    AtRoot,
}

/// Navigation history of a single tab
///
/// Never empty: the root pushed at construction can not be popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackStack {
    entries: Vec<Destination>,
}

impl BackStack {
    /// Create a stack holding only `root`
    pub fn new(root: Destination) -> Self {
        Self {
            entries: vec![root],
        }
    }

    /// The permanent first entry
    pub fn root(&self) -> &Destination {
        &self.entries[0]
    }

    /// The visible (last) entry
    pub fn current(&self) -> &Destination {
        // entries is never empty
        &self.entries[self.entries.len() - 1]
    }

    /// Number of entries, root included
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.entries.len() == 1
    }

    /// All entries, root first
    pub fn entries(&self) -> &[Destination] {
        &self.entries
    }

    pub fn push(&mut self, dest: Destination) {
        self.entries.push(dest);
    }

    /// Remove the last entry unless it is the root
    pub fn pop(&mut self) -> Option<Destination> {
        if self.is_at_root() {
            None
        } else {
            self.entries.pop()
        }
    }

    /// Truncate back to the root
    pub fn reset(&mut self) {
        self.entries.truncate(1);
    }
}

/// Manager for the fixed set of tabs and their back stacks
#[derive(Debug, Clone)]
pub struct TabNavigator {
    /// Tab set, in tab bar order
    tabs: Vec<Tab>,
    /// One stack per tab, same order as `tabs`
    stacks: Vec<BackStack>,
    /// Index of the currently active tab
    active_index: usize,
}

impl TabNavigator {
    /// Create a navigator over `tabs` with `default` active
    ///
    /// The tab set must be non-empty, free of duplicates and contain
    /// `default`.
    pub fn new(tabs: &[Tab], default: Tab) -> Result<Self> {
        if tabs.is_empty() {
            return Err(PetviewError::config("tab set must not be empty"));
        }
        for (i, tab) in tabs.iter().enumerate() {
            if tabs[..i].contains(tab) {
                return Err(PetviewError::config(format!(
                    "tab '{}' listed more than once",
                    tab
                )));
            }
        }
        let active_index = tabs
            .iter()
            .position(|t| *t == default)
            .ok_or(PetviewError::InvalidTab(default))?;

        Ok(Self {
            tabs: tabs.to_vec(),
            stacks: tabs.iter().map(|t| BackStack::new(t.root())).collect(),
            active_index,
        })
    }

    /// Navigator with every tab, Home active
    pub fn with_all_tabs() -> Self {
        Self {
            tabs: Tab::ALL.to_vec(),
            stacks: Tab::ALL.iter().map(|t| BackStack::new(t.root())).collect(),
            active_index: 0,
        }
    }

    fn index_of(&self, tab: Tab) -> Option<usize> {
        self.tabs.iter().position(|t| *t == tab)
    }

    /// The tab set, in tab bar order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Tab at a tab bar position
    pub fn tab_at(&self, index: usize) -> Option<Tab> {
        self.tabs.get(index).copied()
    }

    pub fn contains(&self, tab: Tab) -> bool {
        self.index_of(tab).is_some()
    }

    /// Currently active tab
    pub fn active_tab(&self) -> Tab {
        self.tabs[self.active_index]
    }

    /// Back stack of a tab, if it belongs to the set
    pub fn stack(&self, tab: Tab) -> Option<&BackStack> {
        self.index_of(tab).map(|i| &self.stacks[i])
    }

    /// Back stack of the active tab
    pub fn active_stack(&self) -> &BackStack {
        &self.stacks[self.active_index]
    }

    /// Destination to render
    pub fn current(&self) -> &Destination {
        self.active_stack().current()
    }

    /// Depth of the active stack
    pub fn depth(&self) -> usize {
        self.active_stack().depth()
    }

    /// Make `tab` active, keeping every stack as it is
    pub fn select_tab(&mut self, tab: Tab) -> Result<()> {
        match self.index_of(tab) {
            Some(index) => {
                self.active_index = index;
                Ok(())
            }
            None => {
                log::error!("select_tab({}) outside tab set {:?}", tab, self.tabs);
                Err(PetviewError::InvalidTab(tab))
            }
        }
    }

    /// Jump to the root of `tab` when it is already active, select it otherwise
    pub fn select_tab_or_reset_if_current(&mut self, tab: Tab) -> Result<()> {
        if tab == self.active_tab() {
            self.stacks[self.active_index].reset();
            Ok(())
        } else {
            self.select_tab(tab)
        }
    }

    /// Switch to the next tab (wraps around)
    pub fn next_tab(&mut self) {
        self.active_index = (self.active_index + 1) % self.tabs.len();
    }

    /// Switch to the previous tab (wraps around)
    pub fn prev_tab(&mut self) {
        self.active_index = if self.active_index == 0 {
            self.tabs.len() - 1
        } else {
            self.active_index - 1
        };
    }

    /// Push onto the active stack
    pub fn push(&mut self, dest: Destination) {
        self.stacks[self.active_index].push(dest);
    }

    /// Pop the active stack; a root-only stack is left untouched
    pub fn pop(&mut self) -> PopOutcome {
        match self.stacks[self.active_index].pop() {
            Some(dest) => PopOutcome::Popped(dest),
            None => PopOutcome::AtRoot,
        }
    }
}
