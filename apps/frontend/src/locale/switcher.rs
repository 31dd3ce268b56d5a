//! Locale Switch Controller: turns a user's language choice into a
//! history-replacing navigation.
//!
//! The server never navigates itself. The rendered switcher honours this
//! contract in the browser via `location.replace` with targets from
//! `switched_path`; this module states the same contract in Rust, and the
//! test-only `History` checks it against a browser-like history stack.
#![cfg_attr(not(test), allow(dead_code))]

use crate::locale::path::switched_path;

/// Navigation collaborator. Implementations must overwrite the current
/// history entry rather than push a new one.
pub trait Navigator {
    fn replace(&mut self, path: &str);
}

pub struct LocaleSwitcher<N> {
    navigator: N,
}

impl<N: Navigator> LocaleSwitcher<N> {
    pub fn new(navigator: N) -> Self {
        LocaleSwitcher { navigator }
    }

    /// Navigates from `current_path` to the same page under `new_locale` and
    /// returns the target path.
    pub fn switch(&mut self, current_path: &str, new_locale: &str) -> String {
        let target = switched_path(current_path, new_locale);
        self.navigator.replace(&target);
        target
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }
}

/// In-memory browser history: a stack of visited paths, top is current.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

#[cfg(test)]
impl History {
    pub fn new(initial: impl Into<String>) -> Self {
        History {
            entries: vec![initial.into()],
        }
    }

    pub fn current(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or("/")
    }

    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.push(path.into());
    }

    /// Goes back one entry. Returns `None` at the start of history.
    pub fn back(&mut self) -> Option<&str> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop();
        Some(self.current())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
impl Navigator for History {
    fn replace(&mut self, path: &str) {
        match self.entries.last_mut() {
            Some(current) => *current = path.to_string(),
            None => self.entries.push(path.to_string()),
        }
    }
}
