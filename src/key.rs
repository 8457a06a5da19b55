//! Key bindings for keyboard-driven page navigation.
//!
//! Terminal hosts forward bubbletea-rs messages to
//! [`Paginator::update`](crate::paginator::Paginator::update); the bindings
//! here decide which keys turn pages.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"←/h"`.
    pub key: String,
    /// What the key does, e.g. `"prev page"`.
    pub desc: String,
}

/// A set of keys that trigger one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    keys: Vec<KeyCode>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given key codes.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: Help::default(),
            enabled: true,
        }
    }

    /// Creates a binding from key names such as `"pgup"`, `"left"` or `"h"`.
    ///
    /// Unknown names are skipped.
    ///
    /// ```
    /// use console_paginator::key::Binding;
    /// use crossterm::event::KeyCode;
    ///
    /// let b = Binding::from_names(&["pgdown", "right", "l"]);
    /// assert_eq!(b.keys(), &[KeyCode::PageDown, KeyCode::Right, KeyCode::Char('l')]);
    /// ```
    pub fn from_names(names: &[&str]) -> Self {
        Self::new(names.iter().filter_map(|name| parse_key(name)).collect())
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The key codes this binding reacts to.
    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    /// Help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding currently reacts to input.
    pub fn enabled(&self) -> bool {
        self.enabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if `msg` presses one of this binding's keys.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.contains(&msg.key)
    }
}

/// Components that expose their bindings for help views.
pub trait KeyMap {
    /// Bindings for a compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped into columns for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

fn parse_key(name: &str) -> Option<KeyCode> {
    let code = match name {
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}
