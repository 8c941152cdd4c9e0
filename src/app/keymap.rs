//! Key mapping for fuzzy-filer
//!
//! Resolves the key specs of the `[keys]` config table into input units (one code point each)
//! and maps input units to the session [Action]s.

use crate::config::Keys;

use std::collections::HashMap;

/// Input unit of the Enter key.
pub const ENTER: char = '\r';
/// Input unit of the Backspace key. Terminals send DEL rather than BS.
pub const BACKSPACE: char = '\u{7f}';
pub const ESC: char = '\u{1b}';
pub const TAB: char = '\t';
/// The arrow keys arrive as their emacs-style control codes (Ctrl+P / Ctrl+N).
pub const ARROW_UP: char = '\u{10}';
pub const ARROW_DOWN: char = '\u{0e}';

/// Session actions an input unit can be bound to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    Confirm,
    Erase,
}

/// Mapping from input unit to action, built from the config.
#[derive(Debug, Clone)]
pub struct Keymap {
    map: HashMap<char, Action>,
}

impl Keymap {
    /// Builds the keymap from the `[keys]` table.
    ///
    /// Actions are bound in a fixed order, so a unit listed under two actions ends up with the
    /// later one (quit, up, down, confirm, erase).
    #[rustfmt::skip]
    pub fn from_keys(keys: &Keys) -> Self {
        let mut map = HashMap::new();

        bind(keys.quit(),    Action::Quit,    &mut map);
        bind(keys.up(),      Action::Up,      &mut map);
        bind(keys.down(),    Action::Down,    &mut map);
        bind(keys.confirm(), Action::Confirm, &mut map);
        bind(keys.erase(),   Action::Erase,   &mut map);

        Keymap { map }
    }

    /// Looks up the action bound to an input unit
    #[inline]
    pub fn lookup(&self, unit: char) -> Option<Action> {
        self.map.get(&unit).copied()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_keys(&Keys::default())
    }
}

/// Parses one key spec into the input unit the terminal delivers for it.
///
/// Accepted forms: a single character (`"q"`), `Ctrl+x` / `ctrl-x` / `<c-x>`, and the named
/// keys Enter, Backspace, Esc, Tab, Space, Up and Down.
pub fn parse_key(s: &str) -> Option<char> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(c);
    }

    let mut ctrl = false;
    let mut unit: Option<char> = None;

    let is_bracketed = s.starts_with('<') && s.ends_with('>');
    let mut input = s.trim_start_matches('<').trim_end_matches('>').to_string();

    if is_bracketed && input.contains('-') {
        let parts: Vec<&str> = input.split('-').collect();

        for &prefix in parts.iter().take(parts.len().saturating_sub(1)) {
            match prefix.to_lowercase().as_str() {
                "c" | "ctrl" => ctrl = true,
                _ => return None,
            }
        }
        input = parts.last()?.to_string();
    }

    let normalized = input.replace('-', "+");
    for part in normalized.split('+') {
        let p_low = part.to_lowercase();
        match p_low.as_str() {
            "ctrl" | "control" => ctrl = true,

            "up" => unit = Some(ARROW_UP),
            "down" => unit = Some(ARROW_DOWN),
            "enter" | "return" => unit = Some(ENTER),
            "esc" | "escape" => unit = Some(ESC),
            "backspace" | "back" => unit = Some(BACKSPACE),
            "tab" => unit = Some(TAB),
            "space" | "spc" => unit = Some(' '),

            "" => continue,
            _ => {
                let mut cs = part.chars();
                match (cs.next(), cs.next()) {
                    (Some(c), None) => unit = Some(c),
                    _ => return None,
                }
            }
        }
    }

    let unit = unit?;
    if ctrl { control_code(unit) } else { Some(unit) }
}

/// Maps a character to its ASCII control code (Ctrl+A = 0x01 ... Ctrl+_ = 0x1f).
pub fn control_code(c: char) -> Option<char> {
    let upper = c.to_ascii_uppercase();
    if ('@'..='_').contains(&upper) {
        Some(((upper as u8) & 0x1f) as char)
    } else {
        None
    }
}

fn bind(key_list: &[String], action: Action, map: &mut HashMap<char, Action>) {
    for k in key_list {
        match parse_key(k) {
            Some(unit) => {
                map.insert(unit, action);
            }
            None => tracing::warn!(key = %k, ?action, "unknown key spec, ignored"),
        }
    }
}
