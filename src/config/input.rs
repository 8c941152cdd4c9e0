//! Input configuration options for fuzzy-filer
//!
//! This module defines the `[keys]` table of the config file. Each action takes a list of key
//! specs which the [Keymap](crate::app::keymap::Keymap) resolves into input units.

use serde::Deserialize;

/// Key specs of all actions
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    quit: Vec<String>,
    up: Vec<String>,
    down: Vec<String>,
    confirm: Vec<String>,
    erase: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(quit, up, down, confirm, erase);

impl Keys {
    /// First configured spec of an action, used by the footer hint.
    pub fn label(specs: &[String]) -> &str {
        specs.first().map(String::as_str).unwrap_or("-")
    }
}

/// Default key specs
impl Default for Keys {
    fn default() -> Self {
        Keys {
            quit: vec!["Ctrl+d".into(), "Ctrl+c".into(), "Esc".into()],
            up: vec!["Ctrl+p".into(), "Up".into()],
            down: vec!["Ctrl+n".into(), "Down".into()],
            confirm: vec!["Enter".into()],
            erase: vec!["Backspace".into(), "Ctrl+h".into()],
        }
    }
}
