//! Keymap from key strings to panel commands

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// Commands the runtime understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Command {
    FocusNext,
    FocusPrev,
    OptionNext,
    OptionPrev,
    Activate,
    ScrollDown,
    ScrollUp,
    Quit,
}

impl Command {
    /// Get the command name as used in keymap files
    pub fn name(&self) -> &'static str {
        match self {
            Command::FocusNext => "focus_next",
            Command::FocusPrev => "focus_prev",
            Command::OptionNext => "option_next",
            Command::OptionPrev => "option_prev",
            Command::Activate => "activate",
            Command::ScrollDown => "scroll_down",
            Command::ScrollUp => "scroll_up",
            Command::Quit => "quit",
        }
    }

    /// Parse a command from its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|command| command.name() == name)
    }

    pub fn all() -> &'static [Self] {
        &[
            Command::FocusNext,
            Command::FocusPrev,
            Command::OptionNext,
            Command::OptionPrev,
            Command::Activate,
            Command::ScrollDown,
            Command::ScrollUp,
            Command::Quit,
        ]
    }
}

/// Key bindings per command
///
/// Serialized as `{"command_name": ["key", ...]}`. Unknown command names are
/// ignored when loading so older keymap files keep working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: BTreeMap<Command, Vec<String>>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap.bind(Command::FocusNext, ["tab", "down", "j"]);
        keymap.bind(Command::FocusPrev, ["shift+tab", "up", "k"]);
        keymap.bind(Command::OptionNext, ["right", "l"]);
        keymap.bind(Command::OptionPrev, ["left", "h"]);
        keymap.bind(Command::Activate, ["enter", "space"]);
        keymap.bind(Command::ScrollDown, ["pagedown", "ctrl+n"]);
        keymap.bind(Command::ScrollUp, ["pageup", "ctrl+p"]);
        keymap.bind(Command::Quit, ["q", "esc", "ctrl+c"]);
        keymap
    }
}

impl Serialize for Keymap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.bindings.len()))?;
        for (command, keys) in &self.bindings {
            map.serialize_entry(command.name(), keys)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Keymap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: HashMap<String, Vec<String>> = HashMap::deserialize(deserializer)?;
        let bindings = raw
            .into_iter()
            .filter_map(|(name, keys)| Command::from_name(&name).map(|command| (command, keys)))
            .collect();
        Ok(Self { bindings })
    }
}

impl Keymap {
    /// A keymap with no bindings at all
    pub fn empty() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Replace the keys bound to `command`
    pub fn bind<I, K>(&mut self, command: Command, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.bindings
            .insert(command, keys.into_iter().map(Into::into).collect());
    }

    /// Keys bound to `command`
    pub fn keys(&self, command: Command) -> &[String] {
        self.bindings.get(&command).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First key bound to `command`, for help text
    pub fn first_key(&self, command: Command) -> Option<&str> {
        self.keys(command).first().map(String::as_str)
    }

    /// Find the command bound to a key event
    pub fn command_for(&self, key: KeyEvent) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        self.bindings.iter().find_map(|(command, keys)| {
            keys.iter()
                .filter_map(|key_str| parse_key_string(key_str))
                .any(|parsed| keys_match(&parsed, &key))
                .then_some(*command)
        })
    }

    /// Overlay `user` onto `defaults`; user entries replace whole commands
    pub fn merge(mut defaults: Self, user: Self) -> Self {
        defaults.bindings.extend(user.bindings);
        defaults
    }
}

fn keys_match(bound: &KeyEvent, pressed: &KeyEvent) -> bool {
    // Character keys compare case-insensitively
    let codes_match = match (&bound.code, &pressed.code) {
        (KeyCode::Char(a), KeyCode::Char(b)) => a.to_lowercase().eq(b.to_lowercase()),
        _ => bound.code == pressed.code,
    };
    codes_match && bound.modifiers == pressed.modifiers
}

/// Parse a key string like "q", "esc", "ctrl+c", "shift+tab" into a KeyEvent
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();
    if key_str.is_empty() {
        return None;
    }

    if key_str == "shift+tab" || key_str == "backtab" {
        return Some(press(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    let parts: Vec<&str> = key_str.split('+').collect();
    let (key_part, modifier_parts) = parts.split_last()?;
    let mut modifiers = KeyModifiers::empty();
    for part in modifier_parts {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => {}
        }
    }

    let code = match key_part.trim() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "delete" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };

    Some(press(code, modifiers))
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Format a key string for display (e.g., "ctrl+c" -> "^C", "tab" -> "Tab")
pub fn format_key_for_display(key_str: &str) -> String {
    let key_str = key_str.trim().to_lowercase();
    if key_str == "shift+tab" || key_str == "backtab" {
        return "Shift+Tab".to_string();
    }

    let parts: Vec<&str> = key_str.split('+').collect();
    let (key_part, modifier_parts) = match parts.split_last() {
        Some((last, rest)) => (*last, rest),
        None => return key_str,
    };
    let prefix: String = modifier_parts
        .iter()
        .filter_map(|part| match part.trim() {
            "ctrl" | "control" => Some("^"),
            "shift" => Some("Shift+"),
            "alt" => Some("Alt+"),
            _ => None,
        })
        .collect();

    let key_display = match key_part {
        "esc" | "escape" => "Esc".to_string(),
        "enter" | "return" => "Enter".to_string(),
        "pageup" => "PgUp".to_string(),
        "pagedown" => "PgDn".to_string(),
        "delete" => "Del".to_string(),
        c if c.chars().count() == 1 => c.to_uppercase(),
        // Named keys get a leading capital
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    };

    format!("{prefix}{key_display}")
}
