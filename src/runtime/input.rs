//! Key script input
//!
//! Scripts are the headless stand-in for a terminal: a string of keys in the
//! familiar angle-bracket notation, e.g. `" hello<Esc><C-s>"`.
//!
//! - plain characters are typed as-is
//! - `<Name>` is a named key (`<Esc>`, `<CR>`, `<BS>`, `<Up>`, `<PageDown>`, ...)
//! - `<C-x>` is a control character
//! - `<Space>` and `<lt>` stand for a space and a literal `<`
//! - a raw newline or tab in the script is Enter or Tab

use crate::keymap::{KeyEvent, NamedKey};

/// Parse a key script into key events
pub fn parse_key_script(script: &str) -> Result<Vec<KeyEvent>, String> {
    let mut keys = Vec::new();
    let mut chars = script.char_indices();

    while let Some((start, ch)) = chars.next() {
        match ch {
            '<' => {
                let rest = &script[start + 1..];
                let Some(end) = rest.find('>') else {
                    return Err(format!("Unterminated key at offset {}: {}", start, rest));
                };
                let name = &rest[..end];
                keys.push(parse_key_name(name)?);
                // Skip the name and the closing '>'
                for _ in 0..name.chars().count() + 1 {
                    chars.next();
                }
            }
            '\n' | '\r' => keys.push(KeyEvent::Named(NamedKey::Enter)),
            '\t' => keys.push(KeyEvent::Named(NamedKey::Tab)),
            c => keys.push(KeyEvent::Char(c)),
        }
    }

    Ok(keys)
}

/// Parse the inside of a `<...>` group
fn parse_key_name(name: &str) -> Result<KeyEvent, String> {
    if let Some(rest) = name
        .strip_prefix("C-")
        .or_else(|| name.strip_prefix("c-"))
    {
        let mut chars = rest.chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(KeyEvent::ctrl(c)),
            _ => Err(format!("Control key needs a single character: <{}>", name)),
        };
    }

    match name.to_ascii_lowercase().as_str() {
        "lt" => return Ok(KeyEvent::Char('<')),
        "space" => return Ok(KeyEvent::Char(' ')),
        _ => {}
    }

    NamedKey::from_name(name)
        .map(KeyEvent::Named)
        .ok_or_else(|| format!("Unknown key: <{}>", name))
}
