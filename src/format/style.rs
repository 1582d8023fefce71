//! Terminal style table.
//!
//! Named ANSI escape pairs with a single on/off switch. Unknown names and
//! disabled styling both degrade to the unmodified text.

use std::collections::HashMap;

/// A (prefix, suffix) pair of ANSI escape sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePair {
    pub prefix: String,
    pub suffix: String,
}

impl StylePair {
    pub fn new(prefix: &str, suffix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }
}

/// Named terminal styles with a global stylize switch.
///
/// The default table covers emphasis, grayscale and color entries plus one
/// entry per severity name, so level names double as style keys.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    styles: HashMap<String, StylePair>,
    stylize: bool,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let mut styles = HashMap::new();
        let entries: &[(&str, &str, &str)] = &[
            // emphasis
            ("bold", "\x1b[1m", "\x1b[22m"),
            ("italic", "\x1b[3m", "\x1b[23m"),
            ("underline", "\x1b[4m", "\x1b[24m"),
            ("inverse", "\x1b[7m", "\x1b[27m"),
            // grayscale
            ("white", "\x1b[37m", "\x1b[39m"),
            ("grey", "\x1b[90m", "\x1b[39m"),
            ("black", "\x1b[30m", "\x1b[39m"),
            // colors
            ("blue", "\x1b[34m", "\x1b[39m"),
            ("cyan", "\x1b[36m", "\x1b[39m"),
            ("green", "\x1b[32m", "\x1b[39m"),
            ("magenta", "\x1b[35m", "\x1b[39m"),
            ("red", "\x1b[31m", "\x1b[39m"),
            ("yellow", "\x1b[33m", "\x1b[39m"),
            // severity names
            ("DEBUG", "\x1b[34m", "\x1b[39m"),
            ("INFO", "\x1b[32m", "\x1b[39m"),
            ("WARNING", "\x1b[35m", "\x1b[39m"),
            ("ERROR", "\x1b[31m", "\x1b[39m"),
            ("CRITICAL", "\x1b[31m\x1b[1m", "\x1b[22m\x1b[39m"),
        ];
        for (name, prefix, suffix) in entries {
            styles.insert(name.to_string(), StylePair::new(prefix, suffix));
        }
        Self {
            styles,
            stylize: true,
        }
    }
}

impl StyleSheet {
    /// Whether styling is currently applied.
    pub fn stylize(&self) -> bool {
        self.stylize
    }

    /// Enable or disable all styling.
    pub fn set_stylize(&mut self, on: bool) {
        self.stylize = on;
    }

    /// Add or replace a named style.
    pub fn set(&mut self, name: &str, pair: StylePair) {
        self.styles.insert(name.to_string(), pair);
    }

    /// Wrap `text` in the named escape pair. Unknown names and disabled
    /// styling both return `text` unchanged.
    pub fn apply(&self, name: &str, text: &str) -> String {
        if !self.stylize {
            return text.to_string();
        }
        match self.styles.get(name) {
            Some(pair) => format!("{}{}{}", pair.prefix, text, pair.suffix),
            None => text.to_string(),
        }
    }

    /// Style `text` using its own value as the style key. Severity names
    /// carry their own table entries, so highlighting a level name colors it.
    pub fn highlight(&self, text: &str) -> String {
        self.apply(text, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_known_style() {
        let styles = StyleSheet::default();
        assert_eq!(styles.apply("red", "x"), "\x1b[31mx\x1b[39m");
    }

    #[test]
    fn test_unknown_style_is_passthrough() {
        let styles = StyleSheet::default();
        assert_eq!(styles.apply("no-such-style", "x"), "x");
    }

    #[test]
    fn test_disabled_styling_is_passthrough() {
        let mut styles = StyleSheet::default();
        styles.set_stylize(false);
        assert_eq!(styles.apply("red", "x"), "x");
        assert_eq!(styles.apply("no-such-style", "x"), "x");
        assert_eq!(styles.highlight("ERROR"), "ERROR");
    }

    #[test]
    fn test_highlight_uses_text_as_key() {
        let styles = StyleSheet::default();
        assert_eq!(styles.highlight("ERROR"), "\x1b[31mERROR\x1b[39m");
        assert_eq!(
            styles.highlight("CRITICAL"),
            "\x1b[31m\x1b[1mCRITICAL\x1b[22m\x1b[39m"
        );
    }

    #[test]
    fn test_extend_table() {
        let mut styles = StyleSheet::default();
        styles.set("alert", StylePair::new("\x1b[41m", "\x1b[49m"));
        assert_eq!(styles.apply("alert", "x"), "\x1b[41mx\x1b[49m");
    }
}
