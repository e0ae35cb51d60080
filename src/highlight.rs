use inksac::prelude::*;

use crate::core::commands::BUILTINS;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colors the command word of an input line: built-ins in magenta,
    /// anything else in cyan. Only single spaces separate words, so the
    /// line is rebuilt with its original spacing.
    pub fn highlight_command(&self, input: &str) -> String {
        if !self.is_enabled() {
            return input.to_string();
        }

        let start = input.len() - input.trim_start_matches(' ').len();
        let rest = &input[start..];
        let end = rest.find(' ').unwrap_or(rest.len());
        let word = &rest[..end];
        if word.is_empty() {
            return input.to_string();
        }

        let color = if BUILTINS.contains(&word) {
            Color::Magenta
        } else {
            Color::Cyan
        };
        let command_style = Style::builder().foreground(color).bold().build();

        format!(
            "{}{}{}",
            &input[..start],
            word.style(command_style),
            &rest[end..]
        )
    }

    pub fn highlight_error(&self, error: &str) -> String {
        self.paint(error, Style::builder().foreground(Color::Red).bold().build())
    }

    pub fn highlight_warning(&self, warning: &str) -> String {
        self.paint(warning, Style::builder().foreground(Color::Yellow).bold().build())
    }

    pub fn highlight_info(&self, info: &str) -> String {
        self.paint(info, Style::builder().foreground(Color::Green).build())
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        self.paint(hint, Style::builder().foreground(Color::RGB(128, 128, 128)).build())
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if !self.is_enabled() {
            return text.to_string();
        }
        text.style(style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_highlighter_is_identity() {
        let highlighter = SyntaxHighlighter::plain();
        assert!(!highlighter.is_enabled());
        assert_eq!(highlighter.highlight_command("  pushd  /tmp"), "  pushd  /tmp");
        assert_eq!(highlighter.highlight_error("ERROR:"), "ERROR:");
        assert_eq!(highlighter.highlight_hint("hint"), "hint");
    }
}
