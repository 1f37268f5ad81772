//! Terminal rendering for the markdown produced by `grocer_core::display`
//!
//! Uses termimad for styled output, or writes the markdown untouched when
//! color is disabled.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_fg(Color::AnsiValue(245));
        skin.inline_code.set_bg(Color::Reset);

        Self { rich_enabled, skin }
    }

    /// Print markdown to stdout.
    ///
    /// Header lines keep their hashes so the plain and rich forms line up.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[32m{line}\x1b[0m");
            } else if let Some(message) = line.strip_prefix("Error: ") {
                println!("\x1b[31mError:\x1b[0m {message}");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        renderer.render("# Shopping list (1 item)\n").unwrap();
    }

    #[test]
    fn test_rich_renderer() {
        let renderer = TerminalRenderer::new(true);
        assert!(renderer.rich_enabled);
        renderer.render("- ○ Needed **Milk** (`itm-1`)\n").unwrap();
    }
}
