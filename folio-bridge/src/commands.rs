use folio_core::Direction;

pub const HELP_TEXT: &str = "\
Commands:
  n, next        show the next item
  p, prev        show the previous item
  w <px>         set the viewport width (picks 1, 2 or 3 items per page)
  r, refresh     fetch catalog metrics again
  h, help        show this help
  q, quit        exit";

#[derive(Debug, PartialEq)]
pub enum PreviewCommand {
    Navigate(Direction),
    Resize(u32),
    Refresh,
    Help,
    Quit,
    /// Blank line: redraw only.
    Redraw,
    Unknown(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(input: &str) -> PreviewCommand {
        let trimmed = input.trim();
        let parts: Vec<&str> = trimmed.split_whitespace().collect();

        let Some(cmd) = parts.first() else {
            return PreviewCommand::Redraw;
        };

        match cmd.to_ascii_lowercase().as_str() {
            "n" | "next" | ">" => PreviewCommand::Navigate(Direction::Next),
            "p" | "prev" | "previous" | "<" => PreviewCommand::Navigate(Direction::Previous),
            "r" | "refresh" => PreviewCommand::Refresh,
            "h" | "help" | "?" => PreviewCommand::Help,
            "q" | "quit" | "exit" => PreviewCommand::Quit,
            "w" | "width" => match parts.get(1).and_then(|w| w.parse::<u32>().ok()) {
                Some(width) => PreviewCommand::Resize(width),
                None => PreviewCommand::Unknown(trimmed.to_string()),
            },
            _ => PreviewCommand::Unknown(trimmed.to_string()),
        }
    }
}
