//! Line-driven picker session for terminals.

use emojipicker_core::{Catalog, Emoji, GlyphOracle, KeyEvent, PickerRuntime, RecentSource};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
  h/j/k/l or left/down/up/right  move cursor
  n / p or tab / backtab         next / previous category
  1-9                            jump to category
  pgup / pgdn                    scroll a page
  <enter>                        pick emoji under cursor
  <glyph>                        pick a pasted glyph
  q                              quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Key(KeyEvent),
    Tap(Emoji),
    Help,
    Quit,
}

/// Interpret one input line. Unknown input yields `None`.
pub fn parse_command(line: &str, catalog: &Catalog) -> Option<Command> {
    let input = line.trim();
    let key = match input.to_ascii_lowercase().as_str() {
        "" => KeyEvent::Enter,
        "h" | "left" => KeyEvent::Left,
        "l" | "right" => KeyEvent::Right,
        "k" | "up" => KeyEvent::Up,
        "j" | "down" => KeyEvent::Down,
        "n" | "tab" => KeyEvent::Tab,
        "p" | "backtab" => KeyEvent::BackTab,
        "pgup" | "pageup" => KeyEvent::PageUp,
        "pgdn" | "pagedown" => KeyEvent::PageDown,
        "q" | "quit" | "exit" => return Some(Command::Quit),
        "?" | "help" => return Some(Command::Help),
        other => {
            if let Ok(digit) = other.parse::<u8>() {
                return Some(Command::Key(KeyEvent::Digit(digit)));
            }
            return catalog
                .find_glyph(input)
                .map(|(_, name)| Command::Tap(Emoji::new(name, input)));
        }
    };
    Some(Command::Key(key))
}

/// Run an interactive session until `q` or end of input.
pub fn run<O, S, R, W>(runtime: &mut PickerRuntime<O, S>, input: R, mut out: W) -> io::Result<()>
where
    O: GlyphOracle,
    S: RecentSource,
    R: BufRead,
    W: Write,
{
    runtime.mount();
    write!(out, "{}", runtime.render().to_text())?;
    writeln!(out, "(? for help)")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line, runtime.catalog()) {
            Some(Command::Quit) => break,
            Some(Command::Help) => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Some(Command::Key(key)) => runtime.key(key),
            Some(Command::Tap(emoji)) => runtime.tap(emoji),
            None => {
                writeln!(out, "unknown input {:?}, ? for help", line.trim())?;
                continue;
            }
        }
        write!(out, "{}", runtime.render().to_text())?;
        out.flush()?;
    }

    runtime.dispose();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use emojipicker_core::{PickerConfig, RecentStore, Passthrough};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn parses_keys_and_glyphs() {
        let catalog = Catalog::builtin();
        assert_eq!(parse_command("", &catalog), Some(Command::Key(KeyEvent::Enter)));
        assert_eq!(parse_command(" J ", &catalog), Some(Command::Key(KeyEvent::Down)));
        assert_eq!(parse_command("3", &catalog), Some(Command::Key(KeyEvent::Digit(3))));
        assert_eq!(parse_command("q", &catalog), Some(Command::Quit));
        assert_eq!(
            parse_command("🍕", &catalog),
            Some(Command::Tap(Emoji::new("pizza", "🍕")))
        );
        assert_eq!(parse_command("not a glyph", &catalog), None);
    }

    #[test]
    fn session_picks_first_smiley() {
        let picked = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&picked);
        let mut runtime = PickerRuntime::new(
            Catalog::builtin(),
            Passthrough,
            RecentStore::in_memory(),
            PickerConfig::default(),
            move |e: &Emoji| sink.borrow_mut().push(e.clone()),
        );
        let script = "2\n\nq\n";
        let mut out = Vec::new();
        run(&mut runtime, script.as_bytes(), &mut out).unwrap();

        assert_eq!(picked.borrow().as_slice(), &[Emoji::new("grinning face", "😀")]);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No Recents"));
        assert!(runtime.state().is_disposed());
    }
}
