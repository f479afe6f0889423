//! REPL input handling - one line of stdin is one recognized utterance

use silly_nav::{EditingSurface, Interpreter, TextBuffer, Utterance, WordTray};

pub type Session = Interpreter<TextBuffer, WordTray>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineResult {
    Continue,
    Quit,
}

/// Handle one line of input: a slash command or an utterance.
pub fn handle_line(session: &mut Session, line: &str) -> LineResult {
    let line = line.trim();
    if line.is_empty() {
        return LineResult::Continue;
    }

    if let Some(cmd) = line.strip_prefix('/') {
        return slash_command(session, cmd);
    }

    let cancelled = handle_utterance(session, line);
    eprintln!("{}", status(session, cancelled));
    LineResult::Continue
}

/// Run the interpreter; when nothing claimed the utterance, dictate it.
///
/// Returns whether the utterance was taken as a command.
pub fn handle_utterance(session: &mut Session, text: &str) -> bool {
    let mut cancelled = false;
    session.process(Utterance::new(text, &mut || cancelled = true));

    if !cancelled {
        tracing::debug!(text, "Dictating");
        session.editor_mut().insert_text(&format!("{text} "));
    }
    cancelled
}

fn status(session: &Session, cancelled: bool) -> String {
    let cursor = session.editor().cursor_position();
    let mut line = format!(
        "[{}:{}] {}",
        cursor.row + 1,
        cursor.column + 1,
        if cancelled { "command" } else { "dictated" }
    );
    if !session.feedback().is_empty() {
        line.push_str(&format!(" | {} ({})", session.feedback(), session.state()));
    }
    line
}

fn slash_command(session: &mut Session, cmd: &str) -> LineResult {
    match cmd.to_lowercase().as_str() {
        "quit" | "exit" => return LineResult::Quit,
        "reset" => {
            session.reset();
            eprintln!("[reset]");
        }
        "print" => {
            let editor = session.editor();
            let cursor = editor.cursor_position();
            for row in 0..editor.line_count() {
                let marker = if row == cursor.row { '>' } else { ' ' };
                eprintln!("{marker}{:>4} {}", row + 1, editor.line(row).unwrap_or_default());
            }
        }
        "help" | "commands" => eprintln!("{}", help(session)),
        other => eprintln!("Unknown command: /{other} (try /help)"),
    }
    LineResult::Continue
}

fn help(session: &Session) -> String {
    let grammar = session.grammar();
    let dictionaries = grammar.dictionaries();
    let heard_as = |word: &str| {
        let alternatives = dictionaries.alternatives(word);
        if alternatives.is_empty() {
            String::new()
        } else {
            format!("  (also: {})", alternatives.join(", "))
        }
    };

    let mut help = String::from("Voice commands:\n");
    help.push_str(&format!("  go to line <number>   Jump to a line{}\n", heard_as("go")));
    help.push_str(&format!("  line <number>         Jump to a line{}\n", heard_as("line")));
    help.push_str(&format!("  go to <bookmark>      Jump to a bookmark{}\n", heard_as("to")));
    help.push_str(&format!("  down                  Next line{}\n", heard_as("down")));
    help.push_str(&format!("  up                    Previous line{}\n", heard_as("up")));
    help.push_str(&format!(
        "  go {}        Same as 'go to line'\n",
        grammar.to_line_token()
    ));

    let bookmarks = dictionaries.bookmark_names();
    if !bookmarks.is_empty() {
        help.push_str(&format!("Bookmarks: {}\n", bookmarks.join(", ")));
    }

    help.push_str(
        "\
Anything else is typed at the cursor.

Commands:
  /print - Show the document
  /reset - Abandon a half-spoken command
  /help  - Show this help
  /quit  - Exit and write the document to stdout",
    );
    help
}
