//! Voice-driven line navigation for text editors
//!
//! Turns recognized speech such as "go to line twelve", "up" or "top" into
//! cursor movement, one word at a time.
//!
//! # Example
//!
//! ```
//! use silly_nav::{Dictionaries, Grammar, Interpreter, TextBuffer, Utterance, WordTray};
//! use silly_nav::EditingSurface;
//!
//! let document = (1..=40).map(|n| format!("line {n}")).collect::<Vec<_>>().join("\n");
//! let grammar = Grammar::new(Dictionaries::builtin());
//! let mut interpreter = Interpreter::new(grammar, TextBuffer::from_text(&document), WordTray::new());
//!
//! let mut cancelled = false;
//! interpreter.process(Utterance::new("go to line twelve", &mut || cancelled = true));
//!
//! assert!(cancelled);
//! assert_eq!(interpreter.editor().cursor_position().row, 11);
//! ```

pub mod config;
pub mod dictionary;
pub mod editor;
pub mod error;
pub mod fuzzy;
pub mod interpreter;
pub mod number;

pub use config::Config;
pub use dictionary::Dictionaries;
pub use editor::{go_to_line, CursorPosition, EditingSurface, FeedbackSurface, TextBuffer, WordTray};
pub use error::{ConfigError, DictionaryError};
pub use interpreter::{Action, Grammar, Interpreter, State, Step, Utterance};
