//! Word-by-word navigation command interpreter
//!
//! Consumes one token at a time with no lookahead. Each state lists the words
//! it accepts in priority order; the first match wins. A word no state accepts
//! is dropped and the state stays where it was, so a command can be finished
//! by a later utterance ("go" ... pause ... "to line five").
//!
//! Grammar:
//! ```text
//! Start               go        -> AwaitingGoTarget
//!                     line      -> AwaitingLineNumber
//!                     down      -> one line down, Start
//!                     up        -> one line up, Start
//!                     <bookmark>-> jump, Start
//! AwaitingGoTarget    to        -> AwaitingGoToLine
//!                     lunchtime -> AwaitingLineNumber   ("to line" heard as one word)
//! AwaitingGoToLine    line      -> AwaitingLineNumber
//!                     <bookmark>-> jump, Start
//! AwaitingLineNumber  <number>  -> jump, Start
//! ```

use std::fmt;

use crate::dictionary::Dictionaries;
use crate::editor::{go_to_line, EditingSurface, FeedbackSurface};
use crate::fuzzy::tokenize;
use crate::number::{is_digits, parse_digits};

/// Single token some recognizers emit for the phrase "to line".
pub const DEFAULT_TO_LINE_TOKEN: &str = "lunchtime";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Idle; also where every completed command returns
    #[default]
    Start,
    /// Heard "go"
    AwaitingGoTarget,
    /// Heard "go to"
    AwaitingGoToLine,
    /// Heard "line" or "go to line"
    AwaitingLineNumber,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Start => write!(f, "Start"),
            State::AwaitingGoTarget => write!(f, "go …"),
            State::AwaitingGoToLine => write!(f, "go to …"),
            State::AwaitingLineNumber => write!(f, "line …"),
        }
    }
}

/// Cursor movement requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Jump to a 1-based line
    GoToLine(usize),
    LineDown,
    LineUp,
}

/// Outcome of one accepted token.
///
/// Every `Step` means the token was part of a command, so the caller's
/// default handling of the utterance must be cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub next: State,
    /// Words to show on the feedback surface
    pub words: Vec<&'static str>,
    pub action: Option<Action>,
}

impl Step {
    fn to(next: State, words: &[&'static str]) -> Self {
        Self {
            next,
            words: words.to_vec(),
            action: None,
        }
    }

    fn act(next: State, action: Action) -> Self {
        Self {
            next,
            words: Vec::new(),
            action: Some(action),
        }
    }
}

const START_WORDS: &[(&str, State)] = &[
    ("go", State::AwaitingGoTarget),
    ("line", State::AwaitingLineNumber),
];
const GO_WORDS: &[(&str, State)] = &[("to", State::AwaitingGoToLine)];
const GO_TO_WORDS: &[(&str, State)] = &[("line", State::AwaitingLineNumber)];

/// The transition table plus the vocabulary it consults.
#[derive(Debug, Clone)]
pub struct Grammar {
    dictionaries: Dictionaries,
    to_line_token: String,
    accept_spoken_zero: bool,
}

impl Grammar {
    pub fn new(dictionaries: Dictionaries) -> Self {
        Self {
            dictionaries,
            to_line_token: DEFAULT_TO_LINE_TOKEN.to_string(),
            accept_spoken_zero: false,
        }
    }

    /// Override the single-word stand-in for "to line".
    pub fn with_to_line_token(mut self, token: &str) -> Self {
        self.to_line_token = token.to_lowercase();
        self
    }

    /// Treat a number word mapped to 0 as a line number instead of a miss.
    pub fn with_spoken_zero(mut self, accept: bool) -> Self {
        self.accept_spoken_zero = accept;
        self
    }

    pub fn dictionaries(&self) -> &Dictionaries {
        &self.dictionaries
    }

    pub fn to_line_token(&self) -> &str {
        &self.to_line_token
    }

    /// Decide what `word` does in `state`. `None` leaves the state unchanged.
    pub fn transition(&self, state: State, word: &str) -> Option<Step> {
        match state {
            State::Start => self
                .advance(START_WORDS, word)
                .or_else(|| self.start_extra(word)),
            State::AwaitingGoTarget => self.advance(GO_WORDS, word).or_else(|| {
                (word == self.to_line_token)
                    .then(|| Step::to(State::AwaitingLineNumber, &["to", "line"]))
            }),
            State::AwaitingGoToLine => self
                .advance(GO_TO_WORDS, word)
                .or_else(|| self.bookmark(word)),
            State::AwaitingLineNumber => self
                .line_number(word)
                .map(|line| Step::act(State::Start, Action::GoToLine(line))),
        }
    }

    fn advance(&self, candidates: &[(&'static str, State)], word: &str) -> Option<Step> {
        candidates
            .iter()
            .find(|(expected, _)| self.dictionaries.sounds_like(expected, word))
            .map(|&(expected, next)| Step::to(next, &[expected]))
    }

    fn start_extra(&self, word: &str) -> Option<Step> {
        if self.dictionaries.sounds_like("down", word) {
            return Some(Step::act(State::Start, Action::LineDown));
        }
        if self.dictionaries.sounds_like("up", word) {
            return Some(Step::act(State::Start, Action::LineUp));
        }
        self.bookmark(word)
    }

    fn bookmark(&self, word: &str) -> Option<Step> {
        self.dictionaries
            .bookmark(word)
            .map(|line| Step::act(State::Start, Action::GoToLine(line)))
    }

    fn line_number(&self, word: &str) -> Option<usize> {
        if is_digits(word) {
            return Some(parse_digits(word));
        }
        // A number word worth 0 counts as a miss unless explicitly enabled
        self.dictionaries
            .number(word)
            .filter(|&n| n != 0 || self.accept_spoken_zero)
    }
}

/// One recognized speech event.
pub struct Utterance<'a> {
    pub text: &'a str,
    /// Tells the caller to skip its default handling (e.g. dictation).
    /// May be invoked several times per utterance.
    pub cancel: &'a mut dyn FnMut(),
}

impl<'a> Utterance<'a> {
    pub fn new(text: &'a str, cancel: &'a mut dyn FnMut()) -> Self {
        Self { text, cancel }
    }
}

/// Holds the current state across utterances and applies each step.
///
/// Not reentrant: calls to `process` must be serialized by the caller.
pub struct Interpreter<E, F> {
    grammar: Grammar,
    state: State,
    editor: E,
    feedback: F,
}

impl<E: EditingSurface, F: FeedbackSurface> Interpreter<E, F> {
    pub fn new(grammar: Grammar, editor: E, feedback: F) -> Self {
        Self {
            grammar,
            state: State::Start,
            editor,
            feedback,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn into_parts(self) -> (E, F) {
        (self.editor, self.feedback)
    }

    /// Abandon any command in progress.
    pub fn reset(&mut self) {
        self.state = State::Start;
        self.feedback.clear_words();
    }

    /// Feed every word of the utterance through the state machine.
    ///
    /// When the machine ends back at `Start` the feedback words are cleared;
    /// otherwise they stay up while the command waits for more speech.
    pub fn process(&mut self, utterance: Utterance<'_>) {
        let Utterance { text, cancel } = utterance;

        for word in tokenize(text) {
            tracing::debug!(word = %word, state = ?self.state, "Token");
            if let Some(step) = self.grammar.transition(self.state, &word) {
                cancel();
                self.apply(step);
            }
        }

        if self.state == State::Start {
            self.feedback.clear_words();
        }
    }

    fn apply(&mut self, step: Step) {
        if !step.words.is_empty() {
            self.feedback.add_words(&step.words);
        }

        if let Some(action) = step.action {
            let row = self.editor.cursor_position().row;
            let requested = match action {
                Action::GoToLine(line) => line,
                // Lines are 1-based and rows 0-based: row + 1 is the current line
                Action::LineDown => row.saturating_add(2),
                Action::LineUp => row,
            };
            let line = go_to_line(&mut self.editor, requested);
            tracing::info!(?action, requested, line, "Moved cursor");
        }

        if step.next != self.state {
            tracing::debug!(from = ?self.state, to = ?step.next, "Transition");
        }
        self.state = step.next;
    }
}
