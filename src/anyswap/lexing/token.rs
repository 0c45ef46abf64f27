//! Token definitions
//!
//! A token is a classified lexeme: its literal text, the priority tier it binds with, the
//! syntactic role it plays and the byte span it came from.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

use super::rules::classify;

/// Universal syntactic role of a lexeme.
///
/// Open and Operator leave a continuation open (something is still expected to their
/// right); Atom and Close are complete on their own. The builder only ever asks that
/// question, see [RuleClass::is_continuation].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleClass {
    /// Identifiers, numbers, string literals and anything else that matched no rule
    Atom,
    /// Brackets and prefix keywords/operators (`(`, `if`, `!`)
    Open,
    /// Closing brackets and statement terminators (`)`, `;`, newline)
    Close,
    /// Binary separators and operators (`,`, `=`, `+`, `and`)
    Operator,
}

impl RuleClass {
    pub fn is_continuation(self) -> bool {
        matches!(self, RuleClass::Open | RuleClass::Operator)
    }
}

impl fmt::Display for RuleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleClass::Atom => "atom",
            RuleClass::Open => "open",
            RuleClass::Close => "close",
            RuleClass::Operator => "operator",
        };
        f.write_str(name)
    }
}

/// A classified lexeme with its half-open byte span in the host text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub priority: i32,
    pub class: RuleClass,
    pub span: Range<usize>,
}

impl Token {
    /// Classify `text` against the rule table and attach its span.
    pub fn new(text: impl Into<String>, span: Range<usize>) -> Self {
        let text = text.into();
        let (priority, class) = classify(&text);
        Self {
            text,
            priority,
            class,
            span,
        }
    }

    /// Inclusive containment: a cursor sitting right after the last character still counts.
    pub fn contains(&self, pos: usize) -> bool {
        self.span.start <= pos && pos <= self.span.end
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
