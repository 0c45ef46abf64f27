//! Lexing
//!
//!     This module turns a range of host text into a flat, position-ordered sequence of
//!     classified tokens. There is no per-language grammar: every lexeme is mapped to one of
//!     four universal roles (see [RuleClass]) plus a priority tier, and that is all the parser
//!     ever looks at.
//!
//! The Rule Table
//!
//!     The table in [rules] is declarative data. Its entries are compiled once, on first use,
//!     into two read-only structures:
//!         1. A single combined pattern whose alternatives follow the table order, so longer
//!            operators (`==`, `<=`, `+=`) win over their one-character prefixes.
//!         2. An exact-text map from lexeme to `(priority, RuleClass)`.
//!
//!     Anything that only matches the identifier/number or quoted-literal alternatives is an
//!     atom with the [UNCLASSIFIED_MAX](rules::UNCLASSIFIED_MAX) priority.
//!
//! Scanning
//!
//!     [tokenize] walks the range through the host's `find_next_match` capability. Text that
//!     matches no alternative (whitespace, stray punctuation) is simply skipped, and running
//!     out of matches is the normal end of a scan, not an error.

pub mod rules;
pub mod scanner;
pub mod token;

pub use rules::{classify, matching_closer, LEXEME_PATTERN, ROOT_PRIORITY, UNCLASSIFIED_MAX};
pub use scanner::tokenize;
pub use token::{RuleClass, Token};
