//! Rule Table Definitions
//!
//! This module defines the declarative rule table used by the scanner and the parser.
//! Entries are tried in declaration order when scanning, so every multi-character operator
//! is listed before its single-character prefixes, and quoted/generic literals come before
//! the bare `<` and `>` comparisons.
//!
//! # Priority Tiers (loosest to tightest)
//!
//! 0. opener            `{` `[` `(`
//! 1. closer            `)` `]` `}`
//! 2. left              `if` `return`
//! 3. statement         `;` newline
//! 4. comma             `,`
//! 5. pair              `:` `=>`
//! 6. assign            `=` and the compound assignments
//! 7. or                `||` `or`
//! 8. and               `&&` `and`
//! 9. not               `!` `not`
//! 10. equality         `==` `!=` `~=`
//! 11. compare          `<=` `>=` `<` `>`
//! 12. additive         `+` `-`
//! 13. multiplicative   `*` `/` `%`
//!
//! Keyword forms share the tier of their symbolic synonym, and the compound assignments
//! share the tier of `=`, so they bind exactly alike.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::token::RuleClass;

/// Priority of anything that matched no rule (identifiers, numbers, literals).
pub const UNCLASSIFIED_MAX: i32 = 32;

/// Priority of the parser's sentinel root, below every real tier.
pub const ROOT_PRIORITY: i32 = -1;

/// Named priority tiers. Discriminants are the priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Opener = 0,
    Closer,
    Left,
    Statement,
    Comma,
    Pair,
    Assign,
    Or,
    And,
    Not,
    Equality,
    Compare,
    Additive,
    Multiplicative,
}

impl Tier {
    pub const fn priority(self) -> i32 {
        self as i32
    }
}

/// One registration in the rule table.
#[derive(Debug, Clone, Copy)]
enum Entry {
    /// Lexemes matched literally and classified as a group.
    Lexemes {
        lexemes: &'static [&'static str],
        class: RuleClass,
        tier: Tier,
    },
    /// Free-form atoms (literals, identifiers). Matched but never classified.
    Pattern(&'static str),
    /// Words picked up by the identifier pattern and classified by exact text.
    Keywords {
        words: &'static [&'static str],
        class: RuleClass,
        tier: Tier,
    },
}

/// The rule table, in match order.
const RULE_TABLE: &[Entry] = &[
    Entry::Lexemes {
        lexemes: &["{", "[", "("],
        class: RuleClass::Open,
        tier: Tier::Opener,
    },
    Entry::Lexemes {
        lexemes: &[")", "]", "}"],
        class: RuleClass::Close,
        tier: Tier::Closer,
    },
    Entry::Lexemes {
        lexemes: &[";", "\n"],
        class: RuleClass::Close,
        tier: Tier::Statement,
    },
    Entry::Lexemes {
        lexemes: &[","],
        class: RuleClass::Operator,
        tier: Tier::Comma,
    },
    Entry::Lexemes {
        lexemes: &[":", "=>"],
        class: RuleClass::Operator,
        tier: Tier::Pair,
    },
    Entry::Lexemes {
        lexemes: &["+=", "-=", "*=", "%=", "&=", "|=", "^="],
        class: RuleClass::Operator,
        tier: Tier::Assign,
    },
    Entry::Lexemes {
        lexemes: &["||"],
        class: RuleClass::Operator,
        tier: Tier::Or,
    },
    Entry::Lexemes {
        lexemes: &["&&"],
        class: RuleClass::Operator,
        tier: Tier::And,
    },
    Entry::Lexemes {
        lexemes: &["==", "!=", "~="],
        class: RuleClass::Operator,
        tier: Tier::Equality,
    },
    Entry::Lexemes {
        lexemes: &["!"],
        class: RuleClass::Open,
        tier: Tier::Not,
    },
    Entry::Lexemes {
        lexemes: &["="],
        class: RuleClass::Operator,
        tier: Tier::Assign,
    },
    Entry::Lexemes {
        lexemes: &["<=", ">="],
        class: RuleClass::Operator,
        tier: Tier::Compare,
    },
    Entry::Lexemes {
        lexemes: &["+", "-"],
        class: RuleClass::Operator,
        tier: Tier::Additive,
    },
    Entry::Lexemes {
        lexemes: &["*", "/", "%"],
        class: RuleClass::Operator,
        tier: Tier::Multiplicative,
    },
    // Quoted literals and generic brackets (`<T>`) before the bare comparisons
    Entry::Pattern(r#""[^"]*?""#),
    Entry::Pattern(r"'[^']*?'"),
    Entry::Pattern(r"<[0-9a-zA-Z_.#@^]*?>"),
    Entry::Lexemes {
        lexemes: &["<", ">"],
        class: RuleClass::Operator,
        tier: Tier::Compare,
    },
    // Identifier and number runs
    Entry::Pattern(r"[0-9a-zA-Z_.#@^]+"),
    Entry::Keywords {
        words: &["if", "return"],
        class: RuleClass::Open,
        tier: Tier::Left,
    },
    Entry::Keywords {
        words: &["or"],
        class: RuleClass::Operator,
        tier: Tier::Or,
    },
    Entry::Keywords {
        words: &["and"],
        class: RuleClass::Operator,
        tier: Tier::And,
    },
    Entry::Keywords {
        words: &["not"],
        class: RuleClass::Open,
        tier: Tier::Not,
    },
];

/// Openers that register a closing obligation, with the closer they wait for.
const BRACKET_PAIRS: &[(&str, &str)] = &[("(", ")"), ("[", "]"), ("{", "}")];

/// Lazy-compiled combined pattern: one alternative per lexeme or pattern, in table order.
pub static LEXEME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = RULE_TABLE
        .iter()
        .flat_map(|entry| match entry {
            Entry::Lexemes { lexemes, .. } => {
                lexemes.iter().map(|lexeme| regex::escape(lexeme)).collect()
            }
            Entry::Pattern(pattern) => vec![(*pattern).to_string()],
            Entry::Keywords { .. } => Vec::new(),
        })
        .collect();
    Regex::new(&alternatives.join("|")).unwrap()
});

/// Exact-text lookup compiled from the table. Later registrations win.
static CLASSIFICATION: Lazy<HashMap<&'static str, (i32, RuleClass)>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for entry in RULE_TABLE {
        let (texts, class, tier) = match entry {
            Entry::Lexemes {
                lexemes,
                class,
                tier,
            } => (*lexemes, *class, *tier),
            Entry::Keywords { words, class, tier } => (*words, *class, *tier),
            Entry::Pattern(_) => continue,
        };
        for text in texts {
            map.insert(*text, (tier.priority(), class));
        }
    }
    map
});

/// Look up a lexeme's `(priority, class)`, falling back to an unclassified atom.
pub fn classify(text: &str) -> (i32, RuleClass) {
    CLASSIFICATION
        .get(text)
        .copied()
        .unwrap_or((UNCLASSIFIED_MAX, RuleClass::Atom))
}

/// The closer an opener waits for, if it is a bracket.
pub fn matching_closer(opener: &str) -> Option<&'static str> {
    BRACKET_PAIRS
        .iter()
        .find(|(open, _)| *open == opener)
        .map(|(_, close)| *close)
}
