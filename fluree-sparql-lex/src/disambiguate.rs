//! Choosing one token rule among the candidates at an offset.
//!
//! Selection policy, in order:
//! 1. Longest match wins.
//! 2. Equal lengths fall back to the priority list in
//!    [`grammar::TOKEN_PRIORITY`](crate::rules::grammar::TOKEN_PRIORITY):
//!    numerics from DOUBLE down to INTEGER, PNAME_LN before PNAME_NS,
//!    BLANK_NODE_LABEL before bare identifiers.
//! 3. `BooleanLiteral` is dropped from the candidates when the next
//!    character is in `PN_CHARS`, so `true` never splits off the front of a
//!    longer word.

use crate::matcher::Matcher;
use crate::rules::{RuleTable, TerminalRule};

const BOOLEAN_LITERAL: &str = "BooleanLiteral";
const PN_CHARS: &str = "PN_CHARS";

/// A rule that matches at the current offset.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<'t> {
    pub rule: &'t TerminalRule,
    /// Match length in bytes
    pub len: usize,
}

impl Candidate<'_> {
    pub fn name(&self) -> &'static str {
        self.rule.name()
    }

    fn rank(&self) -> usize {
        self.rule.priority().unwrap_or(usize::MAX)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Disambiguator<'t> {
    table: &'t RuleTable,
    pn_chars: Option<&'t TerminalRule>,
}

impl<'t> Disambiguator<'t> {
    pub fn new(table: &'t RuleTable) -> Self {
        Self {
            table,
            pn_chars: table.get(PN_CHARS),
        }
    }

    pub fn table(&self) -> &'t RuleTable {
        self.table
    }

    /// Every token rule with a non-empty match at `offset`, in priority
    /// order, after the boolean lookahead exclusion.
    pub fn candidates(&self, input: &str, offset: usize) -> Vec<Candidate<'t>> {
        let Some(rest) = input.get(offset..) else {
            return Vec::new();
        };
        if rest.is_empty() {
            return Vec::new();
        }

        let mut out = Vec::new();
        for rank in self.table.token_set().matches(rest).iter() {
            let rule = self.table.token_rule(rank);
            let Some(len) = Matcher::match_rule(rule, input, offset) else {
                continue;
            };
            if len == 0 {
                continue;
            }
            if rule.name() == BOOLEAN_LITERAL && self.continues_name(input, offset + len) {
                continue;
            }
            out.push(Candidate { rule, len });
        }
        out
    }

    /// The single winning candidate at `offset`, if any rule matches.
    pub fn select(&self, input: &str, offset: usize) -> Option<Candidate<'t>> {
        self.select_where(input, offset, |_| true)
    }

    /// Like [`select`](Self::select), considering only candidates accepted
    /// by `keep`.
    pub fn select_where(
        &self,
        input: &str,
        offset: usize,
        keep: impl Fn(&Candidate<'t>) -> bool,
    ) -> Option<Candidate<'t>> {
        // `max_by` keeps the last of equal elements, so compare rank reversed
        self.candidates(input, offset)
            .into_iter()
            .filter(|c| keep(c))
            .max_by(|a, b| a.len.cmp(&b.len).then(b.rank().cmp(&a.rank())))
    }

    /// Whether the character at `offset` belongs to `PN_CHARS`.
    fn continues_name(&self, input: &str, offset: usize) -> bool {
        match self.pn_chars {
            Some(rule) => Matcher::match_rule(rule, input, offset).is_some(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn winner(input: &str) -> (&'static str, usize) {
        let d = Disambiguator::new(RuleTable::global());
        let c = d.select(input, 0).expect("some rule should match");
        (c.name(), c.len)
    }

    fn names(input: &str) -> Vec<&'static str> {
        Disambiguator::new(RuleTable::global())
            .candidates(input, 0)
            .iter()
            .map(|c| c.name())
            .collect()
    }

    #[test]
    fn test_longest_numeric_wins() {
        assert_eq!(winner("1.0e10"), ("DOUBLE", 6));
        assert_eq!(winner("1.5 "), ("DECIMAL", 3));
        assert_eq!(winner("15."), ("INTEGER", 2));
        assert_eq!(winner("-2.5e3"), ("DOUBLE_NEGATIVE", 6));
        assert_eq!(winner("+7"), ("INTEGER_POSITIVE", 2));
    }

    #[test]
    fn test_prefixed_name_wins_over_namespace() {
        assert_eq!(winner("ex:name"), ("PNAME_LN", 7));
        assert_eq!(winner("ex: "), ("PNAME_NS", 3));
        let all = names("ex:name");
        assert!(all.contains(&"PNAME_NS"));
        assert!(all.contains(&"IDENT"));
    }

    #[test]
    fn test_boolean_lookahead() {
        assert_eq!(winner("true "), ("BooleanLiteral", 4));
        assert_eq!(winner("true)"), ("BooleanLiteral", 4));
        assert_eq!(winner("trueX"), ("IDENT", 5));
        assert!(!names("false-x").contains(&"BooleanLiteral"));
        assert_eq!(winner("false-x"), ("IDENT", 7));
        assert!(!names("true\u{00B7}x").contains(&"BooleanLiteral"));
        assert_eq!(winner("true\u{00B7}x"), ("IDENT", 7));
    }

    #[test]
    fn test_equal_length_uses_priority() {
        // BooleanLiteral and IDENT both match 4 bytes
        let all = names("true");
        assert!(all.contains(&"BooleanLiteral"));
        assert!(all.contains(&"IDENT"));
        assert_eq!(winner("true"), ("BooleanLiteral", 4));
    }

    #[test]
    fn test_blank_node_and_variables() {
        assert_eq!(winner("_:b1 "), ("BLANK_NODE_LABEL", 4));
        assert_eq!(winner("?x1"), ("VAR1", 3));
        assert_eq!(winner("$v"), ("VAR2", 2));
        assert_eq!(winner("? "), ("PUNCT", 1));
    }

    #[test]
    fn test_punctuation_prefers_two_char_operators() {
        assert_eq!(winner("<= 3"), ("PUNCT", 2));
        assert_eq!(winner("^^xsd:int"), ("PUNCT", 2));
        assert_eq!(winner("<http://x/>"), ("IRIREF", 11));
        assert_eq!(winner("( )"), ("NIL", 3));
        assert_eq!(winner("(?x"), ("PUNCT", 1));
    }

    #[test]
    fn test_select_where_filters_before_ranking() {
        let d = Disambiguator::new(RuleTable::global());
        let c = d.select_where("# note", 0, |c| c.name() != "COMMENT");
        assert!(c.is_none());
        let c = d.select_where("true", 0, |c| c.name() != "BooleanLiteral").unwrap();
        assert_eq!((c.name(), c.len), ("IDENT", 4));
    }

    #[test]
    fn test_no_candidates() {
        let d = Disambiguator::new(RuleTable::global());
        assert!(d.select("\"open", 0).is_none());
        assert!(d.select("~", 0).is_none());
        assert!(d.select("", 0).is_none());
    }
}
