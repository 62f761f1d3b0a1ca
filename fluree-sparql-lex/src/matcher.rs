//! Start-anchored matching of a single rule.
//!
//! The regex engine uses leftmost-first alternation, so for a rule like
//! `DOUBLE` the first listed branch that can match wins, and repetition is
//! greedy within that branch. The result is the same match a backtracking
//! engine would report for the template as written.

use crate::error::Result;
use crate::rules::{RuleTable, TerminalRule};

/// Matches named rules against an input at a given offset.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'t> {
    table: &'t RuleTable,
}

impl Matcher<'static> {
    /// A matcher over the built-in table.
    pub fn global() -> Self {
        Self::new(RuleTable::global())
    }
}

impl<'t> Matcher<'t> {
    pub fn new(table: &'t RuleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t RuleTable {
        self.table
    }

    /// Length in bytes of `rule`'s match starting exactly at `offset`.
    ///
    /// Returns `Ok(None)` when the rule doesn't match there (or `offset` is
    /// not on a character boundary) and `Err(UnknownRule)` for an undefined
    /// rule name.
    pub fn match_at(&self, rule: &str, input: &str, offset: usize) -> Result<Option<usize>> {
        let rule = self.table.rule(rule)?;
        Ok(Self::match_rule(rule, input, offset))
    }

    pub(crate) fn match_rule(rule: &TerminalRule, input: &str, offset: usize) -> Option<usize> {
        input
            .get(offset..)
            .and_then(|rest| rule.match_prefix(rest))
    }
}
