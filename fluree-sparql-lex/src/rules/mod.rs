//! The terminal rule table.
//!
//! Rules are defined as regex templates that reference each other by name
//! (see [`grammar`]). `RuleTable::build` resolves the references into a DAG,
//! rejecting cycles and dangling names, and compiles every rule twice: once
//! anchored at both ends for [`RuleTable::check`], once anchored at the start
//! for the matcher. Token-level rules also go into a single `RegexSet` so the
//! disambiguator can find every candidate at an offset in one pass.
//!
//! The built-in table is constructed on first use and shared read-only by
//! every lexer in the process.

pub mod grammar;

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};
use winnow::combinator::{alt, delimited, repeat};
use winnow::token::{any, one_of, take_till, take_while};
use winnow::{ModalResult, Parser};

use crate::error::{Error, Result};
pub use grammar::RuleDef;

/// Compiled-program budget per regex. The expanded data-value helpers
/// repeat the Unicode name classes many times over.
const REGEX_SIZE_LIMIT: usize = 64 * (1 << 20);

/// A named lexical category with its compiled pattern.
#[derive(Debug)]
pub struct TerminalRule {
    name: &'static str,
    template: &'static str,
    pattern: String,
    priority: Option<usize>,
    anchored: Regex,
    prefix: Regex,
}

impl TerminalRule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The template as written, with `{NAME}` references.
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// The fully expanded regular expression.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Tie-break rank (0 = highest) for rules the lexer emits tokens for.
    pub fn priority(&self) -> Option<usize> {
        self.priority
    }

    /// Whether the whole of `text` matches this rule.
    pub fn is_match(&self, text: &str) -> bool {
        self.anchored.is_match(text)
    }

    /// Length in bytes of the match anchored at the start of `text`.
    pub fn match_prefix(&self, text: &str) -> Option<usize> {
        self.prefix.find(text).map(|m| m.end())
    }
}

/// Immutable, compiled set of terminal rules.
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<TerminalRule>,
    by_name: HashMap<&'static str, usize>,
    /// Indices into `rules`, in priority order
    token_rules: Vec<usize>,
    /// Start-anchored patterns of `token_rules`, same order
    token_set: RegexSet,
}

impl RuleTable {
    /// The built-in SPARQL terminal table.
    pub fn global() -> &'static RuleTable {
        static TABLE: OnceLock<RuleTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            RuleTable::build(grammar::DEFINITIONS, grammar::TOKEN_PRIORITY)
                .expect("built-in SPARQL terminal grammar must compile")
        })
    }

    /// Resolve and compile a set of rule definitions.
    ///
    /// `priority` names the token-level rules, highest tie-break priority
    /// first.
    pub fn build(definitions: &[RuleDef], priority: &[&str]) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(definitions.len());
        for (idx, def) in definitions.iter().enumerate() {
            if by_name.insert(def.name, idx).is_some() {
                return Err(Error::malformed(format!(
                    "rule `{}` is defined more than once",
                    def.name
                )));
            }
        }

        let mut resolver = Resolver {
            definitions,
            by_name: &by_name,
            marks: vec![Mark::Unvisited; definitions.len()],
            expanded: vec![None; definitions.len()],
            path: Vec::new(),
        };
        for idx in 0..definitions.len() {
            resolver.resolve(idx)?;
        }
        let expanded = resolver.expanded;

        let mut ranks: Vec<Option<usize>> = vec![None; definitions.len()];
        let mut token_rules = Vec::with_capacity(priority.len());
        for (rank, name) in priority.iter().enumerate() {
            let idx = *by_name.get(*name).ok_or_else(|| {
                Error::malformed(format!("priority list names undefined rule `{name}`"))
            })?;
            if ranks[idx].is_some() {
                return Err(Error::malformed(format!(
                    "rule `{name}` appears twice in the priority list"
                )));
            }
            ranks[idx] = Some(rank);
            token_rules.push(idx);
        }

        let mut rules = Vec::with_capacity(definitions.len());
        for ((def, pattern), priority) in definitions.iter().zip(expanded).zip(ranks) {
            // Every slot is filled once `resolve` has returned for all indices
            let pattern = pattern.unwrap_or_default();
            let anchored = compile(def.name, &format!("^(?:{pattern})$"))?;
            let prefix = compile(def.name, &format!("^(?:{pattern})"))?;
            rules.push(TerminalRule {
                name: def.name,
                template: def.template,
                pattern,
                priority,
                anchored,
                prefix,
            });
        }

        let token_set = RegexSetBuilder::new(
            token_rules
                .iter()
                .map(|&idx| format!("^(?:{})", rules[idx].pattern)),
        )
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|source| Error::InvalidPattern {
            rule: "<token set>".to_string(),
            source,
        })?;

        tracing::debug!(
            rules = rules.len(),
            token_rules = token_rules.len(),
            "terminal rule table compiled"
        );

        Ok(Self {
            rules,
            by_name,
            token_rules,
            token_set,
        })
    }

    pub fn get(&self, name: &str) -> Option<&TerminalRule> {
        self.by_name.get(name).map(|&idx| &self.rules[idx])
    }

    /// Look up a rule, failing with `UnknownRule` if it isn't defined.
    pub fn rule(&self, name: &str) -> Result<&TerminalRule> {
        self.get(name)
            .ok_or_else(|| Error::UnknownRule(name.to_string()))
    }

    /// Whether the whole of `text` matches the named rule.
    pub fn check(&self, text: &str, rule: &str) -> Result<bool> {
        Ok(self.rule(rule)?.is_match(text))
    }

    /// Rule names: token rules in priority order, then the rest as declared.
    pub fn list_rules(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.token_rules().map(|r| r.name).collect();
        names.extend(
            self.rules
                .iter()
                .filter(|r| r.priority.is_none())
                .map(|r| r.name),
        );
        names
    }

    /// Token-level rules, in priority order.
    pub fn token_rules(&self) -> impl Iterator<Item = &TerminalRule> + '_ {
        self.token_rules.iter().map(|&idx| &self.rules[idx])
    }

    /// Token rule at a given priority rank.
    pub(crate) fn token_rule(&self, rank: usize) -> &TerminalRule {
        &self.rules[self.token_rules[rank]]
    }

    pub(crate) fn token_set(&self) -> &RegexSet {
        &self.token_set
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn compile(rule: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|source| Error::InvalidPattern {
            rule: rule.to_string(),
            source,
        })
}

// =============================================================================
// Reference resolution
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

struct Resolver<'d> {
    definitions: &'d [RuleDef],
    by_name: &'d HashMap<&'static str, usize>,
    marks: Vec<Mark>,
    expanded: Vec<Option<String>>,
    /// Rules currently being expanded, outermost first
    path: Vec<&'static str>,
}

impl Resolver<'_> {
    fn resolve(&mut self, idx: usize) -> Result<()> {
        let def = self.definitions[idx];
        match self.marks[idx] {
            Mark::Done => return Ok(()),
            Mark::InProgress => {
                let from = self
                    .path
                    .iter()
                    .position(|name| *name == def.name)
                    .unwrap_or(0);
                let mut cycle: Vec<&str> = self.path[from..].to_vec();
                cycle.push(def.name);
                return Err(Error::malformed(format!(
                    "reference cycle: {}",
                    cycle.join(" -> ")
                )));
            }
            Mark::Unvisited => {}
        }

        self.marks[idx] = Mark::InProgress;
        self.path.push(def.name);

        let mut pattern = String::with_capacity(def.template.len());
        for segment in segments(def.template)? {
            match segment {
                Segment::Literal(text) => pattern.push_str(text),
                Segment::Ref(name) => {
                    let target = *self.by_name.get(name).ok_or_else(|| {
                        Error::malformed(format!(
                            "rule `{}` references undefined rule `{name}`",
                            def.name
                        ))
                    })?;
                    self.resolve(target)?;
                    pattern.push_str("(?:");
                    pattern.push_str(self.expanded[target].as_deref().unwrap_or_default());
                    pattern.push(')');
                }
            }
        }

        self.path.pop();
        self.marks[idx] = Mark::Done;
        self.expanded[idx] = Some(pattern);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Ref(&'a str),
}

/// Split a template into literal regex text and `{NAME}` references.
///
/// Braces that don't enclose an identifier (`{}` inside a character class,
/// say) stay literal.
fn segments(template: &str) -> Result<Vec<Segment<'_>>> {
    repeat(0.., segment)
        .parse(template)
        .map_err(|e| Error::malformed(format!("unreadable template `{template}`: {e}")))
}

fn segment<'a>(input: &mut &'a str) -> ModalResult<Segment<'a>> {
    alt((
        reference.map(Segment::Ref),
        (any, take_till(0.., '{')).take().map(Segment::Literal),
    ))
    .parse_next(input)
}

fn reference<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    delimited(
        '{',
        (
            one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
            take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
        )
            .take(),
        '}',
    )
    .parse_next(input)
}
