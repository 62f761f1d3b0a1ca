//! SPARQL 1.1 terminal definitions.
//!
//! Each template is a regular expression in which `{NAME}` refers to another
//! rule. References are resolved when the table is built, so declaration
//! order doesn't matter here; listing order is only what `list_rules`
//! reports after the token rules.
//!
//! `PN_CHARS_BASE` stops at `#xFFFD`: the supplementary planes
//! (`[#x10000-#xEFFFF]` in the W3C grammar) are deliberately left out.

/// A named rule template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleDef {
    pub name: &'static str,
    pub template: &'static str,
}

const fn def(name: &'static str, template: &'static str) -> RuleDef {
    RuleDef { name, template }
}

/// Rules the lexer may emit a token for, highest tie-break priority first.
///
/// Length always wins first; this order only settles equal-length matches.
pub const TOKEN_PRIORITY: &[&str] = &[
    "DOUBLE",
    "DOUBLE_POSITIVE",
    "DOUBLE_NEGATIVE",
    "DECIMAL",
    "DECIMAL_POSITIVE",
    "DECIMAL_NEGATIVE",
    "INTEGER",
    "INTEGER_POSITIVE",
    "INTEGER_NEGATIVE",
    "STRING_LITERAL_LONG1",
    "STRING_LITERAL_LONG2",
    "STRING_LITERAL1",
    "STRING_LITERAL2",
    "IRIREF",
    "PNAME_LN",
    "PNAME_NS",
    "BLANK_NODE_LABEL",
    "VAR1",
    "VAR2",
    "LANGTAG",
    "NIL",
    "ANON",
    "BooleanLiteral",
    "IDENT",
    "WHITESPACE",
    "COMMENT",
    "PUNCT",
];

pub const DEFINITIONS: &[RuleDef] = &[
    // =========================================================================
    // Terminals
    // =========================================================================
    def("IRIREF", r#"<[^<>"{}|^`\\\x00-\x20]*>"#),
    def("PNAME_NS", "{PN_PREFIX}?:"),
    def("PNAME_LN", "{PNAME_NS}{PN_LOCAL}"),
    def(
        "BLANK_NODE_LABEL",
        r"_:(?:{PN_CHARS_U}|[0-9])(?:(?:{PN_CHARS}|\.)*{PN_CHARS})?",
    ),
    def("VAR1", r"\?{VARNAME}"),
    def("VAR2", r"\${VARNAME}"),
    def("LANGTAG", "@[a-zA-Z]+(?:-[a-zA-Z0-9]+)*"),
    def("INTEGER", "[0-9]+"),
    def("DECIMAL", r"[0-9]*\.[0-9]+"),
    def(
        "DOUBLE",
        r"[0-9]+\.[0-9]*{EXPONENT}|\.[0-9]+{EXPONENT}|[0-9]+{EXPONENT}",
    ),
    def("INTEGER_POSITIVE", r"\+{INTEGER}"),
    def("DECIMAL_POSITIVE", r"\+{DECIMAL}"),
    def("DOUBLE_POSITIVE", r"\+{DOUBLE}"),
    def("INTEGER_NEGATIVE", "-{INTEGER}"),
    def("DECIMAL_NEGATIVE", "-{DECIMAL}"),
    def("DOUBLE_NEGATIVE", "-{DOUBLE}"),
    def("EXPONENT", "[eE][+-]?[0-9]+"),
    def("STRING_LITERAL1", r"'(?:[^\x27\x5C\x0A\x0D]|{ECHAR})*'"),
    def("STRING_LITERAL2", r#""(?:[^\x22\x5C\x0A\x0D]|{ECHAR})*""#),
    def(
        "STRING_LITERAL_LONG1",
        r"'''(?:(?:'|'')?(?:[^'\\]|{ECHAR}))*'''",
    ),
    def(
        "STRING_LITERAL_LONG2",
        r#""""(?:(?:"|"")?(?:[^"\\]|{ECHAR}))*""""#,
    ),
    def("ECHAR", r#"\\[tbnrf\\"']"#),
    def("NIL", r"\({WS}*\)"),
    def("WS", r"[\x20\x09\x0D\x0A]"),
    def("ANON", r"\[{WS}*\]"),
    def(
        "PN_CHARS_BASE",
        "[A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\
         \u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\
         \u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}]",
    ),
    def("PN_CHARS_U", "{PN_CHARS_BASE}|_"),
    def(
        "VARNAME",
        "(?:{PN_CHARS_U}|[0-9])(?:{PN_CHARS_U}|[0-9]|\u{00B7}|[\u{0300}-\u{036F}]|[\u{203F}-\u{2040}])*",
    ),
    def(
        "PN_CHARS",
        "{PN_CHARS_U}|-|[0-9]|\u{00B7}|[\u{0300}-\u{036F}]|[\u{203F}-\u{2040}]",
    ),
    def("PN_PREFIX", r"{PN_CHARS_BASE}(?:(?:{PN_CHARS}|\.)*{PN_CHARS})?"),
    def(
        "PN_LOCAL",
        r"(?:{PN_CHARS_U}|:|[0-9]|{PLX})(?:(?:{PN_CHARS}|\.|:|{PLX})*(?:{PN_CHARS}|:|{PLX}))?",
    ),
    def("PLX", "{PERCENT}|{PN_LOCAL_ESC}"),
    def("PERCENT", "%{HEX}{HEX}"),
    def("HEX", "[0-9A-Fa-f]"),
    def("PN_LOCAL_ESC", r"\\[_~.\-!$&'()*+,;=/?#@%]"),
    // =========================================================================
    // Data-value helpers
    // =========================================================================
    def(
        "NumericLiteral",
        "{NumericLiteralUnsigned}|{NumericLiteralPositive}|{NumericLiteralNegative}",
    ),
    def("NumericLiteralUnsigned", "{DOUBLE}|{DECIMAL}|{INTEGER}"),
    def(
        "NumericLiteralPositive",
        "{DOUBLE_POSITIVE}|{DECIMAL_POSITIVE}|{INTEGER_POSITIVE}",
    ),
    def(
        "NumericLiteralNegative",
        "{DOUBLE_NEGATIVE}|{DECIMAL_NEGATIVE}|{INTEGER_NEGATIVE}",
    ),
    def("BooleanLiteral", "true|false"),
    def(
        "String",
        "{STRING_LITERAL_LONG1}|{STRING_LITERAL_LONG2}|{STRING_LITERAL1}|{STRING_LITERAL2}",
    ),
    def("PrefixedName", "{PNAME_LN}|{PNAME_NS}"),
    def("iri", "{IRIREF}|{PrefixedName}"),
    def("RDFLiteral", r"{String}(?:{LANGTAG}|\^\^{iri})?"),
    def("BlankNode", "{BLANK_NODE_LABEL}|{ANON}"),
    def(
        "DataBlockValue",
        "{iri}|{RDFLiteral}|{NumericLiteral}|{BooleanLiteral}|UNDEF",
    ),
    // =========================================================================
    // Lexer-level categories
    // =========================================================================
    def("WHITESPACE", "{WS}+"),
    def("COMMENT", r"#[^\r\n]*"),
    def("IDENT", "{PN_CHARS_U}{PN_CHARS}*"),
    def(
        "PUNCT",
        r"\^\^|\|\||&&|!=|<=|>=|[{}()\[\].,;=<>+\-*/!?|^]",
    ),
];
