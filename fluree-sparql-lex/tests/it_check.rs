//! Whole-string membership checks against the built-in terminal table.

use fluree_sparql_lex::{check, list_rules, Error, RuleDef, RuleTable};

fn yes(text: &str, rule: &str) {
    assert!(
        check(text, rule).unwrap(),
        "expected {text:?} to match {rule}"
    );
}

fn no(text: &str, rule: &str) {
    assert!(
        !check(text, rule).unwrap(),
        "expected {text:?} not to match {rule}"
    );
}

#[test]
fn iriref() {
    no("", "IRIREF");
    yes("<>", "IRIREF");
    yes("<http://example.org/a#b>", "IRIREF");
    yes("<relative/path?q=1>", "IRIREF");
    no("<a<b>", "IRIREF");
    no("<a b>", "IRIREF");
    no("<a\"b>", "IRIREF");
    no("<a{b}>", "IRIREF");
    no("<http://x", "IRIREF");
}

#[test]
fn unknown_rule_is_an_error() {
    let err = check("42", "UnknownRuleName").unwrap_err();
    assert!(matches!(err, Error::UnknownRule(ref name) if name == "UnknownRuleName"));
    // Names are case-sensitive
    assert!(check("42", "integer").is_err());
}

#[test]
fn check_is_anchored_at_both_ends() {
    yes("42", "INTEGER");
    no("42 ", "INTEGER");
    no(" 42", "INTEGER");
    no("42a", "INTEGER");
}

#[test]
fn prefixed_names() {
    yes("ex:", "PNAME_NS");
    yes(":", "PNAME_NS");
    yes("ex:name", "PNAME_LN");
    yes("ex:a.b", "PNAME_LN");
    no("ex:a.", "PNAME_LN");
    yes("ex:1st", "PNAME_LN");
    yes("ex:a%20b", "PNAME_LN");
    no("ex:a%2", "PNAME_LN");
    yes(r"ex:a\~b", "PNAME_LN");
    yes("ex:a:b", "PNAME_LN");
    no("1ex:a", "PNAME_LN");
    no(".ex:", "PNAME_NS");
    yes("dc.terms:", "PNAME_NS");
    no("dc.:", "PNAME_NS");
}

#[test]
fn blank_nodes_and_variables() {
    yes("_:b0", "BLANK_NODE_LABEL");
    yes("_:0", "BLANK_NODE_LABEL");
    yes("_:a.b", "BLANK_NODE_LABEL");
    no("_:a.", "BLANK_NODE_LABEL");
    no("_:", "BLANK_NODE_LABEL");
    yes("?x", "VAR1");
    yes("?1", "VAR1");
    yes("$long_name", "VAR2");
    no("?", "VAR1");
    no("?a-b", "VAR1");
    yes("[ ]", "ANON");
    yes("[]", "ANON");
    yes("(\n)", "NIL");
    yes("_:x", "BlankNode");
    yes("[]", "BlankNode");
}

#[test]
fn language_tags() {
    yes("@en", "LANGTAG");
    yes("@en-GB", "LANGTAG");
    yes("@zh-Hant-TW", "LANGTAG");
    no("@", "LANGTAG");
    no("@1en", "LANGTAG");
    no("@en-", "LANGTAG");
}

#[test]
fn numbers() {
    yes("0", "INTEGER");
    yes("1.5", "DECIMAL");
    yes(".5", "DECIMAL");
    no("5.", "DECIMAL");
    yes("5.e3", "DOUBLE");
    yes("1.0e10", "DOUBLE");
    yes(".1E-2", "DOUBLE");
    yes("3e+7", "DOUBLE");
    no("1.5", "DOUBLE");
    no("e10", "DOUBLE");
    yes("+1", "INTEGER_POSITIVE");
    yes("-1.5", "DECIMAL_NEGATIVE");
    yes("+2E2", "DOUBLE_POSITIVE");
    no("+-1", "INTEGER_NEGATIVE");
    yes("e-12", "EXPONENT");

    yes("-3.5e2", "NumericLiteral");
    yes("42", "NumericLiteralUnsigned");
    yes("+0.1", "NumericLiteralPositive");
    no("1", "NumericLiteralNegative");
}

#[test]
fn strings() {
    yes("'it'", "STRING_LITERAL1");
    yes(r#""say \"hi\"""#, "STRING_LITERAL2");
    no("\"line\nbreak\"", "STRING_LITERAL2");
    no(r#""bad \q""#, "STRING_LITERAL2");
    no("'unterminated", "STRING_LITERAL1");
    yes("'''a\n'b''c'''", "STRING_LITERAL_LONG1");
    yes(r#""""x""y""""#, "STRING_LITERAL_LONG2");
    yes(r#""""x""""#, "STRING_LITERAL_LONG2");
    // Only two closing quotes
    no(r#""""x"""#, "STRING_LITERAL_LONG2");
    yes(r"\t", "ECHAR");
    no(r"\x", "ECHAR");

    yes("'x'", "String");
    yes("\"\"\"x\"\"\"", "String");
    yes("\"chat\"@fr", "RDFLiteral");
    yes("\"1\"^^xsd:integer", "RDFLiteral");
    yes("\"1\"^^<http://www.w3.org/2001/XMLSchema#integer>", "RDFLiteral");
    no("\"1\"^^", "RDFLiteral");
}

#[test]
fn character_classes() {
    yes("A", "PN_CHARS_BASE");
    yes("é", "PN_CHARS_BASE");
    yes("中", "PN_CHARS_BASE");
    no("_", "PN_CHARS_BASE");
    // Supplementary-plane characters are not in the table
    no("𐀀", "PN_CHARS_BASE");
    yes("_", "PN_CHARS_U");
    yes("-", "PN_CHARS");
    yes("\u{00B7}", "PN_CHARS");
    no(".", "PN_CHARS");
    yes(" ", "WS");
    no("\u{00A0}", "WS");
    yes("%aF", "PERCENT");
    yes("F", "HEX");
    no("g", "HEX");
    yes(r"\%", "PN_LOCAL_ESC");
    yes(r"\&", "PLX");
}

#[test]
fn composites() {
    yes("true", "BooleanLiteral");
    yes("false", "BooleanLiteral");
    no("TRUE", "BooleanLiteral");
    yes("ex:p", "PrefixedName");
    yes("ex:", "PrefixedName");
    yes("<x>", "iri");
    yes("ex:x", "iri");
    yes("UNDEF", "DataBlockValue");
    yes("ex:x", "DataBlockValue");
    yes("\"v\"@en", "DataBlockValue");
    yes("-4", "DataBlockValue");
    yes("false", "DataBlockValue");
    no("?x", "DataBlockValue");
}

#[test]
fn every_listed_rule_can_be_checked() {
    let names = list_rules();
    assert!(names.len() > 40);
    assert_eq!(names[0], "DOUBLE");
    for name in &names {
        assert!(check("", name).is_ok(), "{name} should be a known rule");
    }
    assert!(names.contains(&"PN_LOCAL_ESC"));
    assert!(names.contains(&"DataBlockValue"));
}

#[test]
fn custom_table_checks() {
    let defs = [
        RuleDef {
            name: "DIGIT",
            template: "[0-9]",
        },
        RuleDef {
            name: "PAIR",
            template: "{DIGIT}{2}-{DIGIT}{2}",
        },
    ];
    let table = RuleTable::build(&defs, &[]).unwrap();
    assert!(table.check("12-34", "PAIR").unwrap());
    assert!(!table.check("1-34", "PAIR").unwrap());
}

#[test]
fn malformed_tables_are_rejected() {
    let cycle = [
        RuleDef {
            name: "A",
            template: "x{B}",
        },
        RuleDef {
            name: "B",
            template: "{A}y",
        },
    ];
    let err = RuleTable::build(&cycle, &[]).unwrap_err();
    assert!(matches!(err, Error::MalformedGrammar(ref m) if m.contains("A -> B -> A")));

    let dangling = [RuleDef {
        name: "A",
        template: "{MISSING}",
    }];
    assert!(matches!(
        RuleTable::build(&dangling, &[]),
        Err(Error::MalformedGrammar(_))
    ));
}
