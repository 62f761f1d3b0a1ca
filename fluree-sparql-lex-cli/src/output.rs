use crate::cli::TokenFormat;
use crate::error::CliResult;
use comfy_table::{ContentArrangement, Table};
use fluree_sparql_lex::{Token, TokenValue};
use serde::Serialize;

/// A token plus its decoded value, as written in JSON output.
#[derive(Serialize)]
struct TokenRecord<'a> {
    #[serde(flatten)]
    token: &'a Token,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<TokenValue>,
}

/// Format a token list for display.
pub fn format_tokens(tokens: &[Token], format: TokenFormat) -> CliResult<String> {
    match format {
        TokenFormat::Text => Ok(format_text(tokens)),
        TokenFormat::Json => format_json(tokens),
        TokenFormat::Table => Ok(format_table(tokens)),
    }
}

fn format_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for t in tokens {
        let pos = t.start.to_string();
        out.push_str(&format!("{pos:<8} {:<22} {:?}\n", t.rule, &*t.lexeme));
    }
    out
}

fn format_json(tokens: &[Token]) -> CliResult<String> {
    let records: Vec<TokenRecord<'_>> = tokens
        .iter()
        .map(|token| TokenRecord {
            token,
            value: token.value(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

fn format_table(tokens: &[Token]) -> String {
    if tokens.is_empty() {
        return "(no tokens)".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(["Pos", "Rule", "Kind", "Lexeme", "Value"]);

    for t in tokens {
        let value = t
            .value()
            .map(|v| display_value(&v))
            .unwrap_or_default();
        table.add_row(vec![
            t.start.to_string(),
            t.rule.to_string(),
            t.kind.to_string(),
            t.lexeme.escape_debug().to_string(),
            value,
        ]);
    }

    table.to_string()
}

fn display_value(value: &TokenValue) -> String {
    match value {
        TokenValue::Iri(s)
        | TokenValue::Var(s)
        | TokenValue::LangTag(s)
        | TokenValue::BlankNode(s)
        | TokenValue::BigInteger(s)
        | TokenValue::Decimal(s)
        | TokenValue::Identifier(s) => s.to_string(),
        TokenValue::String(s) => format!("{:?}", &**s),
        TokenValue::PrefixedName { prefix, local } => format!("{prefix} : {local}"),
        TokenValue::Integer(n) => n.to_string(),
        TokenValue::Double(d) => d.to_string(),
        TokenValue::Boolean(b) => b.to_string(),
        TokenValue::Keyword(k) => (*k).to_string(),
    }
}

/// Rule names with their tie-break rank, one per line.
pub fn format_rules(rules: &[(&'static str, Option<usize>)]) -> String {
    let mut out = String::new();
    for (name, rank) in rules {
        match rank {
            Some(rank) => out.push_str(&format!("{rank:>3}  {name}\n")),
            None => out.push_str(&format!("     {name}\n")),
        }
    }
    out
}
