use crate::error::CliResult;

pub fn run(rule: &str, text: &str) -> CliResult<()> {
    let matched = fluree_sparql_lex::check(text, rule)?;
    println!("{matched}");
    Ok(())
}
