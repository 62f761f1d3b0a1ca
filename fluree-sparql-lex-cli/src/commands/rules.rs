use crate::error::CliResult;
use crate::output;
use fluree_sparql_lex::RuleTable;

pub fn run() -> CliResult<()> {
    let table = RuleTable::global();
    let rules: Vec<(&'static str, Option<usize>)> = table
        .list_rules()
        .into_iter()
        .map(|name| (name, table.get(name).and_then(|r| r.priority())))
        .collect();
    print!("{}", output::format_rules(&rules));
    Ok(())
}
