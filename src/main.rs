use clap::Parser;
use read::read_export;
use render::{render, Config};
use write::write_ledger;

mod data;
mod read;
mod render;
mod write;

/// Convert a SimpleFIN JSON export on stdin to plain-text double-entry
/// ledger transactions on stdout.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Counterpart account for outflows
    #[arg(long, default_value = "Expenses:Uncategorized")]
    expense_account: String,
    /// Counterpart account for inflows
    #[arg(long, default_value = "Income:Uncategorized")]
    income_account: String,
    /// Prefix for asset accounts
    #[arg(long, default_value = "Assets")]
    account_prefix: String,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    let export = read_export(std::io::stdin().lock())?;
    let entries = render(
        &export,
        &Config {
            expense_account: args.expense_account,
            income_account: args.income_account,
            account_prefix: args.account_prefix,
        },
    );
    write_ledger(std::io::stdout(), &entries)?;
    Ok(())
}
