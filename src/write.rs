use crate::render::LedgerEntry;
use std::fmt;

/// The printed form of one entry: a flagged date-and-payee line, the asset
/// posting with its signed amount and currency, then the bare counterpart
/// account (the ledger tool infers its amount from the balance).
impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} * \"{}\"", self.date, self.description)?;
        writeln!(f, "  {}  {} {}", self.asset_account, self.amount, self.currency)?;
        writeln!(f, "  {}", self.counterpart)
    }
}

/// Entries joined with a blank separator line. The final entry keeps its
/// trailing newline but no separator, so an empty export renders as an
/// empty string and files concatenate cleanly.
pub(crate) fn ledger_to_string(entries: &[LedgerEntry]) -> String {
    entries
        .iter()
        .map(LedgerEntry::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain-text exporter for the rendered ledger.
pub(crate) fn write_ledger<W: std::io::Write>(
    mut writer: W,
    entries: &[LedgerEntry],
) -> Result<(), anyhow::Error> {
    writer.write_all(ledger_to_string(entries).as_bytes())?;
    writer.flush()?;
    Ok(())
}
