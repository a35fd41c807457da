use crate::data::{Account, Export, Posted, Transaction};
use chrono::{Local, TimeZone};
use rust_decimal::Decimal;

/// The three caller-supplied strings that shape the output: where outflows
/// and inflows get booked when nothing smarter is known, and the prefix
/// under which the real bank accounts live.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub expense_account: String,
    pub income_account: String,
    pub account_prefix: String,
}

/// A transaction paired with the account it came from. The pairing is built
/// during flattening and borrows from the caller's `Export`; the input is
/// never touched.
#[derive(Debug, Clone, Copy)]
struct Posting<'a> {
    account: &'a Account,
    transaction: &'a Transaction,
    posted: &'a Posted,
}

/// One fully resolved double-entry ledger record: all defaults filled in,
/// description escaped, asset account assembled. Derived during rendering,
/// never persisted. `write.rs` knows how to print it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LedgerEntry {
    pub date: String,
    pub description: String,
    pub asset_account: String,
    pub amount: Decimal,
    pub currency: String,
    pub counterpart: String,
}

/// The core of the whole program: flatten all transactions across all
/// accounts, sort them by posted date, and resolve each into a `LedgerEntry`.
///
/// Transactions without a usable posted date are dropped silently; that's a
/// documented policy, not an accident. Exports are messy enough that pending
/// or malformed rows are routine, and a converter that dies on them would be
/// useless. Same for the rare epoch that falls outside the representable
/// date range. The sort is stable, so same-day transactions keep the order
/// the export gave them.
pub(crate) fn render(export: &Export, config: &Config) -> Vec<LedgerEntry> {
    let mut postings: Vec<Posting> = Vec::new();
    for account in &export.accounts {
        for transaction in &account.transactions {
            if let Some(posted) = &transaction.posted {
                postings.push(Posting {
                    account,
                    transaction,
                    posted,
                });
            }
        }
    }
    postings.sort_by(|a, b| a.posted.cmp(b.posted));
    postings
        .iter()
        .filter_map(|posting| resolve(posting, config))
        .collect()
}

fn resolve(posting: &Posting, config: &Config) -> Option<LedgerEntry> {
    let date = match posting.posted {
        Posted::Epoch(secs) => Local
            .timestamp_opt(*secs, 0)
            .single()?
            .format("%Y-%m-%d")
            .to_string(),
        // Date strings pass through as their first ten characters, datetime
        // suffix and all validation concerns left to the ledger tool.
        Posted::Text(text) => text.chars().take(10).collect(),
    };
    let description = posting
        .transaction
        .description
        .as_deref()
        .unwrap_or("Unknown")
        .replace('"', "\\\"");
    let name = posting.account.name.as_deref().unwrap_or("Unknown");
    let amount = posting.transaction.amount.unwrap_or_default();
    let counterpart = if amount >= Decimal::ZERO {
        &config.income_account
    } else {
        &config.expense_account
    };
    Some(LedgerEntry {
        date,
        description,
        asset_account: format!("{}:{}", config.account_prefix, sanitize_account_name(name)),
        amount,
        currency: posting
            .account
            .currency
            .clone()
            .unwrap_or_else(|| "USD".to_string()),
        counterpart: counterpart.clone(),
    })
}

/// Turns a bank's free-text account name into something usable as a ledger
/// account component: spaces, slashes and ampersands become hyphens, runs of
/// hyphens collapse to one, and leading/trailing hyphens go away. A single
/// pass over the characters does all three. Everything else passes through
/// untouched, so this is total and idempotent for any input.
pub(crate) fn sanitize_account_name(name: &str) -> String {
    let mut clean = String::with_capacity(name.len());
    for c in name.chars() {
        let c = match c {
            ' ' | '/' | '&' => '-',
            other => other,
        };
        if c == '-' && clean.ends_with('-') {
            continue;
        }
        clean.push(c);
    }
    clean.trim_matches('-').to_string()
}
