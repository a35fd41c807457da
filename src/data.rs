use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Top level of a SimpleFIN account export. Every field in the export is
/// optional as far as we're concerned; a document without an `accounts` key
/// is just an export with no accounts, not an error. Extra fields (balances,
/// org info, ...) are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Export {
    #[serde(default)]
    pub accounts: Vec<Account>,
}

/// One financial account and its transactions. `name` and `currency` stay
/// `Option` here and get their defaults ("Unknown" / "USD") filled in at
/// render time, so the data model stays an honest picture of the input.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Account {
    pub name: Option<String>,
    pub currency: Option<String>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// A single transaction. A transaction without a usable `posted` date can't
/// be placed in the ledger and is dropped during rendering; the other two
/// fields have documented defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Transaction {
    #[serde(default, deserialize_with = "de_posted")]
    pub posted: Option<Posted>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de_amount")]
    pub amount: Option<Decimal>,
}

/// The posted date as it appears on the wire: either a Unix epoch timestamp
/// or some ISO-8601-ish date string. The derived `Ord` gives us a total
/// order for sorting mixed exports: epochs compare numerically, date strings
/// lexically, and all epochs sort before all strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Posted {
    Epoch(i64),
    Text(String),
}

/// `posted` is `number|string` in the wild, and real exports also contain
/// nulls where a pending transaction hasn't cleared yet. Anything that isn't
/// a non-zero number or a non-empty string decodes to `None`, which the
/// renderer treats as "drop this transaction".
fn de_posted<'de, D>(deserializer: D) -> Result<Option<Posted>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => {
            if let Some(secs) = n.as_i64() {
                (secs != 0).then_some(Posted::Epoch(secs))
            } else {
                // Some exports carry fractional timestamps; the date only
                // needs whole seconds.
                n.as_f64()
                    .filter(|secs| *secs != 0.0)
                    .map(|secs| Posted::Epoch(secs as i64))
            }
        }
        serde_json::Value::String(s) if !s.is_empty() => Some(Posted::Text(s)),
        _ => None,
    })
}

/// `amount` may be a JSON string or a bare number. Strings are parsed with
/// their full textual precision; numbers go through their shortest decimal
/// rendering so `-14.55` stays `-14.55` and never picks up float dust. An
/// amount that doesn't parse as a decimal fails the whole document here, at
/// the JSON boundary, which keeps rendering itself infallible.
fn de_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => s
            .parse::<Decimal>()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid amount {s:?}: {e}"))),
        serde_json::Value::Number(n) => n
            .to_string()
            .parse::<Decimal>()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid amount {n}: {e}"))),
        other => Err(D::Error::custom(format!(
            "invalid amount: expected string or number, got {other}"
        ))),
    }
}

/// The only failure this tool surfaces to the user: the input wasn't valid
/// JSON (or carried an amount no decimal parser would accept). Everything
/// else degrades by defaulting or omission, per the input format's
/// everything-is-optional spirit.
#[derive(Error, Debug)]
pub enum Error {
    #[error("error parsing JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
