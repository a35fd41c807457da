use crate::data::{Error, Export};

/// JSON importer for an account export. Generic over the reader so tests
/// can feed it byte slices; `main` hands it stdin. This is the only place
/// the program can fail on user input: a document that doesn't parse stops
/// everything here, before any rendering happens.
pub(crate) fn read_export<R: std::io::Read>(reader: R) -> Result<Export, Error> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::read_export;
    use crate::data::{Account, Posted, Transaction};
    use rust_decimal_macros::dec;

    #[test]
    fn read_full_export() {
        let json = br#"{
            "accounts": [{
                "name": "Savings",
                "currency": "USD",
                "transactions": [{
                    "posted": 793065600,
                    "description": "Gas Station",
                    "amount": "-14.55"
                }]
            }]
        }"#;
        let export = read_export(&json[..]).unwrap();
        assert_eq!(
            export.accounts,
            [Account {
                name: Some("Savings".to_string()),
                currency: Some("USD".to_string()),
                transactions: vec![Transaction {
                    posted: Some(Posted::Epoch(793065600)),
                    description: Some("Gas Station".to_string()),
                    amount: Some(dec!(-14.55)),
                }],
            }]
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = br#"{"errors": [], "accounts": [{"id": "abc123", "name": "Savings",
            "balance": "100.00", "transactions": []}]}"#;
        let export = read_export(&json[..]).unwrap();
        assert_eq!(export.accounts[0].name.as_deref(), Some("Savings"));
        assert!(export.accounts[0].transactions.is_empty());
    }

    #[test]
    fn malformed_json_is_rejected() {
        // No Export value comes out of a bad document, so nothing can reach
        // stdout; main turns this into an error message and a non-zero exit.
        assert!(read_export(&b"{not json"[..]).is_err());
        assert!(read_export(&b""[..]).is_err());
    }
}
