//! Symbol normalization.
//!
//! Users enter tickers with exchange suffixes (`RELIANCE.NS`, `TATASTEEL.BO`)
//! and stray whitespace. The suffixes are a display convenience, not part of
//! the upstream provider's symbol space, so they are stripped before querying.

/// Exchange suffixes recognized on user-entered symbols.
const EXCHANGE_SUFFIXES: &[&str] = &[".NS", ".BO"];

/// Canonical display form: trimmed, uppercased, suffix kept.
pub fn display_symbol(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Provider query form: uppercased, all whitespace removed, recognized
/// exchange suffixes stripped.
pub fn provider_symbol(raw: &str) -> String {
    let mut symbol: String = raw
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    for suffix in EXCHANGE_SUFFIXES {
        if let Some(stripped) = symbol.strip_suffix(suffix) {
            symbol = stripped.to_string();
            break;
        }
    }
    symbol
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_nse_suffix() {
        assert_eq!(provider_symbol("tatasteel.NS"), "TATASTEEL");
    }

    #[test]
    fn strips_bse_suffix() {
        assert_eq!(provider_symbol("INFY.BO"), "INFY");
    }

    #[test]
    fn whitespace_and_case_are_normalized() {
        assert_eq!(provider_symbol(" TATASTEEL.NS "), "TATASTEEL");
        assert_eq!(provider_symbol("tatasteel.ns"), "TATASTEEL");
        assert_eq!(provider_symbol("TATA STEEL.NS"), "TATASTEEL");
    }

    #[test]
    fn plain_symbols_pass_through() {
        assert_eq!(provider_symbol("AAPL"), "AAPL");
    }

    #[test]
    fn display_symbol_keeps_suffix() {
        assert_eq!(display_symbol(" reliance.ns "), "RELIANCE.NS");
    }
}
