//! Option labels offered by the form.

/// Sales segment: other retail
pub const SEGMENT_OTHER_RETAIL: &str = "Outros Varejos";
pub const SEGMENT_DISTRIBUTOR: &str = "Distribuidor";
pub const SEGMENT_WHOLESALE: &str = "Atacado";
pub const SEGMENT_KEY_ACCOUNT: &str = "Key Account";
pub const SEGMENT_CASH_AND_CARE: &str = "Cash & Care";
pub const SEGMENT_SPECIAL_CHANNELS: &str = "Canais Especiais";

/// Sales segments in display order
pub const SEGMENT_LABELS: &[&str] = &[
    SEGMENT_DISTRIBUTOR,
    SEGMENT_WHOLESALE,
    SEGMENT_KEY_ACCOUNT,
    SEGMENT_CASH_AND_CARE,
    SEGMENT_SPECIAL_CHANNELS,
    SEGMENT_OTHER_RETAIL,
];

pub const NETWORK_RETAIL: &str = "Varejo";
pub const NETWORK_DISTRIBUTOR: &str = "Distribuidor";

/// Network affiliations in display order
pub const NETWORK_LABELS: &[&str] = &[NETWORK_RETAIL, NETWORK_DISTRIBUTOR];

/// Account types
pub const ACCOUNT_TYPES: &[&str] = &["corrente", "poupanca"];

/// Tax regimes
pub const TAX_REGIMES: &[&str] = &["lucro-real", "lucro-presumido", "simples", "nao-contribuinte"];

/// Case-insensitive membership test used for segment and network flags.
pub fn has_label(values: &[String], label: &str) -> bool {
    let label = label.to_lowercase();
    values.iter().any(|v| v.to_lowercase() == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_has_label_ignores_case() {
        let values = list(&["cash & care", "ATACADO"]);
        assert!(has_label(&values, SEGMENT_CASH_AND_CARE));
        assert!(has_label(&values, SEGMENT_WHOLESALE));
        assert!(!has_label(&values, SEGMENT_DISTRIBUTOR));
    }

    #[test]
    fn test_has_label_is_exact() {
        // "Varejo" must not match "Outros Varejos"
        let values = list(&[SEGMENT_OTHER_RETAIL]);
        assert!(!has_label(&values, NETWORK_RETAIL));
        assert!(!has_label(&[], NETWORK_RETAIL));
    }
}
