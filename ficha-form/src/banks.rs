//! Directory of Brazilian banks for the bank picker.

use serde::Serialize;

/// A bank with its COMPE code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bank {
    pub code: &'static str,
    pub name: &'static str,
}

impl Bank {
    /// Value stored in the form when this bank is picked: `"{code} - {name}"`
    pub fn selection_value(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

pub const BANKS: &[Bank] = &[
    Bank { code: "001", name: "Banco do Brasil" },
    Bank { code: "104", name: "Caixa Econômica Federal" },
    Bank { code: "237", name: "Bradesco" },
    Bank { code: "341", name: "Itaú" },
    Bank { code: "033", name: "Santander" },
    Bank { code: "745", name: "Citibank" },
    Bank { code: "399", name: "HSBC" },
    Bank { code: "422", name: "Safra" },
    Bank { code: "655", name: "Votorantim" },
    Bank { code: "756", name: "Sicoob" },
    Bank { code: "748", name: "Sicredi" },
    Bank { code: "041", name: "Banrisul" },
    Bank { code: "070", name: "BRB" },
    Bank { code: "085", name: "Ailos" },
    Bank { code: "260", name: "Nu Pagamentos" },
    Bank { code: "323", name: "Mercado Pago" },
    Bank { code: "336", name: "C6 Bank" },
    Bank { code: "077", name: "Inter" },
    Bank { code: "380", name: "PicPay" },
    Bank { code: "290", name: "Pagseguro" },
];

/// Banks whose name contains `query` (ignoring case) or whose code contains
/// it. An empty query matches every bank.
pub fn search_banks(query: &str) -> Vec<&'static Bank> {
    let needle = query.to_lowercase();
    BANKS
        .iter()
        .filter(|bank| bank.name.to_lowercase().contains(&needle) || bank.code.contains(query))
        .collect()
}

/// Bank with exactly this code
pub fn find_bank(code: &str) -> Option<&'static Bank> {
    BANKS.iter().find(|bank| bank.code == code)
}
