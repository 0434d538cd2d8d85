//! The registration record and its fields.

use crate::Attachment;
use ficha_validation::{FieldSource, FieldValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accepted spellings of the two-value flags
pub const YES_NO_VALUES: &[&str] = &["yes", "no", "sim", "nao"];

/// Every form field, named the way errors and JSON records name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ExecutiveName,
    ExecutiveEmail,
    LegalName,
    TradeName,
    TaxId,
    StateRegistration,
    MunicipalRegistration,
    PrimaryContactName,
    PrimaryContactPhone,
    PrimaryContactEmail,
    CommercialContactName,
    CommercialContactPhone,
    CommercialContactEmail,
    FinancialContactName,
    FinancialContactPhone,
    FinancialContactEmail,
    PostalCode,
    Number,
    Street,
    Neighborhood,
    City,
    State,
    Complement,
    DeliverySameAsPrimary,
    BillingSameAsPrimary,
    Bank,
    Branch,
    Account,
    AccountType,
    CreditLimit,
    PaymentTerm,
    MonthlyRevenue,
    YearsActive,
    Segments,
    Networks,
    TaxRegime,
    SpecialTaxRegime,
    Attachments,
}

impl Field {
    pub const ALL: [Field; 38] = [
        Field::ExecutiveName,
        Field::ExecutiveEmail,
        Field::LegalName,
        Field::TradeName,
        Field::TaxId,
        Field::StateRegistration,
        Field::MunicipalRegistration,
        Field::PrimaryContactName,
        Field::PrimaryContactPhone,
        Field::PrimaryContactEmail,
        Field::CommercialContactName,
        Field::CommercialContactPhone,
        Field::CommercialContactEmail,
        Field::FinancialContactName,
        Field::FinancialContactPhone,
        Field::FinancialContactEmail,
        Field::PostalCode,
        Field::Number,
        Field::Street,
        Field::Neighborhood,
        Field::City,
        Field::State,
        Field::Complement,
        Field::DeliverySameAsPrimary,
        Field::BillingSameAsPrimary,
        Field::Bank,
        Field::Branch,
        Field::Account,
        Field::AccountType,
        Field::CreditLimit,
        Field::PaymentTerm,
        Field::MonthlyRevenue,
        Field::YearsActive,
        Field::Segments,
        Field::Networks,
        Field::TaxRegime,
        Field::SpecialTaxRegime,
        Field::Attachments,
    ];

    /// camelCase key
    pub const fn name(self) -> &'static str {
        match self {
            Field::ExecutiveName => "executiveName",
            Field::ExecutiveEmail => "executiveEmail",
            Field::LegalName => "legalName",
            Field::TradeName => "tradeName",
            Field::TaxId => "taxId",
            Field::StateRegistration => "stateRegistration",
            Field::MunicipalRegistration => "municipalRegistration",
            Field::PrimaryContactName => "primaryContactName",
            Field::PrimaryContactPhone => "primaryContactPhone",
            Field::PrimaryContactEmail => "primaryContactEmail",
            Field::CommercialContactName => "commercialContactName",
            Field::CommercialContactPhone => "commercialContactPhone",
            Field::CommercialContactEmail => "commercialContactEmail",
            Field::FinancialContactName => "financialContactName",
            Field::FinancialContactPhone => "financialContactPhone",
            Field::FinancialContactEmail => "financialContactEmail",
            Field::PostalCode => "postalCode",
            Field::Number => "number",
            Field::Street => "street",
            Field::Neighborhood => "neighborhood",
            Field::City => "city",
            Field::State => "state",
            Field::Complement => "complement",
            Field::DeliverySameAsPrimary => "deliverySameAsPrimary",
            Field::BillingSameAsPrimary => "billingSameAsPrimary",
            Field::Bank => "bank",
            Field::Branch => "branch",
            Field::Account => "account",
            Field::AccountType => "accountType",
            Field::CreditLimit => "creditLimit",
            Field::PaymentTerm => "paymentTerm",
            Field::MonthlyRevenue => "monthlyRevenue",
            Field::YearsActive => "yearsActive",
            Field::Segments => "segments",
            Field::Networks => "networks",
            Field::TaxRegime => "taxRegime",
            Field::SpecialTaxRegime => "specialTaxRegime",
            Field::Attachments => "attachments",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Multi-select fields
    pub fn is_list(self) -> bool {
        matches!(self, Field::Segments | Field::Networks)
    }

    /// Fields holding a single string
    pub fn is_text(self) -> bool {
        !self.is_list() && self != Field::Attachments
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Two-value flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Parse `yes`/`no`, also accepting `sim`/`nao`. Exact spelling only.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "yes" | "sim" => Some(YesNo::Yes),
            "no" | "nao" => Some(YesNo::No),
            _ => None,
        }
    }

    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

/// Raw form contents, exactly as entered.
///
/// Deserializes from a JSON object keyed by [`Field::name`]; missing keys
/// read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormRecord {
    pub executive_name: String,
    pub executive_email: String,

    pub legal_name: String,
    pub trade_name: String,
    pub tax_id: String,
    pub state_registration: String,
    pub municipal_registration: String,

    pub primary_contact_name: String,
    pub primary_contact_phone: String,
    pub primary_contact_email: String,
    pub commercial_contact_name: String,
    pub commercial_contact_phone: String,
    pub commercial_contact_email: String,
    pub financial_contact_name: String,
    pub financial_contact_phone: String,
    pub financial_contact_email: String,

    pub postal_code: String,
    pub number: String,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,

    pub delivery_same_as_primary: String,
    pub billing_same_as_primary: String,

    pub bank: String,
    pub branch: String,
    pub account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,

    pub credit_limit: String,
    pub payment_term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_revenue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_active: Option<String>,

    pub segments: Vec<String>,
    pub networks: Vec<String>,

    pub tax_regime: String,
    pub special_tax_regime: String,

    /// Accepted files; set through screening, never deserialized
    #[serde(skip)]
    pub attachments: Vec<Attachment>,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a text field. `None` for list fields and for unset
    /// optional fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::ExecutiveName => &self.executive_name,
            Field::ExecutiveEmail => &self.executive_email,
            Field::LegalName => &self.legal_name,
            Field::TradeName => &self.trade_name,
            Field::TaxId => &self.tax_id,
            Field::StateRegistration => &self.state_registration,
            Field::MunicipalRegistration => &self.municipal_registration,
            Field::PrimaryContactName => &self.primary_contact_name,
            Field::PrimaryContactPhone => &self.primary_contact_phone,
            Field::PrimaryContactEmail => &self.primary_contact_email,
            Field::CommercialContactName => &self.commercial_contact_name,
            Field::CommercialContactPhone => &self.commercial_contact_phone,
            Field::CommercialContactEmail => &self.commercial_contact_email,
            Field::FinancialContactName => &self.financial_contact_name,
            Field::FinancialContactPhone => &self.financial_contact_phone,
            Field::FinancialContactEmail => &self.financial_contact_email,
            Field::PostalCode => &self.postal_code,
            Field::Number => &self.number,
            Field::Street => &self.street,
            Field::Neighborhood => &self.neighborhood,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::DeliverySameAsPrimary => &self.delivery_same_as_primary,
            Field::BillingSameAsPrimary => &self.billing_same_as_primary,
            Field::Bank => &self.bank,
            Field::Branch => &self.branch,
            Field::Account => &self.account,
            Field::CreditLimit => &self.credit_limit,
            Field::PaymentTerm => &self.payment_term,
            Field::TaxRegime => &self.tax_regime,
            Field::SpecialTaxRegime => &self.special_tax_regime,
            Field::Complement => return self.complement.as_deref(),
            Field::AccountType => return self.account_type.as_deref(),
            Field::MonthlyRevenue => return self.monthly_revenue.as_deref(),
            Field::YearsActive => return self.years_active.as_deref(),
            Field::Segments | Field::Networks | Field::Attachments => return None,
        };
        Some(value.as_str())
    }

    /// Set a text field. Blank input clears an optional field. Returns
    /// `false` (and changes nothing) for list and attachment fields.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = match field {
            Field::ExecutiveName => &mut self.executive_name,
            Field::ExecutiveEmail => &mut self.executive_email,
            Field::LegalName => &mut self.legal_name,
            Field::TradeName => &mut self.trade_name,
            Field::TaxId => &mut self.tax_id,
            Field::StateRegistration => &mut self.state_registration,
            Field::MunicipalRegistration => &mut self.municipal_registration,
            Field::PrimaryContactName => &mut self.primary_contact_name,
            Field::PrimaryContactPhone => &mut self.primary_contact_phone,
            Field::PrimaryContactEmail => &mut self.primary_contact_email,
            Field::CommercialContactName => &mut self.commercial_contact_name,
            Field::CommercialContactPhone => &mut self.commercial_contact_phone,
            Field::CommercialContactEmail => &mut self.commercial_contact_email,
            Field::FinancialContactName => &mut self.financial_contact_name,
            Field::FinancialContactPhone => &mut self.financial_contact_phone,
            Field::FinancialContactEmail => &mut self.financial_contact_email,
            Field::PostalCode => &mut self.postal_code,
            Field::Number => &mut self.number,
            Field::Street => &mut self.street,
            Field::Neighborhood => &mut self.neighborhood,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::DeliverySameAsPrimary => &mut self.delivery_same_as_primary,
            Field::BillingSameAsPrimary => &mut self.billing_same_as_primary,
            Field::Bank => &mut self.bank,
            Field::Branch => &mut self.branch,
            Field::Account => &mut self.account,
            Field::CreditLimit => &mut self.credit_limit,
            Field::PaymentTerm => &mut self.payment_term,
            Field::TaxRegime => &mut self.tax_regime,
            Field::SpecialTaxRegime => &mut self.special_tax_regime,
            Field::Complement => {
                self.complement = optional(value);
                return true;
            }
            Field::AccountType => {
                self.account_type = optional(value);
                return true;
            }
            Field::MonthlyRevenue => {
                self.monthly_revenue = optional(value);
                return true;
            }
            Field::YearsActive => {
                self.years_active = optional(value);
                return true;
            }
            Field::Segments | Field::Networks | Field::Attachments => return false,
        };
        *slot = value;
        true
    }

    /// Current values of a multi-select field
    pub fn selection(&self, field: Field) -> Option<&[String]> {
        match field {
            Field::Segments => Some(&self.segments),
            Field::Networks => Some(&self.networks),
            _ => None,
        }
    }

    /// Replace a multi-select field. Returns `false` for other fields.
    pub fn set_selection(&mut self, field: Field, values: Vec<String>) -> bool {
        match field {
            Field::Segments => self.segments = values,
            Field::Networks => self.networks = values,
            _ => return false,
        }
        true
    }
}

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl FieldSource for FormRecord {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match Field::from_name(name) {
            Some(Field::Attachments) => FieldValue::Files(self.attachments.len()),
            Some(field) if field.is_list() => self
                .selection(field)
                .map(FieldValue::List)
                .unwrap_or(FieldValue::Missing),
            Some(field) => self
                .text(field)
                .map(FieldValue::Text)
                .unwrap_or(FieldValue::Missing),
            None => FieldValue::Missing,
        }
    }
}

/// A record that passed every rule, with its flags and credit limit typed.
///
/// Only produced by [`crate::validate_record`].
#[derive(Debug, Clone)]
pub struct ValidRecord {
    record: FormRecord,
    delivery_same_as_primary: YesNo,
    billing_same_as_primary: YesNo,
    special_tax_regime: YesNo,
    credit_limit: f64,
}

impl ValidRecord {
    pub(crate) fn new(
        record: FormRecord,
        delivery_same_as_primary: YesNo,
        billing_same_as_primary: YesNo,
        special_tax_regime: YesNo,
        credit_limit: f64,
    ) -> Self {
        Self {
            record,
            delivery_same_as_primary,
            billing_same_as_primary,
            special_tax_regime,
            credit_limit,
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn into_record(self) -> FormRecord {
        self.record
    }

    pub fn delivery_same_as_primary(&self) -> YesNo {
        self.delivery_same_as_primary
    }

    pub fn billing_same_as_primary(&self) -> YesNo {
        self.billing_same_as_primary
    }

    pub fn special_tax_regime(&self) -> YesNo {
        self.special_tax_regime
    }

    /// Parsed credit limit; the raw text stays on the record
    pub fn credit_limit(&self) -> f64 {
        self.credit_limit
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.record.attachments
    }
}
