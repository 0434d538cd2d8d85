//! The registration rule set.
//!
//! Field rules are a table fed to the generic evaluator in
//! `ficha-validation`; the credit-limit requirement is a standalone
//! predicate composed in as a refinement.

use crate::{Field, FormRecord, ValidRecord, YES_NO_VALUES, YesNo, parse_currency};
use ficha_validation::{ValidationBuilder, ValidationError, ValidationErrors, ValidationRules};
use once_cell::sync::Lazy;

/// Credit limits at or above this amount need supporting documents
pub const CREDIT_LIMIT_THRESHOLD: f64 = 20_000.0;

pub const ATTACHMENTS_REQUIRED_MESSAGE: &str = "Attach the balance sheet, the articles of incorporation and the revenue for the last 12 months (required for limits of R$ 20.000,00 or more)";

static RULES: Lazy<ValidationBuilder<FormRecord>> = Lazy::new(build_rules);

fn required(field: Field, message: &str) -> ValidationRules {
    ValidationRules::for_field(field.name())
        .required()
        .message(message)
}

fn email(field: Field, message: &str) -> ValidationRules {
    ValidationRules::for_field(field.name())
        .email()
        .message(message)
}

fn min_length(field: Field, min: usize, message: &str) -> ValidationRules {
    ValidationRules::for_field(field.name())
        .min_length(min)
        .message(message)
}

fn yes_no(field: Field) -> ValidationRules {
    ValidationRules::for_field(field.name())
        .one_of(YES_NO_VALUES)
        .message("Select yes or no")
}

fn at_least_one(field: Field, message: &str) -> ValidationRules {
    ValidationRules::for_field(field.name())
        .min_items(1)
        .message(message)
}

fn build_rules() -> ValidationBuilder<FormRecord> {
    [
        required(Field::ExecutiveName, "Executive name is required"),
        email(Field::ExecutiveEmail, "Executive email is required"),
        required(Field::LegalName, "Legal name is required"),
        required(Field::TradeName, "Trade name is required"),
        min_length(Field::TaxId, 14, "CNPJ must have at least 14 characters"),
        required(Field::StateRegistration, "State registration is required"),
        required(Field::MunicipalRegistration, "Municipal registration is required"),
        required(Field::PrimaryContactName, "Primary contact name is required"),
        required(Field::PrimaryContactPhone, "Primary contact phone is required"),
        email(Field::PrimaryContactEmail, "Invalid email"),
        required(Field::CommercialContactName, "Commercial contact name is required"),
        required(Field::CommercialContactPhone, "Commercial contact phone is required"),
        email(Field::CommercialContactEmail, "Invalid email"),
        required(Field::FinancialContactName, "Financial contact name is required"),
        required(Field::FinancialContactPhone, "Financial contact phone is required"),
        email(Field::FinancialContactEmail, "Invalid email"),
        min_length(Field::PostalCode, 8, "Postal code must have 8 characters"),
        required(Field::Number, "Number is required"),
        required(Field::Street, "Street is required"),
        required(Field::Neighborhood, "Neighborhood is required"),
        required(Field::City, "City is required"),
        min_length(Field::State, 2, "State is required"),
        yes_no(Field::DeliverySameAsPrimary),
        yes_no(Field::BillingSameAsPrimary),
        required(Field::Bank, "Bank is required"),
        required(Field::Branch, "Branch is required"),
        required(Field::Account, "Account is required"),
        required(Field::CreditLimit, "Credit limit is required"),
        required(Field::PaymentTerm, "Average payment term is required"),
        at_least_one(Field::Segments, "Select at least one segment"),
        at_least_one(Field::Networks, "Select at least one network"),
        required(Field::TaxRegime, "Tax regime is required"),
        yes_no(Field::SpecialTaxRegime),
    ]
    .into_iter()
    .fold(ValidationBuilder::new(), ValidationBuilder::field)
    .refine(check_attachments)
}

/// Whether a credit limit, as typed, needs supporting documents
pub fn attachments_required(credit_limit: &str) -> bool {
    parse_currency(credit_limit) >= CREDIT_LIMIT_THRESHOLD
}

/// Record-level rule: a large credit limit needs at least one attachment
pub fn check_attachments(record: &FormRecord) -> Result<(), ValidationError> {
    if attachments_required(&record.credit_limit) && record.attachments.is_empty() {
        Err(
            ValidationError::new(Field::Attachments.name(), ATTACHMENTS_REQUIRED_MESSAGE)
                .with_constraint("attachmentsRequired"),
        )
    } else {
        Ok(())
    }
}

/// The full rule set
pub fn rule_set() -> &'static ValidationBuilder<FormRecord> {
    &RULES
}

/// Run every rule, collecting all violations
pub fn validate(record: &FormRecord) -> Result<(), ValidationErrors> {
    RULES.validate(record)
}

/// Current violations for a single field
pub fn validate_field(record: &FormRecord, field: Field) -> Vec<ValidationError> {
    RULES.validate_field(record, field.name())
}

/// Validate and type a record
pub fn validate_record(record: FormRecord) -> Result<ValidRecord, ValidationErrors> {
    validate(&record)?;

    let delivery = flag(&record, Field::DeliverySameAsPrimary)?;
    let billing = flag(&record, Field::BillingSameAsPrimary)?;
    let special = flag(&record, Field::SpecialTaxRegime)?;
    let credit_limit = parse_currency(&record.credit_limit);

    Ok(ValidRecord::new(record, delivery, billing, special, credit_limit))
}

fn flag(record: &FormRecord, field: Field) -> Result<YesNo, ValidationErrors> {
    record
        .text(field)
        .and_then(YesNo::parse)
        .ok_or_else(|| {
            ValidationErrors::new(vec![
                ValidationError::new(field.name(), "Select yes or no").with_constraint("oneOf"),
            ])
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Attachment;
    use bytes::Bytes;

    fn complete_record() -> FormRecord {
        let mut record = FormRecord::new();
        for field in Field::ALL.into_iter().filter(|f| f.is_text()) {
            record.set_text(field, "x");
        }
        record.executive_email = "diretoria@acme.com.br".to_string();
        record.primary_contact_email = "joao@acme.com.br".to_string();
        record.commercial_contact_email = "vendas@acme.com.br".to_string();
        record.financial_contact_email = "financeiro@acme.com.br".to_string();
        record.tax_id = "12.345.678/0001-90".to_string();
        record.postal_code = "80010-000".to_string();
        record.state = "PR".to_string();
        record.delivery_same_as_primary = "yes".to_string();
        record.billing_same_as_primary = "nao".to_string();
        record.special_tax_regime = "no".to_string();
        record.credit_limit = "5.000,00".to_string();
        record.segments = vec!["Atacado".to_string()];
        record.networks = vec!["Varejo".to_string()];
        record
    }

    fn attachment() -> Attachment {
        Attachment {
            name: "balanco.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            data: Bytes::from_static(b"%PDF"),
        }
    }

    #[test]
    fn test_complete_record_passes() {
        let valid = validate_record(complete_record()).unwrap();
        assert_eq!(valid.delivery_same_as_primary(), YesNo::Yes);
        assert_eq!(valid.billing_same_as_primary(), YesNo::No);
        assert_eq!(valid.credit_limit(), 5000.0);
    }

    #[test]
    fn test_empty_record_reports_every_field() {
        let errors = validate(&FormRecord::new()).unwrap_err();
        let fields = errors.fields();

        for name in [
            "executiveName",
            "executiveEmail",
            "taxId",
            "postalCode",
            "deliverySameAsPrimary",
            "segments",
            "networks",
            "specialTaxRegime",
        ] {
            assert!(fields.iter().any(|f| f == name), "missing error for {name}");
        }
        // Empty credit limit parses to zero, so no attachment error
        assert!(!errors.has_field("attachments"));
        // Optional fields have no rules
        assert!(!errors.has_field("complement"));
        assert!(!errors.has_field("accountType"));
    }

    #[test]
    fn test_high_limit_requires_attachments() {
        let mut record = complete_record();
        record.credit_limit = "20.000,00".to_string();

        let errors = validate(&record).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors[0].field, "attachments");
        assert_eq!(errors.errors[0].message, ATTACHMENTS_REQUIRED_MESSAGE);

        record.attachments.push(attachment());
        assert!(validate(&record).is_ok());
    }

    #[test]
    fn test_low_limit_needs_no_attachments() {
        let mut record = complete_record();
        record.credit_limit = "19.999,99".to_string();
        assert!(validate(&record).is_ok());
    }

    #[test]
    fn test_garbled_limit_needs_no_attachments() {
        let mut record = complete_record();
        record.credit_limit = "muito".to_string();
        assert!(validate(&record).is_ok());
    }

    #[test]
    fn test_refinement_reported_with_field_errors() {
        let mut record = FormRecord::new();
        record.credit_limit = "R$ 50.000".to_string();
        let errors = validate(&record).unwrap_err();
        assert!(errors.has_field("attachments"));
        assert!(errors.has_field("legalName"));
    }

    #[test]
    fn test_attachments_required_predicate() {
        assert!(attachments_required("20.000,00"));
        assert!(attachments_required("R$ 1.000.000"));
        assert!(!attachments_required("19.999,99"));
        assert!(!attachments_required(""));
    }

    #[test]
    fn test_overflowing_limit_requires_attachments() {
        assert!(attachments_required("1e400"));
        assert!(attachments_required("Infinity"));
        assert!(!attachments_required("-1e400"));

        let mut record = complete_record();
        record.credit_limit = "1e400".to_string();
        let errors = validate(&record).unwrap_err();
        assert!(errors.has_field("attachments"));
    }

    #[test]
    fn test_invalid_flag_value() {
        let mut record = complete_record();
        record.special_tax_regime = "maybe".to_string();
        let errors = validate(&record).unwrap_err();
        assert_eq!(errors.get_field_errors("specialTaxRegime")[0].message, "Select yes or no");
    }

    #[test]
    fn test_short_tax_id() {
        let mut record = complete_record();
        record.tax_id = "1234567890123".to_string();
        let errors = validate_field(&record, Field::TaxId);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].constraint, "minLength");
    }

    #[test]
    fn test_rule_table_is_data() {
        let rules = rule_set().rules_for("taxId").unwrap();
        assert_eq!(
            rules.rules()[0].constraint,
            ficha_validation::Constraint::MinLength(14)
        );
        assert!(rule_set().rules_for("complement").is_none());
    }
}
