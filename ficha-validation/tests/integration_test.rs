//! Integration tests for ficha-validation

use ficha_validation::*;
use std::collections::HashMap;

fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn contact_rules() -> ValidationBuilder<HashMap<String, String>> {
    ValidationBuilder::new()
        .field(
            ValidationRules::for_field("name")
                .required()
                .message("Name is required"),
        )
        .field(
            ValidationRules::for_field("email")
                .email()
                .message("Invalid email"),
        )
        .field(
            ValidationRules::for_field("answer")
                .one_of(&["yes", "no"])
                .message("Pick yes or no"),
        )
}

#[test]
fn test_valid_form_passes() {
    let data = form(&[
        ("name", "Maria"),
        ("email", "maria@acme.com.br"),
        ("answer", "no"),
    ]);
    assert!(contact_rules().validate(&data).is_ok());
}

#[test]
fn test_every_violation_is_reported() {
    let errors = contact_rules().validate(&form(&[])).unwrap_err();

    let by_field = errors.by_field();
    assert_eq!(by_field["name"], vec!["Name is required"]);
    assert_eq!(by_field["email"], vec!["Invalid email"]);
    assert_eq!(by_field["answer"], vec!["Pick yes or no"]);
}

#[test]
fn test_refinement_error_lands_on_its_field() {
    let rules = contact_rules().refine(|data| {
        if data.get("answer").map(String::as_str) == Some("yes") && !data.contains_key("reason") {
            Err(ValidationError::new("reason", "Reason is required when answering yes"))
        } else {
            Ok(())
        }
    });

    let data = form(&[
        ("name", "Maria"),
        ("email", "maria@acme.com.br"),
        ("answer", "yes"),
    ]);
    let errors = rules.validate(&data).unwrap_err();
    assert_eq!(errors.fields(), vec!["reason"]);
    assert_eq!(rules.validate_field(&data, "reason").len(), 1);
    assert!(rules.validate_field(&data, "name").is_empty());
}

#[test]
fn test_list_source() {
    let mut data: HashMap<String, Vec<String>> = HashMap::new();
    data.insert("segments".to_string(), vec![]);

    let rules: ValidationBuilder<HashMap<String, Vec<String>>> = ValidationBuilder::new()
        .field(ValidationRules::for_field("segments").min_items(1));

    assert!(rules.validate(&data).is_err());

    data.insert("segments".to_string(), vec!["Atacado".to_string()]);
    assert!(rules.validate(&data).is_ok());
}

#[test]
fn test_errors_to_json() {
    let errors = contact_rules().validate(&form(&[("name", "Maria")])).unwrap_err();
    let json = errors.to_json();
    assert_eq!(json["fields"]["email"][0], "Invalid email");
    assert!(json["fields"].get("name").is_none());
}
