//! End-to-end registration flow against mock services

use ficha_form::{
    AttachmentCandidate, Field, FormSession, REASON_UNREADABLE, SubmitError, search_banks,
};
use ficha_postal::ViaCepClient;
use ficha_webhooks::{Encoding, WebhookClient, WebhookConfig};
use serde_json::json;
use std::io::Write;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn webhook(server: &MockServer) -> WebhookClient {
    WebhookClient::new(
        WebhookConfig::builder()
            .url(format!("{}/intake", server.uri()))
            .build(),
    )
    .expect("client build")
}

fn fill(session: &mut FormSession) {
    let bank = search_banks("sicredi")[0].selection_value();
    let values = [
        (Field::ExecutiveName, "Maria Souza"),
        (Field::ExecutiveEmail, "maria@distribuidora.com.br"),
        (Field::LegalName, "Distribuidora Sul LTDA"),
        (Field::TradeName, "Sul Distribuidora"),
        (Field::TaxId, "12.345.678/0001-90"),
        (Field::StateRegistration, "123.45678-90"),
        (Field::MunicipalRegistration, "98765"),
        (Field::PrimaryContactName, "João Lima"),
        (Field::PrimaryContactPhone, "(41) 99999-0000"),
        (Field::PrimaryContactEmail, "joao@distribuidora.com.br"),
        (Field::CommercialContactName, "Ana Costa"),
        (Field::CommercialContactPhone, "(41) 98888-0000"),
        (Field::CommercialContactEmail, "vendas@distribuidora.com.br"),
        (Field::FinancialContactName, "Carlos Dias"),
        (Field::FinancialContactPhone, "(41) 97777-0000"),
        (Field::FinancialContactEmail, "financeiro@distribuidora.com.br"),
        (Field::Number, "100"),
        (Field::DeliverySameAsPrimary, "sim"),
        (Field::BillingSameAsPrimary, "nao"),
        (Field::Bank, bank.as_str()),
        (Field::Branch, "0101"),
        (Field::Account, "12345-6"),
        (Field::CreditLimit, "R$ 10.000,00"),
        (Field::PaymentTerm, "30"),
        (Field::TaxRegime, "simples"),
        (Field::SpecialTaxRegime, "nao"),
    ];
    for (field, value) in values {
        session.set_text(field, value);
    }
    session.set_selection(Field::Segments, vec!["Distribuidor".to_string()]);
    session.set_selection(Field::Networks, vec!["Varejo".to_string()]);
}

async fn mount_viacep(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/ws/80010000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cep": "80010-000",
            "logradouro": "Praça Tiradentes",
            "bairro": "Centro",
            "localidade": "Curitiba",
            "uf": "PR"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn json_submission_resets_form() {
    let server = MockServer::start().await;
    mount_viacep(&server).await;
    Mock::given(method("POST"))
        .and(path("/intake"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = FormSession::new();
    fill(&mut session);
    let postal = ViaCepClient::new(format!("{}/ws", server.uri())).expect("postal client");
    assert!(session.postal_code_changed("80010-000", &postal).await.is_some());

    let delivered = session.submit(&webhook(&server)).await.expect("submitted");
    assert_eq!(delivered.receipt.encoding, Encoding::Json);
    assert!(delivered.notice.is_success());

    // Form is cleared after success
    assert!(session.record().legal_name.is_empty());
    assert!(session.record().attachments.is_empty());
    assert!(!session.is_submitting());

    let requests = server.received_requests().await.expect("recording enabled");
    let intake = requests
        .iter()
        .find(|r| r.url.path() == "/intake")
        .expect("intake request");
    let body: serde_json::Value = serde_json::from_slice(&intake.body).expect("json body");

    assert_eq!(body["source"], "ficha-cadastral");
    let data = &body["data"];
    assert_eq!(data["razaoSocial"], "Distribuidora Sul LTDA");
    assert_eq!(data["enderecoRua"], "Praça Tiradentes");
    assert_eq!(data["enderecoUf"], "PR");
    assert_eq!(data["banco"], "748 - Sicredi");
    assert_eq!(data["entregaIgualPrincipal"], true);
    assert_eq!(data["cobrancaIgualPrincipal"], false);
    assert_eq!(data["segDistribuidor"], true);
    assert_eq!(data["segVarejo"], false);
    assert_eq!(data["redeVarejo"], true);
    assert_eq!(data["website"], "");
}

#[tokio::test]
async fn large_credit_limit_goes_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("temp dir");
    let balance = dir.path().join("balanco.pdf");
    let mut file = std::fs::File::create(&balance).expect("create file");
    file.write_all(b"%PDF-1.4 balance sheet").expect("write file");

    let mut session = FormSession::new();
    fill(&mut session);
    session.set_text(Field::PostalCode, "80010000");
    session.set_text(Field::Street, "Rua XV de Novembro");
    session.set_text(Field::Neighborhood, "Centro");
    session.set_text(Field::City, "Curitiba");
    session.set_text(Field::State, "PR");
    session.set_text(Field::CreditLimit, "R$ 20.000,00");

    let err = session.begin_submit().unwrap_err();
    let errors = err.validation_errors().expect("validation errors");
    assert_eq!(errors.fields(), vec!["attachments"]);

    let selection = session.select_attachments(vec![
        AttachmentCandidate::from_path(&balance),
        AttachmentCandidate::from_path(dir.path().join("missing.pdf")),
    ]);
    assert_eq!(selection.accepted, 1);
    assert_eq!(selection.rejected[0].reason, REASON_UNREADABLE);
    assert_eq!(session.record().attachments[0].content_type, "application/pdf");

    let delivered = session.submit(&webhook(&server)).await.expect("submitted");
    assert_eq!(delivered.receipt.encoding, Encoding::Multipart);
    assert_eq!(delivered.receipt.body["success"], true);

    let requests = server.received_requests().await.expect("recording enabled");
    let body = String::from_utf8_lossy(&requests[0].body).to_string();
    assert_eq!(body.matches("name=\"anexos\"").count(), 1);
    assert!(body.contains("filename=\"balanco.pdf\""));
    assert!(body.contains("name=\"data\""));
}

#[tokio::test]
async fn failed_delivery_keeps_form_for_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": false, "error": "X"})),
        )
        .mount(&server)
        .await;

    let mut session = FormSession::new();
    fill(&mut session);
    session.set_text(Field::PostalCode, "80010000");
    session.set_text(Field::Street, "Rua XV de Novembro");
    session.set_text(Field::Neighborhood, "Centro");
    session.set_text(Field::City, "Curitiba");
    session.set_text(Field::State, "PR");

    let err = session.submit(&webhook(&server)).await.unwrap_err();
    assert!(matches!(err, SubmitError::Delivery(_)));
    assert!(err.to_string().contains('X'));

    let notice = err.notice().expect("failure notice");
    assert!(!notice.is_success());
    assert_eq!(session.record().legal_name, "Distribuidora Sul LTDA");
    assert!(!session.is_submitting());
}

#[tokio::test]
async fn second_submission_refused_while_in_flight() {
    let mut session = FormSession::new();
    fill(&mut session);
    session.set_text(Field::PostalCode, "80010000");
    session.set_text(Field::Street, "Rua XV de Novembro");
    session.set_text(Field::Neighborhood, "Centro");
    session.set_text(Field::City, "Curitiba");
    session.set_text(Field::State, "PR");

    let submission = session.begin_submit().expect("first submission");
    assert_eq!(submission.encoding(), Encoding::Json);
    assert!(session.is_submitting());

    assert!(matches!(session.begin_submit(), Err(SubmitError::InFlight)));

    // Missing endpoint fails the attempt and frees the session
    let client = WebhookClient::new(WebhookConfig::default()).expect("client build");
    let result = client.deliver(submission).await;
    let err = session.finish_submit(result).unwrap_err();
    assert!(matches!(err, SubmitError::Delivery(ref e) if e.is_config_error()));
    assert!(!session.is_submitting());
    assert!(session.begin_submit().is_ok());
}

#[tokio::test]
async fn abandoned_submission_frees_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let mut session = FormSession::new();
    fill(&mut session);
    session.set_text(Field::PostalCode, "80010000");
    session.set_text(Field::Street, "Rua XV de Novembro");
    session.set_text(Field::Neighborhood, "Centro");
    session.set_text(Field::City, "Curitiba");
    session.set_text(Field::State, "PR");

    let client = webhook(&server);
    let outcome =
        tokio::time::timeout(Duration::from_millis(200), session.submit(&client)).await;
    assert!(outcome.is_err());

    assert!(!session.is_submitting());
    assert_eq!(session.record().legal_name, "Distribuidora Sul LTDA");
    assert!(session.begin_submit().is_ok());
}
