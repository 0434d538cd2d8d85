//! Lookup tests against a mock ViaCEP service

use ficha_postal::{LookupError, PostalCode, PostalCodeLookup, ViaCepClient};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ViaCepClient {
    ViaCepClient::new(format!("{}/ws", server.uri())).expect("client build")
}

#[tokio::test]
async fn resolves_known_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ws/01001000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cep": "01001-000",
            "logradouro": "Praça da Sé",
            "complemento": "lado ímpar",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let code = PostalCode::parse("01001-000").expect("valid code");
    let patch = client(&server).lookup(&code).await.expect("lookup");

    assert_eq!(patch.street, "Praça da Sé");
    assert_eq!(patch.neighborhood, "Sé");
    assert_eq!(patch.city, "São Paulo");
    assert_eq!(patch.state, "SP");
}

#[tokio::test]
async fn unknown_code_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ws/99999999/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"erro": true})))
        .mount(&server)
        .await;

    let code = PostalCode::parse("99999999").expect("valid code");
    let err = client(&server).lookup(&code).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn bad_request_surfaces_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_string("<html>Bad Request</html>"))
        .mount(&server)
        .await;

    let code = PostalCode::parse("80010000").expect("valid code");
    let err = client(&server).lookup(&code).await.unwrap_err();
    assert!(matches!(err, LookupError::Status(400)));
}

#[tokio::test]
async fn malformed_body_is_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let code = PostalCode::parse("80010000").expect("valid code");
    let err = client(&server).lookup(&code).await.unwrap_err();
    assert!(matches!(err, LookupError::Json(_)));
}
