//! Projection of a valid record onto the intake schema.

use crate::catalog::{
    NETWORK_DISTRIBUTOR, NETWORK_RETAIL, SEGMENT_CASH_AND_CARE, SEGMENT_DISTRIBUTOR,
    SEGMENT_KEY_ACCOUNT, SEGMENT_OTHER_RETAIL, SEGMENT_SPECIAL_CHANNELS, SEGMENT_WHOLESALE,
    has_label,
};
use crate::ValidRecord;
use ficha_webhooks::{Submission, WebhookFile};
use serde::Serialize;

/// The object sent as `data`. Built at submit time only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub executivo_nome: String,
    pub executivo_email: String,

    pub razao_social: String,
    pub nome_fantasia: String,
    pub cnpj: String,
    pub inscricao_estadual: String,
    pub inscricao_municipal: String,

    pub contato_principal_nome: String,
    pub contato_principal_telefone: String,
    pub contato_principal_email: String,
    pub contato_comercial_nome: String,
    pub contato_comercial_telefone: String,
    pub contato_comercial_email: String,
    pub contato_financeiro_nome: String,
    pub contato_financeiro_telefone: String,
    pub contato_financeiro_email: String,

    pub endereco_cep: String,
    pub endereco_numero: String,
    pub endereco_rua: String,
    pub endereco_bairro: String,
    pub endereco_cidade: String,
    pub endereco_uf: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco_complemento: Option<String>,

    pub entrega_igual_principal: bool,
    pub cobranca_igual_principal: bool,

    pub banco: String,
    pub agencia: String,
    pub conta: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_conta: Option<String>,

    pub limite_credito_solicitado: String,
    pub prazo_medio_pagamento_dias: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faturamento_mensal_medio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo_atuacao_anos: Option<String>,

    pub seg_varejo: bool,
    pub seg_distribuidor: bool,
    pub seg_atacado: bool,
    pub seg_kacc: bool,
    pub seg_cash_care: bool,
    pub seg_canais_especiais: bool,

    pub rede_varejo: bool,
    pub rede_distribuidor: bool,

    pub regime_tributario: String,
    pub regime_especial: bool,

    /// Honeypot, always empty
    pub website: String,
}

impl From<&ValidRecord> for SubmissionPayload {
    fn from(valid: &ValidRecord) -> Self {
        let r = valid.record();

        Self {
            executivo_nome: r.executive_name.clone(),
            executivo_email: r.executive_email.clone(),

            razao_social: r.legal_name.clone(),
            nome_fantasia: r.trade_name.clone(),
            cnpj: r.tax_id.clone(),
            inscricao_estadual: r.state_registration.clone(),
            inscricao_municipal: r.municipal_registration.clone(),

            contato_principal_nome: r.primary_contact_name.clone(),
            contato_principal_telefone: r.primary_contact_phone.clone(),
            contato_principal_email: r.primary_contact_email.clone(),
            contato_comercial_nome: r.commercial_contact_name.clone(),
            contato_comercial_telefone: r.commercial_contact_phone.clone(),
            contato_comercial_email: r.commercial_contact_email.clone(),
            contato_financeiro_nome: r.financial_contact_name.clone(),
            contato_financeiro_telefone: r.financial_contact_phone.clone(),
            contato_financeiro_email: r.financial_contact_email.clone(),

            endereco_cep: r.postal_code.clone(),
            endereco_numero: r.number.clone(),
            endereco_rua: r.street.clone(),
            endereco_bairro: r.neighborhood.clone(),
            endereco_cidade: r.city.clone(),
            endereco_uf: r.state.clone(),
            endereco_complemento: r.complement.clone(),

            entrega_igual_principal: valid.delivery_same_as_primary().is_yes(),
            cobranca_igual_principal: valid.billing_same_as_primary().is_yes(),

            banco: r.bank.clone(),
            agencia: r.branch.clone(),
            conta: r.account.clone(),
            tipo_conta: r.account_type.clone(),

            limite_credito_solicitado: r.credit_limit.clone(),
            prazo_medio_pagamento_dias: r.payment_term.clone(),
            faturamento_mensal_medio: r.monthly_revenue.clone(),
            tempo_atuacao_anos: r.years_active.clone(),

            seg_varejo: has_label(&r.segments, SEGMENT_OTHER_RETAIL),
            seg_distribuidor: has_label(&r.segments, SEGMENT_DISTRIBUTOR),
            seg_atacado: has_label(&r.segments, SEGMENT_WHOLESALE),
            seg_kacc: has_label(&r.segments, SEGMENT_KEY_ACCOUNT),
            seg_cash_care: has_label(&r.segments, SEGMENT_CASH_AND_CARE),
            seg_canais_especiais: has_label(&r.segments, SEGMENT_SPECIAL_CHANNELS),

            rede_varejo: has_label(&r.networks, NETWORK_RETAIL),
            rede_distribuidor: has_label(&r.networks, NETWORK_DISTRIBUTOR),

            regime_tributario: r.tax_regime.clone(),
            regime_especial: valid.special_tax_regime().is_yes(),

            website: String::new(),
        }
    }
}

impl SubmissionPayload {
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Build the outgoing submission: payload plus every accepted file
pub fn build_submission(valid: &ValidRecord) -> serde_json::Result<Submission> {
    let data = SubmissionPayload::from(valid).to_value()?;
    let files = valid.attachments().iter().map(WebhookFile::from).collect();
    Ok(Submission::new(data).with_files(files))
}
