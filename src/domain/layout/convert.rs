//! Conversions: registration payload → print layout.

use chrono::NaiveDate;

use super::{document_kind, LayoutParty, TicketLayout, BANK_CODE};
use crate::domain::ticket::validation::validate_for_create;
use crate::domain::ticket::wire::{FinalBeneficiary, Payer, TicketPayload};
use crate::error::ValidationError;
use crate::shared::fmt::{format_amount, format_cep, format_cnpj, format_cpf};

impl TryFrom<&TicketPayload> for TicketLayout {
    type Error = ValidationError;

    fn try_from(payload: &TicketPayload) -> Result<Self, Self::Error> {
        validate_for_create(payload)?;

        let amount = required(payload.valor_original, "valorOriginal")?;
        Ok(TicketLayout {
            bank_code: BANK_CODE.to_string(),
            agreement: required(payload.numero_convenio, "numeroConvenio")?,
            wallet: required(payload.numero_carteira, "numeroCarteira")?,
            wallet_variation: required(
                payload.numero_variacao_carteira,
                "numeroVariacaoCarteira",
            )?,
            billing_modality: required(payload.codigo_modalidade, "codigoModalidade")?,
            document_number: required(
                payload.numero_titulo_cliente.clone(),
                "numeroTituloCliente",
            )?,
            amount,
            amount_display: format_amount(&amount),
            due_date: parse_date(payload.data_vencimento.as_deref(), "dataVencimento")?,
            issue_date: parse_date(payload.data_emissao.as_deref(), "dataEmissao")?,
            acceptance: required(payload.codigo_aceite.clone(), "codigoAceite")?,
            document_kind: document_kind(required(
                payload.codigo_tipo_titulo,
                "codigoTipoTitulo",
            )?),
            partial_payment_allowed: payload
                .indicador_permissao_recebimento_parcial
                .as_deref()
                .map(|flag| flag.eq_ignore_ascii_case("S"))
                .unwrap_or(false),
            payer: payer_party(required(payload.pagador.as_ref(), "pagador")?)?,
            final_beneficiary: beneficiary_party(required(
                payload.beneficiario_final.as_ref(),
                "beneficiarioFinal",
            )?)?,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::MissingFields(vec![field.to_string()]))
}

fn parse_date(value: Option<&str>, field: &'static str) -> Result<NaiveDate, ValidationError> {
    let value = required(value, field)?;
    NaiveDate::parse_from_str(value.trim(), "%d.%m.%Y").map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

fn format_document(registration_type: u8, number: u64) -> String {
    match registration_type {
        1 => format_cpf(number),
        2 => format_cnpj(number),
        _ => number.to_string(),
    }
}

fn payer_party(payer: &Payer) -> Result<LayoutParty, ValidationError> {
    let registration_type = required(payer.tipo_inscricao, "pagador.tipoInscricao")?;
    let number = required(payer.numero_inscricao, "pagador.numeroInscricao")?;
    let address = format!(
        "{}, {} - {}/{} - CEP {}",
        required(payer.endereco.as_deref(), "pagador.endereco")?,
        required(payer.bairro.as_deref(), "pagador.bairro")?,
        required(payer.cidade.as_deref(), "pagador.cidade")?,
        required(payer.uf.as_deref(), "pagador.uf")?,
        format_cep(required(payer.cep, "pagador.cep")?),
    );

    Ok(LayoutParty {
        name: required(payer.nome.clone(), "pagador.nome")?,
        document: format_document(registration_type, number),
        address: Some(address),
    })
}

fn beneficiary_party(beneficiary: &FinalBeneficiary) -> Result<LayoutParty, ValidationError> {
    let registration_type = required(beneficiary.tipo_inscricao, "beneficiarioFinal.tipoInscricao")?;
    let number = required(beneficiary.numero_inscricao, "beneficiarioFinal.numeroInscricao")?;

    Ok(LayoutParty {
        name: required(beneficiary.nome.clone(), "beneficiarioFinal.nome")?,
        document: format_document(registration_type, number),
        address: None,
    })
}
