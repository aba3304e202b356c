//! Required-field validation for ticket registration.

use crate::domain::ticket::wire::TicketPayload;
use crate::error::ValidationError;

/// Top-level keys every registration must carry, in report order.
pub const REQUIRED_FIELDS: [&str; 13] = [
    "numeroConvenio",
    "dataVencimento",
    "valorOriginal",
    "numeroCarteira",
    "numeroVariacaoCarteira",
    "codigoModalidade",
    "dataEmissao",
    "codigoAceite",
    "codigoTipoTitulo",
    "indicadorPermissaoRecebimentoParcial",
    "numeroTituloCliente",
    "pagador",
    "beneficiarioFinal",
];

/// Keys required inside `pagador`.
pub const PAYER_REQUIRED_FIELDS: [&str; 8] = [
    "tipoInscricao",
    "numeroInscricao",
    "nome",
    "endereco",
    "cep",
    "cidade",
    "bairro",
    "uf",
];

/// Keys required inside `beneficiarioFinal`.
pub const FINAL_BENEFICIARY_REQUIRED_FIELDS: [&str; 3] = ["tipoInscricao", "numeroInscricao", "nome"];

/// Dotted paths of every required field missing from `payload`.
///
/// Top-level misses come first, then nested misses (`pagador.*` before
/// `beneficiarioFinal.*`). Nested records are only inspected when present;
/// an absent record is reported once, by its own name.
pub fn find_missing_fields(payload: &TicketPayload) -> Vec<String> {
    let mut missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !payload.has_field(field))
        .map(|field| field.to_string())
        .collect();

    if let Some(payer) = &payload.pagador {
        missing.extend(nested_missing("pagador", &PAYER_REQUIRED_FIELDS, |f| {
            payer.has_field(f)
        }));
    }
    if let Some(beneficiary) = &payload.beneficiario_final {
        missing.extend(nested_missing(
            "beneficiarioFinal",
            &FINAL_BENEFICIARY_REQUIRED_FIELDS,
            |f| beneficiary.has_field(f),
        ));
    }

    missing
}

fn nested_missing<'a>(
    parent: &'a str,
    required: &'a [&'a str],
    has_field: impl Fn(&str) -> bool + 'a,
) -> impl Iterator<Item = String> + 'a {
    required
        .iter()
        .copied()
        .filter(move |field| !has_field(*field))
        .map(move |field| format!("{}.{}", parent, field))
}

/// Fail with [`ValidationError::MissingFields`] unless the payload is complete.
pub fn validate_for_create(payload: &TicketPayload) -> Result<(), ValidationError> {
    let missing = find_missing_fields(payload);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::wire::{FinalBeneficiary, Payer};
    use rust_decimal::Decimal;

    fn complete_payload() -> TicketPayload {
        TicketPayload {
            numero_convenio: Some(3128557),
            data_vencimento: Some("15.03.2026".to_string()),
            valor_original: Some(Decimal::new(12345, 2)),
            numero_carteira: Some(17),
            numero_variacao_carteira: Some(35),
            codigo_modalidade: Some(1),
            data_emissao: Some("10.03.2026".to_string()),
            codigo_aceite: Some("S".to_string()),
            codigo_tipo_titulo: Some(2),
            indicador_permissao_recebimento_parcial: Some("N".to_string()),
            numero_titulo_cliente: Some("00031285570000003339".to_string()),
            pagador: Some(Payer {
                tipo_inscricao: Some(1),
                numero_inscricao: Some(97965940132),
                nome: Some("Odorico Paraguassu".to_string()),
                endereco: Some("Avenida Dias Gomes 1970".to_string()),
                cep: Some(77458000),
                cidade: Some("Sucupira".to_string()),
                bairro: Some("Centro".to_string()),
                uf: Some("TO".to_string()),
                ..Payer::default()
            }),
            beneficiario_final: Some(FinalBeneficiary {
                tipo_inscricao: Some(2),
                numero_inscricao: Some(98959112000179),
                nome: Some("Dirceu Borboleta".to_string()),
                ..FinalBeneficiary::default()
            }),
            ..TicketPayload::default()
        }
    }

    #[test]
    fn test_complete_payload_has_no_missing_fields() {
        assert!(find_missing_fields(&complete_payload()).is_empty());
        assert!(validate_for_create(&complete_payload()).is_ok());
    }

    #[test]
    fn test_empty_payload_reports_all_top_level_fields() {
        let missing = find_missing_fields(&TicketPayload::default());
        assert_eq!(missing, REQUIRED_FIELDS.map(String::from).to_vec());
    }

    #[test]
    fn test_missing_nested_field() {
        let mut payload = complete_payload();
        if let Some(payer) = payload.pagador.as_mut() {
            payer.cep = None;
        }
        assert_eq!(find_missing_fields(&payload), vec!["pagador.cep"]);
    }

    #[test]
    fn test_top_level_misses_come_before_nested() {
        let mut payload = complete_payload();
        payload.data_emissao = None;
        payload.beneficiario_final = Some(FinalBeneficiary {
            nome: Some("Dirceu Borboleta".to_string()),
            ..FinalBeneficiary::default()
        });
        if let Some(payer) = payload.pagador.as_mut() {
            payer.uf = None;
            payer.nome = None;
        }

        assert_eq!(
            find_missing_fields(&payload),
            vec![
                "dataEmissao",
                "pagador.nome",
                "pagador.uf",
                "beneficiarioFinal.tipoInscricao",
                "beneficiarioFinal.numeroInscricao",
            ]
        );
    }

    #[test]
    fn test_absent_nested_record_is_reported_once() {
        let mut payload = complete_payload();
        payload.pagador = None;
        assert_eq!(find_missing_fields(&payload), vec!["pagador"]);
    }

    #[test]
    fn test_validation_is_deterministic() {
        let mut payload = complete_payload();
        payload.valor_original = None;
        payload.codigo_aceite = None;
        let first = find_missing_fields(&payload);
        let second = find_missing_fields(&payload);
        assert_eq!(first, second);
        assert_eq!(first, vec!["valorOriginal", "codigoAceite"]);
    }

    #[test]
    fn test_validate_for_create_lists_paths() {
        let mut payload = complete_payload();
        payload.numero_carteira = None;
        let err = validate_for_create(&payload).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["numeroCarteira".to_string()])
        );
    }
}
