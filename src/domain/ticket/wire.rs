//! Wire types for ticket registration (`POST /boletos`).
//!
//! Every field is optional so an incomplete payload can be represented and
//! reported by the validator instead of failing deserialization. Keys the SDK
//! does not model (discounts, interest, `pagador.telefone`, ...) are kept in
//! `extra` and sent unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a ticket registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_convenio: Option<u64>,
    /// `dd.mm.yyyy`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_vencimento: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::shared::serde_util::decimal_number_option"
    )]
    pub valor_original: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_carteira: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_variacao_carteira: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_modalidade: Option<u8>,
    /// `dd.mm.yyyy`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_emissao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_aceite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_tipo_titulo: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicador_permissao_recebimento_parcial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_titulo_cliente: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagador: Option<Payer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiario_final: Option<FinalBeneficiary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The party who pays the ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payer {
    /// 1 = CPF (person), 2 = CNPJ (company).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_inscricao: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_inscricao: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cep: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bairro: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uf: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The party who ultimately receives the funds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalBeneficiary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_inscricao: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_inscricao: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TicketPayload {
    /// Whether the wire key `field` is set.
    pub(crate) fn has_field(&self, field: &str) -> bool {
        match field {
            "numeroConvenio" => self.numero_convenio.is_some(),
            "dataVencimento" => self.data_vencimento.is_some(),
            "valorOriginal" => self.valor_original.is_some(),
            "numeroCarteira" => self.numero_carteira.is_some(),
            "numeroVariacaoCarteira" => self.numero_variacao_carteira.is_some(),
            "codigoModalidade" => self.codigo_modalidade.is_some(),
            "dataEmissao" => self.data_emissao.is_some(),
            "codigoAceite" => self.codigo_aceite.is_some(),
            "codigoTipoTitulo" => self.codigo_tipo_titulo.is_some(),
            "indicadorPermissaoRecebimentoParcial" => {
                self.indicador_permissao_recebimento_parcial.is_some()
            }
            "numeroTituloCliente" => self.numero_titulo_cliente.is_some(),
            "pagador" => self.pagador.is_some(),
            "beneficiarioFinal" => self.beneficiario_final.is_some(),
            _ => false,
        }
    }
}

impl Payer {
    pub(crate) fn has_field(&self, field: &str) -> bool {
        match field {
            "tipoInscricao" => self.tipo_inscricao.is_some(),
            "numeroInscricao" => self.numero_inscricao.is_some(),
            "nome" => self.nome.is_some(),
            "endereco" => self.endereco.is_some(),
            "cep" => self.cep.is_some(),
            "cidade" => self.cidade.is_some(),
            "bairro" => self.bairro.is_some(),
            "uf" => self.uf.is_some(),
            _ => false,
        }
    }
}

impl FinalBeneficiary {
    pub(crate) fn has_field(&self, field: &str) -> bool {
        match field {
            "tipoInscricao" => self.tipo_inscricao.is_some(),
            "numeroInscricao" => self.numero_inscricao.is_some(),
            "nome" => self.nome.is_some(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_payload_deserialize_keeps_unknown_keys() {
        let value = json!({
            "numeroConvenio": 3128557,
            "valorOriginal": 123.45,
            "pagador": { "nome": "Odorico Paraguassu", "cep": 77458000, "telefone": "63987654321" },
            "jurosMora": { "tipo": 0 }
        });
        let payload: TicketPayload = serde_json::from_value(value).unwrap();

        assert_eq!(payload.numero_convenio, Some(3128557));
        assert_eq!(payload.valor_original, Some(Decimal::from_str("123.45").unwrap()));
        assert!(payload.extra.contains_key("jurosMora"));
        let payer = payload.pagador.as_ref().unwrap();
        assert_eq!(payer.cep, Some(77458000));
        assert_eq!(payer.extra["telefone"], "63987654321");
        assert!(payload.beneficiario_final.is_none());
    }

    #[test]
    fn test_payload_serialize_skips_unset_fields() {
        let payload = TicketPayload {
            numero_convenio: Some(3128557),
            valor_original: Some(Decimal::from_str("10.5").unwrap()),
            ..TicketPayload::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({ "numeroConvenio": 3128557, "valorOriginal": 10.5 }));
    }

    #[test]
    fn test_null_counts_as_absent() {
        let payload: TicketPayload =
            serde_json::from_value(json!({ "dataEmissao": null, "pagador": null })).unwrap();
        assert!(!payload.has_field("dataEmissao"));
        assert!(!payload.has_field("pagador"));
    }

    #[test]
    fn test_amount_accepts_number_or_string() {
        let payload: TicketPayload =
            serde_json::from_value(json!({ "valorOriginal": 10.5 })).unwrap();
        assert_eq!(payload.valor_original, Some(Decimal::from_str("10.5").unwrap()));
        assert!(payload.has_field("valorOriginal"));

        let payload: TicketPayload =
            serde_json::from_value(json!({ "valorOriginal": "349.90" })).unwrap();
        assert_eq!(payload.valor_original, Some(Decimal::from_str("349.90").unwrap()));
    }

    #[test]
    fn test_extra_keys_are_not_fields() {
        let payload: TicketPayload =
            serde_json::from_value(json!({ "jurosMora": { "tipo": 0 } })).unwrap();
        assert!(!payload.has_field("jurosMora"));
    }
}
