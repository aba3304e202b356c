//! Map a registration payload onto printable slip fields. No network.

use bb_cobranca::prelude::*;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let payload: TicketPayload = serde_json::from_value(json!({
        "numeroConvenio": 3128557,
        "dataVencimento": "15.03.2026",
        "valorOriginal": 349.9,
        "numeroCarteira": 17,
        "numeroVariacaoCarteira": 35,
        "codigoModalidade": 1,
        "dataEmissao": "10.03.2026",
        "codigoAceite": "S",
        "codigoTipoTitulo": 2,
        "indicadorPermissaoRecebimentoParcial": "N",
        "numeroTituloCliente": ticket_id(3128557, "0000003339")?,
        "pagador": {
            "tipoInscricao": 1,
            "numeroInscricao": 97965940132u64,
            "nome": "Odorico Paraguassu",
            "endereco": "Avenida Dias Gomes 1970",
            "cep": 77458000,
            "cidade": "Sucupira",
            "bairro": "Centro",
            "uf": "TO"
        },
        "beneficiarioFinal": {
            "tipoInscricao": 2,
            "numeroInscricao": 98959112000179u64,
            "nome": "Dirceu Borboleta"
        }
    }))?;

    let layout = generate_layout(&payload)?;

    println!("{} | {}", layout.bank_code, layout.document_number);
    println!("Vencimento:   {}", layout.due_date_display());
    println!("Emissão:      {}", layout.issue_date_display());
    println!("Espécie doc.: {}  Aceite: {}", layout.document_kind, layout.acceptance);
    println!("Carteira:     {}/{}", layout.wallet, layout.wallet_variation);
    println!("Valor:        R$ {}", layout.amount_display);
    println!(
        "Pagador:      {} ({})",
        layout.payer.name, layout.payer.document
    );
    if let Some(address) = &layout.payer.address {
        println!("              {}", address);
    }
    println!(
        "Beneficiário: {} ({})",
        layout.final_beneficiary.name, layout.final_beneficiary.document
    );
    println!();
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}
