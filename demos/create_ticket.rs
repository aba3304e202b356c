//! Register a ticket due in five days, then look it up and cancel it.

use bb_cobranca::prelude::*;
use chrono::{Days, Local};
use serde_json::json;
use tracing_subscriber::EnvFilter;

const NUMERO_CONVENIO: u64 = 3128557;
const SYSTEM_IDENTIFIER: &str = "0000003337";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = BoletoClientBuilder::from_env()?
        .numero_convenio(NUMERO_CONVENIO)
        .verbose(true)
        .build()?;

    let today = Local::now().date_naive();
    let due = today.checked_add_days(Days::new(5)).unwrap_or(today);

    let payload = json!({
        "dataVencimento": due.format("%d.%m.%Y").to_string(),
        "valorOriginal": 123.45,
        "numeroCarteira": 17,
        "numeroVariacaoCarteira": 35,
        "codigoModalidade": 1,
        "dataEmissao": today.format("%d.%m.%Y").to_string(),
        "codigoAceite": "S",
        "codigoTipoTitulo": 2,
        "indicadorPermissaoRecebimentoParcial": "N",
        "numeroTituloCliente": ticket_id(NUMERO_CONVENIO, SYSTEM_IDENTIFIER)?,
        "pagador": {
            "tipoInscricao": 1,
            "numeroInscricao": 97965940132u64,
            "nome": "Odorico Paraguassu",
            "endereco": "Avenida Dias Gomes 1970",
            "cep": 77458000,
            "cidade": "Sucupira",
            "bairro": "Centro",
            "uf": "TO",
            "telefone": "63987654321"
        },
        "beneficiarioFinal": {
            "tipoInscricao": 2,
            "numeroInscricao": 98959112000179u64,
            "nome": "Dirceu Borboleta"
        }
    });

    let tickets = client.tickets();

    match tickets.create_from_value(payload).await? {
        ApiOutcome::Success(response) => println!("Created: {}", response.body),
        other => {
            eprintln!("[ERROR] {} {}", other.status(), other.response().body);
            return Ok(());
        }
    }

    let shown = tickets.show(NUMERO_CONVENIO, SYSTEM_IDENTIFIER).await?;
    println!("Ticket ({}): {}", shown.status(), shown.response().body);

    let cancelled = tickets.destroy(NUMERO_CONVENIO, SYSTEM_IDENTIFIER).await?;
    println!("Cancelled ({}): {}", cancelled.status(), cancelled.response().body);
    Ok(())
}
