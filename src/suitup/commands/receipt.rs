use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::company::CompanyProfile;
use crate::error::{CatalogError, Result};
use crate::model::SuitRecord;
use crate::store::CatalogStore;

/// Write a plain-text rental receipt for a suit.
///
/// Precondition: the suit must carry a rental attachment. Asking for a
/// receipt on a suit that was never rented is an error and changes nothing.
pub fn run<S: CatalogStore>(
    store: &S,
    code: &str,
    output: Option<&Path>,
    today: NaiveDate,
) -> Result<CmdResult> {
    let suits = helpers::load_catalog(store, today)?;
    let position = helpers::position_by_code(&suits, code)?;
    let suit = &suits[position];

    if !suit.has_rental_history() {
        return Err(CatalogError::Api(format!(
            "Não há informações de aluguel para {}.",
            suit.name
        )));
    }

    let profile = store.load_company()?;
    let text = render(suit, &profile, today);

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_filename(suit));
    std::fs::write(&path, text).map_err(CatalogError::Io)?;

    let mut result = CmdResult::default();
    result.output_paths.push(path.clone());
    result.add_message(CmdMessage::success(format!(
        "O recibo para {} foi gerado em {}.",
        suit.name,
        path.display()
    )));
    Ok(result)
}

fn default_filename(suit: &SuitRecord) -> PathBuf {
    let customer = suit
        .customer_name
        .as_deref()
        .unwrap_or("cliente")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    PathBuf::from(format!("recibo_aluguel_{}_{}.txt", suit.code, customer))
}

/// Render the receipt body. Pure, so the content is testable without
/// touching the filesystem.
pub fn render(suit: &SuitRecord, profile: &CompanyProfile, issued_on: NaiveDate) -> String {
    let mut out = String::new();
    let rule = "=".repeat(46);

    out.push_str(&rule);
    out.push('\n');
    out.push_str(profile.display_name());
    out.push('\n');
    if let (true, Some(cnpj)) = (profile.show_cnpj_on_receipt, profile.cnpj.as_deref()) {
        out.push_str(&format!("CNPJ: {}\n", cnpj));
    }
    if profile.show_address_on_receipt {
        let address = profile.address_line();
        if !address.is_empty() {
            out.push_str(&address);
            out.push('\n');
        }
    }
    if !profile.phone.is_empty() || !profile.email.is_empty() {
        let contact: Vec<&str> = [profile.phone.as_str(), profile.email.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        out.push_str(&contact.join(" - "));
        out.push('\n');
    }
    out.push('\n');
    out.push_str("Comprovante de Aluguel\n");
    out.push_str(&format!("Emitido em: {}\n", issued_on.format("%d/%m/%Y")));
    out.push_str(&rule);
    out.push('\n');

    let na = "N/A".to_string();
    let rows = [
        ("Terno", format!("{} (Cód: {})", suit.name, suit.code)),
        ("Preço do Aluguel", format_brl(suit.rental_price)),
        ("Cliente", suit.customer_name.clone().unwrap_or_else(|| na.clone())),
        (
            "Telefone do Cliente",
            suit.customer_phone.clone().unwrap_or_else(|| na.clone()),
        ),
        (
            "Email do Cliente",
            suit.customer_email.clone().unwrap_or_else(|| na.clone()),
        ),
        (
            "Data de Entrega",
            suit.delivery_date.clone().unwrap_or_else(|| na.clone()),
        ),
        (
            "Data de Devolução",
            suit.return_date.clone().unwrap_or_else(|| na.clone()),
        ),
        (
            "Observações",
            suit.observations
                .clone()
                .unwrap_or_else(|| "Nenhuma".to_string()),
        ),
    ];

    for (label, value) in rows {
        out.push_str(&format!("{:<20} {}\n", format!("{}:", label), value));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

fn format_brl(amount: f64) -> String {
    format!("R$ {:.2}", amount).replace('.', ",")
}
