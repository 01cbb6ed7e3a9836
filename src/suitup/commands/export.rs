use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::SuitRecord;
use crate::store::CatalogStore;

const HEADERS: [&str; 7] = [
    "Code",
    "Name",
    "Photo URL",
    "Purchase Date",
    "Suit Price",
    "Rental Price",
    "Return Date",
];

/// Export the whole catalog as CSV. An empty catalog is refused with a
/// user-visible error instead of producing an empty file.
pub fn run<S: CatalogStore>(store: &S, output: &Path, today: NaiveDate) -> Result<CmdResult> {
    let suits = helpers::load_catalog(store, today)?;

    let mut result = CmdResult::default();
    if suits.is_empty() {
        result.add_message(CmdMessage::error(
            "O catálogo está vazio. Nada para exportar.",
        ));
        return Ok(result);
    }

    let file = std::fs::File::create(output).map_err(CatalogError::Io)?;
    write_csv(file, &suits)?;

    result.output_paths.push(output.to_path_buf());
    result.add_message(CmdMessage::success(format!(
        "O catálogo de ternos foi exportado para {}.",
        output.display()
    )));
    Ok(result)
}

fn write_csv<W: Write>(writer: W, suits: &[SuitRecord]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADERS)?;
    for suit in suits {
        let suit_price = format!("{:.2}", suit.suit_price);
        let rental_price = format!("{:.2}", suit.rental_price);
        csv.write_record([
            suit.code.as_str(),
            suit.name.as_str(),
            suit.photo_url.as_str(),
            suit.purchase_date.as_str(),
            suit_price.as_str(),
            rental_price.as_str(),
            suit.return_date.as_deref().unwrap_or(""),
        ])?;
    }
    csv.flush().map_err(CatalogError::Io)?;
    Ok(())
}
