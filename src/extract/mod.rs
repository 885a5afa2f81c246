mod aggregates;
mod fields;
pub mod tournament;

use anyhow::Result;
use log::{error, info};

use crate::workbook::{Sheet, SheetSource};

pub use aggregates::{extract_all_players, extract_champions};
pub use fields::generic_value;
pub use tournament::{extract_score_rows, extract_tournament_sheet};

/// Read one sheet and run `extract` over it.
///
/// Any failure, whether reading the sheet or converting its rows, is logged
/// and yields an empty result so the remaining sheets still get processed.
pub fn extract_sheet<S, T, F>(source: &mut S, sheet_name: &str, extract: F) -> Vec<T>
where
    S: SheetSource + ?Sized,
    F: FnOnce(&Sheet) -> Result<Vec<T>>,
{
    info!("Processing sheet: {}", sheet_name);

    let outcome = source
        .read_sheet(sheet_name)
        .and_then(|sheet| extract(&sheet));

    match outcome {
        Ok(records) => {
            info!("  Extracted {} records", records.len());
            records
        }
        Err(e) => {
            error!("  Error processing {}: {:#}", sheet_name, e);
            Vec::new()
        }
    }
}
