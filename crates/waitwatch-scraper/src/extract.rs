//! HTML extraction of a single city's wait-time page.
//!
//! The page layout this expects:
//! - `div.rpt_plan > div.rpt_recurrence > strong` holds the city name;
//! - `div.rpt_price` holds the city-wide average wait label;
//! - the first `table` lists one store per row as `<td>name</td><td>wait</td>`.

use indexmap::IndexMap;
use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;
use crate::types::CityWaitRecord;

const PLAN_SELECTOR: &str = "div.rpt_plan";
const RECURRENCE_SELECTOR: &str = "div.rpt_recurrence";
const CITY_NAME_SELECTOR: &str = "strong";
const PRICE_SELECTOR: &str = "div.rpt_price";
const TABLE_SELECTOR: &str = "table";
const ROW_SELECTOR: &str = "tr";
const CELL_SELECTOR: &str = "td";

/// Parses raw page HTML and extracts its wait-time record.
///
/// # Errors
///
/// Returns [`ExtractError::MissingElement`] if the page lacks one of the
/// containers listed in the module docs.
pub fn parse_city_page(html: &str) -> Result<CityWaitRecord, ExtractError> {
    let document = Html::parse_document(html);
    extract_city_waits(&document)
}

/// Extracts the city name, average wait label, and per-store wait labels
/// from an already-parsed city page.
///
/// Table rows are handled by how many of their first two cells have text:
/// both populated rows are recorded, fully empty rows (including header rows
/// made of `th` cells) are skipped silently, and rows with exactly one
/// populated cell are skipped with a warning.
///
/// # Errors
///
/// Returns [`ExtractError::MissingElement`] naming the first expected
/// container that is absent.
pub fn extract_city_waits(document: &Html) -> Result<CityWaitRecord, ExtractError> {
    let plan_sel = selector(PLAN_SELECTOR)?;
    let recurrence_sel = selector(RECURRENCE_SELECTOR)?;
    let city_name_sel = selector(CITY_NAME_SELECTOR)?;
    let price_sel = selector(PRICE_SELECTOR)?;
    let table_sel = selector(TABLE_SELECTOR)?;
    let row_sel = selector(ROW_SELECTOR)?;
    let cell_sel = selector(CELL_SELECTOR)?;

    let plan = first_match(document.root_element(), &plan_sel, PLAN_SELECTOR)?;
    let recurrence = first_match(plan, &recurrence_sel, RECURRENCE_SELECTOR)?;
    let city_name = element_text(first_match(recurrence, &city_name_sel, CITY_NAME_SELECTOR)?);

    let city_avg_wait = element_text(first_match(
        document.root_element(),
        &price_sel,
        PRICE_SELECTOR,
    )?);

    let table = first_match(document.root_element(), &table_sel, TABLE_SELECTOR)?;

    let mut locations = IndexMap::new();
    for (row_index, row) in table.select(&row_sel).enumerate() {
        let cells: Vec<String> = row.select(&cell_sel).take(2).map(element_text).collect();
        let first = cells.first().filter(|text| !text.is_empty());
        let second = cells.get(1).filter(|text| !text.is_empty());

        match (first, second) {
            (Some(location), Some(wait)) => {
                if let Some(previous) = locations.insert(location.clone(), wait.clone()) {
                    tracing::debug!(
                        city = %city_name,
                        location = %location,
                        previous = %previous,
                        replacement = %wait,
                        "store location listed twice; keeping the later wait"
                    );
                }
            }
            (None, None) => {}
            _ => {
                tracing::warn!(
                    city = %city_name,
                    row = row_index,
                    cells = ?cells,
                    "skipping table row with only one populated cell"
                );
            }
        }
    }

    tracing::debug!(
        city = %city_name,
        avg_wait = %city_avg_wait,
        locations = locations.len(),
        "extracted city wait times"
    );

    Ok(CityWaitRecord::new(city_name, city_avg_wait, locations))
}

fn selector(css: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::InvalidSelector {
        selector: css,
        reason: e.to_string(),
    })
}

fn first_match<'a>(
    scope: ElementRef<'a>,
    selector: &Selector,
    element: &'static str,
) -> Result<ElementRef<'a>, ExtractError> {
    scope
        .select(selector)
        .next()
        .ok_or(ExtractError::MissingElement { element })
}

/// Text content of an element with runs of whitespace collapsed.
fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
