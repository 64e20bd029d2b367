pub mod args;
pub mod document;
pub mod engine;
pub mod errors;
pub mod report;

use crate::args::Args;
use crate::document::load_document;
use crate::engine::{process_sales, Catalogue};
use crate::errors::RunError;
use crate::report::Report;
use std::time::Instant;
use tracing::info;

/// Prices the sales record against the price catalogue named in `args`.
///
/// Either document failing to load aborts the run; the catalogue is loaded
/// first so a bad catalogue never reads the sales file. Everything else that
/// goes wrong is logged, and the returned report carries the error count.
pub fn run(args: &Args) -> Result<Report, RunError> {
    let started = Instant::now();

    let price_data =
        load_document(&args.price_catalogue_file).ok_or(RunError::CatalogueUnavailable)?;
    let sales_data = load_document(&args.sales_record_file).ok_or(RunError::SalesUnavailable)?;

    let catalogue = Catalogue::from_document(&price_data);
    info!(products = catalogue.len(), "price catalogue loaded");

    let tally = process_sales(&catalogue, &sales_data);

    Ok(Report::new(tally, started.elapsed()))
}
