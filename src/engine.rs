use crate::document::{coerce_decimal, field, field_text};
use crate::errors::{CatalogueError, SaleError};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A Catalogue maps product titles to their unit price.
///
/// It is built from a parsed price catalogue document, which may hold either
/// a list of entries or a single entry. Entries that cannot be read are
/// logged and skipped; a later entry with the same title replaces the earlier
/// one.
#[derive(Debug, Default, PartialEq)]
pub struct Catalogue {
    prices: HashMap<String, f64>,
}

impl Catalogue {
    /// Builds a catalogue from a parsed document, tolerating bad entries.
    pub fn from_document(document: &Value) -> Self {
        let mut catalogue = Catalogue::default();

        match document {
            Value::Array(entries) => {
                for entry in entries {
                    // A single bad entry shouldn't cost us the rest of the
                    // catalogue, so log it and keep moving.
                    if let Err(err) = catalogue.insert_entry(entry) {
                        warn!("{}", err);
                    }
                }
            }
            Value::Object(_) => {
                if let Err(err) = catalogue.insert_single_entry(document) {
                    warn!("{}", err);
                }
            }
            _ => warn!("{}", CatalogueError::UnexpectedFormat),
        }

        debug!(products = catalogue.len(), "price catalogue built");
        catalogue
    }

    /// Inserts one catalogue entry.
    ///
    /// The entry MUST be an object holding a text `title` and a `price` that
    /// is either a number or a numeric string.
    pub fn insert_entry(&mut self, entry: &Value) -> Result<(), CatalogueError> {
        if !entry.is_object() {
            return Err(CatalogueError::NotAnEntry);
        }

        let (title, price) = match (field_text(entry, "title"), field(entry, "price")) {
            (Some(title), Some(price)) => (title, price),
            _ => return Err(CatalogueError::MissingField),
        };

        let price =
            coerce_decimal(price).ok_or_else(|| CatalogueError::InvalidPrice(title.to_string()))?;

        self.prices.insert(title.to_string(), price);
        Ok(())
    }

    /// Inserts the entry of a catalogue document that is one object rather
    /// than a list. Rejections use the single-entry messages.
    pub fn insert_single_entry(&mut self, entry: &Value) -> Result<(), CatalogueError> {
        self.insert_entry(entry).map_err(|err| match err {
            CatalogueError::MissingField => CatalogueError::SingleEntryMissingField,
            CatalogueError::InvalidPrice(title) => CatalogueError::SingleEntryInvalidPrice(title),
            other => other,
        })
    }

    /// Looks up the unit price of a product.
    pub fn price(&self, title: &str) -> Option<f64> {
        self.prices.get(title).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl From<&Value> for Catalogue {
    fn from(document: &Value) -> Self {
        Catalogue::from_document(document)
    }
}

/// Running totals for a pass over the sales records.
#[derive(Debug, Default, PartialEq)]
pub struct SalesTally {
    /// Sum of `price * quantity` over every accepted record. Never rounded.
    pub total_cost: f64,

    /// Number of records rejected for any reason.
    pub error_count: usize,
}

impl SalesTally {
    /// Prices a single sale record against the catalogue and adds it to the
    /// running total.
    ///
    /// The record MUST be an object with a text `Product` that exists in the
    /// catalogue and a numeric (or numeric string) `Quantity`. Rejected
    /// records leave the tally untouched; counting them is up to the caller.
    pub fn process_sale(&mut self, catalogue: &Catalogue, record: &Value) -> Result<(), SaleError> {
        if !record.is_object() {
            return Err(SaleError::NotARecord);
        }

        let (product, quantity) = match (field_text(record, "Product"), field(record, "Quantity")) {
            (Some(product), Some(quantity)) => (product, quantity),
            _ => return Err(SaleError::MissingField),
        };

        let quantity = coerce_decimal(quantity)
            .ok_or_else(|| SaleError::InvalidQuantity(product.to_string()))?;

        let price = catalogue
            .price(product)
            .ok_or_else(|| SaleError::UnknownProduct(product.to_string()))?;

        self.total_cost += price * quantity;
        Ok(())
    }
}

/// Folds a parsed sales document into a total cost and an error count.
///
/// A document that isn't a list is reported but yields an empty tally with no
/// errors counted. Within a list every rejected record is logged and counted.
pub fn process_sales(catalogue: &Catalogue, sales: &Value) -> SalesTally {
    let mut tally = SalesTally::default();

    let records = match sales.as_array() {
        Some(records) => records,
        None => {
            warn!("El registro de ventas no está en formato de lista.");
            return tally;
        }
    };

    for record in records {
        if let Err(err) = tally.process_sale(catalogue, record) {
            warn!("{}", err);
            tally.error_count += 1;
        }
    }

    debug!(
        records = records.len(),
        errors = tally.error_count,
        "sales records processed"
    );
    tally
}
