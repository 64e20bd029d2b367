use crate::engine::SalesTally;
use crate::errors::ReportError;
use std::fmt;
use std::fmt::Formatter;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};

/// Name of the report file written to the working directory on every run.
pub const REPORT_FILE: &str = "SalesResults.txt";

/// The outcome of a run, rendered as a fixed-layout text block.
#[derive(Debug, PartialEq)]
pub struct Report {
    pub total_cost: f64,
    pub error_count: usize,
    pub elapsed: Duration,
}

impl Report {
    pub fn new(tally: SalesTally, elapsed: Duration) -> Self {
        Self {
            total_cost: tally.total_cost,
            error_count: tally.error_count,
            elapsed,
        }
    }

    /// Prints the report and then overwrites `path` with the same text.
    ///
    /// A failed write is logged and returned, but the console copy has
    /// already been delivered by then.
    pub fn emit(&self, path: &Path) -> Result<(), ReportError> {
        let rendered = self.to_string();
        println!("{}", rendered);

        match fs::write(path, rendered) {
            Ok(()) => {
                info!(path = %path.display(), "report written");
                Ok(())
            }
            Err(source) => {
                let err = ReportError::Write {
                    path: path.to_path_buf(),
                    source,
                };
                error!("{}", err);
                Err(err)
            }
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resultados de la Computación de Ventas")?;
        writeln!(f, "-------------------------------------")?;
        writeln!(f, "Costo Total: ${:.2}", self.total_cost)?;
        writeln!(f, "Errores encontrados: {}", self.error_count)?;
        writeln!(
            f,
            "Tiempo de Ejecución: {:.2} segundos",
            self.elapsed.as_secs_f64()
        )
    }
}
