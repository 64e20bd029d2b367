use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a structured document could not be turned into a value tree.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error al leer {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error al leer {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reasons a single price catalogue entry is skipped.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogueError {
    #[error("Entrada del catálogo inválida, se esperaba un objeto, se omite.")]
    NotAnEntry,

    #[error("Falta 'title' o 'price' en un producto, se omite.")]
    MissingField,

    #[error("Precio inválido para el producto '{0}', se omite.")]
    InvalidPrice(String),

    #[error("El formato del catálogo de precios no es el esperado.")]
    UnexpectedFormat,

    #[error("El catálogo no contiene 'title' o 'price' en el producto.")]
    SingleEntryMissingField,

    #[error("Precio inválido para el producto '{0}'.")]
    SingleEntryInvalidPrice(String),
}

/// Reasons a single sale record is rejected. Every one of these is counted.
#[derive(Debug, Error, PartialEq)]
pub enum SaleError {
    #[error("Registro de venta inválido, se esperaba un diccionario.")]
    NotARecord,

    #[error("Falta 'Product' o 'Quantity' en el registro de venta.")]
    MissingField,

    #[error("Cantidad inválida para el producto '{0}'.")]
    InvalidQuantity(String),

    #[error("Producto '{0}' no encontrado en el catálogo.")]
    UnknownProduct(String),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Error al escribir en {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Conditions that abort a run.
#[derive(Debug, Error, PartialEq)]
pub enum RunError {
    #[error("Error al cargar el catálogo de precios. Saliendo.")]
    CatalogueUnavailable,

    #[error("Error al cargar el registro de ventas. Saliendo.")]
    SalesUnavailable,
}
