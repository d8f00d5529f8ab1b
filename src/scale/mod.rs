pub mod catalog;
pub mod rescale;
pub mod table;

pub use catalog::{scale_names, CatalogEntry, CATALOG};
pub use rescale::rescale;
pub use table::{ScaleTable, AMINO_ACIDS};
