pub mod reader;
pub mod writer;

pub use reader::{FastaReader, FastaRecord};
pub use writer::{write_profiles, OutputFormat};
