pub mod computer;
pub mod types;

pub use computer::ProfileComputer;
pub use types::{Profile, ProfileReport, UnknownResiduePolicy};
