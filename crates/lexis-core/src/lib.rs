pub mod category;
pub mod dataset;
pub mod entry;
pub mod error;
pub mod level;
pub mod report;
pub mod text;

pub use category::CATEGORIES;
pub use dataset::{CategoryRef, Dataset, DatasetSummary};
pub use entry::EntryRef;
pub use error::LoadError;
pub use level::Level;
pub use report::{CheckReport, RunReport, Violation, ViolationKind};
