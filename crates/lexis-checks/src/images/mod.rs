mod local;
mod remote;
mod tree;

pub use local::{CategoryCountsCheck, FilenamesCheck, TotalCountCheck};
pub use remote::RemoteImagesCheck;
pub use tree::ImageTree;
