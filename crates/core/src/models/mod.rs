pub mod asset;
pub mod chart;
pub mod range;
pub mod settings;
pub mod snapshot;
pub mod summary;
pub mod transaction;
