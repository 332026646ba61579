//! The six ledger resources.
pub mod asset_types;
pub mod assets;
pub mod categories;
pub mod contributions;
pub mod dividends;
pub mod movements;

pub use asset_types::AssetTypes;
pub use assets::Assets;
pub use categories::Categories;
pub use contributions::Contributions;
pub use dividends::Dividends;
pub use movements::Movements;
