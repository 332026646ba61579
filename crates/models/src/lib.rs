pub mod errors;
pub mod db;
pub mod fields;
pub mod asset_type;
pub mod asset;
pub mod contribution;
pub mod dividend;
pub mod financial_category;
pub mod movement;

#[cfg(test)]
mod tests;
