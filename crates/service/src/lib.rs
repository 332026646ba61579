//! Service layer: filtered CRUD over the ledger entities.
//! - `filter` compiles typed filters into parameterized conditions.
//! - `resource` holds the generic create/list/update/delete operations.
//! - `resources` plugs each ledger entity into that abstraction.

pub mod errors;
pub mod filter;
pub mod lookups;
pub mod resource;
pub mod resources;
#[cfg(test)]
pub mod test_support;
