//! Shared pieces used by every crate in the workspace: logging setup, the
//! health payload, and serde helpers for HTML form input.

pub mod de;
pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }
}
