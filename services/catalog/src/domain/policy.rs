//! Access-control policy for product mutation.

use crate::domain::types::{Actor, Product};

/// Reads are unrestricted, including anonymous callers.
pub fn can_read(_actor: Option<&Actor>, _product: &Product) -> bool {
    true
}

/// Mutation is allowed for the product owner and for staff only.
///
/// Callers must reject a false result with Forbidden before applying any
/// field changes.
pub fn can_write(actor: &Actor, product: &Product) -> bool {
    actor.is_staff || product.owner_id == Some(actor.id)
}
