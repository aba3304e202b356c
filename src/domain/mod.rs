//! Domain modules organized as vertical slices.
//!
//! - `ticket` — registration payload, validation, listing filters, request
//!   composition and the `Tickets` sub-client
//! - `layout` — print-ready mapping of a registration payload

pub mod layout;
pub mod ticket;
