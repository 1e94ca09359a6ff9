//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Narrator` - Turns a finished analysis into customer-facing prose

mod narrator;

pub use narrator::{NarrationError, Narrator};
