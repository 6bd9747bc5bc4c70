//! A micro ice cream cone assembly pipeline
//!
//! This crate turns an unordered list of ingredient choices into a correctly layered cone and
//! serves it, one line per layer, from the cone up.
//!
//! # Example
//!
//! ```
//! use micro_cone::chain::Customer;
//! use micro_cone::ingredient::Catalog;
//! use micro_cone::serving::{process_order, Script};
//!
//! let serving = process_order(
//!     Catalog::builtin(),
//!     &Script::default(),
//!     Customer::new("Sam"),
//!     &["Cherries", "ScoopOfChocolate", "WaffleCone", "CandySprinkles"],
//! )
//! .unwrap();
//!
//! assert_eq!(serving.layers()[0], "I've started with a nice, fresh waffle cone.");
//! assert_eq!(serving.layers()[3], "I've sprinkled on some candy sprinkles.");
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several key modules:
//!
//! - [`ingredient`]: Ingredient kinds, specs and the [`ingredient::Catalog`] resolving them
//! - [`order`]: The ordering engine, a stable sort of the request by ingredient kind
//! - [`chain`]: The linked chain of layers, its builder and the unwinder serving it
//! - [`serving`]: Whole order processing, from request to served lines
//!
//! # Data Flow
//!
//! ```text
//! catalog -> reorder -> build -> serve -> lines
//! ```
//!
//! 1. Every requested identifier is resolved in the [`ingredient::Catalog`]
//! 2. [`order::reorder`] puts bases first, then middles, then toppings, keeping the customer's
//!    order within a kind
//! 3. [`chain::build`] wraps one node per ingredient around a base node holding the customer
//! 4. [`chain::serve`] unwinds the chain from the tip back to the base and emits the layers
//!    base side first
//!
//! # Error Handling
//!
//! - [`CatalogError`]: unknown or badly registered ingredients
//! - [`CompositionError`]: failures while building the chain
//! - [`ServeError`]: a chain that does not end in its base
//! - [`OrderError`]: any of the above, failing a single order
//!
//! A failed order produces no lines at all.

mod error;

pub mod chain;
pub mod ingredient;
pub mod order;
pub mod serving;

pub use error::CatalogError;
pub use error::CompositionError;
pub use error::OrderError;
pub use error::ServeError;
