//! The micro ice cream shoppe
//!
//! Puts a face on [`micro_cone`]: named engineers take orders, a JSON config extends the catalog
//! and rewords the script, and served lines go to an [`sink::OrderSink`].
//!
//! - [`config`]: The optional JSON configuration
//! - [`engineer`]: Engineers taking and serving orders
//! - [`sink`]: Where served lines are written
//! - [`demo`]: The shoppe's sample orders

pub mod config;
pub mod demo;
pub mod engineer;
pub mod sink;

pub use config::ShoppeConfig;
pub use engineer::Engineer;
