use crate::sink::OrderSink;
use micro_cone::OrderError;
use micro_cone::chain::Customer;
use micro_cone::ingredient::Catalog;
use micro_cone::serving::{Script, Serving, process_order};
use std::io;
use thiserror::Error;
use tracing::{error, info, info_span};

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("order for '{customer}' failed: {source}")]
    Order { customer: String, source: OrderError },

    #[error("failed to hand over the order: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

/// A shoppe employee who takes orders, builds the cones and serves them.
///
/// An engineer keeps nothing between orders, every call to [`Engineer::take_order`] is a
/// separate order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engineer {
    name: String,
}

impl Engineer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builds and serves the cone for one order.
    ///
    /// # Errors
    /// [`OrderError`] when the order can't be served.
    pub fn take_order<S: AsRef<str>>(
        &self,
        catalog: &Catalog,
        script: &Script,
        customer: Customer,
        ingredients: &[S],
    ) -> Result<Serving, OrderError> {
        let span = info_span!("order", engineer = %self.name, customer = customer.name());
        let _guard = span.enter();

        match process_order(catalog, script, customer, ingredients) {
            Ok(serving) => {
                info!(layers = serving.layers().len(), "cone is ready");
                Ok(serving)
            }
            Err(e) => {
                error!(cause = %e, "can't make this cone");
                Err(e)
            }
        }
    }

    /// Takes the order and hands every line to `sink`. Nothing reaches the sink if the order
    /// fails.
    ///
    /// # Errors
    /// [`DeliveryError::Order`] when the order can't be served, [`DeliveryError::Io`] when the sink
    /// fails.
    pub fn serve_to<S: AsRef<str>>(
        &self,
        catalog: &Catalog,
        script: &Script,
        customer: Customer,
        ingredients: &[S],
        sink: &mut impl OrderSink,
    ) -> Result<(), DeliveryError> {
        let name = customer.name().to_owned();
        let serving = self
            .take_order(catalog, script, customer, ingredients)
            .map_err(|source| DeliveryError::Order { customer: name, source })?;

        for line in serving.lines() {
            sink.emit(line)?;
        }
        sink.finish()?;
        Ok(())
    }
}
