use crate::engineer::{DeliveryError, Engineer};
use crate::sink::OrderSink;
use micro_cone::chain::Customer;
use micro_cone::ingredient::Catalog;
use micro_cone::serving::Script;
use std::io;
use thiserror::Error;
use tracing::warn;

/// One of the shoppe's sample orders.
#[derive(Debug, Clone, Copy)]
pub struct DemoOrder {
    pub engineer: &'static str,
    pub customer: &'static str,
    pub ingredients: &'static [&'static str],
}

/// Ingredients are listed the way customers say them, not the way cones are built.
pub const DEMO_ORDERS: [DemoOrder; 2] = [
    DemoOrder {
        engineer: "Julie",
        customer: "Sam",
        ingredients: &["Cherries", "ScoopOfChocolate", "WaffleCone", "CandySprinkles"],
    },
    DemoOrder {
        engineer: "Ralph",
        customer: "Martha",
        ingredients: &["ScoopOfChocolate", "ScoopOfTuna", "SugarCone", "MandMs"],
    },
];

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("{} of {total} orders failed", .failed.len())]
    OrdersFailed { failed: Vec<DeliveryError>, total: usize },

    #[error("failed to hand over the orders: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

/// Serves every demo order, one after another.
///
/// A failed order only aborts itself, the next order is still served.
///
/// # Errors
/// [`DemoError::OrdersFailed`] with every failed order once all orders were tried, or
/// [`DemoError::Io`] as soon as the sink fails.
pub fn open_for_business(catalog: &Catalog, script: &Script, sink: &mut impl OrderSink) -> Result<(), DemoError> {
    let mut failed = vec![];

    for order in DEMO_ORDERS {
        let customer = Customer::new(order.customer);
        match Engineer::new(order.engineer).serve_to(catalog, script, customer, order.ingredients, sink) {
            Ok(()) => {}
            Err(DeliveryError::Io { source }) => return Err(DemoError::Io { source }),
            Err(e @ DeliveryError::Order { .. }) => {
                warn!(cause = %e, "skip failed order");
                failed.push(e);
            }
        }
    }

    if failed.is_empty() { Ok(()) } else { Err(DemoError::OrdersFailed { failed, total: DEMO_ORDERS.len() }) }
}
