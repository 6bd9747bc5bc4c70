//! The layered cone: a singly linked chain of nodes anchored at its tip.
//!
//! The chain starts with a base node carrying the [`Customer`]. Every ingredient wraps the current
//! tip, so each node only knows its immediate predecessor:
//!
//! ```text
//! customer <- cone <- scoop <- extra 1 <- extra 2 ...
//!                                            ^ tip
//! ```
//!
//! Links never change once made, which is why ingredients must be put in assembly order
//! (see [`crate::order::reorder`]) before the chain is built.

mod decorator;
mod unwind;

pub use decorator::Decorator;
pub use unwind::serve;

use crate::error::CompositionError;
use crate::ingredient::{Catalog, IngredientSpec};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// The customer an order is built for, an opaque value holder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Customer {
    name: String,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// What a single node of the chain holds.
#[derive(Debug, Clone)]
pub enum Layer {
    Base(Customer),
    Ingredient(Arc<IngredientSpec>),
}

/// One node of the chain.
///
/// A base node has no previous node. Every other node exclusively owns its previous node, and
/// records its distance from the base in `depth`.
#[derive(Debug)]
pub struct ChainNode {
    layer: Layer,
    previous: Option<Box<ChainNode>>,
    depth: usize,
}

impl ChainNode {
    pub fn base(customer: Customer) -> Self {
        Self { layer: Layer::Base(customer), previous: None, depth: 0 }
    }

    /// Makes a new tip on top of `self`.
    pub fn wrap(self, spec: Arc<IngredientSpec>) -> Self {
        let depth = self.depth + 1;
        Self { layer: Layer::Ingredient(spec), previous: Some(Box::new(self)), depth }
    }

    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    pub fn previous(&self) -> Option<&ChainNode> {
        self.previous.as_deref()
    }

    /// Number of ingredient layers below and including this node.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_base(&self) -> bool {
        matches!(self.layer, Layer::Base(_))
    }

    pub fn spec(&self) -> Option<&IngredientSpec> {
        match &self.layer {
            Layer::Ingredient(spec) => Some(&**spec),
            Layer::Base(_) => None,
        }
    }

    /// Follows the chain down to the base and returns its customer.
    pub fn customer(&self) -> Option<&Customer> {
        let mut current = self;
        for _ in 0..=self.depth {
            match (&current.layer, current.previous()) {
                (Layer::Base(customer), None) => return Some(customer),
                (Layer::Ingredient(_), Some(previous)) => current = previous,
                _ => return None,
            }
        }
        None
    }

    #[cfg(test)]
    pub(crate) fn from_raw_parts(layer: Layer, previous: Option<ChainNode>, depth: usize) -> Self {
        Self { layer, previous: previous.map(Box::new), depth }
    }
}

// unlink iteratively, the default drop would recurse once per layer
impl Drop for ChainNode {
    fn drop(&mut self) {
        let mut next = self.previous.take();
        while let Some(mut node) = next {
            next = node.previous.take();
        }
    }
}

/// Builds the chain for `customer` from identifiers already in assembly order, returns the tip.
///
/// # Errors
/// [`CompositionError::Lookup`] if an identifier is not in `catalog`.
pub fn build<S: AsRef<str>>(
    catalog: &Catalog,
    customer: Customer,
    sorted: &[S],
) -> Result<ChainNode, CompositionError> {
    let specs = sorted.iter().map(|id| catalog.lookup(id.as_ref())).collect::<Result<Vec<_>, _>>()?;
    Ok(build_from_specs(customer, &specs))
}

pub(crate) fn build_from_specs(customer: Customer, specs: &[Arc<IngredientSpec>]) -> ChainNode {
    specs.iter().fold(ChainNode::base(customer), |tip, spec| {
        trace!(id = spec.id(), depth = tip.depth() + 1, "wrap layer");
        spec.decorate(tip)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::ingredient::IngredientKind;

    fn ids(tip: &ChainNode) -> Vec<String> {
        let mut ids = vec![];
        let mut current = Some(tip);
        while let Some(node) = current {
            if let Some(spec) = node.spec() {
                ids.push(spec.id().to_owned());
            }
            current = node.previous();
        }
        ids
    }

    #[test]
    fn build_links_tip_to_base() {
        let tip = build(Catalog::builtin(), Customer::new("Sam"), &["WaffleCone", "ScoopOfChocolate", "Cherries"])
            .unwrap();

        assert_eq!(tip.depth(), 3);
        assert_eq!(tip.spec().map(IngredientSpec::kind), Some(IngredientKind::Topping));
        assert_eq!(ids(&tip), vec!["Cherries", "ScoopOfChocolate", "WaffleCone"]);
        assert_eq!(tip.customer(), Some(&Customer::new("Sam")));
    }

    #[test]
    fn build_keeps_the_given_order() {
        let tip = build(Catalog::builtin(), Customer::new("Sam"), &["Cherries", "WaffleCone"]).unwrap();
        assert_eq!(ids(&tip), vec!["WaffleCone", "Cherries"]);
    }

    #[test]
    fn empty_order_is_just_the_base() {
        let tip = build::<&str>(Catalog::builtin(), Customer::new("Martha"), &[]).unwrap();
        assert!(tip.is_base());
        assert_eq!(tip.depth(), 0);
        assert!(tip.previous().is_none());
        assert_eq!(tip.customer().map(Customer::name), Some("Martha"));
    }

    #[test]
    fn build_unknown_ingredient() {
        let err = build(Catalog::builtin(), Customer::new("Sam"), &["WaffleCone", "Pickles"]).unwrap_err();
        assert_eq!(err, CompositionError::Lookup { source: CatalogError::unknown_ingredient("Pickles") });
    }

    #[test]
    fn each_decoration_becomes_the_tip() {
        let catalog = Catalog::builtin();
        let cone = catalog.lookup("SugarCone").unwrap();
        let scoop = catalog.lookup("ScoopOfTuna").unwrap();
        let extra = catalog.lookup("MandMs").unwrap();

        let tip = extra.decorate(scoop.decorate(cone.decorate(ChainNode::base(Customer::new("Martha")))));
        assert_eq!(tip.depth(), 3);
        assert_eq!(ids(&tip), vec!["MandMs", "ScoopOfTuna", "SugarCone"]);
    }

    #[test]
    fn long_chain_drops_without_recursion() {
        let spec = Catalog::builtin().lookup("CandySprinkles").unwrap();
        let specs = vec![spec; 200_000];
        let tip = build_from_specs(Customer::new("Sam"), &specs);
        assert_eq!(tip.depth(), 200_000);
        drop(tip);
    }

    #[test]
    fn detached_layer_has_no_customer() {
        let spec = Catalog::builtin().lookup("Cherries").unwrap();
        let node = ChainNode::from_raw_parts(Layer::Ingredient(spec), None, 1);
        assert!(node.customer().is_none());
    }
}
