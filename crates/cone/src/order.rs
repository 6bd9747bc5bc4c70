//! The ordering engine: puts a customer's ingredient choices into assembly order.

use crate::error::CatalogError;
use crate::ingredient::{Catalog, IngredientKind, IngredientSpec};
use std::sync::Arc;
use tracing::{trace, warn};

/// The ingredient identifiers a customer asked for, in the order they were said.
///
/// The order of the request is only a tie-break between ingredients of the same kind, it is
/// never the serving order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderRequest {
    ingredients: Vec<String>,
}

impl OrderRequest {
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { ingredients: ingredients.into_iter().map(Into::into).collect() }
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Reorders this request against `catalog`, see [`reorder`].
    ///
    /// # Errors
    /// [`CatalogError::UnknownIngredient`] for the first identifier that does not resolve.
    pub fn reorder(&self, catalog: &Catalog) -> Result<Vec<String>, CatalogError> {
        reorder(catalog, &self.ingredients)
    }
}

impl<S: Into<String>> FromIterator<S> for OrderRequest {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Sorts `requests` into assembly order: bases, then middles, then toppings.
///
/// The sort is stable, so ingredients of the same kind keep the relative order the customer gave
/// them in. An order without a base, or with several, is accepted as is.
///
/// # Errors
/// [`CatalogError::UnknownIngredient`] for the first identifier that does not resolve. Nothing is
/// reordered in that case.
pub fn reorder<S: AsRef<str>>(catalog: &Catalog, requests: &[S]) -> Result<Vec<String>, CatalogError> {
    let sorted = resolve_sorted(catalog, requests)?;
    Ok(sorted.iter().map(|spec| spec.id().to_owned()).collect())
}

/// Resolves every identifier and stable-sorts the specs by kind weight.
pub(crate) fn resolve_sorted<S: AsRef<str>>(
    catalog: &Catalog,
    requests: &[S],
) -> Result<Vec<Arc<IngredientSpec>>, CatalogError> {
    let mut specs = requests.iter().map(|id| catalog.lookup(id.as_ref())).collect::<Result<Vec<_>, _>>()?;

    // `sort_by_key` is stable
    specs.sort_by_key(|spec| spec.kind().weight());

    let bases = specs.iter().take_while(|spec| spec.kind() == IngredientKind::Base).count();
    if bases != 1 {
        warn!(bases, "order does not have exactly one base ingredient");
    }
    trace!(order = ?specs.iter().map(|spec| spec.id()).collect::<Vec<_>>(), "reordered ingredients");

    Ok(specs)
}
