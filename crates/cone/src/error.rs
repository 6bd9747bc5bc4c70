use thiserror::Error;

/// Order level error, one order fails as a whole and emits nothing.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("ordering error: {source}")]
    Ordering {
        #[from]
        source: CatalogError,
    },

    #[error("composition error: {source}")]
    Composition {
        #[from]
        source: CompositionError,
    },

    #[error("serve error: {source}")]
    Serve {
        #[from]
        source: ServeError,
    },
}

impl OrderError {
    /// The identifier that failed to resolve, if this order failed on an unknown ingredient.
    pub fn unknown_ingredient(&self) -> Option<&str> {
        match self {
            Self::Ordering { source } | Self::Composition { source: CompositionError::Lookup { source } } => {
                source.unknown_id()
            }
            Self::Serve { .. } => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown ingredient: '{id}'")]
    UnknownIngredient { id: String },

    #[error("ingredient '{id}' is registered more than once")]
    DuplicateIngredient { id: String },

    #[error("ingredient identifier must not be empty")]
    EmptyIdentifier,
}

impl CatalogError {
    pub fn unknown_ingredient<S: ToString>(id: S) -> Self {
        Self::UnknownIngredient { id: id.to_string() }
    }

    pub fn duplicate_ingredient<S: ToString>(id: S) -> Self {
        Self::DuplicateIngredient { id: id.to_string() }
    }

    fn unknown_id(&self) -> Option<&str> {
        match self {
            Self::UnknownIngredient { id } => Some(id),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    #[error("lookup failed while building the chain: {source}")]
    Lookup {
        #[from]
        source: CatalogError,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServeError {
    #[error("malformed chain: {reason}")]
    MalformedChain { reason: String },
}

impl ServeError {
    pub fn malformed_chain<S: ToString>(reason: S) -> Self {
        Self::MalformedChain { reason: reason.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ingredient_is_visible_through_order_error() {
        let ordering: OrderError = CatalogError::unknown_ingredient("Pickles").into();
        assert_eq!(ordering.unknown_ingredient(), Some("Pickles"));

        let composition: OrderError = CompositionError::from(CatalogError::unknown_ingredient("Pickles")).into();
        assert_eq!(composition.unknown_ingredient(), Some("Pickles"));

        let serve: OrderError = ServeError::malformed_chain("no base").into();
        assert_eq!(serve.unknown_ingredient(), None);
    }

    #[test]
    fn messages() {
        assert_eq!(CatalogError::unknown_ingredient("Pickles").to_string(), "unknown ingredient: 'Pickles'");
        assert_eq!(ServeError::malformed_chain("no base").to_string(), "malformed chain: no base");
    }
}
