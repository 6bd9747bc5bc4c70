//! Ingredient types and the catalog that resolves them.
//!
//! Every ingredient belongs to exactly one [`IngredientKind`]. The kind is an explicit tag on the
//! [`IngredientSpec`], so classifying an ingredient is a field read.

mod catalog;

pub use catalog::Catalog;
pub use catalog::CatalogBuilder;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of ingredient categories.
///
/// The declaration order is the assembly order: bases go first, then middles, then toppings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientKind {
    /// The cone.
    #[serde(alias = "cone")]
    Base,
    /// A scoop of ice cream.
    #[serde(alias = "scoop")]
    Middle,
    /// An extra, like sprinkles.
    #[serde(alias = "extra")]
    Topping,
}

impl IngredientKind {
    pub const ALL: [IngredientKind; 3] = [IngredientKind::Base, IngredientKind::Middle, IngredientKind::Topping];

    /// Sorting weight, lower weights are assembled first.
    #[inline]
    pub const fn weight(self) -> u8 {
        match self {
            IngredientKind::Base => 1,
            IngredientKind::Middle => 2,
            IngredientKind::Topping => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            IngredientKind::Base => "base",
            IngredientKind::Middle => "middle",
            IngredientKind::Topping => "topping",
        }
    }
}

impl fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable catalog entry: what the ingredient is called, where it goes, and what is said
/// when it is served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSpec {
    id: String,
    kind: IngredientKind,
    message: String,
}

impl IngredientSpec {
    pub fn new(id: impl Into<String>, kind: IngredientKind, message: impl Into<String>) -> Self {
        Self { id: id.into(), kind, message: message.into() }
    }

    pub fn base(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(id, IngredientKind::Base, message)
    }

    pub fn middle(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(id, IngredientKind::Middle, message)
    }

    pub fn topping(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(id, IngredientKind::Topping, message)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> IngredientKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
