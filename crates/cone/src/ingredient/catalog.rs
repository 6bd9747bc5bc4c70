use crate::error::CatalogError;
use crate::ingredient::{IngredientKind, IngredientSpec};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tracing::trace;

static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog { entries: builtin_entries() });

/// Read-only registry from ingredient identifier to [`IngredientSpec`].
///
/// A catalog is built once through [`CatalogBuilder`] and never mutated afterwards, so it can be
/// shared freely between orders.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, Arc<IngredientSpec>>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Returns the catalog of the built-in ingredients.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    /// Resolves an identifier to its spec.
    ///
    /// # Errors
    /// [`CatalogError::UnknownIngredient`] if the identifier is not registered.
    pub fn lookup(&self, id: &str) -> Result<Arc<IngredientSpec>, CatalogError> {
        self.entries.get(id).map(Arc::clone).ok_or_else(|| CatalogError::unknown_ingredient(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the registered specs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &IngredientSpec> {
        self.entries.values().map(|spec| &**spec)
    }

    /// Specs of one kind, sorted by identifier.
    pub fn of_kind(&self, kind: IngredientKind) -> Vec<&IngredientSpec> {
        let mut specs = self.iter().filter(|spec| spec.kind() == kind).collect::<Vec<_>>();
        specs.sort_by(|a, b| a.id().cmp(b.id()));
        specs
    }
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    specs: Vec<IngredientSpec>,
}

impl CatalogBuilder {
    fn new() -> Self {
        Self { specs: vec![] }
    }

    /// Adds the built-in ingredients.
    pub fn with_builtin(mut self) -> Self {
        self.specs.extend(builtin_specs());
        self
    }

    pub fn register(mut self, spec: IngredientSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn register_all<I: IntoIterator<Item = IngredientSpec>>(mut self, specs: I) -> Self {
        self.specs.extend(specs);
        self
    }

    /// # Errors
    /// [`CatalogError::DuplicateIngredient`] when an identifier is registered twice and
    /// [`CatalogError::EmptyIdentifier`] for a blank identifier.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut entries = HashMap::with_capacity(self.specs.len());

        for spec in self.specs {
            if spec.id().trim().is_empty() {
                return Err(CatalogError::EmptyIdentifier);
            }

            match entries.entry(spec.id().to_owned()) {
                Entry::Occupied(_) => return Err(CatalogError::duplicate_ingredient(spec.id())),
                Entry::Vacant(vacant) => {
                    trace!(id = spec.id(), kind = %spec.kind(), "register ingredient");
                    vacant.insert(Arc::new(spec));
                }
            }
        }

        Ok(Catalog { entries })
    }
}

fn builtin_specs() -> [IngredientSpec; 7] {
    [
        IngredientSpec::base("WaffleCone", "I've started with a nice, fresh waffle cone."),
        IngredientSpec::base("SugarCone", "I'm putting everything into a tasty sugar cone."),
        IngredientSpec::middle("ScoopOfChocolate", "I've added a scoop of chocolate ice cream."),
        IngredientSpec::middle("ScoopOfTuna", "I've added a scoop of tuna ice cream (bleah!)."),
        IngredientSpec::topping("Cherries", "I've added a pile of cherries."),
        IngredientSpec::topping("MandMs", "I've added a bunch of M&M's."),
        IngredientSpec::topping("CandySprinkles", "I've sprinkled on some candy sprinkles."),
    ]
}

fn builtin_entries() -> HashMap<String, Arc<IngredientSpec>> {
    builtin_specs().into_iter().map(|spec| (spec.id().to_owned(), Arc::new(spec))).collect()
}
