//! Order processing from request to served lines.

use crate::chain::{self, Customer};
use crate::error::OrderError;
use crate::ingredient::Catalog;
use crate::order;
use serde::{Deserialize, Serialize};
use tracing::debug;

const CUSTOMER_PLACEHOLDER: &str = "{customer}";

/// The words said around a served cone. `{customer}` in the greeting is replaced by the
/// customer's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    greeting: String,
    closing: String,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            greeting: "Hi {customer}! I've got this marvelous ice cream cone for you!".into(),
            closing: "So, here ya go!".into(),
        }
    }
}

impl Script {
    pub fn new(greeting: impl Into<String>, closing: impl Into<String>) -> Self {
        Self { greeting: greeting.into(), closing: closing.into() }
    }

    pub fn greet(&self, customer: &Customer) -> String {
        self.greeting.replace(CUSTOMER_PLACEHOLDER, customer.name())
    }

    pub fn closing(&self) -> &str {
        &self.closing
    }
}

/// A fully served order: the greeting, one line per layer from the cone up, and the closing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Serving {
    customer: Customer,
    greeting: String,
    layers: Vec<String>,
    closing: String,
}

impl Serving {
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// The lines of the ingredient layers, base side first.
    pub fn layers(&self) -> &[String] {
        &self.layers
    }

    pub fn closing(&self) -> &str {
        &self.closing
    }

    /// Every line in the order it is said.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.greeting.as_str())
            .chain(self.layers.iter().map(String::as_str))
            .chain(std::iter::once(self.closing.as_str()))
    }

    pub fn into_lines(self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.layers.len() + 2);
        lines.push(self.greeting);
        lines.extend(self.layers);
        lines.push(self.closing);
        lines
    }
}

/// Reorders, builds and serves one order.
///
/// Every step finishes before anything is handed back, so an order either yields all of its lines
/// or none of them.
///
/// # Errors
/// [`OrderError`] if an ingredient is unknown or the chain turns out malformed.
pub fn process_order<S: AsRef<str>>(
    catalog: &Catalog,
    script: &Script,
    customer: Customer,
    ingredients: &[S],
) -> Result<Serving, OrderError> {
    debug!(customer = customer.name(), ingredients = ingredients.len(), "process order");

    // resolve once, the sorted specs go straight into the chain
    let sorted = order::resolve_sorted(catalog, ingredients)?;
    let greeting = script.greet(&customer);
    let tip = chain::build_from_specs(customer.clone(), &sorted);
    let layers = chain::serve(&tip)?;

    debug!(customer = customer.name(), layers = layers.len(), "order served");
    Ok(Serving { customer, greeting, layers, closing: script.closing().to_owned() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::ingredient::{IngredientKind, IngredientSpec};
    use indoc::indoc;

    fn serve(ingredients: &[&str]) -> Result<Serving, OrderError> {
        process_order(Catalog::builtin(), &Script::default(), Customer::new("Sam"), ingredients)
    }

    fn permutations(items: &[&'static str]) -> Vec<Vec<&'static str>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut all = vec![];
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                all.push(tail);
            }
        }
        all
    }

    #[test]
    fn sam_order() {
        let serving = serve(&["Cherries", "ScoopOfChocolate", "WaffleCone", "CandySprinkles"]).unwrap();
        let lines = serving.lines().collect::<Vec<_>>();

        assert_eq!(
            lines,
            vec![
                "Hi Sam! I've got this marvelous ice cream cone for you!",
                "I've started with a nice, fresh waffle cone.",
                "I've added a scoop of chocolate ice cream.",
                "I've added a pile of cherries.",
                "I've sprinkled on some candy sprinkles.",
                "So, here ya go!",
            ]
        );
    }

    #[test]
    fn martha_order() {
        let serving = process_order(
            Catalog::builtin(),
            &Script::default(),
            Customer::new("Martha"),
            &["ScoopOfChocolate", "ScoopOfTuna", "SugarCone", "MandMs"],
        )
        .unwrap();

        assert_eq!(serving.customer().name(), "Martha");
        assert_eq!(
            serving.layers(),
            [
                "I'm putting everything into a tasty sugar cone.",
                "I've added a scoop of chocolate ice cream.",
                "I've added a scoop of tuna ice cream (bleah!).",
                "I've added a bunch of M&M's.",
            ]
        );
    }

    #[test]
    fn input_order_does_not_matter() {
        let ingredients = ["Cherries", "ScoopOfChocolate", "WaffleCone", "ScoopOfTuna"];
        let expected = serve(&ingredients).unwrap().into_lines();

        for permutation in permutations(&ingredients) {
            let lines = serve(&permutation).unwrap().into_lines();
            // the two scoops and the single topping keep their own relative order
            let scoops = permutation.iter().filter(|id| id.starts_with("ScoopOf")).copied().collect::<Vec<_>>();
            if scoops == ["ScoopOfChocolate", "ScoopOfTuna"] {
                assert_eq!(lines, expected, "permutation {permutation:?}");
            } else {
                assert_eq!(lines[2], expected[3], "permutation {permutation:?}");
                assert_eq!(lines[3], expected[2], "permutation {permutation:?}");
            }
        }
    }

    #[test]
    fn input_order_does_not_matter_across_kinds() {
        let ingredients = ["MandMs", "SugarCone", "ScoopOfTuna"];
        let expected = serve(&ingredients).unwrap().into_lines();
        for permutation in permutations(&ingredients) {
            assert_eq!(serve(&permutation).unwrap().into_lines(), expected, "permutation {permutation:?}");
        }
    }

    #[test]
    fn kinds_are_served_in_precedence() {
        let catalog = Catalog::builtin();
        let ingredients = ["MandMs", "ScoopOfTuna", "Cherries", "WaffleCone", "ScoopOfChocolate", "CandySprinkles"];

        for permutation in permutations(&ingredients) {
            let serving = serve(&permutation).unwrap();
            let kinds = serving
                .layers()
                .iter()
                .map(|line| catalog.iter().find(|spec| spec.message() == line.as_str()).map(IngredientSpec::kind).unwrap())
                .collect::<Vec<_>>();

            assert!(kinds.is_sorted(), "permutation {permutation:?} served {kinds:?}");
            assert_eq!(kinds.first(), Some(&IngredientKind::Base));
        }
    }

    #[test]
    fn matches_the_step_by_step_pipeline() {
        let catalog = Catalog::builtin();
        for ingredients in [
            &["Cherries", "ScoopOfChocolate", "WaffleCone", "CandySprinkles"][..],
            &["ScoopOfChocolate", "ScoopOfTuna", "SugarCone", "MandMs"],
            &["MandMs", "Cherries"],
            &[],
        ] {
            let sorted = order::reorder(catalog, ingredients).unwrap();
            let tip = chain::build(catalog, Customer::new("Sam"), &sorted).unwrap();
            let expected = chain::serve(&tip).unwrap();

            assert_eq!(serve(ingredients).unwrap().layers(), expected, "ingredients {ingredients:?}");
        }
    }

    #[test]
    fn cone_and_scoop_only() {
        let serving = serve(&["ScoopOfChocolate", "WaffleCone"]).unwrap();
        assert_eq!(serving.layers().len(), 2);
        assert_eq!(serving.into_lines().len(), 4);
    }

    #[test]
    fn empty_order_serves_greeting_and_closing() {
        let serving = serve(&[]).unwrap();
        assert!(serving.layers().is_empty());
        assert_eq!(serving.lines().count(), 2);
    }

    #[test]
    fn unknown_ingredient_fails_the_order() {
        let err = serve(&["WaffleCone", "Pickles", "Cherries"]).unwrap_err();
        assert!(matches!(&err, OrderError::Ordering { source } if *source == CatalogError::unknown_ingredient("Pickles")));
        assert_eq!(err.unknown_ingredient(), Some("Pickles"));
    }

    #[test]
    fn custom_script() {
        let script = Script::new("Hello {customer}, {customer}!", "Enjoy.");
        let serving = process_order(Catalog::builtin(), &script, Customer::new("Ann"), &["SugarCone"]).unwrap();
        assert_eq!(serving.into_lines(), vec!["Hello Ann, Ann!", "I'm putting everything into a tasty sugar cone.", "Enjoy."]);
    }

    #[test]
    fn script_from_json_keeps_defaults() {
        let json = indoc! {r#"
            { "closing": "Bye!" }
        "#};
        let script: Script = serde_json::from_str(json).unwrap();
        assert_eq!(script.closing(), "Bye!");
        assert_eq!(script.greet(&Customer::new("Sam")), "Hi Sam! I've got this marvelous ice cream cone for you!");
    }
}
