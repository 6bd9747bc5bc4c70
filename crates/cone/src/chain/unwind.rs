use crate::chain::{ChainNode, Layer};
use crate::error::ServeError;
use tracing::trace;

/// Unwinds the chain from `tip` down to the base and returns one line per ingredient layer, base
/// side first.
///
/// The walk is iterative. It is bounded by the depth the tip recorded when it was built, so a
/// chain that is longer or shorter than it claims, has a base that is not at the bottom, or ends
/// without a base is reported instead of being walked blindly.
///
/// # Errors
/// [`ServeError::MalformedChain`] when the chain does not end in exactly one base node.
pub fn serve(tip: &ChainNode) -> Result<Vec<String>, ServeError> {
    let mut stack = Vec::with_capacity(tip.depth());
    let mut remaining = tip.depth();
    let mut current = tip;

    loop {
        match (current.layer(), current.previous()) {
            (Layer::Base(_), None) => break,
            (Layer::Base(customer), Some(_)) => {
                return Err(ServeError::malformed_chain(format!("base layer of '{customer}' is not at the bottom")));
            }
            (Layer::Ingredient(spec), None) => {
                return Err(ServeError::malformed_chain(format!("layer '{}' does not end in a base", spec.id())));
            }
            (Layer::Ingredient(spec), Some(previous)) => {
                if remaining == 0 {
                    return Err(ServeError::malformed_chain(format!(
                        "chain is deeper than the {} layers its tip recorded",
                        tip.depth()
                    )));
                }
                remaining -= 1;
                stack.push(spec.message());
                current = previous;
            }
        }
    }

    if remaining != 0 {
        return Err(ServeError::malformed_chain(format!(
            "chain is shallower than the {} layers its tip recorded",
            tip.depth()
        )));
    }

    trace!(layers = stack.len(), "unwound chain");
    Ok(stack.into_iter().rev().map(str::to_owned).collect())
}
