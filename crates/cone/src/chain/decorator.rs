use crate::chain::ChainNode;
use crate::ingredient::IngredientSpec;
use std::sync::Arc;

pub trait Decorator<In> {
    type Out;

    fn decorate(&self, raw: In) -> Self::Out;
}

/// An ingredient decorates the chain built so far by becoming its new tip.
impl Decorator<ChainNode> for Arc<IngredientSpec> {
    type Out = ChainNode;

    #[inline]
    fn decorate(&self, raw: ChainNode) -> Self::Out {
        raw.wrap(Arc::clone(self))
    }
}
