#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    order: TestOrder,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, order: TestOrder) -> Self {
        Self { name, group, order }
    }

    pub fn small(name: &'static str, order: TestOrder) -> Self {
        Self::new(name, TestGroup::Small, order)
    }

    pub fn normal(name: &'static str, order: TestOrder) -> Self {
        Self::new(name, TestGroup::Normal, order)
    }

    pub fn large(name: &'static str, order: TestOrder) -> Self {
        Self::new(name, TestGroup::Large, order)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn order(&self) -> &TestOrder {
        &self.order
    }
}

/// A customer and the ingredients they asked for, repeated `repeat` times.
#[derive(Debug, Copy, Clone)]
pub struct TestOrder {
    customer: &'static str,
    ingredients: &'static [&'static str],
    repeat: usize,
}

impl TestOrder {
    pub const fn new(customer: &'static str, ingredients: &'static [&'static str]) -> Self {
        Self { customer, ingredients, repeat: 1 }
    }

    pub const fn repeated(self, repeat: usize) -> Self {
        Self { repeat, ..self }
    }

    pub fn customer(&self) -> &'static str {
        self.customer
    }

    /// The requested ingredients, with repetitions laid out one after another.
    pub fn ingredients(&self) -> Vec<&'static str> {
        self.ingredients.iter().copied().cycle().take(self.ingredients.len() * self.repeat).collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Small,
    Normal,
    Large,
}
