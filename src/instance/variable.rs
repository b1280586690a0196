use std::fmt;

use super::Literal;

#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Variable(pub u64);

impl Variable {
    pub fn positive(self) -> Literal {
        Literal::new(self, true)
    }

    pub fn negative(self) -> Literal {
        Literal::new(self, false)
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}
