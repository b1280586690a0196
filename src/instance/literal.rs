use std::fmt;

use super::Variable;

/// A variable paired with a polarity, packed as `var << 1 | polarity`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal(u64);

pub const MAX_VARIABLE: u64 = 1 << 63;

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.polarity() {
            write!(f, "{:?}", self.var())
        } else {
            write!(f, "!{:?}", self.var())
        }
    }
}

impl Literal {
    pub fn new(var: Variable, polarity: bool) -> Literal {
        if var.0 >= MAX_VARIABLE {
            panic!("variable too large - must be < 2^63");
        }
        Literal((var.0 << 1) | (polarity as u64))
    }

    pub fn var(&self) -> Variable {
        Variable(self.0 >> 1)
    }

    pub fn polarity(&self) -> bool {
        (self.0 & 1) != 0
    }

    pub fn invert(&self) -> Literal {
        Literal(self.0 ^ 1)
    }

    /// The truth value of this literal when its variable is set to `value`.
    pub fn evaluate(&self, value: bool) -> bool {
        self.polarity() == value
    }
}
