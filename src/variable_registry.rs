use fnv::FnvHashMap;

use crate::instance::{Literal, Variable};

/// Maps the user-facing variable names onto dense `Variable` ids, in creation order.
#[derive(Clone, Debug, Default)]
pub struct VariableRegister {
    names: Vec<String>,
    by_name: FnvHashMap<String, Variable>,
}

impl VariableRegister {
    pub fn new() -> VariableRegister {
        VariableRegister::default()
    }

    pub fn get(&self, var: Variable) -> Option<&str> {
        self.names.get(var.0 as usize).map(|n| n.as_str())
    }

    pub fn get_by_name(&self, name: &str) -> Option<Variable> {
        self.by_name.get(name).copied()
    }

    pub(crate) fn create_original(&mut self, name: &str) -> Variable {
        let var = Variable(self.names.len() as u64);
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), var);
        var
    }

    pub(crate) fn ensure_original(&mut self, name: &str) -> Variable {
        match self.get_by_name(name) {
            Some(var) => var,
            None => self.create_original(name),
        }
    }

    /// The name of a variable, falling back to its debug form for ids this register never issued.
    pub fn name(&self, var: Variable) -> String {
        match self.get(var) {
            Some(name) => name.to_string(),
            None => format!("{:?}", var),
        }
    }

    /// The literal written the way the parsers accept it: `a` or `!a`.
    pub fn literal_name(&self, lit: Literal) -> String {
        if lit.polarity() {
            self.name(lit.var())
        } else {
            format!("!{}", self.name(lit.var()))
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Variable> + '_ {
        (0..self.names.len()).map(|ix| Variable(ix as u64))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ensure_reuses_ids() {
        let mut reg = VariableRegister::new();
        let a = reg.ensure_original("a");
        let b = reg.ensure_original("b");
        assert_ne!(a, b);
        assert_eq!(reg.ensure_original("a"), a);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get(b), Some("b"));
        assert_eq!(reg.get_by_name("c"), None);
        assert_eq!(reg.iter().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn test_literal_name() {
        let mut reg = VariableRegister::new();
        let a = reg.ensure_original("alpha");
        assert_eq!(reg.literal_name(a.positive()), "alpha");
        assert_eq!(reg.literal_name(a.negative()), "!alpha");
        assert_eq!(reg.literal_name(Variable(7).negative()), "!x7");
    }
}
