use super::Integer;
use std::collections::HashMap;

/// ## Variable memory

#[derive(Debug, Default, Clone)]
pub struct Var {
    vars: HashMap<String, Integer>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, var_name: &str) -> Option<Integer> {
        self.vars.get(var_name).copied()
    }

    pub fn store(&mut self, var_name: String, value: Integer) {
        self.vars.insert(var_name, value);
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_overwrites() {
        let mut v = Var::new();
        assert!(v.is_empty());
        v.store("x".into(), 1);
        v.store("x".into(), 2);
        assert_eq!(v.fetch("x"), Some(2));
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_case_sensitive() {
        let mut v = Var::new();
        v.store("Ab".into(), 3);
        assert_eq!(v.fetch("ab"), None);
        assert_eq!(v.fetch("Ab"), Some(3));
    }
}
