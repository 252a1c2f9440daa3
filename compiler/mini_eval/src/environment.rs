//! The binding table.
//!
//! One flat namespace per program run. Only assignment writes to it and
//! only identifier references read from it.

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Mapping from identifier name to its current value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Bind `name` to `value`, inserting or overwriting.
    ///
    /// The kind of a binding may change on reassignment. Returns the value
    /// that was replaced, if any.
    pub fn assign(&mut self, name: &str, value: Value) -> Option<Value> {
        match self.bindings.get_mut(name) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.bindings.insert(name.to_owned(), value);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        Environment {
            bindings: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}
