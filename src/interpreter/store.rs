use crate::value::Value;
use indexmap::IndexMap;

/// The variable store for one interpretation run.
///
/// A single flat namespace: no scopes, no parent chain. Names are
/// case-sensitive and bindings stay in the order they were first made.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    bindings: IndexMap<String, Value>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any earlier binding.
    /// Returns the value that was replaced.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.bindings.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }
}
