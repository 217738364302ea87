use crate::raw::RawInput;
use std::collections::BTreeMap;

///
/// RefPath
///
/// Key of a deferred reference, resolved against the validation context at
/// evaluation time. Plain data; resolution is always explicit via
/// [`Context::resolve`].
///

#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct RefPath {
    key: String,
}

impl RefPath {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Display for RefPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}

impl From<&str> for RefPath {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

///
/// Context
///
/// The ambient validation scope a field is checked inside: the sibling
/// fields of the value under validation, plus the ancestor scopes from the
/// nearest outwards. Lookup is local-first, then up the ancestor chain.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Context {
    local: BTreeMap<String, RawInput>,
    ancestors: Vec<BTreeMap<String, RawInput>>,
}

impl Context {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<RawInput>) -> Self {
        self.local.insert(key.into(), value.into());
        self
    }

    /// Push an ancestor scope; the first pushed scope is the nearest.
    #[must_use]
    pub fn with_ancestor(mut self, scope: BTreeMap<String, RawInput>) -> Self {
        self.ancestors.push(scope);
        self
    }

    #[must_use]
    pub fn resolve(&self, path: &RefPath) -> Option<&RawInput> {
        if let Some(value) = self.local.get(path.key()) {
            return Some(value);
        }

        self.ancestors
            .iter()
            .find_map(|scope| scope.get(path.key()))
    }
}

///
/// TESTS
///
