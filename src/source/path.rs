use super::{ValueSource, Values};

/// Router-supplied path parameters.
///
/// No universal router is assumed, so the caller builds this map explicitly
/// from whatever matched the route (`/users/{id}` → `id = "123"`) and hands
/// it to [`bind`](crate::bind). Multi-valued for symmetry with the other
/// sources, though routers typically produce one value per name.
#[derive(Debug, Clone, Default)]
pub struct PathParams {
    values: Values,
}

impl PathParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a parameter value. Repeated names accumulate in order.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.append(name, value);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        PathParams {
            values: Values::from_iter(iter),
        }
    }
}

impl ValueSource for PathParams {
    fn values(&self, key: &str) -> Option<&[String]> {
        self.values.get(key)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.values.keys())
    }
}
