use std::collections::HashMap;

/// Uniform name -> location, filled on first lookup.
///
/// A uniform the driver does not know (never declared, or optimized out) is
/// cached as `None`, so the warning is logged and the driver is queried only
/// once per name.
#[derive(Debug)]
pub struct UniformCache<L> {
    name2loc: HashMap<String, Option<L>>,
}

impl<L: Clone> Default for UniformCache<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Clone> UniformCache<L> {
    pub fn new() -> Self {
        UniformCache {
            name2loc: HashMap::new(),
        }
    }

    pub fn get_or_query<F>(&mut self, name: &str, query: F) -> Option<L>
    where
        F: FnOnce(&str) -> Option<L>,
    {
        if let Some(loc) = self.name2loc.get(name) {
            return loc.clone();
        }
        let loc = query(name);
        if loc.is_none() {
            log::warn!("uniform {name} doesn't exist");
        }
        self.name2loc.insert(name.to_string(), loc.clone());
        loc
    }

    pub fn len(&self) -> usize {
        self.name2loc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name2loc.is_empty()
    }
}
