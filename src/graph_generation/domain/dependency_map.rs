use serde::ser::{Serialize, Serializer};

/// Target framework used for groups that don't declare `targetFramework`
pub const UNKNOWN_FRAMEWORK: &str = "Unknown Framework";

/// Formats a dependency as `"id (version)"`, or just `"id"` when no version is declared
pub fn format_descriptor(id: &str, version: Option<&str>) -> String {
    match version {
        Some(version) => format!("{} ({})", id, version),
        None => id.to_string(),
    }
}

/// DependencyMap aggregate: target framework -> ordered dependency descriptors
///
/// Keys keep their first-insertion order and each list keeps document order,
/// so rendering the same manifest always yields the same text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    entries: Vec<(String, Vec<String>)>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a descriptor to `framework`, creating the key at the end if it is new
    pub fn push(&mut self, framework: &str, descriptor: String) {
        match self.entries.iter_mut().find(|(key, _)| key == framework) {
            Some((_, deps)) => deps.push(descriptor),
            None => self
                .entries
                .push((framework.to_string(), vec![descriptor])),
        }
    }

    /// Sets the full dependency list for `framework`, keeping its position if it already exists
    pub fn insert(&mut self, framework: impl Into<String>, dependencies: Vec<String>) {
        let framework = framework.into();
        match self.entries.iter_mut().find(|(key, _)| *key == framework) {
            Some((_, deps)) => *deps = dependencies,
            None => self.entries.push((framework, dependencies)),
        }
    }

    pub fn get(&self, framework: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == framework)
            .map(|(_, deps)| deps.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, deps)| (key.as_str(), deps.as_slice()))
    }

    pub fn frameworks(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn framework_count(&self) -> usize {
        self.entries.len()
    }

    pub fn dependency_count(&self) -> usize {
        self.entries.iter().map(|(_, deps)| deps.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, Vec<V>)> for DependencyMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Vec<V>)>>(iter: I) -> Self {
        let mut map = DependencyMap::new();
        for (framework, deps) in iter {
            map.insert(framework, deps.into_iter().map(Into::into).collect());
        }
        map
    }
}

impl Serialize for DependencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
