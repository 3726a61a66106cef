/// NewType wrapper for a Mermaid node identifier
///
/// Raw framework names and dependency descriptors contain characters that
/// Mermaid treats as syntax, so they are sanitized before use as node ids.
/// Both sanitizers are idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    /// Node id for a target framework: `.` and `-` become `_`
    pub fn for_framework(framework: &str) -> Self {
        Self(framework.replace(['.', '-'], "_"))
    }

    /// Node id for a dependency descriptor: spaces and `.` become `_`, parentheses are dropped
    pub fn for_dependency(descriptor: &str) -> Self {
        let sanitized = descriptor
            .chars()
            .filter(|c| *c != '(' && *c != ')')
            .map(|c| if c == ' ' || c == '.' { '_' } else { c })
            .collect();
        Self(sanitized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
