/// How the dependency map is laid out as a Mermaid graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphStyle {
    /// Each framework key gets a subroutine-shaped node declaration, then its edges
    #[default]
    Grouped,
    /// Edges only; keys are plain nodes like their dependencies
    Flat,
}

impl std::str::FromStr for GraphStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grouped" => Ok(GraphStyle::Grouped),
            "flat" => Ok(GraphStyle::Flat),
            _ => Err(format!(
                "Invalid graph style: {}. Please specify 'grouped' or 'flat'",
                s
            )),
        }
    }
}
