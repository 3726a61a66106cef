use crate::graph_generation::domain::{DependencyMap, GraphStyle, NodeId};

/// First line of every rendered graph (top-down flowchart)
pub const GRAPH_HEADER: &str = "graph TD";

const INDENT: &str = "    ";
const EDGE: &str = " --> ";

/// MermaidRenderer service: DependencyMap -> Mermaid flowchart text
///
/// Output is deterministic: keys in map order, edges in list order, lines
/// joined by `\n` without a trailing newline.
pub struct MermaidRenderer;

impl MermaidRenderer {
    pub fn render(dependencies: &DependencyMap, style: GraphStyle) -> String {
        let mut lines = vec![GRAPH_HEADER.to_string()];

        for (framework, deps) in dependencies.iter() {
            let framework_node = NodeId::for_framework(framework);
            if style == GraphStyle::Grouped {
                lines.push(format!("{}{}[[{}]]", INDENT, framework_node, framework));
            }
            for dep in deps {
                lines.push(format!(
                    "{}{}{}{}",
                    INDENT,
                    framework_node,
                    EDGE,
                    NodeId::for_dependency(dep)
                ));
            }
        }

        lines.join("\n")
    }

    /// Recovers `(parent, child)` pairs from rendered text, ignoring the header and node declarations
    pub fn parse_edges(graph: &str) -> Vec<(String, String)> {
        graph
            .lines()
            .filter_map(|line| line.trim().split_once(EDGE))
            .map(|(parent, child)| (parent.to_string(), child.to_string()))
            .collect()
    }
}
