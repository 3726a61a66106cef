use crate::graph_generation::domain::{
    format_descriptor, DependencyMap, ManifestDocument, PackageMetadata, UNKNOWN_FRAMEWORK,
};
use crate::shared::error::GraphError;
use crate::shared::Result;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

/// XML namespace of the `.nuspec` schema that declares dependency groups
pub const NUSPEC_NAMESPACE: &str = "http://schemas.microsoft.com/packaging/2013/05/nuspec.xsd";

/// Element the parser is currently inside, as far as the manifest model cares
#[derive(Debug, Clone, PartialEq)]
enum Scope {
    Metadata,
    MetadataId,
    MetadataVersion,
    Dependencies,
    Group(String),
    Other,
}

/// Result of parsing a manifest, including non-fatal findings
#[derive(Debug, Clone, Default)]
pub struct ParsedManifest {
    pub document: ManifestDocument,
    /// `true` when a `<dependencies>` element in the nuspec namespace was present
    pub has_dependencies_node: bool,
    pub warnings: Vec<String>,
}

/// ManifestParser service: `.nuspec` XML -> grouped dependency map
///
/// Pure transformation with no I/O. Only the first `<dependencies>` element in
/// the nuspec namespace is read (at any depth). Within it, direct `<group>`
/// children are keyed by `targetFramework` and their direct `<dependency>`
/// children are appended in document order.
pub struct ManifestParser;

impl ManifestParser {
    /// Parses a manifest document
    ///
    /// # Arguments
    /// * `entry` - Archive entry name, used in error messages
    /// * `xml` - Manifest content
    ///
    /// # Errors
    /// Returns `GraphError::ManifestParseError` if the XML is malformed
    pub fn parse(entry: &str, xml: &str) -> Result<ParsedManifest> {
        Self::parse_inner(xml).map_err(|details| {
            GraphError::ManifestParseError {
                entry: entry.to_string(),
                details,
            }
            .into()
        })
    }

    fn parse_inner(xml: &str) -> std::result::Result<ParsedManifest, String> {
        let mut reader = NsReader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut parsed = ParsedManifest::default();
        let mut metadata = PackageMetadata::default();
        let mut dependencies = DependencyMap::new();
        let mut stack: Vec<Scope> = Vec::new();

        loop {
            let (resolved, event) = reader.read_resolved_event().map_err(|e| e.to_string())?;
            let in_nuspec = matches!(
                resolved,
                ResolveResult::Bound(Namespace(ns)) if ns == NUSPEC_NAMESPACE.as_bytes()
            );

            match event {
                Event::Start(e) => {
                    let scope = Self::enter(
                        &e,
                        in_nuspec,
                        &stack,
                        &mut parsed,
                        &mut dependencies,
                    )?;
                    stack.push(scope);
                }
                Event::Empty(e) => {
                    Self::enter(&e, in_nuspec, &stack, &mut parsed, &mut dependencies)?;
                }
                Event::End(_) => {
                    stack.pop();
                }
                Event::Text(t) => {
                    let text = t.unescape().map_err(|e| e.to_string())?;
                    match stack.last() {
                        Some(Scope::MetadataId) => metadata.id = Some(text.into_owned()),
                        Some(Scope::MetadataVersion) => {
                            metadata.version = Some(text.into_owned())
                        }
                        _ => {}
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        parsed.document = ManifestDocument {
            metadata,
            dependencies,
        };
        Ok(parsed)
    }

    /// Classifies an opening (or self-closing) element and records any dependency it declares
    fn enter(
        e: &BytesStart<'_>,
        in_nuspec: bool,
        stack: &[Scope],
        parsed: &mut ParsedManifest,
        dependencies: &mut DependencyMap,
    ) -> std::result::Result<Scope, String> {
        if !in_nuspec {
            return Ok(Scope::Other);
        }

        let parent = stack.last();
        let scope = match (e.local_name().as_ref(), parent) {
            (b"metadata", _) if stack.len() == 1 => Scope::Metadata,
            (b"id", Some(Scope::Metadata)) => Scope::MetadataId,
            (b"version", Some(Scope::Metadata)) => Scope::MetadataVersion,
            (b"dependencies", _) if !parsed.has_dependencies_node => {
                parsed.has_dependencies_node = true;
                Scope::Dependencies
            }
            (b"group", Some(Scope::Dependencies)) => {
                let framework = attribute(e, "targetFramework")?
                    .unwrap_or_else(|| UNKNOWN_FRAMEWORK.to_string());
                Scope::Group(framework)
            }
            (b"dependency", Some(Scope::Group(framework))) => {
                let id = attribute(e, "id")?.filter(|id| !id.trim().is_empty());
                let version = attribute(e, "version")?;
                match id {
                    Some(id) => {
                        dependencies.push(framework, format_descriptor(&id, version.as_deref()))
                    }
                    None => parsed.warnings.push(format!(
                        "⚠️  Warning: Skipping a dependency without an 'id' attribute in group '{}'",
                        framework
                    )),
                }
                Scope::Other
            }
            _ => Scope::Other,
        };
        Ok(scope)
    }
}

fn attribute(e: &BytesStart<'_>, name: &str) -> std::result::Result<Option<String>, String> {
    match e.try_get_attribute(name).map_err(|err| err.to_string())? {
        Some(attr) => {
            let value = attr.unescape_value().map_err(|err| err.to_string())?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}
