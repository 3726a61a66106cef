use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

/// A nuspec with two framework groups
pub const GROUPED_NUSPEC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://schemas.microsoft.com/packaging/2013/05/nuspec.xsd">
  <metadata>
    <id>Contoso.Logging</id>
    <version>1.2.0</version>
    <authors>Contoso</authors>
    <description>Logging helpers</description>
    <dependencies>
      <group targetFramework="net8.0">
        <dependency id="Microsoft.Extensions.Logging" version="8.0.0" />
        <dependency id="Serilog" version="3.1.1" exclude="Build,Analyzers" />
      </group>
      <group targetFramework=".NETStandard2.0">
        <dependency id="System.Memory" version="4.5.5" />
      </group>
    </dependencies>
  </metadata>
</package>"#;

/// A nuspec whose `<dependencies>` element has no groups
pub const NO_GROUPS_NUSPEC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://schemas.microsoft.com/packaging/2013/05/nuspec.xsd">
  <metadata>
    <id>Contoso.Standalone</id>
    <version>0.1.0</version>
    <dependencies />
  </metadata>
</package>"#;

/// Writes a zip archive with the given entries (in order) to `path`
pub fn write_package(path: &Path, entries: &[(&str, &str)]) {
    let file = File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

/// Writes a `.nupkg` laid out like the ones `dotnet pack` produces
pub fn write_nupkg(dir: &Path, file_name: &str, nuspec_name: &str, nuspec: &str) -> PathBuf {
    let path = dir.join(file_name);
    write_package(
        &path,
        &[
            ("_rels/.rels", "<?xml version=\"1.0\"?><Relationships />"),
            (nuspec_name, nuspec),
            ("lib/net8.0/Contoso.dll", "MZ"),
            ("[Content_Types].xml", "<?xml version=\"1.0\"?><Types />"),
        ],
    );
    path
}

/// Writes an INI config file
pub fn write_config(path: &Path, package_name: &str, output_path: &Path, visualizer_path: &Path) {
    let content = format!(
        "[main]\nPackageName = {}\nOutputPath = {}\nVisualizerPath = {}\n",
        package_name,
        output_path.display(),
        visualizer_path.display()
    );
    std::fs::write(path, content).unwrap();
}

/// Writes an executable shell script standing in for the Mermaid CLI
#[cfg(unix)]
pub fn write_fake_renderer(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
