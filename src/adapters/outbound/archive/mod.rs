/// Package archive adapters
mod nupkg_reader;

pub use nupkg_reader::{NupkgArchiveReader, MANIFEST_EXTENSION};
