//! Archive serialization.
//!
//! The whole bundle is buffered in memory before writing; project scale
//! is bounded by the editor, so no streaming is needed.

use crate::error::ExportError;
use crate::session::ExportBundle;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// A finished archive plus its suggested download name.
#[derive(Debug, Clone)]
pub struct ExportArchive {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Serialize the bundle into a ZIP archive preserving the implied
/// directory structure.
pub fn write_archive(bundle: &ExportBundle) -> Result<Vec<u8>, ExportError> {
    let cursor = Cursor::new(Vec::new());
    let mut zip = ZipWriter::new(cursor);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (path, content) in &bundle.files {
        zip.start_file(path.as_str(), options)?;
        zip.write_all(content.as_bytes())?;
    }

    Ok(zip.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn archive_round_trips_paths_and_content() {
        let mut files = BTreeMap::new();
        files.insert("package.json".to_string(), "{}".to_string());
        files.insert(
            "app/page.tsx".to_string(),
            "export default function Page() {}".to_string(),
        );

        let bytes = write_archive(&ExportBundle { files }).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        assert_eq!(archive.len(), 2);

        let mut content = String::new();
        archive
            .by_name("app/page.tsx")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "export default function Page() {}");
    }

    #[test]
    fn empty_bundle_produces_valid_archive() {
        let bytes = write_archive(&ExportBundle {
            files: BTreeMap::new(),
        })
        .unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }
}
