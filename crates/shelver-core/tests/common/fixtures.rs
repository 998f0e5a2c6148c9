//! Fixtures for organize integration tests.
//!
//! `LineParser` stands in for a real container parser: line 1 of the file is
//! the title, line 2 the author. `write_epub` builds a minimal real EPUB.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use shelver_core::{FormatParser, Identity, ParseError};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub struct LineParser;

impl FormatParser for LineParser {
    fn read_identity(&self, path: &Path) -> Result<Identity, ParseError> {
        let text = fs::read_to_string(path)?;
        let mut lines = text.lines();
        let title = lines.next().map(String::from);
        let author = lines.next().map(String::from);
        Ok(Identity::new(title, author))
    }
}

pub struct BrokenParser;

impl FormatParser for BrokenParser {
    fn read_identity(&self, _path: &Path) -> Result<Identity, ParseError> {
        Err(ParseError::Malformed("bad record 0".into()))
    }
}

/// Writes a "book" readable by [`LineParser`]. `padding` changes the size only.
pub fn write_book(path: &Path, title: &str, author: &str, padding: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let body = format!("{title}\n{author}\n{}", "#".repeat(padding));
    fs::write(path, body).unwrap();
}

/// Relative path → contents for every regular file under `root`.
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .map(Result::unwrap)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            (rel, fs::read(e.path()).unwrap())
        })
        .collect()
}

/// Writes a minimal EPUB 2 package whose OPF carries `title` and `creator`.
pub fn write_epub(path: &Path, title: &str, creator: &str) {
    let file = fs::File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    zip.start_file("mimetype", stored).unwrap();
    zip.write_all(b"application/epub+zip").unwrap();

    zip.start_file("META-INF/container.xml", stored).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"#,
    )
    .unwrap();

    zip.start_file("OEBPS/content.opf", stored).unwrap();
    let opf = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0" unique-identifier="id">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:title>{title}</dc:title>
    <dc:creator>{creator}</dc:creator>
    <dc:language>en</dc:language>
    <dc:identifier id="id">urn:uuid:00000000-0000-0000-0000-000000000002</dc:identifier>
  </metadata>
  <manifest>
    <item id="ncx" href="toc.ncx" media-type="application/x-dtbncx+xml"/>
    <item id="ch1" href="ch1.xhtml" media-type="application/xhtml+xml"/>
  </manifest>
  <spine toc="ncx">
    <itemref idref="ch1"/>
  </spine>
</package>"#
    );
    zip.write_all(opf.as_bytes()).unwrap();

    zip.start_file("OEBPS/toc.ncx", stored).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8"?>
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head/>
  <docTitle><text>Book</text></docTitle>
  <navMap>
    <navPoint id="p1" playOrder="1">
      <navLabel><text>One</text></navLabel>
      <content src="ch1.xhtml"/>
    </navPoint>
  </navMap>
</ncx>"#,
    )
    .unwrap();

    zip.start_file("OEBPS/ch1.xhtml", stored).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml">
  <head><title>One</title></head>
  <body><p>Text</p></body>
</html>"#,
    )
    .unwrap();

    zip.finish().unwrap();
}
