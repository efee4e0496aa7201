//! Text Extractor: turns uploaded PDF / DOCX / TXT bytes into plain text and,
//! where available, the first embedded image (typically a profile photo).

use std::io::{Cursor, Read};
use std::panic;
use std::sync::LazyLock;

use lopdf::Object;
use regex::Regex;
use tracing::{debug, warn};
use zip::ZipArchive;

const DOCX_BODY: &str = "word/document.xml";
const DOCX_RELS: &str = "word/_rels/document.xml.rels";

/// Declared format of an upload, resolved from its filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
    Unknown,
}

impl DocumentFormat {
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        match lower.rsplit_once('.').map(|(_, ext)| ext) {
            Some("pdf") => DocumentFormat::Pdf,
            Some("docx") => DocumentFormat::Docx,
            Some("txt") => DocumentFormat::PlainText,
            _ => DocumentFormat::Unknown,
        }
    }
}

/// Output of extraction. `text` is empty when nothing could be read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedDocument {
    pub text: String,
    pub image: Option<Vec<u8>>,
}

impl ExtractedDocument {
    pub fn is_unreadable(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Extracts text (and for DOCX, the first embedded image) from document bytes.
///
/// Never fails: unknown formats and broken documents yield empty text.
pub fn extract_document(bytes: &[u8], format: DocumentFormat) -> ExtractedDocument {
    match format {
        DocumentFormat::Pdf => ExtractedDocument {
            text: extract_pdf_text(bytes),
            image: None,
        },
        DocumentFormat::Docx => extract_docx(bytes),
        DocumentFormat::PlainText => ExtractedDocument {
            text: String::from_utf8_lossy(bytes).into_owned(),
            image: None,
        },
        DocumentFormat::Unknown => {
            debug!("Unknown document format; returning empty text");
            ExtractedDocument::default()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PDF
// ────────────────────────────────────────────────────────────────────────────

/// Concatenates the trimmed text of every page, newline separated. Pages with
/// no text are dropped. pdf-extract panics on some malformed inputs, so the call is
/// isolated with `catch_unwind`.
fn extract_pdf_text(bytes: &[u8]) -> String {
    let pages = match panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes)) {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => {
            warn!("PDF text extraction failed: {e}");
            return String::new();
        }
        Err(_) => {
            warn!("PDF text extraction panicked; treating document as unreadable");
            return String::new();
        }
    };

    pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Best-effort scan of a PDF's objects for the first image XObject.
/// Returns the raw stream bytes (usually JPEG for photos); any failure is `None`.
pub fn extract_pdf_image(bytes: &[u8]) -> Option<Vec<u8>> {
    let scanned = panic::catch_unwind(|| {
        let doc = lopdf::Document::load_mem(bytes).ok()?;
        doc.objects.values().find_map(|object| match object {
            Object::Stream(stream) if is_image_stream(stream) => Some(stream.content.clone()),
            _ => None,
        })
    });
    scanned.unwrap_or_else(|_| {
        warn!("PDF image scan panicked; continuing without image");
        None
    })
}

fn is_image_stream(stream: &lopdf::Stream) -> bool {
    matches!(
        stream.dict.get(b"Subtype"),
        Ok(Object::Name(name)) if name.as_slice() == b"Image"
    )
}

// ────────────────────────────────────────────────────────────────────────────
// DOCX
// ────────────────────────────────────────────────────────────────────────────

static PARAGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:p(?:\s[^>]*)?/>|<w:p(?:\s[^>]*)?>(.*?)</w:p>")
        .expect("valid paragraph regex")
});

static RUN_CONTENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:tab/>|<w:(?:br|cr)(?:\s[^>]*)?/>")
        .expect("valid run regex")
});

static RELATIONSHIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<Relationship\s([^>]*?)/?>").expect("valid relationship regex"));

static ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+)="([^"]*)""#).expect("valid attribute regex"));

fn extract_docx(bytes: &[u8]) -> ExtractedDocument {
    let mut archive = match ZipArchive::new(Cursor::new(bytes)) {
        Ok(archive) => archive,
        Err(e) => {
            warn!("Failed to open DOCX archive: {e}");
            return ExtractedDocument::default();
        }
    };

    let text = match read_entry_string(&mut archive, DOCX_BODY) {
        Some(xml) => docx_paragraphs(&xml).join("\n"),
        None => {
            warn!("DOCX archive has no readable {DOCX_BODY}");
            String::new()
        }
    };

    let image = first_docx_image(&mut archive);

    ExtractedDocument { text, image }
}

/// Splits `word/document.xml` into paragraph strings, in document order.
/// Tabs and line breaks inside a paragraph are kept as `\t` / `\n`.
fn docx_paragraphs(xml: &str) -> Vec<String> {
    PARAGRAPH_RE
        .captures_iter(xml)
        .map(|caps| match caps.get(1) {
            Some(body) => paragraph_text(body.as_str()),
            None => String::new(),
        })
        .collect()
}

fn paragraph_text(body: &str) -> String {
    let mut out = String::new();
    for caps in RUN_CONTENT_RE.captures_iter(body) {
        match caps.get(1) {
            Some(text) => out.push_str(&unescape_xml(text.as_str())),
            None if caps[0].starts_with("<w:tab") => out.push('\t'),
            None => out.push('\n'),
        }
    }
    out
}

/// Finds the first image relationship of the main document part and returns the
/// referenced media bytes.
fn first_docx_image<R: Read + std::io::Seek>(archive: &mut ZipArchive<R>) -> Option<Vec<u8>> {
    let rels = read_entry_string(archive, DOCX_RELS)?;
    let target = RELATIONSHIP_RE.captures_iter(&rels).find_map(|caps| {
        let mut kind = None;
        let mut target = None;
        let mut external = false;
        for attr in ATTRIBUTE_RE.captures_iter(&caps[1]) {
            match &attr[1] {
                "Type" => kind = Some(attr[2].to_string()),
                "Target" => target = Some(attr[2].to_string()),
                "TargetMode" => external = &attr[2] == "External",
                _ => {}
            }
        }
        match (kind, target) {
            (Some(kind), Some(target)) if kind.ends_with("/image") && !external => Some(target),
            _ => None,
        }
    })?;

    let entry_name = match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("word/{target}"),
    };

    let mut file = archive.by_name(&entry_name).ok()?;
    let mut buf = Vec::new();
    match file.read_to_end(&mut buf) {
        Ok(_) => Some(buf),
        Err(e) => {
            debug!("Failed to read DOCX image {entry_name}: {e}");
            None
        }
    }
}

fn read_entry_string<R: Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Option<String> {
    let mut file = archive.by_name(name).ok()?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf).ok()?;
    Some(String::from_utf8_lossy(&buf).into_owned())
}

fn unescape_xml(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find(';') else {
            out.push_str(tail);
            return out;
        };
        let entity = &tail[1..end];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => entity
                .strip_prefix("#x")
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                .and_then(char::from_u32),
        };
        match decoded {
            Some(c) => out.push(c),
            None => out.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Stream};
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    const RELS_WITH_IMAGE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
<Relationship Id="rId4" Target="media/image1.png" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image"/>
</Relationships>"#;

    fn build_docx(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, data) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    /// One Helvetica text line per page; `""` makes a page with no content.
    fn build_pdf(pages: &[&str], image: Option<&[u8]>) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let mut resources = dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        };
        if let Some(data) = image {
            let image_id = doc.add_object(Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => Object::Integer(1),
                    "Height" => Object::Integer(1),
                    "ColorSpace" => "DeviceGray",
                    "BitsPerComponent" => Object::Integer(8),
                },
                data.to_vec(),
            ));
            resources.set("XObject", dictionary! { "Im1" => image_id });
        }
        let resources_id = doc.add_object(resources);

        let mut kids = Vec::new();
        for text in pages {
            let operations = if text.is_empty() {
                Vec::new()
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new(
                        "Tf",
                        vec![Object::Name(b"F1".to_vec()), Object::Integer(24)],
                    ),
                    Operation::new("Td", vec![Object::Integer(72), Object::Integer(700)]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => Object::Array(kids),
                "Count" => Object::Integer(count),
                "Resources" => resources_id,
                "MediaBox" => Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(595),
                    Object::Integer(842),
                ]),
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut out = Vec::new();
        doc.save_to(&mut out).unwrap();
        out
    }

    fn document_xml(paragraphs: &str) -> String {
        format!(
            r#"<?xml version="1.0"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{paragraphs}</w:body></w:document>"#
        )
    }

    #[test]
    fn test_format_from_filename() {
        assert_eq!(DocumentFormat::from_filename("cv.PDF"), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_filename("my.resume.docx"), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::from_filename("notes.txt"), DocumentFormat::PlainText);
        assert_eq!(DocumentFormat::from_filename("resume.doc"), DocumentFormat::Unknown);
        assert_eq!(DocumentFormat::from_filename("README"), DocumentFormat::Unknown);
    }

    #[test]
    fn test_plain_text_replaces_invalid_utf8() {
        let doc = extract_document(b"Jane \xFF Doe", DocumentFormat::PlainText);
        assert_eq!(doc.text, "Jane \u{FFFD} Doe");
        assert!(doc.image.is_none());
    }

    #[test]
    fn test_unknown_format_is_empty_not_error() {
        let doc = extract_document(b"anything", DocumentFormat::Unknown);
        assert!(doc.is_unreadable());
        assert!(doc.image.is_none());
    }

    #[test]
    fn test_garbage_pdf_yields_empty_text() {
        let doc = extract_document(b"%PDF-1.4 not really a pdf", DocumentFormat::Pdf);
        assert!(doc.is_unreadable());
    }

    #[test]
    fn test_garbage_pdf_has_no_image() {
        assert!(extract_pdf_image(b"definitely not a pdf").is_none());
    }

    #[test]
    fn test_pdf_pages_trimmed_and_blank_pages_dropped() {
        let bytes = build_pdf(&["Jane Doe Python", "", "SQL Excel"], None);
        let doc = extract_document(&bytes, DocumentFormat::Pdf);

        assert!(doc.text.contains("Python"), "{:?}", doc.text);
        assert!(doc.text.contains("Excel"), "{:?}", doc.text);
        assert_eq!(doc.text, doc.text.trim());
        let lines: Vec<&str> = doc.text.split('\n').collect();
        assert_eq!(lines.len(), 2, "{:?}", doc.text);
        assert!(lines.iter().all(|line| *line == line.trim() && !line.is_empty()));
        assert!(doc.image.is_none());
    }

    #[test]
    fn test_pdf_image_stream_is_returned() {
        let bytes = build_pdf(&["Jane Doe"], Some(&[0x7f]));
        assert_eq!(extract_pdf_image(&bytes), Some(vec![0x7f]));
    }

    #[test]
    fn test_text_only_pdf_has_no_image() {
        let bytes = build_pdf(&["Jane Doe"], None);
        assert!(extract_pdf_image(&bytes).is_none());
        assert!(!extract_document(&bytes, DocumentFormat::Pdf).is_unreadable());
    }

    #[test]
    fn test_docx_paragraphs_joined_by_newline() {
        let xml = document_xml(
            r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:t>Jane</w:t></w:r><w:r><w:t xml:space="preserve"> Doe</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>Skills:</w:t><w:tab/><w:t>C++ &amp; Rust</w:t></w:r></w:p>"#,
        );
        let bytes = build_docx(&[(DOCX_BODY, xml.as_bytes())]);
        let doc = extract_document(&bytes, DocumentFormat::Docx);
        assert_eq!(doc.text, "Jane Doe\n\nSkills:\tC++ & Rust");
        assert!(doc.image.is_none());
    }

    #[test]
    fn test_docx_returns_first_image() {
        let xml = document_xml("<w:p><w:r><w:t>Photo resume</w:t></w:r></w:p>");
        let png = [0x89u8, b'P', b'N', b'G', 1, 2, 3];
        let bytes = build_docx(&[
            (DOCX_BODY, xml.as_bytes()),
            (DOCX_RELS, RELS_WITH_IMAGE.as_bytes()),
            ("word/media/image1.png", &png),
        ]);
        let doc = extract_document(&bytes, DocumentFormat::Docx);
        assert_eq!(doc.text, "Photo resume");
        assert_eq!(doc.image.as_deref(), Some(&png[..]));
    }

    #[test]
    fn test_docx_missing_media_yields_no_image() {
        let xml = document_xml("<w:p><w:r><w:t>Text only</w:t></w:r></w:p>");
        let bytes = build_docx(&[
            (DOCX_BODY, xml.as_bytes()),
            (DOCX_RELS, RELS_WITH_IMAGE.as_bytes()),
        ]);
        let doc = extract_document(&bytes, DocumentFormat::Docx);
        assert_eq!(doc.text, "Text only");
        assert!(doc.image.is_none());
    }

    #[test]
    fn test_corrupt_docx_is_unreadable() {
        let doc = extract_document(b"PK\x03\x04 truncated", DocumentFormat::Docx);
        assert!(doc.is_unreadable());
    }

    #[test]
    fn test_unescape_xml_entities() {
        assert_eq!(unescape_xml("R&amp;D &lt;team&gt;"), "R&D <team>");
        assert_eq!(unescape_xml("caf&#233; &#x2013; ok"), "café – ok");
        assert_eq!(unescape_xml("AT&T"), "AT&T");
        assert_eq!(unescape_xml("&bogus; x"), "&bogus; x");
    }
}
