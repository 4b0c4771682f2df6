use crate::diff::{Change, ChangeKind, diff_words};
use crate::error::ExportError;
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Produces a document recording `revised` as tracked changes over
/// `original`, attributed to `author`.
pub trait TrackedChangesExporter: Send + Sync {
    fn export(
        &self,
        original: &str,
        revised: &str,
        author: &str,
        out_path: &Path,
    ) -> Result<(), ExportError>;
}

/// Writes a minimal WordprocessingML package with `w:ins`/`w:del` revisions.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExporter;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Vertical tab and form feed are Word's manual line and page breaks.
fn is_break(ch: char) -> bool {
    matches!(ch, '\n' | '\u{0B}' | '\u{0C}')
}

/// Escapes markup and drops characters XML 1.0 does not allow.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' => out.push(ch),
            c if (c as u32) < 0x20 => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
    out
}

struct BodyWriter<'a> {
    author: String,
    date: String,
    next_id: u32,
    paragraph: String,
    body: &'a mut String,
}

impl BodyWriter<'_> {
    fn run(&mut self, kind: ChangeKind, text: &str) {
        if text.is_empty() {
            return;
        }
        let escaped = escape_xml(text);
        match kind {
            ChangeKind::Equal => self.paragraph.push_str(&format!(
                r#"<w:r><w:t xml:space="preserve">{escaped}</w:t></w:r>"#
            )),
            ChangeKind::Insert => {
                self.paragraph.push_str(&format!(
                    r#"<w:ins w:id="{}" w:author="{}" w:date="{}"><w:r><w:t xml:space="preserve">{escaped}</w:t></w:r></w:ins>"#,
                    self.next_id, self.author, self.date
                ));
                self.next_id += 1;
            }
            ChangeKind::Delete => {
                self.paragraph.push_str(&format!(
                    r#"<w:del w:id="{}" w:author="{}" w:date="{}"><w:r><w:delText xml:space="preserve">{escaped}</w:delText></w:r></w:del>"#,
                    self.next_id, self.author, self.date
                ));
                self.next_id += 1;
            }
        }
    }

    fn end_paragraph(&mut self) {
        self.body.push_str("<w:p>");
        self.body.push_str(&self.paragraph);
        self.body.push_str("</w:p>");
        self.paragraph.clear();
    }
}

/// Renders `word/document.xml` for the given edit script.
pub fn document_xml(changes: &[Change], author: &str, date: DateTime<Utc>) -> String {
    let mut body = String::new();
    let mut writer = BodyWriter {
        author: escape_xml(author),
        date: date.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        next_id: 1,
        paragraph: String::new(),
        body: &mut body,
    };

    for change in changes {
        let mut lines = change.text.split(is_break);
        if let Some(first) = lines.next() {
            writer.run(change.kind, first);
        }
        for line in lines {
            writer.end_paragraph();
            writer.run(change.kind, line);
        }
    }
    writer.end_paragraph();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    )
}

impl DocxExporter {
    pub fn export_at(
        &self,
        original: &str,
        revised: &str,
        author: &str,
        date: DateTime<Utc>,
        out_path: &Path,
    ) -> Result<(), ExportError> {
        let changes = diff_words(original, revised);
        let document = document_xml(&changes, author, date);

        let file = File::create(out_path)?;
        let mut zip = ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(CONTENT_TYPES_XML.as_bytes())?;
        zip.start_file("_rels/.rels", options)?;
        zip.write_all(RELS_XML.as_bytes())?;
        zip.start_file("word/document.xml", options)?;
        zip.write_all(document.as_bytes())?;
        zip.finish()?;

        log::debug!(
            "Wrote {} with {} change runs",
            out_path.display(),
            changes.len()
        );
        Ok(())
    }
}

impl TrackedChangesExporter for DocxExporter {
    fn export(
        &self,
        original: &str,
        revised: &str,
        author: &str,
        out_path: &Path,
    ) -> Result<(), ExportError> {
        self.export_at(original, revised, author, Utc::now(), out_path)
    }
}
