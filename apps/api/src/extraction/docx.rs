use std::path::Path;

use anyhow::{anyhow, Context, Result};
use docx_rs::{read_docx, Docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild};

/// Extracts body paragraphs from a DOCX file and joins them with `\n`.
///
/// Only direct children of the document body count: tables, content controls,
/// headers and embedded objects are skipped. Empty paragraphs are kept.
pub(super) fn extract_docx(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    let docx = read_docx(&bytes).map_err(|e| anyhow!("invalid DOCX document: {e:?}"))?;
    Ok(body_paragraphs(&docx).join("\n"))
}

fn body_paragraphs(docx: &Docx) -> Vec<String> {
    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect()
}

/// Run text of one paragraph. Paragraph properties (tab stops, styles) never
/// contribute text.
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&mut text, &para.children);
    text
}

fn push_children(text: &mut String, children: &[ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(text, run),
            ParagraphChild::Hyperlink(link) => push_children(text, &link.children),
            _ => {}
        }
    }
}

fn push_run(text: &mut String, run: &Run) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

    const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

    const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"></Relationships>"#;

    fn document(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        )
    }

    /// Writes a minimal DOCX package whose body is `body`.
    fn write_docx(body: &str) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        let mut zip = zip::ZipWriter::new(file.reopen().unwrap());
        let parts = [
            ("[Content_Types].xml", CONTENT_TYPES.to_string()),
            ("_rels/.rels", PACKAGE_RELS.to_string()),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS.to_string()),
            ("word/document.xml", document(body)),
        ];
        for (name, xml) in parts {
            zip.start_file(name, SimpleFileOptions::default()).unwrap();
            zip.write_all(xml.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
        file
    }

    fn extract_body(body: &str) -> String {
        let file = write_docx(body);
        extract_docx(file.path()).unwrap()
    }

    #[test]
    fn test_paragraphs_joined_with_newline() {
        let text = extract_body(
            "<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>\
             <w:p><w:r><w:t xml:space=\"preserve\">Backend </w:t></w:r><w:r><w:t>Engineer</w:t></w:r></w:p>",
        );
        assert_eq!(text, "Jane Doe\nBackend Engineer");
    }

    #[test]
    fn test_empty_paragraphs_kept() {
        let text = extract_body(
            "<w:p><w:r><w:t>A</w:t></w:r></w:p><w:p></w:p><w:p><w:r><w:t>B</w:t></w:r></w:p>",
        );
        assert_eq!(text, "A\n\nB");
    }

    #[test]
    fn test_tab_stop_definitions_add_no_text() {
        let text = extract_body(
            "<w:p><w:pPr><w:tabs><w:tab w:val=\"right\" w:pos=\"9360\"/></w:tabs></w:pPr>\
             <w:r><w:t>Jane Doe</w:t></w:r></w:p>",
        );
        assert_eq!(text, "Jane Doe");
    }

    #[test]
    fn test_run_tabs_and_breaks() {
        let text = extract_body(
            "<w:p><w:r><w:t>Skills:</w:t><w:tab/><w:t>Go &amp; Rust</w:t><w:br/><w:t>SQL</w:t></w:r></w:p>",
        );
        assert_eq!(text, "Skills:\tGo & Rust\nSQL");
    }

    #[test]
    fn test_tables_and_content_controls_skipped() {
        let text = extract_body(
            "<w:p><w:r><w:t>Summary</w:t></w:r></w:p>\
             <w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>\
             <w:sdt><w:sdtContent><w:p><w:r><w:t>control</w:t></w:r></w:p></w:sdtContent></w:sdt>\
             <w:p><w:r><w:t>Go</w:t></w:r></w:p>",
        );
        assert_eq!(text, "Summary\nGo");
    }

    #[test]
    fn test_zip_without_document_is_error() {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        let mut zip = zip::ZipWriter::new(file.reopen().unwrap());
        zip.start_file("other.xml", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"<x/>").unwrap();
        zip.finish().unwrap();

        assert!(extract_docx(file.path()).is_err());
    }
}
