//! Text extraction for uploaded documents.

use std::{
    borrow::Cow,
    io::{Cursor, Read},
    path::Path,
};

use quick_xml::{Reader, events::Event};

use crate::error::IngestError;

const DOCX_BODY: &str = "word/document.xml";

/// Upload formats ThyBot can read, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    pub fn from_file_name(file_name: &str) -> Result<Self, IngestError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "txt" => Ok(Self::Txt),
            _ => Err(IngestError::UnsupportedFileType { extension }),
        }
    }
}

/// A contiguous part of the source document (a PDF page, or the whole body
/// for DOCX and plain text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    pub index: usize,
    pub text: String,
}

/// Extract the text of an uploaded file. Fails when the format is not
/// supported, the bytes cannot be decoded, or no text is left after
/// extraction.
pub fn load_document(file_name: &str, bytes: &[u8]) -> Result<Vec<TextSegment>, IngestError> {
    let kind = DocumentKind::from_file_name(file_name)?;
    let unreadable = |reason: String| IngestError::Unreadable {
        file_name: file_name.to_owned(),
        reason,
    };

    let raw: Vec<String> = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| unreadable(e.to_string()))?
            .split('\u{c}')
            .map(str::to_owned)
            .collect(),
        DocumentKind::Docx => vec![read_docx(bytes).map_err(unreadable)?],
        DocumentKind::Txt => vec![String::from_utf8_lossy(bytes).into_owned()],
    };

    let segments: Vec<TextSegment> = raw
        .into_iter()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| TextSegment { index, text })
        .collect();

    if segments.is_empty() {
        return Err(IngestError::EmptyDocument {
            file_name: file_name.to_owned(),
        });
    }

    tracing::debug!(file_name, ?kind, segments = segments.len(), "extracted document text");
    Ok(segments)
}

fn read_docx(bytes: &[u8]) -> Result<String, String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| e.to_string())?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY)
        .map_err(|e| format!("{DOCX_BODY}: {e}"))?
        .read_to_string(&mut xml)
        .map_err(|e| e.to_string())?;
    docx_body_text(&xml).map_err(|e| e.to_string())
}

/// Collect the `<w:t>` runs of a WordprocessingML body, one line per
/// paragraph.
fn docx_body_text(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => out.push('\t'),
                b"w:br" | b"w:cr" => out.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run_text => {
                let text: Cow<'_, str> = t.unescape()?;
                out.push_str(&text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Hashimoto&apos;s thyroiditis</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">TSH </w:t></w:r><w:r><w:tab/><w:t>4.2 mIU/L</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    fn docx_bytes(body: &str) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut zip = zip::ZipWriter::new(&mut buf);
            zip.start_file(DOCX_BODY, zip::write::SimpleFileOptions::default())
                .unwrap();
            zip.write_all(body.as_bytes()).unwrap();
            zip.finish().unwrap();
        }
        buf.into_inner()
    }

    #[test]
    fn kind_is_picked_by_extension() {
        assert_eq!(DocumentKind::from_file_name("labs.PDF").unwrap(), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_file_name("notes.docx").unwrap(), DocumentKind::Docx);
        assert_eq!(DocumentKind::from_file_name("a.b.txt").unwrap(), DocumentKind::Txt);

        let err = DocumentKind::from_file_name("scan.png").unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFileType { extension } if extension == "png"));
        assert!(DocumentKind::from_file_name("README").is_err());
    }

    #[test]
    fn plain_text_is_read_lossily() {
        let segments = load_document("notes.txt", b"T4 \xff result").unwrap();
        assert_eq!(segments.len(), 1);
        assert!(segments[0].text.starts_with("T4 "));
    }

    #[test]
    fn empty_text_is_rejected() {
        let err = load_document("blank.txt", b"  \n\t").unwrap_err();
        assert!(matches!(err, IngestError::EmptyDocument { .. }));
    }

    #[test]
    fn docx_paragraphs_become_lines() {
        let text = docx_body_text(BODY).unwrap();
        assert_eq!(text, "Hashimoto's thyroiditis\nTSH \t4.2 mIU/L\n");

        let segments = load_document("report.docx", &docx_bytes(BODY)).unwrap();
        assert_eq!(segments[0].text, text);
    }

    #[test]
    fn broken_docx_is_unreadable() {
        let err = load_document("report.docx", b"not a zip").unwrap_err();
        assert!(matches!(err, IngestError::Unreadable { .. }));
    }
}
