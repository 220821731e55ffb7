use std::sync::Arc;

use lsp_types::{TextDocumentItem, Uri};

/// An open document as last reported by the editor.
///
/// Documents are replaced wholesale on every sync; the text is reference counted
/// so snapshots handed out by the store stay cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    uri: Uri,
    language_id: String,
    version: i32,
    text: Arc<str>,
}

impl Document {
    pub fn new(
        uri: Uri,
        language_id: impl Into<String>,
        version: i32,
        text: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            uri,
            language_id: language_id.into(),
            version,
            text: text.into(),
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_arc(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }
}

impl From<TextDocumentItem> for Document {
    fn from(item: TextDocumentItem) -> Self {
        Self::new(item.uri, item.language_id, item.version, item.text)
    }
}

impl From<Document> for TextDocumentItem {
    fn from(doc: Document) -> Self {
        TextDocumentItem {
            uri: doc.uri,
            language_id: doc.language_id,
            version: doc.version,
            text: doc.text.to_string(),
        }
    }
}
