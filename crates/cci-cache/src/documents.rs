use cci_core::{Document, Uri};

use crate::store::Store;

/// Open documents keyed by URI.
pub type DocumentStore = Store<Uri, Document>;

impl DocumentStore {
    /// Stores `document` under its own URI.
    pub fn set_document(&self, document: Document) -> Document {
        self.set(document.uri().clone(), document)
    }
}
