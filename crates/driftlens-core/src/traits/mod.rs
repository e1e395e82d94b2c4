mod annotation_store;
mod edit_history_source;
mod embedding_provider;

pub use annotation_store::IAnnotationStore;
pub use edit_history_source::IEditHistorySource;
pub use embedding_provider::IEmbeddingProvider;
