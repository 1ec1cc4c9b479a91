// metinAI Core Services
// Contract logic between the webview and the zero-shot service

pub mod text_normalizer;
pub mod label_set;
pub mod request_builder;
pub mod config_store;
pub mod gateway;
pub mod interpreter;
pub mod exporter;
pub mod presets;
pub mod session;

pub use config_store::*;
pub use gateway::*;
pub use label_set::*;
pub use session::*;
pub use text_normalizer::*;

// Re-export the remaining service surface explicitly
pub use exporter::{default_export_dir, export_results, EXPORT_FILE_NAME};
pub use interpreter::{classification_summary, filter_summary, format_score, summarize};
pub use presets::{
    classification_presets,
    default_filter_labels,
    filter_example_texts,
    find_preset,
    kvkk_categories,
    kvkk_example_texts,
    KVKK_POSITIVE_CATEGORY,
};
pub use request_builder::{build_classify_request, build_filter_request, BuildError};
