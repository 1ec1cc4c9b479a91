// Request Builder
// Combines normalized texts and labels into one of the two request shapes.

use thiserror::Error;

use crate::models::{ClassifyRequest, FilterRequest};
use crate::services::label_set::LabelSet;

/// Preconditions for submission. The UI keeps the trigger disabled while
/// either list is empty, so these normally never surface; a direct call is
/// refused before any network activity. Messages match the service's own
/// request validators.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BuildError {
    #[error("Metin listesi boş olamaz")]
    EmptyTexts,
    #[error("Kategori listesi boş olamaz")]
    EmptyLabels,
}

/// Classification: the service picks one winning category per text.
pub fn build_classify_request(
    texts: &[String],
    categories: &LabelSet,
) -> Result<ClassifyRequest, BuildError> {
    check_preconditions(texts, categories)?;
    Ok(ClassifyRequest {
        texts: texts.to_vec(),
        categories: categories.labels().to_vec(),
    })
}

/// Filtering: every filter is evaluated against every text independently.
pub fn build_filter_request(
    texts: &[String],
    filters: &LabelSet,
) -> Result<FilterRequest, BuildError> {
    check_preconditions(texts, filters)?;
    Ok(FilterRequest {
        texts: texts.to_vec(),
        filters: filters.labels().to_vec(),
    })
}

fn check_preconditions(texts: &[String], labels: &LabelSet) -> Result<(), BuildError> {
    if texts.is_empty() {
        return Err(BuildError::EmptyTexts);
    }
    if labels.is_empty() {
        return Err(BuildError::EmptyLabels);
    }
    Ok(())
}
