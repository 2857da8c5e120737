use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    /// An expected container (sidebar list, header, map element) is absent
    /// from the consuming page.
    #[error("view anchor not found: {anchor}")]
    MissingAnchor { anchor: String },

    #[error("render failed for dealer {id}: {reason}")]
    Render { id: String, reason: String },
}
