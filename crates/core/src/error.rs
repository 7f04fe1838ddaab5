/// Domain-level error shared by the wizard and contact modules.
///
/// The message carried by [`CoreError::Validation`] is safe to show to end
/// users; the API layer returns it verbatim.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),
}
