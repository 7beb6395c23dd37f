use super::validation::ValidationError;

/// Contract every editable domain entity implements.
///
/// Forms are generic over this trait: the lifecycle controller only needs the
/// persistent identity and the validation hook, everything attribute-specific
/// flows through the declarative binding table of the concrete form.
pub trait Record {
    /// Persistent identifier; 0 means not yet persisted.
    fn id(&self) -> u64;

    /// Validates the record, enumerating every invalid attribute.
    fn validate(&self) -> Result<(), ValidationError>;
}
