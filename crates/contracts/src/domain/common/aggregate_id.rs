/// String round-trip for aggregate identifiers.
///
/// Ids travel as plain strings over the wire and in the database; the
/// typed wrappers exist so a category id cannot be handed to an operation
/// expecting a subcategory id.
pub trait AggregateId: Sized {
    fn as_string(&self) -> String;
    fn from_string(s: &str) -> Result<Self, String>;
}
