use crate::literal::{LiteralText, TypedValue};
use crate::*;

/// Identifies one occurrence of a literal. The same spelling reached through
/// distinct instantiations carries distinct contexts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OccurrenceKey {
    pub uri: URI,
    pub offset: usize,
    pub context: Option<String>,
}

impl OccurrenceKey {
    pub fn at(span: &Span) -> OccurrenceKey {
        OccurrenceKey {
            uri: span.start.uri.clone(),
            offset: span.start.offset,
            context: None,
        }
    }

    pub fn within<S: Into<String>>(self, context: S) -> OccurrenceKey {
        OccurrenceKey {
            context: Some(context.into()),
            ..self
        }
    }
}

/// What a host knows about one literal occurrence.
#[derive(Clone, Debug)]
pub struct LiteralOccurrence {
    pub key: OccurrenceKey,
    pub span: Span,
    pub text: LiteralText,
    /// `None` while the literal's type still depends on a template parameter.
    pub value: Option<TypedValue>,
}

/// A front end able to enumerate the integer literals it has resolved.
pub trait LiteralHost {
    fn literal_occurrences(&self) -> Vec<LiteralOccurrence>;
}
