use crate::literal::{LiteralError, Verdict};
use crate::syntax::IntegerType;
use crate::*;
use strum::IntoStaticStr;
use std::fmt;

#[derive(Clone, IntoStaticStr)]
pub enum Diagnostic {
    SyntaxError(Span, String),
    IntegerTooLarge(Span, String),
    ImplicitlyUnsigned(Span, IntegerType),
    NonPortableInteger(Span, Verdict),
    MalformedLiteral(Span, LiteralError),
}

impl Diagnostic {
    pub fn span(&self) -> &Span {
        use Diagnostic::*;

        match self {
            SyntaxError(ref s, _)
            | IntegerTooLarge(ref s, _)
            | ImplicitlyUnsigned(ref s, _)
            | NonPortableInteger(ref s, _)
            | MalformedLiteral(ref s, _) => s,
        }
    }

    pub fn level(&self) -> DiagnosticLevel {
        use Diagnostic::*;

        match self {
            SyntaxError(_, _) | IntegerTooLarge(_, _) | MalformedLiteral(_, _) => {
                DiagnosticLevel::Error
            }

            ImplicitlyUnsigned(_, _) | NonPortableInteger(_, _) => DiagnosticLevel::Warning,
        }
    }

    pub fn code(&self) -> usize {
        use Diagnostic::*;

        match self {
            SyntaxError(_, _) => 1,
            IntegerTooLarge(_, _) => 2,
            ImplicitlyUnsigned(_, _) => 3,
            NonPortableInteger(_, _) => 4,
            MalformedLiteral(_, _) => 5,
        }
    }

    pub fn failed(diagnostics: &[Diagnostic]) -> bool {
        diagnostics
            .iter()
            .any(|d| matches!(d.level(), DiagnosticLevel::Error))
    }
}

impl fmt::Debug for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &'static str = self.into();
        write!(
            f,
            "{:?} ({} @ {}:{})",
            self.to_string(),
            name,
            self.span().start.uri,
            self.span().start.line,
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Diagnostic::*;

        match self {
            SyntaxError(_, s) => write!(f, "{}", s),
            IntegerTooLarge(_, s) => write!(
                f,
                "integer literal `{}` is too large to be represented in any integer type",
                s
            ),
            ImplicitlyUnsigned(_, type_) => write!(
                f,
                "integer literal is too large to be represented in a signed integer type, \
                 interpreting as `{}`",
                type_
            ),
            NonPortableInteger(_, verdict) => write!(f, "{}", verdict),
            MalformedLiteral(_, error) => write!(f, "internal error: {}", error),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Error,
    Warning,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DiagnosticLevel::Error => write!(f, "error"),
            DiagnosticLevel::Warning => write!(f, "warning"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::MalformedReason;

    #[test]
    fn only_warnings_never_fail() {
        let span = Span::at_end_of(&Source::test(""));
        let warnings = vec![
            Diagnostic::ImplicitlyUnsigned(span.clone(), IntegerType::UnsignedLongLong),
            Diagnostic::NonPortableInteger(span.clone(), Verdict::default()),
        ];
        assert!(warnings
            .iter()
            .all(|d| d.level() == DiagnosticLevel::Warning));
        assert!(!Diagnostic::failed(&warnings));

        let malformed = Diagnostic::MalformedLiteral(span, MalformedReason::ZeroBitWidth.into());
        assert_eq!(malformed.level(), DiagnosticLevel::Error);
        assert_eq!(malformed.level().to_string(), "error");
        assert!(Diagnostic::failed(&[malformed]));
    }
}
