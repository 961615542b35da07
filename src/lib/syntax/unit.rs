use crate::syntax::*;
use crate::*;

/// An integer literal found in a unit, with the type it takes on.
#[derive(Clone, Debug)]
pub struct ScannedLiteral {
    pub token: Token,
    pub literal: IntegerLiteral,
    pub type_: IntegerType,
    /// The literal is the operand of a unary minus.
    pub negated: bool,
}

/// One scanned source file.
pub struct Unit {
    pub source: Arc<Source>,
    pub tokens: Vec<Token>,
    pub literals: Vec<ScannedLiteral>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Unit {
    pub fn scan(source: Arc<Source>, model: DataModel) -> Unit {
        let (tokens, mut diagnostics) = tokenize(source.clone());
        let mut literals = vec![];

        {
            let significant: Vec<&Token> =
                tokens.iter().filter(|t| !t.is_insignificant()).collect();

            for (i, token) in significant.iter().enumerate() {
                if let TokenKind::Number(ref spelling) = token.kind {
                    let negated = is_unary_minus(&significant[..i]);
                    if let Some(literal) =
                        Self::evaluate(token, spelling, negated, model, &mut diagnostics)
                    {
                        literals.push(literal);
                    }
                }
            }
        }

        debug!(
            "Scanned {}: {} integer literals, {} diagnostics.",
            source,
            literals.len(),
            diagnostics.len()
        );

        Unit {
            source,
            tokens,
            literals,
            diagnostics,
        }
    }

    fn evaluate(
        token: &Token,
        spelling: &str,
        negated: bool,
        model: DataModel,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<ScannedLiteral> {
        let literal = match IntegerLiteral::parse(spelling) {
            Ok(literal) => literal?,
            Err(message) => {
                diagnostics.push(Diagnostic::SyntaxError(token.span.clone(), message));
                return None;
            }
        };

        let type_ = match IntegerType::of_literal(&literal, model) {
            TypeResolution::Typed(type_) => type_,
            TypeResolution::ImplicitlyUnsigned(type_) => {
                diagnostics.push(Diagnostic::ImplicitlyUnsigned(token.span.clone(), type_));
                type_
            }
            TypeResolution::TooLarge => {
                diagnostics.push(Diagnostic::IntegerTooLarge(
                    token.span.clone(),
                    spelling.into(),
                ));
                return None;
            }
        };

        Some(ScannedLiteral {
            token: token.clone(),
            literal,
            type_,
            negated,
        })
    }

    /// `(line, message)` pairs expected by `//>` comments.
    pub fn test_expectations(&self) -> Vec<(usize, String)> {
        self.tokens
            .iter()
            .flat_map(|t| {
                let line = t.span.start.line;
                t.test_expectations().into_iter().map(move |m| (line, m))
            })
            .collect()
    }
}

/// Keywords after which a `-` starts an operand.
const OPERATOR_KEYWORDS: &[&str] = &[
    "return",
    "case",
    "throw",
    "else",
    "do",
    "co_return",
    "co_yield",
];

/// Words that may spell the type in a cast such as `(unsigned long)`.
const TYPE_KEYWORDS: &[&str] = &[
    "char", "short", "int", "long", "signed", "unsigned", "const", "volatile", "size_t",
];

/// Whether a `-` ending `preceding` is a unary minus.
fn is_unary_minus(preceding: &[&Token]) -> bool {
    let (minus, before) = match preceding.split_last() {
        Some(split) => split,
        None => return false,
    };
    if minus.kind != TokenKind::Punctuator("-") {
        return false;
    }

    match before.last() {
        None => true,
        Some(Token {
            kind: TokenKind::Identifier(name),
            ..
        }) => OPERATOR_KEYWORDS.contains(&name.as_str()),
        Some(Token {
            kind: TokenKind::Punctuator(")"),
            ..
        }) => closes_cast(&before[..before.len() - 1]),
        Some(token) => !token.ends_operand(),
    }
}

/// Whether the `)` after `preceding` closes a cast to an integer type rather
/// than a call or a grouping. Names ending in `_t` are taken as typedefs.
fn closes_cast(preceding: &[&Token]) -> bool {
    let open = match preceding
        .iter()
        .rposition(|t| t.kind == TokenKind::Punctuator("("))
    {
        Some(open) => open,
        None => return false,
    };
    let called = match preceding[..open].last() {
        Some(Token {
            kind: TokenKind::Identifier(name),
            ..
        }) => !OPERATOR_KEYWORDS.contains(&name.as_str()),
        Some(token) => token.ends_operand(),
        None => false,
    };
    if called {
        return false;
    }

    let inner = &preceding[open + 1..];

    !inner.is_empty()
        && inner.iter().all(|t| match t.kind {
            TokenKind::Identifier(ref name) => {
                TYPE_KEYWORDS.contains(&name.as_str()) || name.ends_with("_t")
            }
            TokenKind::Punctuator(p) => p == "*",
            _ => false,
        })
}
