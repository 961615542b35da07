use crate::*;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    EOF,
    Unknown(char),
    Whitespace(String),
    LineComment(String),
    BlockComment(String),
    Directive(String),

    Identifier(String),
    Number(String),
    CharacterLiteral(String),
    StringLiteral(String),

    Punctuator(&'static str),
}

#[derive(Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn lexeme(&self) -> String {
        use TokenKind::*;

        match &self.kind {
            EOF => "\0".into(),
            Unknown(c) => c.to_string(),
            LineComment(s) => format!("//{}", s),
            BlockComment(s) => format!("/*{}*/", s),
            Punctuator(p) => (*p).into(),

            Whitespace(s) | Directive(s) | Identifier(s) | Number(s) | CharacterLiteral(s)
            | StringLiteral(s) => s.clone(),
        }
    }

    /// Comments, whitespace and preprocessor lines carry no code.
    pub fn is_insignificant(&self) -> bool {
        use TokenKind::*;

        matches!(
            self.kind,
            Whitespace(_) | LineComment(_) | BlockComment(_) | Directive(_)
        )
    }

    /// Whether a `-` after this token is binary rather than unary.
    pub fn ends_operand(&self) -> bool {
        use TokenKind::*;

        match self.kind {
            Identifier(_) | Number(_) | CharacterLiteral(_) | StringLiteral(_) => true,
            Punctuator(p) => matches!(p, ")" | "]" | "++" | "--"),
            _ => false,
        }
    }

    /// Expected diagnostic messages carried by a `//>` comment.
    pub fn test_expectations(&self) -> Vec<String> {
        match self.kind {
            TokenKind::LineComment(ref s) if s.starts_with('>') => s[1..]
                .split("//>")
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(String::from)
                .collect(),
            _ => vec![],
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.fmt(f)
    }
}
