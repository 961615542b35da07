use crate::syntax::*;
use crate::*;
use core::iter::{Enumerate, Peekable};
use std::str::Chars;

type CharStream<'a> = Peekable<Enumerate<Chars<'a>>>;

/// Multi-character punctuators that matter when telling unary minus apart.
const PUNCTUATORS: &[&str] = &["->", "--", "++", "-=", "+=", "<<", ">>", "&&", "||", "::"];

pub fn tokenize(source: Arc<Source>) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut chars = source.code.chars().enumerate().peekable();
    let mut tokens: Vec<Token> = vec![];
    let mut diagnostics = vec![];

    loop {
        let at_line_start = tokens.last().map(starts_new_line).unwrap_or(true);
        match next_token(&source, &mut chars, at_line_start, &mut diagnostics) {
            None => break,
            Some(token) => tokens.push(token),
        }
    }

    tokens.push(Token {
        kind: TokenKind::EOF,
        span: Span::at_end_of(&source),
    });

    (tokens, diagnostics)
}

fn starts_new_line(previous: &Token) -> bool {
    match previous.kind {
        TokenKind::Whitespace(ref s) => {
            s.contains('\n') || previous.span.start.character == 1 && !s.is_empty()
        }
        _ => false,
    }
}

fn take_while<F: Fn(char) -> bool>(
    stream: &mut CharStream,
    chars: &mut String,
    end_offset: &mut usize,
    f: F,
) {
    loop {
        match stream.peek() {
            Some((_, c)) if f(*c) => {
                let (o, c) = stream.next().unwrap();
                *end_offset = o;
                chars.push(c);
            }
            _ => break,
        }
    }
}

/// Consumes a quoted literal whose opening quote is already consumed.
/// Returns whether the closing quote was found.
fn take_quoted(
    stream: &mut CharStream,
    chars: &mut String,
    end_offset: &mut usize,
    quote: char,
) -> bool {
    loop {
        match stream.peek() {
            None | Some((_, '\n')) => return false,
            Some(_) => {
                let (o, c) = stream.next().unwrap();
                *end_offset = o;
                chars.push(c);
                if c == quote {
                    return true;
                }
                if c == '\\' {
                    if let Some((o, escaped)) = stream.next() {
                        *end_offset = o;
                        chars.push(escaped);
                    }
                }
            }
        }
    }
}

fn next_token(
    source: &Arc<Source>,
    stream: &mut CharStream,
    at_line_start: bool,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Token> {
    let (offset, ch) = stream.next()?;
    let kind;
    let mut end_offset = offset;

    let next_ch = stream.peek().map(|(_, c)| *c).unwrap_or('\0');

    match (ch, next_ch) {
        // Whitespace
        (s, _) if s.is_whitespace() => {
            let mut chars = ch.to_string();
            take_while(stream, &mut chars, &mut end_offset, char::is_whitespace);
            kind = TokenKind::Whitespace(chars);
        }

        // LineComment
        ('/', '/') => {
            let (o, _) = stream.next().unwrap();
            end_offset = o;
            let mut chars = String::new();
            take_while(stream, &mut chars, &mut end_offset, |c| c != '\n');
            kind = TokenKind::LineComment(chars);
        }

        // BlockComment
        ('/', '*') => {
            let (o, _) = stream.next().unwrap();
            end_offset = o;
            let mut chars = String::new();
            let mut terminated = false;
            while let Some((o, c)) = stream.next() {
                end_offset = o;
                if c == '*' {
                    if let Some((o, '/')) = stream.peek().cloned() {
                        stream.next();
                        end_offset = o;
                        terminated = true;
                        break;
                    }
                }
                chars.push(c);
            }
            if !terminated {
                diagnostics.push(Diagnostic::SyntaxError(
                    Span::at_range(source, offset..end_offset + 1),
                    "unterminated comment".into(),
                ));
            }
            kind = TokenKind::BlockComment(chars);
        }

        // Directive
        ('#', _) if at_line_start => {
            let mut chars = ch.to_string();
            loop {
                take_while(stream, &mut chars, &mut end_offset, |c| c != '\n');
                if chars.ends_with('\\') {
                    if let Some((o, c)) = stream.next() {
                        end_offset = o;
                        chars.push(c);
                        continue;
                    }
                }
                break;
            }
            kind = TokenKind::Directive(chars);
        }

        // Number
        (n, _) if n.is_ascii_digit() => {
            kind = TokenKind::Number(take_number(stream, ch, &mut end_offset));
        }
        ('.', n) if n.is_ascii_digit() => {
            kind = TokenKind::Number(take_number(stream, ch, &mut end_offset));
        }

        // Identifier
        (n, _) if n.is_alphabetic() || n == '_' || n == '$' => {
            let mut chars = ch.to_string();
            take_while(stream, &mut chars, &mut end_offset, |c| {
                c.is_alphanumeric() || c == '_' || c == '$'
            });
            kind = TokenKind::Identifier(chars);
        }

        // CharacterLiteral and StringLiteral
        (q, _) if q == '\'' || q == '"' => {
            let mut chars = ch.to_string();
            if !take_quoted(stream, &mut chars, &mut end_offset, q) {
                diagnostics.push(Diagnostic::SyntaxError(
                    Span::at_range(source, offset..end_offset + 1),
                    if q == '"' {
                        "missing terminating '\"' character".into()
                    } else {
                        "missing terminating ' character".into()
                    },
                ));
            }
            kind = if q == '"' {
                TokenKind::StringLiteral(chars)
            } else {
                TokenKind::CharacterLiteral(chars)
            };
        }

        // Punctuator
        (c, n) if c.is_ascii_punctuation() => {
            let pair: String = [c, n].iter().collect();
            match PUNCTUATORS.iter().find(|p| **p == pair) {
                Some(p) => {
                    let (o, _) = stream.next().unwrap();
                    end_offset = o;
                    kind = TokenKind::Punctuator(*p);
                }
                None => kind = punctuator(c),
            }
        }

        // Unknown
        (c, _) => {
            kind = TokenKind::Unknown(c);
        }
    }

    Some(Token {
        kind,
        span: Span::at_range(source, offset..end_offset + 1),
    })
}

fn punctuator(c: char) -> TokenKind {
    const SINGLE: &[&str] = &[
        "!", "%", "&", "(", ")", "*", "+", ",", "-", ".", "/", ":", ";", "<", "=", ">", "?",
        "[", "]", "^", "{", "|", "}", "~", "@", "`", "\\",
    ];
    let mut buffer = [0; 4];
    let spelled: &str = c.encode_utf8(&mut buffer);
    match SINGLE.iter().find(|p| **p == spelled) {
        Some(p) => TokenKind::Punctuator(*p),
        None => TokenKind::Unknown(c),
    }
}

/// Consumes a preprocessing number: digits, letters, `_`, `.`, digit
/// separators and signed exponents.
fn take_number(stream: &mut CharStream, first: char, end_offset: &mut usize) -> String {
    let mut chars = first.to_string();
    loop {
        let c = match stream.peek() {
            Some((_, c)) => *c,
            None => break,
        };
        let after = {
            let mut ahead = stream.clone();
            ahead.next();
            ahead.peek().map(|(_, c)| *c)
        };
        let last = chars.chars().last().unwrap_or(first);

        let continues = if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            true
        } else if c == '\'' {
            after.map(|a| a.is_ascii_alphanumeric()).unwrap_or(false)
        } else if c == '+' || c == '-' {
            matches!(last, 'e' | 'E' | 'p' | 'P') && !is_hex_spelling(&chars, last)
        } else {
            false
        };

        if !continues {
            break;
        }
        let (o, c) = stream.next().unwrap();
        *end_offset = o;
        chars.push(c);
    }
    chars
}

/// In `0x1e+2` the `e` is a hex digit, so `+` is an operator.
fn is_hex_spelling(chars: &str, last: char) -> bool {
    let lower = chars.to_lowercase();
    lower.starts_with("0x") && matches!(last, 'e' | 'E')
}
