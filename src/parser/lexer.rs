//! Logos-based lexer for ambient typings source.
//!
//! Fast tokenization using the logos crate. The token set covers exactly
//! what the declaration parser inspects; everything else falls through to
//! [`TokenKind::Unknown`] and is skipped by the parser.

use logos::Logos;

use crate::base::TextSize;

/// A token with its kind, text, and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// End offset of this token.
    pub fn end(&self) -> TextSize {
        self.offset + TextSize::of(self.text)
    }

    /// True for whitespace and comments.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }
}

/// Lexer wrapping the logos-generated tokenizer.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match result {
            Ok(kind) => kind,
            Err(()) => TokenKind::Unknown,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum for the `.d.ts` declaration surface.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    String,

    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    #[token("?")]
    Question,

    #[token(".")]
    Dot,

    #[token("|")]
    Pipe,

    #[token("&")]
    Amp,

    #[token("=")]
    Eq,

    // Anything the declaration parser never inspects
    #[regex(r".", priority = 0)]
    Unknown,
}
