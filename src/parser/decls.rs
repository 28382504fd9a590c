//! Recovering recursive-descent parser for top-level interface declarations.
//!
//! Only document-scope `interface` declarations are extracted. Everything
//! else — `declare var`, type aliases, functions, namespace bodies — is
//! skipped, with brace balancing so that interfaces nested inside foreign
//! constructs are not mistaken for top-level ones.

use smol_str::SmolStr;

use super::lexer::{Token, TokenKind, tokenize};
use crate::base::{TextRange, TextSize};
use crate::syntax::{ExtendsRef, InterfaceDecl, MemberDecl, MemberKind, ParseError, ParseResult, TypingsFile};

/// Parse the declaration subset of an ambient typings document.
///
/// Never fails outright: malformed input produces [`ParseError`]s and a
/// partial [`TypingsFile`].
pub fn parse_typings(text: &str) -> ParseResult<TypingsFile> {
    let tokens: Vec<Token<'_>> = tokenize(text)
        .into_iter()
        .filter(|t| !t.is_trivia())
        .collect();

    let mut parser = Parser {
        tokens,
        pos: 0,
        errors: Vec::new(),
        end_of_input: TextSize::of(text),
    };

    let file = parser.parse_file();
    ParseResult::with_errors(file, parser.errors)
}

struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    errors: Vec<ParseError>,
    end_of_input: TextSize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == TokenKind::Ident && t.text == keyword)
    }

    fn error_at(&mut self, message: impl Into<String>, range: TextRange) {
        self.errors.push(ParseError::new(message, range));
    }

    fn token_range(token: &Token<'_>) -> TextRange {
        TextRange::new(token.offset, token.end())
    }

    /// Range pointing at the current token, or at end of input.
    fn current_range(&self) -> TextRange {
        match self.peek() {
            Some(t) => Self::token_range(t),
            None => TextRange::empty(self.end_of_input),
        }
    }

    // =========================================================================
    // TOP LEVEL
    // =========================================================================

    fn parse_file(&mut self) -> TypingsFile {
        let mut file = TypingsFile::default();

        while self.peek().is_some() {
            if self.at_keyword("interface") {
                if let Some(decl) = self.parse_interface() {
                    file.interfaces.push(decl);
                }
            } else if self.at(TokenKind::LBrace) {
                // Foreign construct body: skip without descending, so nested
                // interfaces stay invisible to top-level lookup.
                self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace);
            } else {
                self.bump();
            }
        }

        file
    }

    fn parse_interface(&mut self) -> Option<InterfaceDecl> {
        let keyword = self.bump()?; // `interface`
        let start = keyword.offset;

        let name = match self.peek() {
            Some(t) if t.kind == TokenKind::Ident => {
                let name = SmolStr::new(t.text);
                self.bump();
                name
            }
            _ => {
                let range = self.current_range();
                self.error_at("expected interface name", range);
                return None;
            }
        };

        // Type parameters carry no navigation information.
        if self.at(TokenKind::Lt) {
            self.skip_balanced(TokenKind::Lt, TokenKind::Gt);
        }

        let extends = if self.at_keyword("extends") {
            self.bump();
            self.parse_heritage()
        } else {
            Vec::new()
        };

        if !self.at(TokenKind::LBrace) {
            let range = self.current_range();
            self.error_at(format!("expected `{{` after interface {name}"), range);
            return Some(InterfaceDecl {
                name,
                extends,
                members: Vec::new(),
                range: TextRange::new(start, range.end()),
            });
        }
        self.bump(); // `{`

        let mut members = Vec::new();
        let mut end = self.current_range().end();

        loop {
            match self.peek() {
                None => {
                    let range = TextRange::empty(self.end_of_input);
                    self.error_at(format!("unterminated body of interface {name}"), range);
                    end = self.end_of_input;
                    break;
                }
                Some(t) if t.kind == TokenKind::RBrace => {
                    end = t.end();
                    self.bump();
                    break;
                }
                Some(t) if t.kind == TokenKind::Semicolon || t.kind == TokenKind::Comma => {
                    self.bump();
                }
                _ => {
                    if let Some(member) = self.parse_member() {
                        members.push(member);
                    }
                }
            }
        }

        Some(InterfaceDecl {
            name,
            extends,
            members,
            range: TextRange::new(start, end),
        })
    }

    fn parse_heritage(&mut self) -> Vec<ExtendsRef> {
        let mut refs = Vec::new();

        loop {
            let Some(first) = self.peek() else { break };
            if first.kind != TokenKind::Ident {
                let range = self.current_range();
                self.error_at("expected interface reference in extends clause", range);
                break;
            }

            let name = SmolStr::new(first.text);
            let ref_start = first.offset;
            let mut ref_end = first.end();
            self.bump();

            // Qualified references keep the leading identifier as the name;
            // lookup is by plain name within one document scope.
            while self.at(TokenKind::Dot) {
                self.bump();
                match self.peek() {
                    Some(t) if t.kind == TokenKind::Ident => {
                        ref_end = t.end();
                        self.bump();
                    }
                    _ => break,
                }
            }

            if self.at(TokenKind::Lt) {
                self.skip_balanced(TokenKind::Lt, TokenKind::Gt);
            }

            refs.push(ExtendsRef {
                name,
                range: TextRange::new(ref_start, ref_end),
            });

            if self.at(TokenKind::Comma) {
                self.bump();
            } else {
                break;
            }
        }

        refs
    }

    // =========================================================================
    // MEMBERS
    // =========================================================================

    /// Parse one member signature. Returns `None` for unnamed members (call
    /// and index signatures) and after recovery from malformed input.
    fn parse_member(&mut self) -> Option<MemberDecl> {
        let first = self.peek()?.clone();
        let start = first.offset;

        // `readonly` is a modifier unless it is itself the member name.
        if first.kind == TokenKind::Ident
            && first.text == "readonly"
            && self.nth_is_name_start(1)
        {
            self.bump();
        }

        let name = match self.peek() {
            Some(t) if t.kind == TokenKind::Ident => {
                let name = SmolStr::new(t.text);
                self.bump();
                Some(name)
            }
            Some(t) if t.kind == TokenKind::String => {
                let name = SmolStr::new(unquote(t.text));
                self.bump();
                Some(name)
            }
            Some(t) if t.kind == TokenKind::LBracket => {
                // Index signature: not addressable by name.
                self.skip_balanced(TokenKind::LBracket, TokenKind::RBracket);
                None
            }
            Some(t) if t.kind == TokenKind::LParen || t.kind == TokenKind::Lt => {
                // Call signature: not addressable by name.
                None
            }
            Some(t) => {
                let range = Self::token_range(t);
                self.error_at("expected member name", range);
                self.bump();
                return None;
            }
            None => return None,
        };

        if self.at(TokenKind::Question) {
            self.bump();
        }

        let kind = if self.at(TokenKind::LParen) || self.at(TokenKind::Lt) {
            MemberKind::Method
        } else {
            MemberKind::Property
        };

        let end = self.skip_member_tail();
        let name = name?;

        Some(MemberDecl {
            name,
            kind,
            range: TextRange::new(start, end),
        })
    }

    fn nth_is_name_start(&self, n: usize) -> bool {
        self.tokens.get(self.pos + n).is_some_and(|t| {
            matches!(
                t.kind,
                TokenKind::Ident | TokenKind::String | TokenKind::LBracket
            )
        })
    }

    /// Skip the rest of a member signature up to its terminating `;` (consumed)
    /// or the interface body's `}` (left in place). Nesting inside `()`, `[]`
    /// and `{}` is balanced, so semicolons inside object types do not
    /// terminate early. Returns the end offset of the member.
    fn skip_member_tail(&mut self) -> TextSize {
        let mut depth = 0usize;
        let mut end = self
            .tokens
            .get(self.pos.saturating_sub(1))
            .map(|t| t.end())
            .unwrap_or(self.end_of_input);

        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => depth += 1,
                TokenKind::RParen | TokenKind::RBracket => depth = depth.saturating_sub(1),
                TokenKind::RBrace => {
                    if depth == 0 {
                        return end;
                    }
                    depth -= 1;
                }
                TokenKind::Semicolon if depth == 0 => {
                    end = token.end();
                    self.bump();
                    return end;
                }
                _ => {}
            }
            end = token.end();
            self.bump();
        }

        end
    }

    /// Skip a balanced `open ... close` region, starting at `open`.
    fn skip_balanced(&mut self, open: TokenKind, close: TokenKind) {
        debug_assert!(self.at(open));
        let mut depth = 0usize;

        while let Some(token) = self.peek() {
            if token.kind == open {
                depth += 1;
            } else if token.kind == close {
                depth -= 1;
                if depth == 0 {
                    self.bump();
                    return;
                }
            }
            self.bump();
        }
    }
}

fn unquote(text: &str) -> &str {
    text.trim_matches(|c| c == '"' || c == '\'')
}
