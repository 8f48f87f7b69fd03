use crate::ast::{Document, Node, Prop, Value};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| (t.line, t.col))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn peek_ahead(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    // ── Document ──────────────────────────────────────────────────────────

    pub fn parse_document(&mut self) -> Result<Document, ParseError> {
        if self.peek() == &Token::Eof {
            return Err(self.err("empty document, expected a widget"));
        }
        let node = self.parse_node()?;
        if self.peek() != &Token::Eof {
            return Err(self.err("a document holds exactly one widget"));
        }
        Ok(Document { node })
    }

    // ── Node ──────────────────────────────────────────────────────────────

    fn parse_node(&mut self) -> Result<Node, ParseError> {
        let widget = match self.peek().clone() {
            Token::Ident(s) => {
                self.advance();
                s
            }
            tok => return Err(self.err(format!("expected widget name, got {:?}", tok))),
        };

        // Optional inline content: `CornerLabel "NEW"`.
        let content = match self.peek().clone() {
            Token::Str(s) => {
                self.advance();
                Some(s)
            }
            _ => None,
        };

        let props = if self.peek() == &Token::LBrace { self.parse_block()? } else { Vec::new() };

        Ok(Node { widget, content, props })
    }

    // ── Block ─────────────────────────────────────────────────────────────

    fn parse_block(&mut self) -> Result<Vec<Prop>, ParseError> {
        self.advance(); // `{`
        let mut props = Vec::new();

        loop {
            match self.peek() {
                Token::RBrace => {
                    self.advance();
                    return Ok(props);
                }
                Token::Eof => return Err(self.err("unclosed '{' block")),
                Token::Ident(_) if self.peek_ahead(1) == &Token::Colon => {
                    props.push(self.parse_prop()?);
                }
                Token::Ident(name) => {
                    return Err(self.err(format!(
                        "expected ':' after {:?}; nested widgets are not supported",
                        name
                    )));
                }
                tok => {
                    return Err(self.err(format!(
                        "unexpected {:?} inside block, expected a property (key: value)",
                        tok
                    )));
                }
            }
        }
    }

    // ── Prop ──────────────────────────────────────────────────────────────

    fn parse_prop(&mut self) -> Result<Prop, ParseError> {
        let (line, _) = self.current_pos();
        let Token::Ident(key) = self.advance() else {
            return Err(self.err("expected property name"));
        };
        self.advance(); // `:`
        let value = self.parse_value()?;
        Ok(Prop { key, value, line })
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let (line, col) = self.current_pos();
        match self.advance() {
            Token::Str(s) => Ok(Value::Str(s)),
            Token::Ident(s) => Ok(Value::Ident(s)),
            Token::Number(n) => Ok(Value::Number(n)),
            Token::Dimension(n, unit) => Ok(Value::Dimension(n, unit)),
            Token::Color(c) => Ok(Value::Color(c)),
            Token::Resource(r) => Ok(Value::Resource(r)),
            tok => Err(ParseError::new(format!("expected a value, got {:?}", tok), line, col)),
        }
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse a `.cbml` source string into a [`Document`].
pub fn parse_str(src: &str) -> Result<Document, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}
