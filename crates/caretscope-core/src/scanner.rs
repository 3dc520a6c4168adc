//! Bidirectional cursor over a pre-tokenized stream.
//!
//! Movement past either end clamps to the boundary (the stream always ends
//! in a synthetic EOF token), so callers never have to handle a failed move.
//! Positions can be saved and restored through a scanner-owned stack; prefer
//! [`Scanner::scoped`] over raw push/pop pairs.

use crate::lexer::{Channel, TokenInfo};
use crate::vocab::{token, TokenId};

#[derive(Debug)]
pub struct Scanner<'a> {
    tokens: &'a [TokenInfo],
    index: usize,
    stack: Vec<usize>,
}

impl<'a> Scanner<'a> {
    pub fn new(tokens: &'a [TokenInfo]) -> Self {
        Self {
            tokens,
            index: 0,
            stack: Vec::new(),
        }
    }

    /// Positions the scanner on the first token whose start is at or after
    /// the given coordinate (line 1-based, column 0-based). Returns false and
    /// stays on the EOF token when no such token exists.
    pub fn advance_to(&mut self, line: usize, column: usize) -> bool {
        for (i, t) in self.tokens.iter().enumerate() {
            if (t.line, t.column) >= (line, column) {
                self.index = i;
                return true;
            }
        }
        self.index = self.tokens.len().saturating_sub(1);
        false
    }

    pub fn token_index(&self) -> usize {
        self.index
    }

    pub fn token_type(&self) -> TokenId {
        self.current().map_or(token::EOF, |t| t.token_type)
    }

    pub fn token_text(&self) -> &'a str {
        self.current().map_or("", |t| t.text.as_str())
    }

    pub fn token_channel(&self) -> Channel {
        self.current().map_or(Channel::Default, |t| t.channel)
    }

    pub fn is(&self, token_type: TokenId) -> bool {
        self.token_type() == token_type
    }

    /// Moves one token forward (one non-hidden token with `skip_hidden`).
    /// Returns false when already clamped at the end.
    pub fn next(&mut self, skip_hidden: bool) -> bool {
        let last = self.tokens.len().saturating_sub(1);
        let mut i = self.index;
        while i < last {
            i += 1;
            if !skip_hidden || self.tokens[i].channel == Channel::Default {
                self.index = i;
                return true;
            }
        }
        self.index = last;
        false
    }

    /// Moves one token backward (one non-hidden token with `skip_hidden`).
    /// Returns false when already at the start.
    pub fn previous(&mut self, skip_hidden: bool) -> bool {
        let mut i = self.index;
        while i > 0 {
            i -= 1;
            if !skip_hidden || self.tokens[i].channel == Channel::Default {
                self.index = i;
                return true;
            }
        }
        false
    }

    /// Type of the previous non-hidden token, without moving. EOF when there
    /// is none.
    pub fn look_back(&self) -> TokenId {
        let mut i = self.index;
        while i > 0 {
            i -= 1;
            if self.tokens[i].channel == Channel::Default {
                return self.tokens[i].token_type;
            }
        }
        token::EOF
    }

    /// Saves the current position on the scanner's stack.
    pub fn push(&mut self) {
        self.stack.push(self.index);
    }

    /// Restores the most recently saved position. Returns false if the stack
    /// was empty.
    pub fn pop(&mut self) -> bool {
        match self.stack.pop() {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// Runs `f` with the position saved, restoring it afterwards. The guard
    /// form of push/pop; keeps the stack balanced on every exit path.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Scanner<'a>) -> R) -> R {
        self.push();
        let result = f(self);
        self.pop();
        result
    }

    fn current(&self) -> Option<&'a TokenInfo> {
        self.tokens.get(self.index)
    }
}
