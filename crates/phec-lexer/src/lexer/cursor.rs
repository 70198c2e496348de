// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Character cursor over the source text.

/// A forward cursor over UTF-8 source text with a single character of
/// pushback.
///
/// The position is a byte offset and never exceeds `source.len()`. After
/// each [`bump`](Cursor::bump) the cursor remembers the width of the
/// character it consumed, so [`unread`](Cursor::unread) can step back over
/// exactly that character once.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    /// Byte width of the last consumed character, cleared by `unread`.
    last_width: Option<usize>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            last_width: None,
        }
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The text being traversed.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns true once every character has been consumed.
    pub fn is_eof(&self) -> bool {
        self.position == self.source.len()
    }

    /// Returns the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Consumes and returns the next character.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        let width = ch.len_utf8();
        self.position += width;
        self.last_width = Some(width);
        Some(ch)
    }

    /// Steps back over the character returned by the last `bump`.
    ///
    /// Returns false (and leaves the cursor untouched) when there is nothing
    /// to unread, i.e. no `bump` happened since the previous `unread`.
    pub fn unread(&mut self) -> bool {
        match self.last_width.take() {
            Some(width) => {
                self.position -= width;
                true
            }
            None => false,
        }
    }
}
