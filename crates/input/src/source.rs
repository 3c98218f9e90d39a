//! Non-blocking key sources.
//!
//! The game loop asks "is a key pending?" and then reads at most one
//! character per iteration. Absence of input is normal and must never block.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::map::key_event_char;

/// A source of single key characters.
pub trait KeySource {
    /// Whether a key can be read right now without waiting.
    fn has_input(&mut self) -> Result<bool>;

    /// Consume one pending key, or `None` if nothing usable is pending.
    fn read_one_char(&mut self) -> Result<Option<char>>;
}

/// Reads keys from the terminal through crossterm.
///
/// Expects raw mode to be enabled by the caller.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }

    /// Block until a usable key arrives (turn-based games only).
    pub fn wait_for_char(&mut self) -> Result<char> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(c) = key_event_char(key) {
                    return Ok(c);
                }
            }
        }
    }
}

impl KeySource for TerminalKeys {
    fn has_input(&mut self) -> Result<bool> {
        Ok(event::poll(Duration::ZERO)?)
    }

    fn read_one_char(&mut self) -> Result<Option<char>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(key_event_char(key)),
            _ => Ok(None),
        }
    }
}

/// A scripted key source: yields queued characters in order.
///
/// Used to drive the game loop deterministically.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    pending: VecDeque<char>,
}

impl ScriptedKeys {
    pub fn new(keys: &str) -> Self {
        Self {
            pending: keys.chars().collect(),
        }
    }

    pub fn push(&mut self, c: char) {
        self.pending.push_back(c);
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl KeySource for ScriptedKeys {
    fn has_input(&mut self) -> Result<bool> {
        Ok(!self.pending.is_empty())
    }

    fn read_one_char(&mut self) -> Result<Option<char>> {
        Ok(self.pending.pop_front())
    }
}
