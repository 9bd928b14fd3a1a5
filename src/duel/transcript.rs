//! Append-only chat transcript and bubble anchor layout.
//!
//! Entries are never mutated or removed once appended; their identity is
//! their insertion order. Each append ages every existing entry by one
//! step, so the newest bubble on each side sits nearest the bottom of the
//! canvas and older ones drift upward. The renderer owns fonts and pixel
//! blitting; this module only hands out anchors.

use super::types::Side;

/// Logical canvas the anchors are expressed in.
pub const CANVAS_WIDTH: i32 = 320;
pub const CANVAS_HEIGHT: i32 = 640;
/// Horizontal inset of a bubble's anchor from its side of the canvas.
pub const BUBBLE_MARGIN: i32 = 100;
/// Vertical inset of the newest bubble from the bottom edge.
pub const BOTTOM_PADDING: i32 = 100;
/// How far one append pushes every older bubble upward.
pub const STEP_HEIGHT: i32 = 50;

/// Rendering hint attached to an entry. Auto-played agent moves are
/// highlighted differently from typed ones; scoring never looks at this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Normal,
    AutoPlay,
}

/// One chat bubble. Robot entries anchor near the left margin, agent
/// entries right-aligned near the right margin, regardless of insertion
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub side: Side,
    pub text: String,
    pub emphasis: Emphasis,
}

impl ChatEntry {
    pub fn new(side: Side, text: impl Into<String>) -> Self {
        ChatEntry {
            side,
            text: text.into(),
            emphasis: Emphasis::Normal,
        }
    }

    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }
}

/// Anchor point for one bubble. `x` is the bubble's near edge (left edge
/// for robot bubbles, right edge for agent bubbles); `y` is the top of the
/// bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
}

/// Ordered, append-only sequence of chat entries for one session.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<ChatEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript::default()
    }

    /// Append an entry at the base anchor for its side, aging everything
    /// already present by one step.
    pub fn append(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }

    /// Entries in insertion order. Returns a fresh iterator on every call
    /// so the renderer can re-draw each frame without disturbing layout.
    pub fn entries(&self) -> impl Iterator<Item = &ChatEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many appends have happened since this entry was newest.
    pub fn age(&self, index: usize) -> Option<usize> {
        if index < self.entries.len() {
            Some(self.entries.len() - 1 - index)
        } else {
            None
        }
    }

    /// Anchor for the entry at `index`, or `None` past the end. Depends
    /// only on the entry's side and age, never on the other side's
    /// entries.
    pub fn anchor(&self, index: usize) -> Option<Anchor> {
        let entry = self.entries.get(index)?;
        let age = (self.entries.len() - 1 - index) as i32;
        let x = match entry.side {
            Side::Robot => BUBBLE_MARGIN,
            Side::Agent => CANVAS_WIDTH - BUBBLE_MARGIN,
        };
        Some(Anchor {
            x,
            y: CANVAS_HEIGHT - BOTTOM_PADDING - age * STEP_HEIGHT,
        })
    }
}
