//! Packed group records.
//!
//! A block is a maximal set of orthogonally connected same-color stones.
//! The engine journals a before-image of every record it touches, so the
//! record must be a single word that is cheap to copy and compare:
//!
//! ```text
//! bits  0..4   xmin     bounding rectangle, 4 bits per edge
//! bits  4..8   xmax     (limits the board to 16x16)
//! bits  8..12  ymin
//! bits 12..16  ymax
//! bits 16..24  libs     liberty count, up to 255
//! bits 24..31  size     stone count, up to 127
//! bit  31      color    0 = black (positive word), 1 = white (negative)
//! ```
//!
//! A live record always has `libs >= 1` and `size >= 1`: a block is removed
//! in the same move that fills its last liberty, so zero-liberty records
//! never exist. A record with `size == 0` and a nonzero word is a
//! *forwarding* record left behind by a merge; its libs field holds the id
//! of the absorbing block instead of a liberty count.

use std::fmt;

/// Stone color. Black blocks pack into positive words and white blocks into
/// negative ones, so two colors can be compared with a sign test alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// +1 for black, -1 for white; matches the sign of this color's words.
    pub fn sign(self) -> i32 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }

    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// One packed group record. `Block::NONE` stands for both an empty cell and
/// a captured (cleared) table slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Block(i32);

impl Block {
    pub const NONE: Block = Block(0);

    pub fn new(
        xmin: usize,
        xmax: usize,
        ymin: usize,
        ymax: usize,
        libs: u32,
        size: u32,
        color: Color,
    ) -> Block {
        debug_assert!(xmin <= xmax && xmax < 16 && ymin <= ymax && ymax < 16);
        debug_assert!(libs <= 255, "liberty count {libs} does not fit the packed field");
        debug_assert!(size <= 127, "stone count {size} does not fit the packed field");
        let mut word = (xmin as i32)
            | (xmax as i32) << 4
            | (ymin as i32) << 8
            | (ymax as i32) << 12
            | (libs as i32) << 16
            | (size as i32) << 24;
        if color == Color::White {
            word |= i32::MIN;
        }
        Block(word)
    }

    pub fn xmin(self) -> usize {
        (self.0 & 15) as usize
    }

    pub fn xmax(self) -> usize {
        (self.0 >> 4 & 15) as usize
    }

    pub fn ymin(self) -> usize {
        (self.0 >> 8 & 15) as usize
    }

    pub fn ymax(self) -> usize {
        (self.0 >> 12 & 15) as usize
    }

    pub fn libs(self) -> u32 {
        (self.0 >> 16 & 255) as u32
    }

    pub fn size(self) -> u32 {
        (self.0 >> 24 & 127) as u32
    }

    /// +1 for a black record, -1 for a white one, 0 for `Block::NONE`.
    pub fn sign(self) -> i32 {
        self.0.signum()
    }

    /// Color of the record. Meaningless for `Block::NONE`.
    pub fn color(self) -> Color {
        if self.0 < 0 { Color::White } else { Color::Black }
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// A merged-away record: no stones, libs field reinterpreted as an id.
    pub fn is_forwarding(self) -> bool {
        self.0 != 0 && self.size() == 0
    }

    /// Returns the record with only the liberty field changed. Callers must
    /// deduplicate neighbor ids first so no block is adjusted twice within
    /// one scan.
    pub fn add_libs(self, n: i32) -> Block {
        let libs = self.libs() as i32 + n;
        debug_assert!((0..=255).contains(&libs), "liberty adjustment out of range");
        Block(self.0 & !(255 << 16) | libs << 16)
    }

    /// The forwarding record this block leaves behind when it is absorbed:
    /// same rectangle and color, size zeroed, libs field holding `id`.
    pub fn forward_to(self, id: u16) -> Block {
        Block::new(self.xmin(), self.xmax(), self.ymin(), self.ymax(), id as u32, 0, self.color())
    }

    /// The absorbing id stored in a forwarding record.
    pub fn forwarded_to(self) -> u16 {
        self.libs() as u16
    }
}

impl fmt::Display for Block {
    /// Diagnostic form, e.g. `+ [0, 1]x[0, 1] libs=3 size=3`. Forwarding
    /// records show their raw fields, so `libs` is the absorbing id.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "none");
        }
        write!(
            f,
            "{} [{}, {}]x[{}, {}] libs={} size={}",
            if self.0 > 0 { '+' } else { '-' },
            self.xmin(),
            self.xmax(),
            self.ymin(),
            self.ymax(),
            self.libs(),
            self.size(),
        )
    }
}
