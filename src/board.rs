//! The incremental board: grid, block table, change journal.
//!
//! This module provides the mutable position a tsumego search descends
//! through, including:
//! - Stone placement with capture detection and suicide rejection
//! - Per-move rollback that restores grid and table exactly
//! - Canonical position keys for transposition lookups
//! - Text, SGF and liberty-diagram rendering
//!
//! The grid stores block ids, not stones. When blocks merge, the absorbed
//! records become forwarding markers and the grid is left alone; reads
//! follow the forwarding chain to the live record. When a block is
//! captured, its cells are cleared and its record zeroed in the same move.
//! Every record mutation and every vacated cell is journaled, so `undo`
//! can pop one move in strict LIFO order without re-deriving anything.

use std::cell::RefCell;
use std::fmt;

use anyhow::{Result, bail, ensure};

use crate::block::{Block, Color};
use crate::constants::{MARK_BLACK, MARK_EMPTY, MARK_WHITE, MAX_BLOCKS, MAX_BOARD_SIZE};
use crate::sgf;

/// Per-move rollback log: three parallel stacks popped in LIFO order.
#[derive(Clone, Default)]
struct Journal {
    /// One entry per move: `x | y<<4 | changed<<8 | removed<<20`.
    frames: Vec<u32>,
    /// (id, before-image) pairs, one per record mutation. Appending a fresh
    /// record journals as a change from `Block::NONE` at the table's tail.
    changed: Vec<(u16, Block)>,
    /// Vacated cells of captured blocks: `x | y<<4 | raw_id<<8`. The raw
    /// grid id is logged so restoration is bit-exact even for cells still
    /// written under an absorbed id.
    removed: Vec<u16>,
}

/// A bounded Go board with incremental group tracking.
///
/// One instance is meant to be reused across an exhaustive search: moves are
/// applied depth-first with [`Board::play`] and retracted in exact reverse
/// order with [`Board::undo`]. Callers needing aliasing-free parallel
/// branches take an explicit [`Board::fork`] instead.
#[derive(Clone)]
pub struct Board {
    size: usize,
    /// table[y * size + x] holds a raw block id, or 0 for empty. Cells are
    /// rewritten only on placement and capture, never on merge.
    table: Vec<u16>,
    /// blocks[id] for ids handed out so far; index 0 is reserved. Ids are
    /// never reused, though undo shrinks the table back.
    blocks: Vec<Block>,
    journal: Journal,
    /// Cached canonical key, cleared by every successful play and undo.
    key: RefCell<Option<String>>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self> {
        ensure!(size >= 1, "board size must be at least 1");
        ensure!(
            size <= MAX_BOARD_SIZE,
            "board {size}x{size} is too big, up to {MAX_BOARD_SIZE}x{MAX_BOARD_SIZE} is supported"
        );
        Ok(Self {
            size,
            table: vec![0; size * size],
            blocks: vec![Block::NONE],
            journal: Journal::default(),
            key: RefCell::new(None),
        })
    }

    /// Builds a board from marker rows, one character per cell: `X` black,
    /// `O` white, anything else empty; whitespace is ignored. Every preset
    /// stone goes through [`Board::play`], so an overlapping or suicidal
    /// setup fails construction.
    pub fn from_rows(size: usize, rows: &[&str]) -> Result<Self> {
        let mut board = Self::new(size)?;
        for (y, row) in rows.iter().enumerate() {
            for (x, chr) in row.chars().filter(|c| !c.is_whitespace()).enumerate() {
                let color = match chr {
                    MARK_BLACK => Color::Black,
                    MARK_WHITE => Color::White,
                    _ => continue,
                };
                if board.play(x, y, color).is_none() {
                    bail!("invalid setup: {chr} at ({x}, {y}) cannot be placed");
                }
            }
        }
        Ok(board)
    }

    /// Builds a board from the setup node of an SGF problem, placing the
    /// `AW` stones first and then `AB`, each through [`Board::play`].
    pub fn from_sgf(text: &str) -> Result<Self> {
        let setup = sgf::parse(text)?;
        let mut board = Self::new(setup.size)?;
        for &(x, y) in &setup.white {
            if board.play(x, y, Color::White).is_none() {
                bail!("AW[{}] cannot be placed", sgf::coord(x, y));
            }
        }
        for &(x, y) in &setup.black {
            if board.play(x, y, Color::Black).is_none() {
                bail!("AB[{}] cannot be placed", sgf::coord(x, y));
            }
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Independent deep copy, history included. O(size² + history); meant
    /// for occasional branch splitting, not per-node cloning.
    pub fn fork(&self) -> Board {
        self.clone()
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Resolved record at (x, y), or `Block::NONE` if empty or out of
    /// bounds.
    pub fn get(&self, x: usize, y: usize) -> Block {
        if !self.in_bounds(x, y) {
            return Block::NONE;
        }
        self.blocks[self.resolve(self.table[self.idx(x, y)]) as usize]
    }

    /// Sum of liberty counts over all live blocks of one color.
    pub fn total_libs(&self, color: Color) -> u32 {
        self.blocks[1..]
            .iter()
            .filter(|b| b.size() > 0 && b.sign() == color.sign())
            .map(|b| b.libs())
            .sum()
    }

    /// Follows the forwarding chain from a raw grid id to the live record.
    /// Chains strictly decrease (the merge survivor is always the smallest
    /// id), so they are finite; a non-decreasing link means corrupted state.
    fn resolve(&self, mut id: u16) -> u16 {
        while id != 0 {
            let b = self.blocks[id as usize];
            if b.size() > 0 {
                return id;
            }
            let next = b.forwarded_to();
            assert!(next < id, "forwarding chain at block {id} does not terminate");
            id = next;
        }
        0
    }

    /// Live block id at signed coordinates; out of bounds and empty both
    /// resolve to 0. Callers that care about edges check bounds themselves.
    fn block_id(&self, x: isize, y: isize) -> u16 {
        if x < 0 || y < 0 || x >= self.size as isize || y >= self.size as isize {
            return 0;
        }
        self.resolve(self.table[y as usize * self.size + x as usize])
    }

    /// The four orthogonal neighbor ids in fixed L, R, T, B order.
    fn neighbor_ids(&self, x: isize, y: isize) -> [u16; 4] {
        [
            self.block_id(x - 1, y),
            self.block_id(x + 1, y),
            self.block_id(x, y - 1),
            self.block_id(x, y + 1),
        ]
    }

    fn is_empty(&self, x: isize, y: isize) -> bool {
        x >= 0
            && y >= 0
            && (x as usize) < self.size
            && (y as usize) < self.size
            && self.table[y as usize * self.size + x as usize] == 0
    }

    /// Rewrites (or appends) a record, journaling its before-image.
    fn change(&mut self, id: u16, b: Block) {
        let prev = self.blocks.get(id as usize).copied().unwrap_or(Block::NONE);
        self.journal.changed.push((id, prev));
        if id as usize == self.blocks.len() {
            self.blocks.push(b);
        } else {
            self.blocks[id as usize] = b;
        }
    }

    /// Adds `delta` liberties to every distinct block around (x, y); a
    /// nonzero `want` restricts the pass to blocks of that sign. Each block
    /// is adjusted at most once no matter how many directions reach it.
    fn adjust(&mut self, x: isize, y: isize, want: i32, delta: i32) {
        let ids = self.neighbor_ids(x, y);
        for i in 0..4 {
            let id = ids[i];
            if id == 0 || ids[..i].contains(&id) {
                continue;
            }
            let b = self.blocks[id as usize];
            if want != 0 && b.sign() != want {
                continue;
            }
            self.change(id, b.add_libs(delta));
        }
    }

    /// Captures a block: clears every member cell, gives one liberty per
    /// vacated cell back to adjacent blocks of the capturing color, and
    /// logs the vacated cells for undo.
    fn remove(&mut self, id: u16) {
        let b = self.blocks[id as usize];

        // Membership is a rect scan plus resolution, and it must run before
        // the record is cleared: cells written under absorbed ids resolve
        // through this very record.
        let mut stones: Vec<(usize, usize, u16)> = Vec::new();
        for y in b.ymin()..=b.ymax() {
            for x in b.xmin()..=b.xmax() {
                let raw = self.table[self.idx(x, y)];
                if raw != 0 && self.resolve(raw) == id {
                    stones.push((x, y, raw));
                }
            }
        }

        self.change(id, Block::NONE);

        for (x, y, raw) in stones {
            self.adjust(x as isize, y as isize, -b.sign(), 1);
            let cell = self.idx(x, y);
            self.table[cell] = 0;
            self.journal.removed.push(raw << 8 | (y as u16) << 4 | x as u16);
        }
    }

    /// Plays a stone. Returns the number of captured stones plus one (so a
    /// quiet legal move returns `Some(1)`), or `None` if the move is out of
    /// bounds, the cell is occupied, or the move would be suicide; a
    /// rejected move leaves the board untouched.
    pub fn play(&mut self, x: usize, y: usize, color: Color) -> Option<u32> {
        if !self.in_bounds(x, y) || self.table[self.idx(x, y)] != 0 {
            return None;
        }

        let sign = color.sign();
        let n_changed = self.journal.changed.len();
        let n_removed = self.journal.removed.len();

        let (xi, yi) = (x as isize, y as isize);
        let ids = self.neighbor_ids(xi, yi);
        let nbs = ids.map(|id| self.blocks[id as usize]);
        let libs = nbs.map(|b| b.libs());

        // Opposing neighbors whose last liberty this stone fills are removed
        // before anything else, so their cells count as liberties below.
        let mut captured = 0;
        for i in 0..4 {
            if libs[i] == 1 && nbs[i].sign() * sign < 0 && !ids[..i].contains(&ids[i]) {
                captured += nbs[i].size();
                self.remove(ids[i]);
            }
        }

        // A move that captures nothing must not leave its own group at zero
        // liberties: illegal iff every direction is blocked by an opposing
        // survivor, the board edge, or a same-color block whose only
        // liberty is this very cell.
        if captured == 0 {
            let last = self.size - 1;
            let blocked = |i: usize, edge: bool| edge || nbs[i].sign() * sign < 0 || libs[i] == 1;
            if blocked(0, x == 0) && blocked(1, x == last) && blocked(2, y == 0) && blocked(3, y == last)
            {
                return None;
            }
        }

        // Every surviving neighbor block of either color loses the liberty
        // this stone occupies. Same-color blocks are about to be merged and
        // recounted, so the extra decrement on them is harmless.
        self.adjust(xi, yi, 0, -1);

        // The surviving id is the smallest same-color neighbor, or a fresh
        // one; keeping the minimum is what bounds forwarding chains.
        let mut id_new = self.blocks.len() as u16;
        let mut is_new = true;
        for i in 0..4 {
            if nbs[i].sign() == sign && ids[i] < id_new {
                id_new = ids[i];
                is_new = false;
            }
        }

        let cell = self.idx(x, y);
        self.table[cell] = id_new;
        self.key.replace(None);

        if is_new {
            assert!((id_new as usize) < MAX_BLOCKS, "block table overflow");
            let n = [(xi - 1, yi), (xi + 1, yi), (xi, yi - 1), (xi, yi + 1)]
                .iter()
                .filter(|&&(nx, ny)| self.is_empty(nx, ny))
                .count() as u32;
            self.change(id_new, Block::new(x, x, y, y, n, 1, color));
        } else {
            let mut merged: Vec<u16> = Vec::with_capacity(4);
            for i in 0..4 {
                if nbs[i].sign() == sign && ids[i] != id_new && !merged.contains(&ids[i]) {
                    merged.push(ids[i]);
                }
            }

            let (mut xmin, mut xmax, mut ymin, mut ymax) = (x, x, y, y);
            let mut size_new = 1;
            for &id in std::iter::once(&id_new).chain(&merged) {
                let b = self.blocks[id as usize];
                size_new += b.size();
                xmin = xmin.min(b.xmin());
                xmax = xmax.max(b.xmax());
                ymin = ymin.min(b.ymin());
                ymax = ymax.max(b.ymax());
                if id != id_new {
                    self.change(id, b.forward_to(id_new));
                }
            }

            // Only a bounding rectangle is tracked, not the stone set, so
            // the merged liberty count cannot be derived incrementally:
            // rescan every empty cell in the rectangle expanded by one and
            // count the ones adjacent to the survivor.
            let mut libs_new = 0;
            for sy in ymin.saturating_sub(1)..=(ymax + 1).min(self.size - 1) {
                for sx in xmin.saturating_sub(1)..=(xmax + 1).min(self.size - 1) {
                    if self.table[self.idx(sx, sy)] == 0 {
                        let (lx, ly) = (sx as isize, sy as isize);
                        let is_lib = self.block_id(lx - 1, ly) == id_new
                            || self.block_id(lx + 1, ly) == id_new
                            || self.block_id(lx, ly - 1) == id_new
                            || self.block_id(lx, ly + 1) == id_new;
                        if is_lib {
                            libs_new += 1;
                        }
                    }
                }
            }

            self.change(id_new, Block::new(xmin, xmax, ymin, ymax, libs_new, size_new, color));
        }

        let frame = x as u32
            | (y as u32) << 4
            | ((self.journal.changed.len() - n_changed) as u32) << 8
            | ((self.journal.removed.len() - n_removed) as u32) << 20;
        self.journal.frames.push(frame);

        Some(captured + 1)
    }

    /// Reverts the most recent move and returns its coordinate, or `None`
    /// when there is nothing to undo. Grid and table come back bit for bit,
    /// so play/undo cycles can repeat indefinitely.
    pub fn undo(&mut self) -> Option<(usize, usize)> {
        let frame = self.journal.frames.pop()?;
        let x = (frame & 15) as usize;
        let y = (frame >> 4 & 15) as usize;
        let n_changed = (frame >> 8 & 0xFFF) as usize;
        let n_removed = (frame >> 20) as usize;
        let removed_before = self.journal.removed.len();

        for _ in 0..n_changed {
            let (id, prev) = self
                .journal
                .changed
                .pop()
                .expect("change journal out of sync with move frames");

            // A cleared record means this change was a capture: the block
            // comes back, and so do its vacated cells, raw ids included.
            if self.blocks[id as usize].is_none() {
                for _ in 0..prev.size() {
                    let r = self
                        .journal
                        .removed
                        .pop()
                        .expect("vacated-cell journal out of sync with move frames");
                    let (rx, ry) = ((r & 15) as usize, (r >> 4 & 15) as usize);
                    let cell = self.idx(rx, ry);
                    self.table[cell] = r >> 8;
                }
            }

            self.blocks[id as usize] = prev;

            // A fresh record journals as a change from NONE at the tail:
            // restoring it shrinks the table, keeping ids dense again.
            if prev.is_none() && id as usize == self.blocks.len() - 1 {
                self.blocks.pop();
            }
        }

        debug_assert_eq!(
            removed_before - self.journal.removed.len(),
            n_removed,
            "vacated-cell journal out of sync with move frames"
        );

        let cell = self.idx(x, y);
        self.table[cell] = 0;
        self.key.replace(None);
        Some((x, y))
    }

    /// Canonical position key: `"{n}x{n}(rows)"` with `;`-separated rows,
    /// each row trimmed after its last stone and the whole key trimmed
    /// after the last stone-bearing row, so unreachable trailing empty
    /// space never distinguishes two layouts. Identical layouts produce
    /// identical keys regardless of move order. Cached until the next
    /// successful play or undo.
    pub fn hash(&self) -> String {
        if let Some(key) = self.key.borrow().as_ref() {
            return key.clone();
        }

        let mut rows = String::new();
        let mut len = 0;
        for y in 0..self.size {
            let mut last = rows.len();
            for x in 0..self.size {
                let b = self.get(x, y);
                rows.push(mark(b));
                if !b.is_none() {
                    last = rows.len();
                    len = last;
                }
            }
            rows.truncate(last);
            rows.push(';');
        }
        rows.truncate(len);

        let key = format!("{n}x{n}({rows})", n = self.size);
        self.key.replace(Some(key.clone()));
        key
    }

    /// SGF node with the current setup: `(;FF[4]SZ[n]AB[..]AW[..])`, stone
    /// lists in row-major order, empty lists omitted.
    pub fn to_sgf(&self) -> String {
        let take = |want: i32, tag: &str| -> String {
            let mut list = String::new();
            for y in 0..self.size {
                for x in 0..self.size {
                    if self.get(x, y).sign() == want {
                        list.push('[');
                        list.push_str(&sgf::coord(x, y));
                        list.push(']');
                    }
                }
            }
            if list.is_empty() { list } else { format!("{tag}{list}") }
        };
        format!("(;FF[4]SZ[{}]{}{})", self.size, take(1, "AB"), take(-1, "AW"))
    }

    /// Diagnostic grid of raw per-cell liberty counts, trimmed to the
    /// occupied corner like the text rendering, without labels.
    pub fn to_libs(&self) -> String {
        let (xmax, ymax) = self.occupied_corner();
        let mut s = String::new();
        for y in 0..=ymax {
            if y > 0 {
                s.push('\n');
            }
            for x in 0..=xmax {
                s.push_str(&format!(" {}", self.get(x, y).libs()));
            }
        }
        s
    }

    /// Bottom-right corner of the smallest rectangle holding every stone;
    /// (0, 0) on an empty board.
    fn occupied_corner(&self) -> (usize, usize) {
        let (mut xmax, mut ymax) = (0, 0);
        for y in 0..self.size {
            for x in 0..self.size {
                if self.table[self.idx(x, y)] != 0 {
                    xmax = xmax.max(x);
                    ymax = ymax.max(y);
                }
            }
        }
        (xmax, ymax)
    }
}

impl fmt::Display for Board {
    /// Labeled text grid trimmed to the occupied corner; columns lettered
    /// from `A` with `I` skipped, rows numbered from `size` downward.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (xmax, ymax) = self.occupied_corner();
        write!(f, "  ")?;
        for x in 0..=xmax {
            write!(f, " {}", col_letter(x))?;
        }
        for y in 0..=ymax {
            write!(f, "\n{:>2}", self.size - y)?;
            for x in 0..=xmax {
                write!(f, " {}", mark(self.get(x, y)))?;
            }
        }
        Ok(())
    }
}

fn mark(b: Block) -> char {
    match b.sign() {
        1 => MARK_BLACK,
        -1 => MARK_WHITE,
        _ => MARK_EMPTY,
    }
}

/// Column letter for the text rendering; 'I' is skipped by Go convention.
fn col_letter(x: usize) -> char {
    let c = b'A' + x as u8;
    (if c >= b'I' { c + 1 } else { c }) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump(board: &Board) -> Vec<String> {
        board.blocks[1..].iter().map(|b| b.to_string()).collect()
    }

    #[test]
    fn test_board_size_limits() {
        assert!(Board::new(0).is_err());
        assert!(Board::new(17).is_err());
        assert!(Board::new(1).is_ok());
        assert!(Board::new(16).is_ok());
    }

    #[test]
    fn test_out_of_bounds_and_occupied_rejected() {
        let mut board = Board::new(9).unwrap();
        assert_eq!(board.play(9, 0, Color::Black), None);
        assert_eq!(board.play(0, 9, Color::Black), None);
        assert_eq!(board.play(4, 4, Color::Black), Some(1));
        assert_eq!(board.play(4, 4, Color::White), None, "occupied cell");
        assert!(!board.in_bounds(9, 4));
        assert!(board.in_bounds(8, 4));
    }

    #[test]
    fn test_lone_stone_liberties() {
        let mut board = Board::new(9).unwrap();
        board.play(0, 0, Color::Black).unwrap();
        board.play(4, 0, Color::Black).unwrap();
        board.play(4, 4, Color::Black).unwrap();
        assert_eq!(board.get(0, 0).libs(), 2, "corner stone");
        assert_eq!(board.get(4, 0).libs(), 3, "edge stone");
        assert_eq!(board.get(4, 4).libs(), 4, "interior stone");
    }

    #[test]
    fn test_capture_restores_capturer_liberties() {
        // lone white corner stone in atari; capturing it frees a liberty
        // for the black stone next to the vacated cell
        let mut board = Board::from_rows(9, &["O X", "- -"]).unwrap();
        assert_eq!(board.play(0, 1, Color::Black), Some(2));
        assert_eq!(board.to_libs(), " 0 3\n 3 0");
    }

    #[test]
    fn test_suicide_corner_cases() {
        let setups: [&[&str]; 4] = [
            &["- X", "X X"],
            &["- O X", "X X X"],
            &["- O X", "O X X", "X X X"],
            &["- O X", "O O X", "X X X"],
        ];
        for rows in setups {
            let mut board = Board::from_rows(9, rows).unwrap();
            let before = (board.hash(), board.to_string(), board.total_libs(Color::White));
            assert_eq!(board.play(0, 0, Color::White), None, "suicide in {rows:?}");
            let after = (board.hash(), board.to_string(), board.total_libs(Color::White));
            assert_eq!(before, after, "rejected move must not mutate state");
        }
    }

    #[test]
    fn test_corner_capture_beats_suicide() {
        let mut board = Board::from_rows(3, &["- O X", "X X X"]).unwrap();
        // filling the corner with white joins a one-liberty block: suicide
        assert_eq!(board.play(0, 0, Color::White), None);
        // the same cell captures that block when black fills it
        assert_eq!(board.play(0, 0, Color::Black), Some(2));
        assert!(board.get(1, 0).is_none());
        board.undo().unwrap();
        assert_eq!(board.hash(), "3x3(-OX;XXX)");
    }

    #[test]
    fn test_merge_keeps_smallest_id() {
        let mut board = Board::new(9).unwrap();
        board.play(0, 0, Color::Black).unwrap(); // id 1
        board.play(2, 0, Color::Black).unwrap(); // id 2
        board.play(1, 0, Color::Black).unwrap(); // connector
        assert_eq!(board.table[board.idx(2, 0)], 2, "merge must not rewrite grid cells");
        assert_eq!(board.resolve(board.table[board.idx(1, 0)]), 1);
        assert_eq!(board.resolve(board.table[board.idx(2, 0)]), 1);
        assert!(board.blocks[2].is_forwarding());
        assert_eq!(board.blocks[2].forwarded_to(), 1);

        let b = board.get(2, 0);
        assert_eq!((b.xmin(), b.xmax(), b.ymin(), b.ymax()), (0, 2, 0, 0));
        assert_eq!(b.size(), 3);
        assert_eq!(b.libs(), 4);
        assert_eq!(b.color(), Color::Black);
    }

    #[test]
    fn test_undo_restores_absorbed_ids_through_capture() {
        let mut board = Board::new(5).unwrap();
        board.play(0, 0, Color::Black).unwrap(); // id 1
        board.play(2, 0, Color::Black).unwrap(); // id 2
        board.play(1, 0, Color::Black).unwrap(); // merges 2 into 1

        board.play(3, 0, Color::White).unwrap();
        board.play(0, 1, Color::White).unwrap();
        board.play(1, 1, Color::White).unwrap();
        assert_eq!(board.play(2, 1, Color::White), Some(4), "captures three stones");
        assert!(board.get(0, 0).is_none());
        assert!(board.get(1, 0).is_none());
        assert!(board.get(2, 0).is_none());

        // the captured block comes back with its raw absorbed id intact
        assert_eq!(board.undo(), Some((2, 1)));
        assert_eq!(board.table[board.idx(2, 0)], 2);
        assert_eq!(board.get(2, 0).size(), 3);

        // rewind past the merge: cell (2, 0) must be block 2 again
        board.undo().unwrap(); // white (1, 1)
        board.undo().unwrap(); // white (0, 1)
        board.undo().unwrap(); // white (3, 0)
        board.undo().unwrap(); // black connector
        assert_eq!(board.resolve(board.table[board.idx(2, 0)]), 2);
        assert_eq!(board.get(2, 0).size(), 1);
        assert_eq!(board.get(2, 0).libs(), 3);
    }

    #[test]
    fn test_play_undo_replay_roundtrip() {
        // the move sequence exercises fresh blocks, extensions and a merge;
        // the whole cycle runs repeatedly to prove undo restores everything
        let moves: &[(usize, usize, Color, &[&str])] = &[
            (0, 0, Color::Black, &["+ [0, 0]x[0, 0] libs=2 size=1"]),
            (1, 0, Color::White, &[
                "+ [0, 0]x[0, 0] libs=1 size=1",
                "- [1, 1]x[0, 0] libs=2 size=1",
            ]),
            (1, 1, Color::Black, &[
                "+ [0, 0]x[0, 0] libs=1 size=1",
                "- [1, 1]x[0, 0] libs=1 size=1",
                "+ [1, 1]x[1, 1] libs=3 size=1",
            ]),
            (2, 0, Color::White, &[
                "+ [0, 0]x[0, 0] libs=1 size=1",
                "- [1, 2]x[0, 0] libs=2 size=2",
                "+ [1, 1]x[1, 1] libs=3 size=1",
            ]),
            (0, 1, Color::Black, &[
                "+ [0, 1]x[0, 1] libs=3 size=3",
                "- [1, 2]x[0, 0] libs=2 size=2",
                "+ [1, 1]x[1, 1] libs=1 size=0",
            ]),
            (4, 0, Color::White, &[
                "+ [0, 1]x[0, 1] libs=3 size=3",
                "- [1, 2]x[0, 0] libs=2 size=2",
                "+ [1, 1]x[1, 1] libs=1 size=0",
                "- [4, 4]x[0, 0] libs=2 size=1",
            ]),
            (0, 4, Color::Black, &[
                "+ [0, 1]x[0, 1] libs=3 size=3",
                "- [1, 2]x[0, 0] libs=2 size=2",
                "+ [1, 1]x[1, 1] libs=1 size=0",
                "- [4, 4]x[0, 0] libs=2 size=1",
                "+ [0, 0]x[4, 4] libs=2 size=1",
            ]),
            (3, 3, Color::White, &[
                "+ [0, 1]x[0, 1] libs=3 size=3",
                "- [1, 2]x[0, 0] libs=2 size=2",
                "+ [1, 1]x[1, 1] libs=1 size=0",
                "- [4, 4]x[0, 0] libs=2 size=1",
                "+ [0, 0]x[4, 4] libs=2 size=1",
                "- [3, 3]x[3, 3] libs=4 size=1",
            ]),
        ];

        let mut board = Board::new(5).unwrap();
        for _cycle in 0..3 {
            assert_eq!(board.blocks, vec![Block::NONE]);

            for (i, &(x, y, color, expect)) in moves.iter().enumerate() {
                assert_eq!(board.play(x, y, color), Some(1), "move #{i} must be legal");
                assert_eq!(dump(&board), expect, "blocks after move #{i}");
            }

            for i in (1..moves.len()).rev() {
                board.undo().unwrap();
                assert_eq!(dump(&board), moves[i - 1].3, "blocks after undoing move #{i}");
            }
            board.undo().unwrap();

            assert_eq!(board.blocks, vec![Block::NONE]);
            assert!(board.table.iter().all(|&id| id == 0));
            assert!(board.journal.frames.is_empty());
            assert!(board.journal.changed.is_empty());
            assert!(board.journal.removed.is_empty());
            assert_eq!(board.hash(), "5x5()");
        }
    }

    #[test]
    fn test_undo_empty_history() {
        let mut board = Board::new(5).unwrap();
        assert_eq!(board.undo(), None);
        board.play(1, 1, Color::Black).unwrap();
        assert_eq!(board.undo(), Some((1, 1)));
        assert_eq!(board.undo(), None);
    }

    #[test]
    fn test_hash_cache_invalidation() {
        let mut board = Board::new(5).unwrap();
        let h0 = board.hash();
        assert_eq!(h0, "5x5()");
        board.play(2, 2, Color::Black).unwrap();
        assert_eq!(board.hash(), "5x5(;;--X)");
        board.undo().unwrap();
        assert_eq!(board.hash(), h0);
    }

    #[test]
    fn test_hash_trims_trailing_space() {
        let mut board = Board::new(5).unwrap();
        board.play(0, 0, Color::White).unwrap();
        assert_eq!(board.hash(), "5x5(O)");
        board.play(1, 1, Color::Black).unwrap();
        assert_eq!(board.hash(), "5x5(O;-X)");
    }
}
