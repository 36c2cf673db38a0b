//! Tsumego-Rust: an incremental Go board engine for life-and-death search.
//!
//! This crate provides the board/group-tracking core a tsumego solver
//! descends through millions of times per run, reimplemented in Rust from
//! the tsumego.js project: near-constant-cost move application, exact
//! allocation-light rollback, and a packed block representation that stays
//! cache-resident across large search trees.
//!
//! ## Modules
//!
//! - [`constants`] - Board-dimension cap, table capacity, cell markers
//! - [`block`] - Packed per-group records (rect, liberties, size, color)
//! - [`board`] - The board: placement, capture, suicide rejection, undo,
//!   canonical position keys, text/SGF rendering
//! - [`sgf`] - Minimal SGF setup parsing for tsumego problems
//!
//! ## Example
//!
//! ```
//! use tsumego_rust::block::Color;
//! use tsumego_rust::board::Board;
//!
//! let mut board = Board::new(9).unwrap();
//!
//! // a legal move returns captured stones + 1
//! assert_eq!(board.play(2, 2, Color::Black), Some(1));
//! assert_eq!(board.play(2, 2, Color::White), None); // occupied
//!
//! // canonical keys identify layouts for transposition lookups
//! assert_eq!(board.hash(), "9x9(;;--X)");
//!
//! // moves roll back exactly
//! assert_eq!(board.undo(), Some((2, 2)));
//! assert_eq!(board.hash(), "9x9()");
//! ```

pub mod block;
pub mod board;
pub mod constants;
pub mod sgf;
