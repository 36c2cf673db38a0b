//! Constants for board dimensions, block-table capacity, and cell markers.
//!
//! The engine packs each group record into a single 32-bit word (see
//! [`crate::block`]), so the limits below are fixed by the field widths of
//! that encoding rather than by anything configurable.

// =============================================================================
// Board Geometry
// =============================================================================

/// Largest supported board dimension. Block boundaries are stored in 4-bit
/// fields, so boards larger than 16x16 cannot be represented.
pub const MAX_BOARD_SIZE: usize = 16;

/// Block ids must fit the 8-bit libs field when a record turns into a
/// forwarding marker, so the table never holds more than this many entries.
pub const MAX_BLOCKS: usize = 256;

// =============================================================================
// Cell Markers (text rows, rendering, canonical keys)
// =============================================================================

/// Black stone.
pub const MARK_BLACK: char = 'X';

/// White stone.
pub const MARK_WHITE: char = 'O';

/// Empty cell.
pub const MARK_EMPTY: char = '-';
