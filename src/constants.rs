//! Shared constants for board geometry and scoring.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board side lengths the engine accepts.
pub const LEGAL_SIZES: [u8; 3] = [9, 13, 19];

/// Largest supported board side.
pub const MAX_SIZE: u8 = 19;

/// Column letters in display order. Go notation skips 'I' to avoid
/// confusion with 'J' and the digit 1.
pub const COLUMN_LETTERS: [char; MAX_SIZE as usize] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T',
];

// =============================================================================
// Scoring
// =============================================================================

/// Default komi in half-points (6.5, the standard Japanese komi).
pub const DEFAULT_KOMI_HALF_POINTS: i32 = 13;

// =============================================================================
// Game Length
// =============================================================================

/// Cap on self-play game length (3 times board area to allow for captures
/// and refills).
pub fn max_game_len(size: u8) -> usize {
    let area = size as usize * size as usize;
    area * 3
}
