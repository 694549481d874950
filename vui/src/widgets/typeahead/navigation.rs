//! Navigation controller: moving the highlight over the visible set.

use crate::keys::Direction;

use super::filter::VisibleSet;

/// Next highlighted index after moving in `direction`.
///
/// Wraps at both ends, and starts from the matching end when nothing is
/// highlighted. Returns `None` when only the placeholder is showing. An
/// out-of-range `current` counts as no highlight.
pub fn traverse(direction: Direction, visible: &VisibleSet, current: Option<usize>) -> Option<usize> {
    let len = visible.len();
    if len == 0 {
        return None;
    }
    let current = current.filter(|&index| index < len);

    Some(match (direction, current) {
        (Direction::Down, Some(index)) if index + 1 < len => index + 1,
        (Direction::Down, _) => 0,
        (Direction::Up, Some(index)) if index > 0 => index - 1,
        (Direction::Up, _) => len - 1,
    })
}
