// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag directions as reported by a recognizer, and the horizontal subset a
//! swipe can lock onto.

/// Direction reported by the gesture recognizer for a drag-progress input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    /// No movement, or movement the recognizer could not classify.
    #[default]
    None,
    /// Movement toward negative x.
    Left,
    /// Movement toward positive x.
    Right,
    /// Movement toward negative y.
    Up,
    /// Movement toward positive y.
    Down,
}

impl Direction {
    /// Returns the swipe direction for horizontal movement, `None` otherwise.
    #[must_use]
    pub fn horizontal(self) -> Option<SwipeDirection> {
        match self {
            Self::Left => Some(SwipeDirection::Left),
            Self::Right => Some(SwipeDirection::Right),
            Self::None | Self::Up | Self::Down => None,
        }
    }
}

/// A direction a swipe episode can lock onto.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SwipeDirection {
    /// Swipe toward negative x.
    Left,
    /// Swipe toward positive x.
    Right,
}

impl SwipeDirection {
    /// Short lowercase name, used in event names and diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl From<SwipeDirection> for Direction {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => Self::Left,
            SwipeDirection::Right => Self::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_left_and_right_are_horizontal() {
        assert_eq!(Direction::Left.horizontal(), Some(SwipeDirection::Left));
        assert_eq!(Direction::Right.horizontal(), Some(SwipeDirection::Right));
        assert_eq!(Direction::Up.horizontal(), None);
        assert_eq!(Direction::Down.horizontal(), None);
        assert_eq!(Direction::None.horizontal(), None);
    }

    #[test]
    fn swipe_direction_converts_back() {
        for dir in [SwipeDirection::Left, SwipeDirection::Right] {
            assert_eq!(Direction::from(dir).horizontal(), Some(dir));
        }
    }
}
