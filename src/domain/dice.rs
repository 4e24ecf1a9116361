// SPDX-License-Identifier: MPL-2.0
//! Die face value object.
//!
//! A [`DieFace`] is both the value a player picks in the number selector and
//! the identifier of the face image the dice shows.

use crate::error::Error;
use std::fmt;

/// Number of faces on the die.
pub const FACE_COUNT: usize = 6;

/// Face of a six-sided die, guaranteed to be within `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DieFace(u8);

impl DieFace {
    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);
    pub const FIVE: Self = Self(5);
    pub const SIX: Self = Self(6);

    /// Every selectable face, in display order.
    pub const ALL: [Self; FACE_COUNT] = [
        Self::ONE,
        Self::TWO,
        Self::THREE,
        Self::FOUR,
        Self::FIVE,
        Self::SIX,
    ];

    /// Creates a face from its pip count, or `None` outside `1..=6`.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (1..=FACE_COUNT as u8).contains(&value).then_some(Self(value))
    }

    /// Returns the pip count.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the zero-based position of this face in [`DieFace::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// File name of a user-supplied face image (`dice_3.png`).
    #[must_use]
    pub fn asset_name(self) -> String {
        format!("dice_{}.png", self.0)
    }

    /// File name of the artwork bundled with the binary (`dice_3.svg`).
    #[must_use]
    pub fn embedded_name(self) -> String {
        format!("dice_{}.svg", self.0)
    }
}

impl Default for DieFace {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u8> for DieFace {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(Error::InvalidFace(value))
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> Self {
        face.0
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_faces_are_ordered_one_to_six() {
        let values: Vec<u8> = DieFace::ALL.iter().map(|face| face.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn new_rejects_out_of_range_values() {
        assert!(DieFace::new(0).is_none());
        assert!(DieFace::new(7).is_none());
        assert!(DieFace::new(u8::MAX).is_none());
        assert_eq!(DieFace::new(6), Some(DieFace::SIX));
    }

    #[test]
    fn try_from_reports_the_invalid_value() {
        match DieFace::try_from(9) {
            Err(Error::InvalidFace(value)) => assert_eq!(value, 9),
            other => panic!("expected InvalidFace, got {other:?}"),
        }
    }

    #[test]
    fn index_matches_position_in_all() {
        for (position, face) in DieFace::ALL.iter().enumerate() {
            assert_eq!(face.index(), position);
        }
    }

    #[test]
    fn asset_names_follow_face_value() {
        assert_eq!(DieFace::FOUR.asset_name(), "dice_4.png");
        assert_eq!(DieFace::FOUR.embedded_name(), "dice_4.svg");
    }

    #[test]
    fn display_prints_pip_count() {
        assert_eq!(DieFace::TWO.to_string(), "2");
    }
}
