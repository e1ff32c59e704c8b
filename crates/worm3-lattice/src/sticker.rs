//! Stickers and the cubies that carry them.

use smallvec::SmallVec;
use worm3_core::{Color, Face, Pos};

/// One colored face-cell of a cubie.
///
/// Identity fields (`orig`, `orig_pos`, `orig_face`) are fixed at creation
/// and have no setters. `curr` changes only through a flip, which also bumps
/// the monotonic `flips` counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sticker {
    curr: Color,
    orig: Color,
    orig_pos: Pos,
    orig_face: Face,
    flips: u32,
}

impl Sticker {
    /// A fresh sticker created at `pos` on `face`, showing its home color.
    pub fn new(pos: Pos, face: Face) -> Self {
        let color = face.home_color();
        Self {
            curr: color,
            orig: color,
            orig_pos: pos,
            orig_face: face,
            flips: 0,
        }
    }

    /// Current color.
    pub fn curr(&self) -> Color {
        self.curr
    }

    /// Home color (color at creation).
    pub fn orig(&self) -> Color {
        self.orig
    }

    /// Creation-time cubie position.
    pub fn orig_pos(&self) -> Pos {
        self.orig_pos
    }

    /// Creation-time face.
    pub fn orig_face(&self) -> Face {
        self.orig_face
    }

    /// Number of times this sticker has been flipped.
    pub fn flips(&self) -> u32 {
        self.flips
    }

    /// Whether the sticker currently shows a color other than its home.
    pub fn is_flipped(&self) -> bool {
        self.curr != self.orig
    }

    /// Flipped at least once and currently off its home color.
    pub fn is_unstable(&self) -> bool {
        self.flips > 0 && self.is_flipped()
    }

    /// The sticker after one flip: opposite color, one more visit.
    pub(crate) fn flipped(self) -> Self {
        Self {
            curr: self.curr.opposite(),
            flips: self.flips.saturating_add(1),
            ..self
        }
    }
}

/// One unit cell of the lattice, holding 0–3 stickers keyed by their
/// current face.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Cubie {
    stickers: SmallVec<[(Face, Sticker); 3]>,
}

impl Cubie {
    /// A solved cubie at `pos` of a `size`-cube: one sticker per boundary
    /// face it touches.
    pub(crate) fn solved(pos: Pos, size: u32) -> Self {
        let stickers = Face::ALL
            .into_iter()
            .filter(|face| face.contains(pos, size))
            .map(|face| (face, Sticker::new(pos, face)))
            .collect();
        Self { stickers }
    }

    /// Sticker currently showing on `face`, if any.
    pub fn sticker(&self, face: Face) -> Option<&Sticker> {
        self.stickers
            .iter()
            .find(|(f, _)| *f == face)
            .map(|(_, st)| st)
    }

    pub(crate) fn sticker_mut(&mut self, face: Face) -> Option<&mut Sticker> {
        self.stickers
            .iter_mut()
            .find(|(f, _)| *f == face)
            .map(|(_, st)| st)
    }

    /// All stickers with their current faces.
    pub fn stickers(&self) -> impl Iterator<Item = (Face, &Sticker)> + '_ {
        self.stickers.iter().map(|(f, st)| (*f, st))
    }

    /// Number of stickers on this cubie.
    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    /// Whether this is an interior cubie.
    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }

    /// The cubie with every sticker's face key passed through `f`.
    pub(crate) fn refaced(&self, f: impl Fn(Face) -> Face) -> Self {
        Self {
            stickers: self.stickers.iter().map(|(face, st)| (f(*face), *st)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_sticker_is_stable_home_color() {
        let st = Sticker::new(Pos::new(0, 1, 2), Face::PZ);
        assert_eq!(st.curr(), Color::Red);
        assert_eq!(st.orig(), Color::Red);
        assert_eq!(st.flips(), 0);
        assert!(!st.is_flipped());
        assert!(!st.is_unstable());
    }

    #[test]
    fn flip_changes_color_and_counts() {
        let st = Sticker::new(Pos::new(0, 1, 2), Face::PZ).flipped();
        assert_eq!(st.curr(), Color::Orange);
        assert_eq!(st.orig(), Color::Red);
        assert_eq!(st.flips(), 1);
        assert!(st.is_unstable());

        let st = st.flipped();
        assert_eq!(st.curr(), Color::Red);
        assert_eq!(st.flips(), 2);
        assert!(!st.is_unstable());
    }

    #[test]
    fn corner_edge_center_interior_sticker_counts() {
        let size = 3;
        assert_eq!(Cubie::solved(Pos::new(0, 0, 0), size).len(), 3);
        assert_eq!(Cubie::solved(Pos::new(1, 0, 0), size).len(), 2);
        assert_eq!(Cubie::solved(Pos::new(1, 1, 0), size).len(), 1);
        assert!(Cubie::solved(Pos::new(1, 1, 1), size).is_empty());
    }

    #[test]
    fn solved_cubie_stickers_sit_on_their_home_faces() {
        let c = Cubie::solved(Pos::new(2, 2, 2), 3);
        for (face, st) in c.stickers() {
            assert_eq!(st.orig_face(), face);
            assert_eq!(st.curr(), face.home_color());
        }
        assert!(c.sticker(Face::PX).is_some());
        assert!(c.sticker(Face::NX).is_none());
    }
}
