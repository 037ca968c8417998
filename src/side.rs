use std::fmt::{Display, Formatter};

/// Identifies which figure is drawn across a pair of touching tile edges.
pub type FigureId = u8;

/// The reserved null [`FigureId`]. A side left at this value is unset and can
/// never match anything, in either position.
pub const NO_FIGURE: FigureId = 0;

/// Which half of a figure a side shows.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Orientation {
    /// The front half of the figure.
    #[default]
    Head,
    /// The back half of the figure.
    Tail,
}

/// One edge of a tile: which figure it shows and which half of that figure.
///
/// Sides are immutable values; `Default` yields an unset side.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Side {
    /// The figure shown, or [`NO_FIGURE`].
    pub figure: FigureId,
    /// The half of the figure shown.
    pub orientation: Orientation,
}

impl Side {
    /// Construct a side showing the given half of `figure`.
    pub const fn new(figure: FigureId, orientation: Orientation) -> Self {
        Self { figure, orientation }
    }

    /// Whether this side was left at the null figure.
    pub fn is_unset(&self) -> bool {
        self.figure == NO_FIGURE
    }

    /// Whether two touching sides join correctly: both show the same figure,
    /// one the head and one the tail, so the figure lines up across the seam.
    ///
    /// The null figure never matches.
    pub fn matches(&self, other: &Side) -> bool {
        if self.is_unset() || other.is_unset() {
            return false;
        }

        self.figure == other.figure && self.orientation != other.orientation
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_unset() {
            return write!(f, "--");
        }

        write!(f, "{}{}", self.figure, match self.orientation {
            Orientation::Head => 'h',
            Orientation::Tail => 't',
        })
    }
}
