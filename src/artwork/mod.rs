//! The constant artwork table and its intrinsic metrics.
//!
//! All coordinates are in artwork units. The mark occupies a 600×600 square anchored at the
//! origin; the wordmark sits below it, starting around `y = 627`. Every x coordinate of the mark
//! is tagged with the warp it follows while swimming (see [`crate::animation::warp`]).

pub(crate) mod mark;
pub(crate) mod wordmark;

use crate::{
    animation::warp::Warp,
    foundation::core::{Affine, BezPath, Point, Vec2},
};

/// Width of the mark artwork (and of the vertical compositions).
pub const MARK_WIDTH: f64 = 600.0;
/// Height of the square the mark and the background occupy.
pub const MARK_HEIGHT: f64 = 600.0;
/// Height of the vertical isologotype (mark above wordmark).
pub const FULL_HEIGHT: f64 = 689.0;
/// Height of the wordmark band.
pub const TEXT_HEIGHT: f64 = 61.0;
/// Where the wordmark band starts inside the vertical artwork.
pub const TEXT_TOP_OFFSET: f64 = 627.099_980;
/// Width of the horizontal isologotype relative to [`MARK_WIDTH`].
pub const HORIZONTAL_WIDTH_FACTOR: f64 = 3.65;
/// Scale applied to the wordmark in the horizontal isologotype.
pub const HORIZONTAL_TEXT_SCALE: f64 = 2.6;
/// Offset (in pre-scale units) of the wordmark in the horizontal isologotype.
pub const HORIZONTAL_TEXT_OFFSET: Vec2 = Vec2::new(237.5, -543.0);

/// Composition variants with a fixed intrinsic size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Mark (or background square) only.
    Isotype,
    /// Wordmark only.
    Logotype,
    /// Mark above wordmark.
    VerticalIsologotype,
    /// Mark left of an enlarged wordmark.
    HorizontalIsologotype,
}

/// Intrinsic size of a [`Variant`] in artwork units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArtworkMetrics {
    /// Intrinsic width.
    pub width: f64,
    /// Intrinsic height.
    pub height: f64,
    /// Distance from the artwork origin to the top of the visible content.
    pub top_offset: f64,
}

impl ArtworkMetrics {
    /// Width over height.
    pub fn ratio(self) -> f64 {
        self.width / self.height
    }
}

impl Variant {
    /// Pick the variant for a set of enabled layers.
    ///
    /// The background square occupies the mark's slot, so a background without a mark lays out
    /// like a mark would. `horizontal` only matters when both slots are filled.
    pub fn select(mark_slot: bool, text: bool, horizontal: bool) -> Self {
        match (mark_slot, text) {
            (true, true) if horizontal => Self::HorizontalIsologotype,
            (true, true) => Self::VerticalIsologotype,
            (false, true) => Self::Logotype,
            (_, false) => Self::Isotype,
        }
    }

    /// Fixed intrinsic metrics of the variant.
    pub fn metrics(self) -> ArtworkMetrics {
        match self {
            Self::Isotype => ArtworkMetrics {
                width: MARK_WIDTH,
                height: MARK_HEIGHT,
                top_offset: 0.0,
            },
            Self::Logotype => ArtworkMetrics {
                width: MARK_WIDTH,
                height: TEXT_HEIGHT,
                top_offset: TEXT_TOP_OFFSET,
            },
            Self::VerticalIsologotype => ArtworkMetrics {
                width: MARK_WIDTH,
                height: FULL_HEIGHT,
                top_offset: 0.0,
            },
            Self::HorizontalIsologotype => ArtworkMetrics {
                width: MARK_WIDTH * HORIZONTAL_WIDTH_FACTOR,
                height: MARK_HEIGHT,
                top_offset: 0.0,
            },
        }
    }

    /// Placement of the wordmark relative to the artwork origin.
    pub fn wordmark_placement(self) -> Affine {
        match self {
            Self::HorizontalIsologotype => {
                Affine::scale(HORIZONTAL_TEXT_SCALE) * Affine::translate(HORIZONTAL_TEXT_OFFSET)
            }
            _ => Affine::IDENTITY,
        }
    }
}

/// Warp applied to an x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum XWarp {
    Fixed,
    Left,
    Right,
    Flip,
}

/// Warp applied to a y coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum YWarp {
    Fixed,
    Tail,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ArtPoint {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) wx: XWarp,
    pub(crate) wy: YWarp,
}

impl ArtPoint {
    pub(crate) fn resolve(self, warp: Option<&Warp>) -> Point {
        let Some(w) = warp else {
            return Point::new(self.x, self.y);
        };
        let x = match self.wx {
            XWarp::Fixed => self.x,
            XWarp::Left => w.left(self.x),
            XWarp::Right => w.right(self.x),
            XWarp::Flip => w.flip(self.x),
        };
        let y = match self.wy {
            YWarp::Fixed => self.y,
            YWarp::Tail => w.tail_y(self.y),
        };
        Point::new(x, y)
    }
}

/// Unwarped point.
pub(crate) const fn p(x: f64, y: f64) -> ArtPoint {
    ArtPoint {
        x,
        y,
        wx: XWarp::Fixed,
        wy: YWarp::Fixed,
    }
}

/// Left-wing point.
pub(crate) const fn l(x: f64, y: f64) -> ArtPoint {
    ArtPoint {
        x,
        y,
        wx: XWarp::Left,
        wy: YWarp::Fixed,
    }
}

/// Right-wing point.
pub(crate) const fn r(x: f64, y: f64) -> ArtPoint {
    ArtPoint {
        x,
        y,
        wx: XWarp::Right,
        wy: YWarp::Fixed,
    }
}

/// Right-wing point riding on the tail.
pub(crate) const fn rt(x: f64, y: f64) -> ArtPoint {
    ArtPoint {
        x,
        y,
        wx: XWarp::Right,
        wy: YWarp::Tail,
    }
}

/// Tail point.
pub(crate) const fn ft(x: f64, y: f64) -> ArtPoint {
    ArtPoint {
        x,
        y,
        wx: XWarp::Flip,
        wy: YWarp::Tail,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Seg {
    MoveTo(ArtPoint),
    LineTo(ArtPoint),
    CurveTo(ArtPoint, ArtPoint, ArtPoint),
    Close,
}

/// A named, static path of the artwork.
#[derive(Clone, Copy, Debug)]
pub struct ArtPath {
    /// Stable element name, useful in logs and tests.
    pub name: &'static str,
    pub(crate) segs: &'static [Seg],
}

impl ArtPath {
    /// Build the path, warping tagged coordinates when `warp` is set.
    pub fn to_bezpath(&self, warp: Option<&Warp>) -> BezPath {
        let mut out = BezPath::new();
        for seg in self.segs {
            match *seg {
                Seg::MoveTo(a) => out.move_to(a.resolve(warp)),
                Seg::LineTo(a) => out.line_to(a.resolve(warp)),
                Seg::CurveTo(a, b, c) => {
                    out.curve_to(a.resolve(warp), b.resolve(warp), c.resolve(warp))
                }
                Seg::Close => out.close_path(),
            }
        }
        out
    }
}

/// Outline of the manta ray (filled with the mark color, stroked with the border color).
pub fn mark_perimeter() -> ArtPath {
    ArtPath {
        name: "perimeter",
        segs: mark::PERIMETER,
    }
}

/// Eyes and gill, filled with the eyes color on top of the perimeter.
pub fn mark_details() -> [ArtPath; 3] {
    [
        ArtPath {
            name: "right-eye",
            segs: mark::RIGHT_EYE,
        },
        ArtPath {
            name: "left-eye",
            segs: mark::LEFT_EYE,
        },
        ArtPath {
            name: "gill",
            segs: mark::GILL,
        },
    ]
}

/// The letters of the wordmark, in reading order.
pub fn wordmark_letters() -> [ArtPath; 6] {
    [
        ArtPath {
            name: "M",
            segs: wordmark::M,
        },
        ArtPath {
            name: "A",
            segs: wordmark::A,
        },
        ArtPath {
            name: "G",
            segs: wordmark::G,
        },
        ArtPath {
            name: "N",
            segs: wordmark::N,
        },
        ArtPath {
            name: "E",
            segs: wordmark::E,
        },
        ArtPath {
            name: "T",
            segs: wordmark::T,
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/artwork/metrics.rs"]
mod tests;
