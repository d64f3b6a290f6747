//! Shape generator - random color, silhouette and orientation
//!
//! Every piece starts as a 2x2 square in the middle of the 4x4 box and is then
//! reshaped by one or two random draws. The branch weights give each of the
//! seven silhouettes a 1/7 chance. A final draw picks one of four orientations.
//!
//! Colors are uniform over the twelve non-white indices `{1..=6, 11..=16}`.

use rand::Rng;

use crate::pieces::{rotate_ccw, rotate_cw, Piece, Shape, EMPTY_SHAPE};
use crate::types::CellColor;

/// Draw a piece color.
///
/// A uniform value in `[0, 12)` maps to `v + 1` below 6 and `v + 5` otherwise,
/// so white (7) and bright white (17) never appear.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> CellColor {
    let v: u8 = rng.gen_range(0..12);
    let index = if v < 6 { v + 1 } else { v + 5 };
    CellColor::new(index).unwrap_or(CellColor::EMPTY)
}

/// Build an unrotated silhouette of the given color.
pub fn random_silhouette<R: Rng + ?Sized>(rng: &mut R, color: CellColor) -> Shape {
    let empty = CellColor::EMPTY;
    let mut s = EMPTY_SHAPE;
    s[1][1] = color;
    s[1][2] = color;
    s[2][1] = color;
    s[2][2] = color;

    let p: f64 = rng.gen();
    if p < 3.0 / 7.0 {
        s[1][1] = empty;
        s[0][2] = color;
        let q: f64 = rng.gen();
        if q < 1.0 / 6.0 {
            s[2][1] = empty;
            s[3][2] = color;
        } else if q < 2.0 / 6.0 {
            s[1][1] = color;
            s[2][1] = empty;
        } else if q < 2.0 / 3.0 {
            s[0][2] = empty;
            s[1][3] = color;
        }
    } else if p < 6.0 / 7.0 {
        s[2][1] = empty;
        s[3][2] = color;
        let q: f64 = rng.gen();
        if q < 1.0 / 6.0 {
            s[1][1] = empty;
            s[0][2] = color;
        } else if q < 2.0 / 6.0 {
            s[1][1] = empty;
            s[2][1] = color;
        } else if q < 2.0 / 3.0 {
            s[3][2] = empty;
            s[2][3] = color;
        }
    }

    s
}

/// Apply one of the four orientations with equal probability.
pub fn random_orientation<R: Rng + ?Sized>(rng: &mut R, shape: &Shape) -> Shape {
    let r: f64 = rng.gen();
    if r < 0.25 {
        rotate_ccw(shape)
    } else if r < 0.5 {
        rotate_cw(shape)
    } else if r < 0.75 {
        rotate_ccw(&rotate_ccw(shape))
    } else {
        *shape
    }
}

/// Generate a fresh piece at the spawn anchor.
///
/// Pure function of the random source: draws color, silhouette, then orientation.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Piece {
    let color = random_color(rng);
    let silhouette = random_silhouette(rng, color);
    Piece::new(random_orientation(rng, &silhouette))
}
