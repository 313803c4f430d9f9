// Copyright (c) The karnaughgen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cube::{wildcard_count, Cube};
use arrayvec::ArrayVec;
use itertools::{Itertools, Position};
use std::{fmt, ops::BitOr};

/// Grid cell size in picture units.
const CELL: i32 = 10;

// Edge coordinates for wrapped pieces, which sit in the 5-unit margin
// outside the nominal 0-60 canvas.
const X_LEFT: i32 = 5;
const X_RIGHT: i32 = 55;
const Y_BOTTOM: i32 = -5;
const Y_TOP: i32 = 45;

/// The axis pattern that places a group at the wrap origin while spanning
/// both edge cells: its footprint continues around the torus edge.
const WRAP_ORIGIN: [Option<bool>; 2] = [None, Some(false)];

/// The one cube that wraps around both axes at once (`B0B0`).
const FOUR_CORNER: [Option<bool>; 4] = [None, Some(false), None, Some(false)];

/// Which edges of a rectangle are open because the implicant continues
/// around a torus edge there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenEdges {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl OpenEdges {
    pub const CLOSED: Self = Self {
        left: false,
        right: false,
        top: false,
        bottom: false,
    };
    pub const LEFT: Self = Self {
        left: true,
        right: false,
        top: false,
        bottom: false,
    };
    pub const RIGHT: Self = Self {
        left: false,
        right: true,
        top: false,
        bottom: false,
    };
    pub const TOP: Self = Self {
        left: false,
        right: false,
        top: true,
        bottom: false,
    };
    pub const BOTTOM: Self = Self {
        left: false,
        right: false,
        top: false,
        bottom: true,
    };

    #[inline]
    pub fn is_closed(self) -> bool {
        self == Self::CLOSED
    }
}

impl BitOr for OpenEdges {
    type Output = OpenEdges;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            left: self.left || rhs.left,
            right: self.right || rhs.right,
            top: self.top || rhs.top,
            bottom: self.bottom || rhs.bottom,
        }
    }
}

impl fmt::Display for OpenEdges {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (flag, code) in [
            (self.left, 'l'),
            (self.right, 'r'),
            (self.top, 't'),
            (self.bottom, 'b'),
        ] {
            if flag {
                write!(f, "{}", code)?;
            }
        }
        Ok(())
    }
}

/// One rectangular piece of an implicant's footprint.
///
/// `width` and `height` are the nominal cell spans; the rendered command
/// shrinks both by 2 units to leave drawing margin between adjacent
/// implicants. The origin is the canvas's bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub open: OpenEdges,
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "\\PrimImpl({},{})({},{})",
            self.x,
            self.y,
            self.width - 2,
            self.height - 2
        )?;
        if !self.open.is_closed() {
            write!(f, "[{}]", self.open)?;
        }
        Ok(())
    }
}

/// Maps a 1- or 2-variable axis group to its grid offset.
///
/// The cell order along each axis is the Gray-ish 00, 01, 11, 10. Wildcard
/// groups collapse to the offset of their anchor value, with `BB` collapsing
/// to the origin.
fn coord(group: &[Option<bool>]) -> i32 {
    // A single-variable axis is left-padded with 0, matching the map headers.
    let pair = match *group {
        [single] => [Some(false), single],
        [a, b] => [a, b],
        _ => panic!("axis group must have 1 or 2 variables, got {}", group.len()),
    };
    let cell = match pair {
        [Some(false), Some(false)] => 0,
        [Some(false), Some(true)] => 1,
        [Some(true), Some(true)] => 2,
        [Some(true), Some(false)] => 3,
        [Some(false), None] => 0,
        [Some(true), None] => 2,
        [None, Some(true)] => 1,
        [None, None] => 0,
        // The wrap branches in `layout` catch B0 groups before any
        // coordinate lookup happens.
        [None, Some(false)] => panic!("coordinate lookup on wrap-origin group"),
    };
    cell * CELL
}

/// x-coordinate of an ordinary rectangle: `coord` offset plus half the width,
/// shifted right past the row labels.
fn base_x(top: &[Option<bool>], width: i32) -> i32 {
    CELL + coord(top) + width / 2
}

/// y-coordinate of an ordinary rectangle, counted down from the top row.
fn base_y(left: &[Option<bool>], height: i32) -> i32 {
    (CELL << left.len()) - coord(left) - height / 2
}

impl Cube {
    /// Computes the rectangles covering this cube on the map, in rendering
    /// order.
    ///
    /// An implicant whose footprint crosses a map edge continues on the
    /// opposite edge, so it renders as two pieces (or four, for the one cube
    /// that crosses both edges at once). Each wrapped piece extends an extra
    /// cell into the margin on the wrapped axis.
    pub fn layout(&self) -> ArrayVec<Rect, 4> {
        let left = self.left_group();
        let top = self.top_group();
        let width = CELL << wildcard_count(top);
        let height = CELL << wildcard_count(left);

        let mut rects = ArrayVec::new();
        if self.vars() == &FOUR_CORNER[..] {
            // Both axes wrap: one piece per canvas corner. Checked first
            // since this cube also matches both single-axis conditions.
            for (x, y, open) in [
                (X_LEFT, Y_TOP, OpenEdges::RIGHT | OpenEdges::BOTTOM),
                (X_RIGHT, Y_TOP, OpenEdges::LEFT | OpenEdges::BOTTOM),
                (X_LEFT, Y_BOTTOM, OpenEdges::RIGHT | OpenEdges::TOP),
                (X_RIGHT, Y_BOTTOM, OpenEdges::LEFT | OpenEdges::TOP),
            ] {
                rects.push(Rect {
                    x,
                    y,
                    width: width + CELL,
                    height: height + CELL,
                    open,
                });
            }
        } else if self.variable_count() == 4 && left == &WRAP_ORIGIN[..] {
            // Row axis wraps: one piece at the top edge, one at the bottom.
            let x = base_x(top, width);
            for (y, open) in [(Y_TOP, OpenEdges::BOTTOM), (Y_BOTTOM, OpenEdges::TOP)] {
                rects.push(Rect {
                    x,
                    y,
                    width,
                    height: height + CELL,
                    open,
                });
            }
        } else if top == &WRAP_ORIGIN[..] {
            // Column axis wraps: one piece at the left edge, one at the
            // right. Only 3- and 4-variable maps have a 2-variable top group.
            let y = base_y(left, height);
            for (x, open) in [(X_LEFT, OpenEdges::RIGHT), (X_RIGHT, OpenEdges::LEFT)] {
                rects.push(Rect {
                    x,
                    y,
                    width: width + CELL,
                    height,
                    open,
                });
            }
        } else {
            rects.push(Rect {
                x: base_x(top, width),
                y: base_y(left, height),
                width,
                height,
                open: OpenEdges::CLOSED,
            });
        }
        rects
    }

    #[inline]
    pub fn layout_display(&self) -> LayoutDisplay {
        LayoutDisplay {
            rects: self.layout(),
        }
    }
}

/// Displays a cube's rectangles as newline-joined `\PrimImpl` commands.
pub struct LayoutDisplay {
    rects: ArrayVec<Rect, 4>,
}

impl fmt::Display for LayoutDisplay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rect in self.rects.iter().with_position() {
            match rect {
                Position::First(rect) | Position::Middle(rect) => writeln!(f, "{}", rect)?,
                Position::Last(rect) | Position::Only(rect) => write!(f, "{}", rect)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::tests::cube;
    use proptest::prelude::*;

    fn layout_of(s: &str) -> String {
        cube(s).layout_display().to_string()
    }

    #[test]
    fn test_ordinary() {
        assert_eq!(layout_of("10"), "\\PrimImpl(15,5)(8,8)");
        assert_eq!(layout_of("BB"), "\\PrimImpl(20,10)(18,18)");
        assert_eq!(layout_of("111"), "\\PrimImpl(35,5)(8,8)");
        assert_eq!(layout_of("BB1"), "\\PrimImpl(30,10)(18,18)");
        assert_eq!(layout_of("1111"), "\\PrimImpl(35,15)(8,8)");
        assert_eq!(layout_of("0B0B"), "\\PrimImpl(20,30)(18,18)");
        assert_eq!(layout_of("B1B1"), "\\PrimImpl(30,20)(18,18)");
        assert_eq!(layout_of("BB1B"), "\\PrimImpl(40,20)(18,38)");
    }

    #[test]
    fn test_top_bottom_wrap() {
        assert_eq!(
            layout_of("B000"),
            "\\PrimImpl(15,45)(8,28)[b]\n\
             \\PrimImpl(15,-5)(8,28)[t]"
        );
        assert_eq!(
            layout_of("B010"),
            "\\PrimImpl(45,45)(8,28)[b]\n\
             \\PrimImpl(45,-5)(8,28)[t]"
        );
        assert_eq!(
            layout_of("B01B"),
            "\\PrimImpl(40,45)(18,28)[b]\n\
             \\PrimImpl(40,-5)(18,28)[t]"
        );
    }

    #[test]
    fn test_left_right_wrap() {
        assert_eq!(
            layout_of("0BB0"),
            "\\PrimImpl(5,30)(28,18)[r]\n\
             \\PrimImpl(55,30)(28,18)[l]"
        );
        assert_eq!(
            layout_of("1B0"),
            "\\PrimImpl(5,5)(28,8)[r]\n\
             \\PrimImpl(55,5)(28,8)[l]"
        );
    }

    #[test]
    fn test_four_corner_wrap() {
        assert_eq!(
            layout_of("B0B0"),
            "\\PrimImpl(5,45)(28,28)[rb]\n\
             \\PrimImpl(55,45)(28,28)[lb]\n\
             \\PrimImpl(5,-5)(28,28)[rt]\n\
             \\PrimImpl(55,-5)(28,28)[lt]"
        );
    }

    #[test]
    fn test_corner_precedence_over_single_axis_wraps() {
        // B0B0 also satisfies both single-axis wrap conditions; the corner
        // case must win.
        let rects = cube("B0B0").layout();
        assert_eq!(rects.len(), 4);
        for rect in &rects {
            assert_eq!(rect.width, 30);
            assert_eq!(rect.height, 30);
        }
    }

    proptest! {
        #[test]
        fn rect_count_is_1_2_or_4(c in any::<Cube>()) {
            let count = c.layout().len();
            prop_assert!(
                count == 1 || count == 2 || count == 4,
                "cube {} produced {} rects", c, count,
            );
        }

        #[test]
        fn ordinary_rects_are_closed_and_sized(c in any::<Cube>()) {
            let rects = c.layout();
            if rects.len() == 1 {
                let rect = rects[0];
                prop_assert!(rect.open.is_closed());
                prop_assert_eq!(rect.width, CELL << wildcard_count(c.top_group()));
                prop_assert_eq!(rect.height, CELL << wildcard_count(c.left_group()));
            } else {
                // Every wrapped piece has at least one open edge.
                for rect in &rects {
                    prop_assert!(!rect.open.is_closed());
                }
            }
        }

        #[test]
        fn layout_is_deterministic(c in any::<Cube>()) {
            prop_assert_eq!(c.layout(), c.layout());
        }
    }
}
