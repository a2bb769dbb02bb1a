use crate::matrix::Matrix;

/// A DOMRect-style rectangle.
///
/// The origin is unset (`None`) until the first assignment, which lets an
/// accumulator start from `Rect::new()` and grow by union without a magic
/// sentinel coordinate.
///
/// Validity policy:
/// - *valid*: x and y are set, width > 0 and height > 0.
/// - *empty*: anything else.
///
/// Union with an invalid operand yields the receiver unchanged, and
/// intersection with either operand invalid returns the receiver
/// unmodified. Neither rule is the obvious mathematical choice; both are
/// load-bearing for bounding-box accumulation and are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    x: Option<f64>,
    y: Option<f64>,
    width: f64,
    height: f64,
}

impl Rect {
    /// The empty rect: unset origin, zero size.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width,
            height,
        }
    }

    pub fn x(&self) -> Option<f64> {
        self.x
    }

    pub fn y(&self) -> Option<f64> {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn left(&self) -> Option<f64> {
        self.x
    }

    pub fn top(&self) -> Option<f64> {
        self.y
    }

    pub fn right(&self) -> Option<f64> {
        self.x.map(|x| x + self.width)
    }

    pub fn bottom(&self) -> Option<f64> {
        self.y.map(|y| y + self.height)
    }

    pub fn is_valid(&self) -> bool {
        self.x.is_some() && self.y.is_some() && self.width > 0.0 && self.height > 0.0
    }

    pub fn is_empty(&self) -> bool {
        !self.is_valid()
    }

    /// Sets the bounds from two corners.
    pub fn set_coords(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        self.x = Some(x1);
        self.y = Some(y1);
        self.width = x2 - x1;
        self.height = y2 - y1;
        self
    }

    /// Moves the origin without changing the size.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// True when the given point or rectangle lies inside or on the edge.
    /// An invalid receiver contains nothing.
    pub fn contains(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        if !self.is_valid() {
            return false;
        }
        let (left, top) = (self.x.unwrap(), self.y.unwrap());
        let (right, bottom) = (left + self.width, top + self.height);
        if width <= 0.0 || height <= 0.0 {
            return left <= x && x <= right && top <= y && y <= bottom;
        }
        let r = x + width;
        let b = y + height;
        left <= x && x <= right && left <= r && r <= right && top <= y && y <= bottom && top <= b && b <= bottom
    }

    /// Grows the receiver to cover the rectangle `(x, y, width, height)`.
    /// A degenerate operand (width or height <= 0) still extends the bounds
    /// to contain its origin point.
    pub fn unite_in_place(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        if self.contains(x, y, width, height) {
            return self;
        }

        let mut x1 = self.x;
        let mut y1 = self.y;
        let mut x2 = self.right();
        let mut y2 = self.bottom();

        match x1 {
            None => x1 = Some(x),
            Some(left) if x < left => x1 = Some(x),
            _ => {
                if let Some(right) = x2 {
                    if x > right {
                        x2 = Some(x);
                    }
                }
            }
        }
        match y1 {
            None => y1 = Some(y),
            Some(top) if y < top => y1 = Some(y),
            _ => {
                if let Some(bottom) = y2 {
                    if y > bottom {
                        y2 = Some(y);
                    }
                }
            }
        }

        if width > 0.0 && height > 0.0 {
            let right = x + width;
            let bottom = y + height;
            if x2.is_none_or(|v| right > v) {
                x2 = Some(right);
            }
            if y2.is_none_or(|v| bottom > v) {
                y2 = Some(bottom);
            }
        }

        match (x1, y1, x2, y2) {
            (Some(x1), Some(y1), Some(x2), Some(y2)) => {
                self.set_coords(x1, y1, x2, y2);
            }
            _ => {
                self.x = x1;
                self.y = y1;
            }
        }
        self
    }

    /// Union with another rect. An invalid `other` (unset origin) leaves the
    /// receiver unchanged.
    pub fn union_in_place(&mut self, other: &Rect) -> &mut Self {
        let (Some(x), Some(y)) = (other.x, other.y) else {
            return self;
        };
        self.unite_in_place(x, y, other.width, other.height)
    }

    pub fn union(&self, other: &Rect) -> Rect {
        let mut out = *self;
        out.union_in_place(other);
        out
    }

    /// Intersection with another rect. If either operand is invalid the
    /// receiver is returned unmodified.
    pub fn intersect_in_place(&mut self, other: &Rect) -> &mut Self {
        if !self.is_valid() || !other.is_valid() {
            return self;
        }
        let (sx, sy) = (self.x.unwrap(), self.y.unwrap());
        if other.contains(sx, sy, self.width, self.height) {
            return self;
        }

        let s_left = sx;
        let s_top = sy;
        let s_right = sx + self.width;
        let s_bottom = sy + self.height;
        let o_left = other.x.unwrap();
        let o_top = other.y.unwrap();
        let o_right = o_left + other.width;
        let o_bottom = o_top + other.height;

        let mut x1 = s_left;
        let mut y1 = s_top;
        let mut x2 = s_right;
        let mut y2 = s_bottom;

        let v_overlap = (o_top < s_top && s_bottom < o_bottom)
            || (s_top <= o_top && o_top < s_bottom)
            || (s_top < o_bottom && o_bottom <= s_bottom);
        let h_overlap = (o_left < s_left && s_right < o_right)
            || (s_left <= o_left && o_left < s_right)
            || (s_left < o_right && o_right <= s_right);

        if s_left < o_left && o_left < s_right && v_overlap {
            x1 = o_left;
        }
        if s_top < o_top && o_top < s_bottom && h_overlap {
            y1 = o_top;
        }
        if s_left < o_right && o_right < s_right && v_overlap {
            x2 = o_right;
        }
        if s_top < o_bottom && o_bottom < s_bottom && h_overlap {
            y2 = o_bottom;
        }

        self.set_coords(x1, y1, x2, y2);
        self
    }

    pub fn intersect(&self, other: &Rect) -> Rect {
        let mut out = *self;
        out.intersect_in_place(other);
        out
    }

    /// Transforms all four corners under `matrix` and re-derives the
    /// axis-aligned bounding rect of the results. A direct transform of
    /// (x, y, w, h) would mishandle rotation. Invalid rects pass through.
    pub fn transform(&self, matrix: &Matrix) -> Rect {
        if !self.is_valid() {
            return *self;
        }
        let x1 = self.x.unwrap();
        let y1 = self.y.unwrap();
        let x2 = x1 + self.width;
        let y2 = y1 + self.height;
        let corners = [
            matrix.transform_point(x1, y1),
            matrix.transform_point(x2, y1),
            matrix.transform_point(x2, y2),
            matrix.transform_point(x1, y2),
        ];
        let min_x = corners.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let min_y = corners.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max_x = corners.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        let max_y = corners.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        let mut out = Rect::new();
        out.set_coords(min_x, min_y, max_x, max_y);
        out
    }

    pub fn transform_in_place(&mut self, matrix: &Matrix) -> &mut Self {
        *self = self.transform(matrix);
        self
    }

    /// Moves the rect by (dx, dy). A rect with an unset origin stays put.
    pub fn translate_in_place(&mut self, dx: f64, dy: f64) -> &mut Self {
        if let Some(x) = self.x {
            self.x = Some(x + dx);
        }
        if let Some(y) = self.y {
            self.y = Some(y + dy);
        }
        self
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        let mut out = *self;
        out.translate_in_place(dx, dy);
        out
    }

    /// Adds the deltas to the left/top/right/bottom edges respectively.
    /// No-op on an invalid rect.
    pub fn adjust(&self, dx1: f64, dy1: f64, dx2: f64, dy2: f64) -> Rect {
        if !self.is_valid() {
            return *self;
        }
        let mut out = *self;
        out.set_coords(
            self.x.unwrap() + dx1,
            self.y.unwrap() + dy1,
            self.x.unwrap() + self.width + dx2,
            self.y.unwrap() + self.height + dy2,
        );
        out
    }

    /// Flips negative extents so width and height come out non-negative.
    pub fn normalize(&self) -> Rect {
        let mut out = *self;
        if let Some(x) = self.x {
            if self.width < 0.0 {
                out.x = Some(x + self.width);
                out.width = -self.width;
            }
        }
        if let Some(y) = self.y {
            if self.height < 0.0 {
                out.y = Some(y + self.height);
                out.height = -self.height;
            }
        }
        out
    }

    /// Swaps width and height.
    pub fn transpose(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.height,
            height: self.width,
        }
    }
}
