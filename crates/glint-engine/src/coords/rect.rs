use super::{Point, Size};

/// Axis-aligned rectangle on the surface (top-left location).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub location: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            location: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    #[inline]
    pub const fn from_location_size(location: Point, size: Size) -> Self {
        Self { location, size }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self {
            location: Point::zero(),
            size: Size::zero(),
        }
    }

    /// Minimal rectangle covering every point.
    ///
    /// An empty iterator yields [`Rect::zero`].
    pub fn bounding<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self::zero();
        };

        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });

        Self::from_corners(min, max)
    }

    /// Minimal rectangle covering every input rectangle.
    ///
    /// An empty iterator yields [`Rect::zero`].
    pub fn union_all<I>(rects: I) -> Self
    where
        I: IntoIterator<Item = Rect>,
    {
        let mut rects = rects.into_iter();
        let Some(first) = rects.next() else {
            return Self::zero();
        };

        let (min, max) = rects.fold((first.min(), first.max()), |(min, max), r| {
            let (rmin, rmax) = (r.min(), r.max());
            (
                Point::new(min.x.min(rmin.x), min.y.min(rmin.y)),
                Point::new(max.x.max(rmax.x), max.y.max(rmax.y)),
            )
        });

        Self::from_corners(min, max)
    }

    #[inline]
    fn from_corners(min: Point, max: Point) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    #[inline]
    pub fn min(self) -> Point {
        self.location
    }

    #[inline]
    pub fn max(self) -> Point {
        Point::new(
            self.location.x + self.size.width,
            self.location.y + self.size.height,
        )
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new(
            self.location.x + self.size.width / 2.0,
            self.location.y + self.size.height / 2.0,
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.is_empty()
    }

    /// Returns the rectangle moved by `offset`.
    #[inline]
    pub fn translate(self, offset: Point) -> Self {
        Self::from_location_size(self.location.translate(offset), self.size)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        let max = self.max();
        p.x >= self.location.x && p.y >= self.location.y && p.x < max.x && p.y < max.y
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.location.x.max(other.location.x);
        let y0 = self.location.y.max(other.location.y);
        let x1 = self.max().x.min(other.max().x);
        let y1 = self.max().y.min(other.max().y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }
}
