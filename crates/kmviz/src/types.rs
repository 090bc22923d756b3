/// A 2D data point. The clustering math below only touches it through the
/// distance methods, so widening to more dimensions is local to this type;
/// the renderer is the part that is fixed to 2D.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn squared_distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Euclidean distance.
    pub fn distance(self, other: Self) -> f32 {
        self.squared_distance(other).sqrt()
    }
}
