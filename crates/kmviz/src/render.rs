use crate::dataset::Dataset;
use crate::types::Point;
use rgb::RGB8;

pub const DEFAULT_CANVAS_SIZE: u16 = 500;

// Fixed world viewport, matching the front-end canvas coordinate range.
pub const VIEW_MIN: f32 = -5.0;
pub const VIEW_MAX: f32 = 5.0;

const BACKGROUND: RGB8 = RGB8 { r: 255, g: 255, b: 255 };
const UNASSIGNED: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
const CENTER: RGB8 = RGB8 { r: 255, g: 0, b: 0 };

// Ten samples along the viridis colormap; cluster i wears PALETTE[i % 10]
const PALETTE: [RGB8; 10] = [
    RGB8 { r: 68, g: 1, b: 84 },
    RGB8 { r: 72, g: 40, b: 120 },
    RGB8 { r: 62, g: 74, b: 137 },
    RGB8 { r: 49, g: 104, b: 142 },
    RGB8 { r: 38, g: 130, b: 142 },
    RGB8 { r: 31, g: 158, b: 137 },
    RGB8 { r: 53, g: 183, b: 121 },
    RGB8 { r: 109, g: 205, b: 89 },
    RGB8 { r: 180, g: 222, b: 44 },
    RGB8 { r: 253, g: 231, b: 37 },
];

const POINT_RADIUS: i32 = 2;
const CENTER_RADIUS: i32 = 5;

/// One rendered snapshot: a row-major RGB raster. Immutable once rendered;
/// the engine only appends these to its history and hands them back by
/// reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub pixels: Vec<RGB8>,
}

impl Frame {
    fn filled(width: u16, height: u16, color: RGB8) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn pixel(&self, x: u16, y: u16) -> RGB8 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    fn set(&mut self, x: i32, y: i32, color: RGB8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

    #[cfg(feature = "image")]
    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let p = self.pixel(x as u16, y as u16);
            image::Rgb([p.r, p.g, p.b])
        })
    }
}

/// Rasterizes one clustering configuration: data points colored by their
/// assignment (blue while unassigned) under red center markers, on a square
/// canvas over the fixed [-5, 5] viewport. Anything outside the viewport is
/// clipped per pixel.
#[derive(Debug, Clone)]
pub struct Renderer {
    width: u16,
    height: u16,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE)
    }
}

impl Renderer {
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0);
        Self { width, height }
    }

    fn to_canvas(&self, p: Point) -> (i32, i32) {
        let span = VIEW_MAX - VIEW_MIN;
        let x = (p.x - VIEW_MIN) / span * (self.width - 1) as f32;
        // World y grows upward, raster y grows downward
        let y = (VIEW_MAX - p.y) / span * (self.height - 1) as f32;
        (x.round() as i32, y.round() as i32)
    }

    fn disc(&self, frame: &mut Frame, center: (i32, i32), radius: i32, color: RGB8) {
        let (cx, cy) = center;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    frame.set(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Render a snapshot of the given configuration. `assignment` must be
    /// index-aligned with the dataset; `None` entries draw as raw data.
    pub fn render(
        &self,
        dataset: &Dataset,
        assignment: &[Option<usize>],
        centers: &[Point],
    ) -> Frame {
        assert_eq!(dataset.len(), assignment.len());

        let mut frame = Frame::filled(self.width, self.height, BACKGROUND);

        for (point, label) in dataset.points.iter().zip(assignment.iter()) {
            let color = match label {
                Some(cluster) => PALETTE[cluster % PALETTE.len()],
                None => UNASSIGNED,
            };
            self.disc(&mut frame, self.to_canvas(*point), POINT_RADIUS, color);
        }

        // Centers last so the markers stay visible on top of dense clusters
        for center in centers {
            self.disc(&mut frame, self.to_canvas(*center), CENTER_RADIUS, CENTER);
        }

        frame
    }
}
