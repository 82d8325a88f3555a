use crate::grid::Grid;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Renders the grid as a block of braille characters, packing a 2x4 patch of
/// cells into every glyph.
pub struct Camera {
    /// The pixel buffer, one entry per grid cell
    pb: Vec<bool>,

    /// The frame buffer
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the pixel buffer
    w: usize,

    /// Height of the pixel buffer
    h: usize,
}

impl Camera {
    /// A camera sized for an `grid_size` x `grid_size` grid
    pub fn new(grid_size: usize) -> Self {
        let (w, h) = (grid_size, grid_size);
        let pb = vec![false; w * h];

        // Let `w` and `h` refer to the width and height of the pixel buffer.
        // Then `bw = ceil(w / 2)` and `bh = ceil(h / 4)` are the width and
        // height of our frame in braille characters.

        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));
        let cp = vec![BRAILLE_EMPTY; bw * bh];

        // Each braille character is 3 bytes in utf-8, and each of the `bh`
        // lines ends in a 1 byte newline.

        let fb = String::with_capacity(3 * (bw * bh) + bh);

        Self { pb, fb, cp, w, h }
    }

    /// Copy the live cells of `grid` into the pixel buffer.
    pub fn draw(&mut self, grid: &Grid) {
        assert!(grid.size() == self.w, "camera and grid sizes differ");

        for (i, cell) in grid.cells().iter().enumerate() {
            self.pb[i] = cell.is_alive();
        }
    }

    /// Fundamentally, we have a buffer of every pixel in the frame, and we
    /// ask ourselves "Is this pixel on or off?". On pixels each add their dot
    /// to the braille character they fall into.
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.pb.iter().enumerate() {
            let (x, y) = self.xy_to(n);
            let hex = Self::get_hex_value(x, y);

            if px {
                self.cp[(y / 4) * bw + (x / 2)] += hex;
            }
        }

        // update the frame buffer
        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            self.fb.push(::std::char::from_u32(c).unwrap());
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
