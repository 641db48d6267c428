/// Mutable view of one framebuffer.
///
/// All drawing is clipped to the buffer; writes that land outside it are dropped.
pub struct Surface<'a> {
    pixels: &'a mut [u16],
    width: u16,
    height: u16,
}

impl<'a> Surface<'a> {
    /// `pixels` must hold exactly `width * height` pixels.
    pub fn new(pixels: &'a mut [u16], width: u16, height: u16) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            pixels,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u16] {
        self.pixels
    }

    #[inline]
    fn offset(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u16, y: u16, color: u16) {
        if x < self.width && y < self.height {
            let at = self.offset(x, y);
            self.pixels[at] = color;
        }
    }

    #[inline]
    pub fn pixel(&self, x: u16, y: u16) -> Option<u16> {
        (x < self.width && y < self.height).then(|| self.pixels[self.offset(x, y)])
    }

    pub fn fill(&mut self, color: u16) {
        self.pixels.fill(color);
    }

    /// Clip a rectangle to the surface, returning its visible width and height.
    fn clip(&self, x: u16, y: u16, width: u16, height: u16) -> Option<(usize, usize)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let w = width.min(self.width - x) as usize;
        let h = height.min(self.height - y) as usize;
        (w > 0 && h > 0).then_some((w, h))
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: u16) {
        let Some((w, h)) = self.clip(x, y, width, height) else {
            return;
        };
        for row in 0..h {
            let start = self.offset(x, y + row as u16);
            self.pixels[start..start + w].fill(color);
        }
    }

    /// Copy a `width × height` row-major image to `(x, y)`, one pixel at a time.
    pub fn copy_rect_cpu(&mut self, x: u16, y: u16, width: u16, height: u16, src: &[u16]) {
        debug_assert!(src.len() >= width as usize * height as usize);
        for row in 0..height {
            for col in 0..width {
                let color = src[row as usize * width as usize + col as usize];
                self.set_pixel(x.saturating_add(col), y.saturating_add(row), color);
            }
        }
    }

    /// Same result as [`copy_rect_cpu`](Self::copy_rect_cpu), moved a row at a time.
    pub fn copy_rect_block(&mut self, x: u16, y: u16, width: u16, height: u16, src: &[u16]) {
        debug_assert!(src.len() >= width as usize * height as usize);
        let Some((w, h)) = self.clip(x, y, width, height) else {
            return;
        };
        for row in 0..h {
            let from = row * width as usize;
            let to = self.offset(x, y + row as u16);
            self.pixels[to..to + w].copy_from_slice(&src[from..from + w]);
        }
    }
}
