/// Value every entry holds after a clear. Any real fragment depth beats it.
pub const DEPTH_CLEARED: f32 = f32::MIN;

/// Per-pixel depth of the closest fragment drawn so far, row-major and sized
/// like the pixel surface. Larger depth values are closer to the viewer.
pub struct DepthBuffer {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl DepthBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, values: vec![DEPTH_CLEARED; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn clear(&mut self) {
        self.values.fill(DEPTH_CLEARED);
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Whether `depth` would win at `index`, without storing it.
    #[inline(always)]
    pub fn passes(&self, index: usize, depth: f32) -> bool {
        self.values.get(index).is_some_and(|stored| depth > *stored)
    }

    /// Stores `depth` and returns true iff it is strictly greater than what is
    /// already there. On a tie the earlier fragment stays.
    #[inline(always)]
    pub fn test_and_write(&mut self, index: usize, depth: f32) -> bool {
        match self.values.get_mut(index) {
            Some(stored) if depth > *stored => {
                *stored = depth;
                true
            }
            _ => false,
        }
    }
}
