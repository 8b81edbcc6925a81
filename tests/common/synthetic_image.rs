/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = x / cell;
            let cy = y / cell;
            let val = if (cx + cy) & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}

/// Image split into four equal quadrants with the given values
/// (top-left, top-right, bottom-left, bottom-right).
pub fn quadrant_mosaic_u8(size: usize, values: [u8; 4]) -> Vec<u8> {
    assert!(size % 2 == 0, "mosaic size must be even");
    let half = size / 2;
    let mut img = vec![0u8; size * size];
    for y in 0..size {
        for x in 0..size {
            let q = (y / half) * 2 + x / half;
            img[y * size + x] = values[q];
        }
    }
    img
}

/// Deterministic pseudo-random texture (xorshift), reproducible across runs.
pub fn noise_u8(width: usize, height: usize, seed: u32) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}
