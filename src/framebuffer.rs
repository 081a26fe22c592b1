use crate::*;

/// Row-major grid of final pixel colors; row 0 is the top of the screen.
pub struct Framebuffer {
    w: usize,
    h: usize,
    buf: Vec<RGB>,
}

impl Framebuffer {
    pub fn new(w: usize, h: usize) -> Self {
        Framebuffer {
            w,
            h,
            buf: vec![RGB::black(); w * h],
        }
    }

    pub fn at(&self, row: usize, col: usize) -> &RGB {
        &self.buf[row * self.w + col]
    }

    pub fn pixels(&self) -> &[RGB] {
        &self.buf[..]
    }

    /// Disjoint mutable rows, top to bottom.
    pub fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, RGB> {
        self.buf.chunks_mut(self.w.max(1))
    }

    pub fn w(&self) -> usize {
        self.w
    }
    pub fn h(&self) -> usize {
        self.h
    }
}
