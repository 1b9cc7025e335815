//! Fixed-window moving average.
//!
//! Every slot starts at `0.0` and the mean is always taken over all `N`
//! slots, so until the window has been filled once the average is biased
//! towards zero.  [`RingBuffer::is_primed`] reports when that cold-start
//! phase is over.

/// Circular buffer of the last `N` samples with a running mean.
#[derive(Debug, Clone)]
pub struct RingBuffer<const N: usize> {
    slots: [f32; N],
    cursor: usize,
    filled: usize,
}

impl<const N: usize> RingBuffer<N> {
    pub const CAPACITY: usize = N;

    pub const fn new() -> Self {
        assert!(N > 0, "window must hold at least one sample");
        Self {
            slots: [0.0; N],
            cursor: 0,
            filled: 0,
        }
    }

    /// Overwrite the oldest slot with `sample` and return the new mean.
    pub fn push(&mut self, sample: f32) -> f32 {
        self.slots[self.cursor] = sample;
        self.cursor = (self.cursor + 1) % N;
        if self.filled < N {
            self.filled += 1;
        }
        self.mean()
    }

    /// Mean over all `N` slots, including never-written zeros.
    pub fn mean(&self) -> f32 {
        self.slots.iter().sum::<f32>() / N as f32
    }

    /// Number of slots written since construction (saturates at `N`).
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// `true` once every slot holds a real sample.
    pub fn is_primed(&self) -> bool {
        self.filled == N
    }

    /// Index the next sample will be written to.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<const N: usize> Default for RingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
