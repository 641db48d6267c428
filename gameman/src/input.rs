//! # Gamepad Input
//!
//! The gamepad is a 16-bit shift register read over SPI once per frame. A set bit
//! means the button is held down; an all-zero word means nothing is pressed.
//!
//! Samples go into an [`InputHistory`], a short ring of raw words. Game logic
//! asks it about the newest sample only, comparing against the one before it to
//! find edges:
//!
//! ```ignore
//! history.push(pad.sample());
//!
//! if history.just_pressed(Buttons::A) {
//!     // fires once per press, no matter how long A is held
//! }
//! ```

bitflags::bitflags! {
    /// Button bits of one gamepad sample.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Buttons: u16 {
        const RIGHT  = 0b0000_0000_0000_0001;
        const LEFT   = 0b0000_0000_0000_0010;
        const DOWN   = 0b0000_0000_0000_0100;
        const UP     = 0b0000_0000_0000_1000;
        const A      = 0b0000_0000_0001_0000;
        const B      = 0b0000_0000_0010_0000;
        const START  = 0b0000_0000_0100_0000;
        const SELECT = 0b0000_0000_1000_0000;
    }
}

impl Buttons {
    /// Sentinel for "no buttons down".
    pub const NONE: Buttons = Buttons::empty();

    pub const DPAD: Buttons = Buttons::UP
        .union(Buttons::DOWN)
        .union(Buttons::LEFT)
        .union(Buttons::RIGHT);

    /// Decode a raw shift-register word. Unwired bits are dropped.
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Buttons::from_bits_truncate(raw)
    }
}

/// Anything that can produce one gamepad sample per frame.
///
/// On the board this is a blocking SPI transfer; it returns once the word is in.
pub trait InputSource {
    fn sample(&mut self) -> Buttons;
}

/// Number of samples kept by default.
pub const INPUT_HISTORY_DEPTH: usize = 20;

/// Rolling history of gamepad samples.
#[derive(Debug, Clone)]
pub struct InputHistory<const DEPTH: usize = INPUT_HISTORY_DEPTH> {
    samples: [Buttons; DEPTH],
    newest: usize,
}

impl<const DEPTH: usize> InputHistory<DEPTH> {
    pub const fn new() -> Self {
        assert!(DEPTH >= 2, "edge detection needs two samples");
        Self {
            samples: [Buttons::NONE; DEPTH],
            newest: 0,
        }
    }

    /// Record a new sample, overwriting the oldest one.
    pub fn push(&mut self, sample: Buttons) {
        self.newest = (self.newest + 1) % DEPTH;
        self.samples[self.newest] = sample;
    }

    /// Read one sample from `source` and record it.
    pub fn sample_from(&mut self, source: &mut impl InputSource) -> Buttons {
        let sample = source.sample();
        self.push(sample);
        sample
    }

    /// Forget everything, as if no button had ever been pressed.
    pub fn clear(&mut self) {
        self.samples = [Buttons::NONE; DEPTH];
        self.newest = 0;
    }

    #[inline]
    pub fn current(&self) -> Buttons {
        self.samples[self.newest]
    }

    #[inline]
    pub fn previous(&self) -> Buttons {
        self.get(1)
    }

    /// The sample `age` frames back; 0 is the newest.
    pub fn get(&self, age: usize) -> Buttons {
        let age = age % DEPTH;
        self.samples[(self.newest + DEPTH - age) % DEPTH]
    }

    #[inline]
    pub fn pressed(&self, button: Buttons) -> bool {
        self.current().contains(button)
    }

    #[inline]
    pub fn any_pressed(&self) -> bool {
        self.current() != Buttons::NONE
    }

    /// True only on the first sample in which `button` is down.
    #[inline]
    pub fn just_pressed(&self, button: Buttons) -> bool {
        let changed = self.current() ^ self.previous();
        self.pressed(button) && changed.contains(button)
    }

    /// True only on the first sample in which `button` is back up.
    #[inline]
    pub fn just_released(&self, button: Buttons) -> bool {
        let changed = self.current() ^ self.previous();
        !self.current().intersects(button) && changed.contains(button)
    }
}

impl<const DEPTH: usize> Default for InputHistory<DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_button_fires_one_edge() {
        let mut history: InputHistory = InputHistory::new();
        let mut edges = 0;
        for _ in 0..3 {
            history.push(Buttons::A);
            if history.just_pressed(Buttons::A) {
                edges += 1;
            }
        }
        assert_eq!(edges, 1);
        assert!(history.pressed(Buttons::A));
    }

    #[test]
    fn edge_is_per_button() {
        let mut history: InputHistory = InputHistory::new();
        history.push(Buttons::DOWN);
        history.push(Buttons::DOWN | Buttons::A);

        // DOWN is held over, A is new.
        assert!(!history.just_pressed(Buttons::DOWN));
        assert!(history.just_pressed(Buttons::A));
    }

    #[test]
    fn release_edge() {
        let mut history: InputHistory = InputHistory::new();
        history.push(Buttons::START);
        history.push(Buttons::NONE);
        assert!(history.just_released(Buttons::START));
        history.push(Buttons::NONE);
        assert!(!history.just_released(Buttons::START));
    }

    #[test]
    fn ring_wraps() {
        let mut history: InputHistory<4> = InputHistory::new();
        for raw in 1..=6u16 {
            history.push(Buttons::from_raw(raw));
        }
        assert_eq!(history.current(), Buttons::from_raw(6));
        assert_eq!(history.previous(), Buttons::from_raw(5));
        assert_eq!(history.get(3), Buttons::from_raw(3));
    }

    #[test]
    fn unwired_bits_are_dropped() {
        assert_eq!(Buttons::from_raw(0xFF00), Buttons::NONE);
        assert_eq!(Buttons::from_raw(0x0011), Buttons::RIGHT | Buttons::A);
    }
}
