use crate::foundation::core::HoldMs;

/// Per-frame display durations for the assembled animation.
///
/// The first frame lingers so the prompt can be read, the last one holds the final summary, and
/// everything in between ticks at a steady pace. A one-frame animation is both first and last;
/// the last-frame hold applies to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HoldPolicy {
    /// Hold for frame 0.
    pub first: HoldMs,
    /// Hold for every frame strictly between the first and the last.
    pub interior: HoldMs,
    /// Hold for the final frame.
    pub last: HoldMs,
}

impl Default for HoldPolicy {
    fn default() -> Self {
        Self {
            first: HoldMs(900),
            interior: HoldMs(520),
            last: HoldMs(1700),
        }
    }
}

impl HoldPolicy {
    /// Hold for frame `index` of an animation with `frame_count` frames.
    pub fn hold_for(&self, index: usize, frame_count: usize) -> HoldMs {
        if index + 1 == frame_count {
            self.last
        } else if index == 0 {
            self.first
        } else {
            self.interior
        }
    }

    /// Holds for every frame of an animation with `frame_count` frames.
    pub fn holds(&self, frame_count: usize) -> Vec<HoldMs> {
        (0..frame_count)
            .map(|i| self.hold_for(i, frame_count))
            .collect()
    }
}
