/// Short-lived "firing" flag used for the recoil pulse.
///
/// Each pull pushes the reset deadline forward; the most recent pull wins.
#[derive(Clone, Debug)]
pub struct Trigger {
    duration_ms: f64,
    release_at_ms: Option<f64>,
}

impl Trigger {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            release_at_ms: None,
        }
    }

    pub fn pull(&mut self, now_ms: f64) {
        self.release_at_ms = Some(now_ms + self.duration_ms);
    }

    /// Clears the flag once its deadline has passed.
    pub fn tick(&mut self, now_ms: f64) {
        if matches!(self.release_at_ms, Some(t) if now_ms >= t) {
            self.release_at_ms = None;
        }
    }

    #[inline]
    pub fn is_firing(&self) -> bool {
        self.release_at_ms.is_some()
    }
}
