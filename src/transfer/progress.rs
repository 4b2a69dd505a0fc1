//! Human-readable progress lines on stdout.

/// Prints operator-facing progress. Logs go through `tracing` separately.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    enabled: bool,
}

impl Progress {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn silent() -> Self {
        Self { enabled: false }
    }

    pub fn step(&self, message: impl AsRef<str>) {
        if self.enabled {
            println!("{}", message.as_ref());
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(true)
    }
}
