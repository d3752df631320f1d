/// Orbit frames for the indeterminate wait animation. Purely decorative;
/// no behavioral contract beyond cycling.
const ORBIT_FRAMES: [&str; 8] = [
    "●  ·    ", " ●   ·  ", "  ●    ·", "   ●  · ", "  · ●   ", " ·   ●  ", "·     ● ", "  ·    ●",
];

#[derive(Debug, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame; called once per draw-loop tick.
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % ORBIT_FRAMES.len();
    }

    pub fn frame(&self) -> &'static str {
        ORBIT_FRAMES[self.frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles_through_all_frames() {
        let mut spinner = Spinner::new();
        let first = spinner.frame();
        let mut seen = vec![first];
        for _ in 0..ORBIT_FRAMES.len() - 1 {
            spinner.tick();
            seen.push(spinner.frame());
        }
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), ORBIT_FRAMES.len());

        spinner.tick();
        assert_eq!(spinner.frame(), first);
    }
}
