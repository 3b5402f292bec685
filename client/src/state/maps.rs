#[cfg(test)]
#[path = "maps_test.rs"]
mod maps_test;

/// Loading progress of the Google Maps script.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapsLoadState {
    #[default]
    Loading,
    Ready,
    /// The script failed to load. There is no retry; the spinner stays up.
    Failed,
}

impl MapsLoadState {
    #[must_use]
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }

    /// Whether the loading indicator should cover the map area.
    #[must_use]
    pub fn shows_spinner(self) -> bool {
        !self.is_ready()
    }
}
