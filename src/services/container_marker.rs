use std::fs;
use std::path::PathBuf;

use crate::ports::ContainerCheck;

/// Marker file systemd maintains inside containers.
pub const CONTAINER_MARKER: &str = "/run/systemd/container";

/// Content prefix the marker carries under docker.
const CONTAINER_TOKEN: &str = "docker";

/// Container detection backed by a marker file on the filesystem.
///
/// Passes iff the marker exists and its content starts with `docker`.
/// A missing or unreadable marker reads as "on the host".
#[derive(Debug, Clone)]
pub struct MarkerFileContainerCheck {
    marker: PathBuf,
}

impl MarkerFileContainerCheck {
    /// Check against an explicit marker path.
    pub fn new(marker: PathBuf) -> Self {
        Self { marker }
    }

    /// Check against the standard systemd marker location.
    pub fn systemd() -> Self {
        Self::new(PathBuf::from(CONTAINER_MARKER))
    }
}

impl ContainerCheck for MarkerFileContainerCheck {
    fn inside_container(&self) -> bool {
        match fs::read_to_string(&self.marker) {
            Ok(content) => content.starts_with(CONTAINER_TOKEN),
            Err(_) => false,
        }
    }
}
