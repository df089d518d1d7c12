/// Geometry of a single coil loop. Fields default to zero until the
/// document supplies them; a re-supplied field overwrites silently.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Loop {
    pub radius: f64,
    pub x_center: f64,
    pub y_center: f64,
}

/// The whole coil configuration record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Coil {
    pub current: u32,
    pub frequency: f64,
    pub loops: Vec<Loop>,
}

impl Coil {
    /// An empty record whose loop storage is pre-sized to hold
    /// `capacity` entries. The interpreter pushes zeroed entries as it
    /// observes them, never past `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            current: 0,
            frequency: 0.0,
            loops: Vec::with_capacity(capacity),
        }
    }
}
