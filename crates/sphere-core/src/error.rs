use thiserror::Error;

/// Errors raised by the sphere core.
///
/// Configuration variants are reported before anything is built. The panel
/// variants signal a broken invariant: a handle outlived its `BillboardSet`
/// generation or never belonged to it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SphereError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("panel {index} belongs to generation {generation}, current generation is {current}")]
    StalePanel {
        index: usize,
        generation: u32,
        current: u32,
    },
    #[error("panel index {index} out of range for {len} panels")]
    UnknownPanel { index: usize, len: usize },
}
