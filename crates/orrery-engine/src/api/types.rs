use bytemuck::{Pod, Zeroable};

/// An event communicated from the visualization to the UI layer via a flat
/// buffer. Generic container: `kind` identifies the event, `a/b/c` carry
/// payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SceneEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl SceneEvent {
    pub const FLOATS: usize = 4;
}
