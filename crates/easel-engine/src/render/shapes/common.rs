//! Shared GPU types and utilities for shape renderers.

use bytemuck::{Pod, Zeroable};

use crate::coords::Viewport;

// ── blend ─────────────────────────────────────────────────────────────────

/// Source-over for premultiplied colors.
pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let over = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: over, alpha: over }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

impl ViewportUniform {
    pub(super) fn new(viewport: Viewport) -> Self {
        Self {
            viewport: [viewport.width.max(1.0), viewport.height.max(1.0)],
            _pad: [0.0; 2],
        }
    }
}

/// Returns the `wgpu` minimum binding size for the viewport uniform buffer.
pub(super) fn viewport_ubo_min_binding_size() -> std::num::NonZeroU64 {
    const SIZE: std::num::NonZeroU64 =
        match std::num::NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64) {
            Some(size) => size,
            None => panic!("ViewportUniform is zero-sized"),
        };
    SIZE
}

// ── buffer sizing ─────────────────────────────────────────────────────────

/// Capacity (in elements) to allocate for `required` elements.
///
/// Grows in powers of two so a slowly growing scene does not reallocate every frame.
pub(super) fn grow_capacity(required: usize, minimum: usize) -> usize {
    required.next_power_of_two().max(minimum)
}
