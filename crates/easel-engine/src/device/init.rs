/// Initialization parameters for the GPU layer.
///
/// Add configuration flags only when a concrete platform or backend
/// requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// Colors are stored linear, so an sRGB target is needed for correct output.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// FIFO is broadly supported and idles cleanly between on-demand redraws.
    pub present_mode: wgpu::PresentMode,

    /// Adapter selection hint. A static picture does not need the discrete GPU.
    pub power_preference: wgpu::PowerPreference,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface (a hint).
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            power_preference: wgpu::PowerPreference::LowPower,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}
