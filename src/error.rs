//! Error types for stardrift.
//!
//! Nothing in the core should crash the process: configuration problems are
//! reported before anything is allocated, duplicate initialization is
//! rejected, and missing system resources (GPU, window) surface as errors
//! the caller can print and exit on.

use std::fmt;

/// Errors raised while validating a [`crate::GalaxyConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The combined particle population exceeds the allocation cap.
    TooManyParticles { requested: u64, max: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooManyParticles { requested, max } => write!(
                f,
                "Requested {} particles, but at most {} are supported",
                requested, max
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running a galaxy session.
#[derive(Debug)]
pub enum GalaxyError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// The particle field was built twice for the same session.
    ///
    /// Building again would double-allocate the attribute buffers, so the
    /// second request is rejected instead of silently corrupting them.
    DuplicateInitialization,
    /// A non-essential system resource is unavailable.
    ResourceUnavailable(String),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
}

impl fmt::Display for GalaxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalaxyError::Config(e) => write!(f, "Invalid configuration: {}", e),
            GalaxyError::DuplicateInitialization => {
                write!(f, "Galaxy field already built for this session")
            }
            GalaxyError::ResourceUnavailable(what) => {
                write!(f, "Resource unavailable: {}", what)
            }
            GalaxyError::Gpu(e) => write!(f, "GPU error: {}", e),
            GalaxyError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            GalaxyError::Window(e) => write!(f, "Failed to create window: {}", e),
        }
    }
}

impl std::error::Error for GalaxyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GalaxyError::Config(e) => Some(e),
            GalaxyError::Gpu(e) => Some(e),
            GalaxyError::EventLoop(e) => Some(e),
            GalaxyError::Window(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for GalaxyError {
    fn from(e: ConfigError) -> Self {
        GalaxyError::Config(e)
    }
}

impl From<GpuError> for GalaxyError {
    fn from(e: GpuError) -> Self {
        GalaxyError::Gpu(e)
    }
}

impl From<winit::error::EventLoopError> for GalaxyError {
    fn from(e: winit::error::EventLoopError) -> Self {
        GalaxyError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for GalaxyError {
    fn from(e: winit::error::OsError) -> Self {
        GalaxyError::Window(e)
    }
}
