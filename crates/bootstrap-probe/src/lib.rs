//! Dependency discovery for the bootstrap toolkit
//!
//! Locates the external dependencies a native build needs: the compiler
//! toolset, the platform SDK, the graphics SDK, and the external build tool.
//! Every discovery function is pure over an explicit [`EnvSnapshot`] and a
//! [`FileSystem`] capability, so fabricated machines can be probed in tests.

pub mod build_tool;
pub mod env;
pub mod error;
pub mod fs;
pub mod graphics_sdk;
pub mod platform_sdk;
pub mod probe;
pub mod toolchain;

pub use build_tool::{BUILD_TOOL_EXECUTABLE, BuildToolInstall, find_build_tool};
pub use env::EnvSnapshot;
pub use error::{Error, Result};
pub use fs::{FileSystem, MemoryFileSystem, NativeFileSystem};
pub use graphics_sdk::{GRAPHICS_SDK_ENV, GRAPHICS_SDK_ENV_ALT, GraphicsSdkInstall, find_graphics_sdk};
pub use platform_sdk::{PLATFORM_SDK_ENV, PlatformSdkInstall, find_platform_sdk};
pub use probe::Probe;
pub use toolchain::{TOOLCHAIN_TOOLS_ENV, ToolchainInstall, find_toolchain};
