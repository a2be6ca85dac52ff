pub use candle_core::Device;
use clap::ValueEnum;

use crate::error::Result;

/// Which compute back-end to run inference on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeviceKind {
    /// Host CPU.
    Cpu,
    /// First CUDA device.
    Gpu,
    /// First Metal device.
    Xpu,
}

impl DeviceKind {
    /// Acquires the selected device.
    ///
    /// Fails when the binary was built without the matching back-end
    /// feature (`cuda`, `metal`) or the hardware is absent.
    pub fn acquire(self) -> Result<Device> {
        let device = match self {
            Self::Cpu => Device::Cpu,
            Self::Gpu => Device::new_cuda(0)?,
            Self::Xpu => Device::new_metal(0)?,
        };
        Ok(device)
    }
}
