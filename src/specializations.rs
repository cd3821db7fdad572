use crate::Kernel;

/// Kernel with integer weights.
pub type KernelInt = Kernel<i32>;

/// Kernel with floating-point weights.
pub type KernelFloat = Kernel<f32>;

impl Kernel<i32> {
    /// Converts all cells into `f32`.
    ///
    /// Values with magnitude up to 2^24 are converted exactly;
    /// larger values are rounded to the nearest representable `f32`.
    pub fn to_float(&self) -> KernelFloat {
        self.map(|&v| v as f32)
    }
}

impl Kernel<f32> {
    /// Converts all cells into `i32` by truncating them toward zero.
    ///
    /// The fractional part of each value is lost. NaN becomes `0`,
    /// values outside of `i32` range are saturated to `i32::MIN` or
    /// `i32::MAX`. Use [Kernel::try_cast] to get an error instead.
    pub fn to_int_truncated(&self) -> KernelInt {
        self.map(|&v| v as i32)
    }
}

impl From<&KernelInt> for KernelFloat {
    fn from(kernel: &KernelInt) -> Self {
        kernel.to_float()
    }
}

impl From<KernelInt> for KernelFloat {
    fn from(kernel: KernelInt) -> Self {
        kernel.to_float()
    }
}
