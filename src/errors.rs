use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    #[error("Size must be a positive odd number")]
    NonPositiveSize,
    #[error("Size of a square kernel must be an odd number")]
    EvenSize,
    #[error("Width of the kernel must be a positive number")]
    NonPositiveWidth,
    #[error("Height of the kernel must be a positive number")]
    NonPositiveHeight,
    #[error("X coordinate of the center must be >= 0 and < width of the kernel")]
    CenterXIsOutOfBounds,
    #[error("Y coordinate of the center must be >= 0 and < height of the kernel")]
    CenterYIsOutOfBounds,
    #[error("Size of data buffer don't match to width * height of the kernel")]
    InvalidDataSize,
    #[error("Count of cells of the kernel is too large to be allocated")]
    KernelIsTooLarge,
    #[error("Position of the cell is out of the kernel boundaries")]
    CellIsOutOfBounds,
    #[error("Value of the cell ({row}, {col}) can't be represented by the target type")]
    ValueIsNotRepresentable { row: u32, col: u32 },
}

impl KernelError {
    /// Returns `true` if the error was caused by invalid arguments
    /// given to one of the kernel constructors.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NonPositiveSize
                | Self::EvenSize
                | Self::NonPositiveWidth
                | Self::NonPositiveHeight
                | Self::CenterXIsOutOfBounds
                | Self::CenterYIsOutOfBounds
                | Self::InvalidDataSize
        )
    }
}
