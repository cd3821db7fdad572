#[derive(Copy, Clone, Debug, clap::Subcommand)]
pub enum Shape {
    /// Square kernel of odd size with the center in the middle cell
    Square {
        /// Width and height of the kernel
        size: u32,
    },
    /// Rectangular kernel with explicitly given center
    Rect {
        width: u32,
        height: u32,
        center_x: u32,
        center_y: u32,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Kind {
    /// Integer cells (`i32`)
    Int,
    /// Floating-point cells (`f32`)
    Float,
}

impl Kind {
    /// Kind of cells after conversion.
    pub fn converted(self) -> Self {
        match self {
            Self::Int => Self::Float,
            Self::Float => Self::Int,
        }
    }
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum Format {
    /// One line per row, cells separated by spaces
    Text,
    /// JSON document with geometry and row-major cells
    Json,
}
