use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{NumCast, ToPrimitive, Zero};

use crate::KernelError;

/// Fixed-size rectangular grid of weights with a designated center cell.
///
/// Cells are stored in a single row-major buffer and are always
/// addressed as `(row, col)`, where `row` indexes the height
/// and `col` indexes the width of the kernel.
///
/// # Panics
///
/// Indexing with `kernel[(row, col)]` panics if the cell is out of
/// the kernel boundaries. Use [Kernel::get] or [Kernel::set] to get
/// `None` or an error instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "KernelData<T>")
)]
pub struct Kernel<T> {
    width: u32,
    height: u32,
    center_x: u32,
    center_y: u32,
    data: Vec<T>,
}

impl<T: Zero + Clone> Kernel<T> {
    /// Creates a square kernel with odd `size` and the center
    /// in the middle cell. All cells are set to zero.
    pub fn new_square(size: u32) -> Result<Self, KernelError> {
        if size == 0 {
            return Err(KernelError::NonPositiveSize);
        }
        if size % 2 == 0 {
            return Err(KernelError::EvenSize);
        }
        let center = size / 2;
        Self::new(size, size, center, center)
    }

    /// Creates a kernel of custom width and height with the given center.
    /// All cells are set to zero.
    pub fn new(
        width: u32,
        height: u32,
        center_x: u32,
        center_y: u32,
    ) -> Result<Self, KernelError> {
        check_geometry(width, height, center_x, center_y)?;
        let cells_count = cells_count(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(cells_count)
            .map_err(|_| KernelError::KernelIsTooLarge)?;
        data.resize(cells_count, T::zero());
        Ok(Self {
            width,
            height,
            center_x,
            center_y,
            data,
        })
    }
}

impl<T> Kernel<T> {
    /// Creates a kernel from row-major `data`.
    ///
    /// Length of `data` must be equal to `width * height`.
    pub fn from_vec(
        width: u32,
        height: u32,
        center_x: u32,
        center_y: u32,
        data: Vec<T>,
    ) -> Result<Self, KernelError> {
        check_geometry(width, height, center_x, center_y)?;
        if data.len() != cells_count(width, height)? {
            return Err(KernelError::InvalidDataSize);
        }
        Ok(Self {
            width,
            height,
            center_x,
            center_y,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// X coordinate (column) of the center cell.
    pub fn center_x(&self) -> u32 {
        self.center_x
    }

    /// Y coordinate (row) of the center cell.
    pub fn center_y(&self) -> u32 {
        self.center_y
    }

    /// Returns the center as `(x, y)`.
    #[inline]
    pub fn center(&self) -> (u32, u32) {
        (self.center_x, self.center_y)
    }

    /// Count of cells in the kernel (`width * height`).
    #[inline]
    pub fn cells_count(&self) -> usize {
        self.data.len()
    }

    /// Row-major cells of the kernel.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    fn offset(&self, row: u32, col: u32) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row as usize * self.width as usize + col as usize)
        } else {
            None
        }
    }

    pub fn get(&self, row: u32, col: u32) -> Option<&T> {
        let offset = self.offset(row, col)?;
        self.data.get(offset)
    }

    pub fn get_mut(&mut self, row: u32, col: u32) -> Option<&mut T> {
        let offset = self.offset(row, col)?;
        self.data.get_mut(offset)
    }

    pub fn set(&mut self, row: u32, col: u32, value: T) -> Result<(), KernelError> {
        let cell = self
            .get_mut(row, col)
            .ok_or(KernelError::CellIsOutOfBounds)?;
        *cell = value;
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.width as usize)
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.data.chunks_exact_mut(self.width as usize)
    }

    /// Creates a new kernel with the same geometry by applying `f`
    /// to every cell.
    pub fn map<U, F>(&self, f: F) -> Kernel<U>
    where
        F: FnMut(&T) -> U,
    {
        Kernel {
            width: self.width,
            height: self.height,
            center_x: self.center_x,
            center_y: self.center_y,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: ToPrimitive + Copy> Kernel<T> {
    /// Converts every cell into `U` with checking that the value
    /// is representable by the target type.
    ///
    /// Float-to-integer conversion truncates toward zero; NaN and
    /// out-of-range values return [KernelError::ValueIsNotRepresentable]
    /// with position of the first such cell.
    pub fn try_cast<U: NumCast>(&self) -> Result<Kernel<U>, KernelError> {
        let width = self.width as usize;
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                <U as NumCast>::from(v).ok_or(KernelError::ValueIsNotRepresentable {
                    row: (i / width) as u32,
                    col: (i % width) as u32,
                })
            })
            .collect::<Result<Vec<U>, _>>()?;
        Ok(Kernel {
            width: self.width,
            height: self.height,
            center_x: self.center_x,
            center_y: self.center_y,
            data,
        })
    }
}

fn cells_count(width: u32, height: u32) -> Result<usize, KernelError> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(KernelError::KernelIsTooLarge)
}

fn check_geometry(
    width: u32,
    height: u32,
    center_x: u32,
    center_y: u32,
) -> Result<(), KernelError> {
    if width == 0 {
        return Err(KernelError::NonPositiveWidth);
    }
    if height == 0 {
        return Err(KernelError::NonPositiveHeight);
    }
    if center_x >= width {
        return Err(KernelError::CenterXIsOutOfBounds);
    }
    if center_y >= height {
        return Err(KernelError::CenterYIsOutOfBounds);
    }
    Ok(())
}

impl<T> Index<(u32, u32)> for Kernel<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (u32, u32)) -> &T {
        match self.offset(row, col) {
            Some(offset) => &self.data[offset],
            None => panic!(
                "cell ({row}, {col}) is out of the kernel boundaries {}x{}",
                self.width, self.height
            ),
        }
    }
}

impl<T> IndexMut<(u32, u32)> for Kernel<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (u32, u32)) -> &mut T {
        match self.offset(row, col) {
            Some(offset) => &mut self.data[offset],
            None => panic!(
                "cell ({row}, {col}) is out of the kernel boundaries {}x{}",
                self.width, self.height
            ),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Kernel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, value) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct KernelData<T> {
    width: u32,
    height: u32,
    center_x: u32,
    center_y: u32,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<KernelData<T>> for Kernel<T> {
    type Error = KernelError;

    fn try_from(raw: KernelData<T>) -> Result<Self, Self::Error> {
        Self::from_vec(raw.width, raw.height, raw.center_x, raw.center_y, raw.data)
    }
}
