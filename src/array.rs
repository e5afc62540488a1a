use std::ops;

use crate::dims::Dims;

/// Row-major 2D buffer.
#[derive(Debug, Clone)]
pub struct Array2D<T> {
    buf: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2D<T> {
    /// Builds the array from a generator called once per position, in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(Dims) -> T) -> Self {
        let buf = Dims::iter_fill(Dims::ZERO, Dims::from((rows, cols)))
            .map(&mut f)
            .collect();
        Self { buf, rows, cols }
    }

    pub fn size(&self) -> Dims {
        Dims(self.rows as i32, self.cols as i32)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        if !pos.all_non_negative() {
            return None;
        }

        let Dims(row, col) = pos;
        let (row, col) = (row as usize, col as usize);

        if row >= self.rows || col >= self.cols {
            return None;
        }

        Some(row * self.cols + col)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let row = idx / self.cols;
        let col = idx % self.cols;

        Some(Dims(row as i32, col as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index).expect("Index out of bounds")
    }
}

impl<T> ops::Index<usize> for Array2D<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.buf[index]
    }
}

impl<T> ops::IndexMut<usize> for Array2D<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.buf[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_round_trip_through_indices() {
        let array = Array2D::from_fn(3, 5, |pos| pos);

        for (i, pos) in array.iter_pos().enumerate() {
            assert_eq!(array.dim_to_idx(pos), Some(i));
            assert_eq!(array[i], pos);
        }
        assert_eq!(array.len(), 15);
    }

    #[test]
    fn out_of_bounds() {
        let array = Array2D::from_fn(2, 2, |_| 0u8);

        assert_eq!(array.get(Dims(-1, 0)), None);
        assert_eq!(array.get(Dims(0, 2)), None);
        assert_eq!(array.get(Dims(2, 0)), None);
        assert_eq!(array.idx_to_dim(4), None);
    }
}
