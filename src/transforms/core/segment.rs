//! Contiguous slices of a flat unconstrained vector.
//!
//! Composite transforms partition their flat input into one slice per
//! sub-transform, in declared order, with no gaps or overlaps. A
//! [`Segment`] is that partition cursor made explicit: it is passed and
//! returned by value, so no hidden index is threaded through recursive
//! calls.
use ndarray::{ArrayView1, ArrayViewMut1, s};

/// Half-open range `[start, start + len)` of a flat vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub len: usize,
}

impl Segment {
    /// Empty segment at offset 0, before the first slice.
    pub fn origin() -> Segment {
        Segment { start: 0, len: 0 }
    }

    /// One past the last index covered by this segment.
    #[inline]
    pub fn end(self) -> usize {
        self.start + self.len
    }

    /// The segment of length `len` that immediately follows `self`.
    #[inline]
    pub fn next(self, len: usize) -> Segment {
        Segment { start: self.end(), len }
    }

    #[inline]
    pub fn view<'a>(self, x: ArrayView1<'a, f64>) -> ArrayView1<'a, f64> {
        x.slice_move(s![self.start..self.end()])
    }

    #[inline]
    pub fn view_mut<'a>(self, out: &'a mut ArrayViewMut1<'_, f64>) -> ArrayViewMut1<'a, f64> {
        out.slice_mut(s![self.start..self.end()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Verify that chained segments tile a vector without gaps or overlaps.
    //
    // Given
    // -----
    // - A length-6 vector split into lengths 2, 0, 3, 1.
    //
    // Expect
    // ------
    // - Views cover consecutive elements; the final end equals 6.
    fn chained_segments_tile_the_input() {
        let x = array![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let view = x.view();

        let a = Segment::origin().next(2);
        let b = a.next(0);
        let c = b.next(3);
        let d = c.next(1);

        assert_eq!(a.view(view), array![0.0, 1.0]);
        assert_eq!(b.view(view).len(), 0);
        assert_eq!(c.view(view), array![2.0, 3.0, 4.0]);
        assert_eq!(d.view(view), array![5.0]);
        assert_eq!(d.end(), x.len());
    }
}
