//! Bracketed rendering of finished sequences, e.g. `[ 1, 2, 3 ]`.

use std::fmt;

use crate::Sequence;

#[derive(Clone, Copy, Debug)]
pub struct Bracketed<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Bracketed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x}")?;
        }
        f.write_str(" ]")
    }
}

pub fn bracketed<S>(seq: &S) -> Bracketed<'_, S::Item>
where
    S: Sequence + ?Sized,
{
    Bracketed(seq.as_slice())
}

#[cfg(test)]
mod tests {
    use arrayvec::ArrayVec;

    use super::*;

    #[test]
    fn renders_brackets_and_commas() {
        assert_eq!(bracketed(&vec![1, 2, 3]).to_string(), "[ 1, 2, 3 ]");
        assert_eq!(bracketed(&["x"]).to_string(), "[ x ]");

        let empty: Vec<i32> = Vec::new();
        assert_eq!(bracketed(&empty).to_string(), "[  ]");
    }

    #[test]
    fn renders_only_live_prefix() {
        let mut buf: ArrayVec<u8, 16> = ArrayVec::new();
        buf.extend([9, 4]);
        assert_eq!(bracketed(&buf).to_string(), "[ 9, 4 ]");
    }
}
