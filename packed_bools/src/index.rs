/// Location of a logical bit inside the byte buffer.
///
/// Bit `i` lives in byte `i >> 3` at position `i & 7`, least-significant
/// bit first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct BitPos {
    pub byte: usize,
    pub mask: u8,
}

impl From<usize> for BitPos {
    #[inline(always)]
    fn from(index: usize) -> Self {
        BitPos {
            byte: index >> 3,
            mask: 1 << (index & 7),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lsb_first_addressing() {
        assert_eq!(BitPos::from(0), BitPos { byte: 0, mask: 0b0000_0001 });
        assert_eq!(BitPos::from(7), BitPos { byte: 0, mask: 0b1000_0000 });
        assert_eq!(BitPos::from(8), BitPos { byte: 1, mask: 0b0000_0001 });
        assert_eq!(BitPos::from(21), BitPos { byte: 2, mask: 0b0010_0000 });
    }
}
