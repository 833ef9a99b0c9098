use serde::{Serialize, Deserialize};

/// How samples outside of the image are read during convolution.
#[derive(Debug,Copy,Clone,PartialEq,Eq,Default,Serialize,Deserialize)]
pub enum BorderMode {
    /// `aaa|abcd|ddd`
    #[default]
    Replicate,
    /// `cb|abcd|cb`, mirrors around the edge pixel without repeating it
    Reflect101
}

impl BorderMode {
    pub fn map_index(&self, i: isize, len: usize) -> usize {
        debug_assert!(len > 0);
        match self {
            BorderMode::Replicate => {
                if i < 0 {
                    0
                } else {
                    (i as usize).min(len - 1)
                }
            },
            BorderMode::Reflect101 => {
                if len == 1 {
                    return 0;
                }

                let period = (2 * len - 2) as isize;
                let r = i.rem_euclid(period) as usize;
                if r < len {
                    r
                } else {
                    (2 * len - 2) - r
                }
            }
        }
    }

    /// Smallest kernel offset that reads the same sample as `offset` for every position of a row of `len` pixels.
    ///
    /// Taps with equal folded offsets can share one kernel weight, which bounds the kernel width by the row length.
    pub fn fold_offset(&self, offset: isize, len: usize) -> isize {
        debug_assert!(len > 0);
        match self {
            BorderMode::Replicate => {
                let len = len as isize;
                offset.clamp(-len, len)
            },
            BorderMode::Reflect101 => {
                if len == 1 {
                    return 0;
                }

                let period = (2 * len - 2) as isize;
                let r = offset.rem_euclid(period);
                if r < len as isize { r } else { r - period }
            }
        }
    }
}
