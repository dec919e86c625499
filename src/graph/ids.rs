use std::fmt;

use crate::graph::index_vec::Idx;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, stringify!($name))?;
                f.debug_tuple("").field(&self.0).finish()
            }
        }

        impl Idx for $name {
            fn index(self) -> usize {
                self.0 as usize
            }

            fn from_usize(idx: usize) -> Self {
                Self(idx as u32)
            }
        }
    };
}

define_id!(VertexId);
define_id!(EdgeId);
define_id!(ComponentId);

impl VertexId {
    /// Converts an external 1-based vertex label into an index.
    ///
    /// Returns `None` for `0` and for anything past `vertex_count`.
    pub fn from_label(label: i64, vertex_count: usize) -> Option<Self> {
        if label < 1 || label as u64 > vertex_count as u64 {
            return None;
        }
        Some(Self::from_usize(label as usize - 1))
    }

    /// The 1-based label used in input and output payloads.
    pub fn label(self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
