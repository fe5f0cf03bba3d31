// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Comparable sort keys.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// A value that can be compared as a sort key.
///
/// Unlike [`Ord`], this is implemented for `f32`/`f64`, so timestamps and metric values can be
/// used directly. Floats compare numerically with `-0.0 == 0.0`; NaNs sort after `+inf` (and
/// negative-signed NaNs before `-inf`), which keeps the order total.
///
/// Tuples, arrays, slices and vectors compare lexicographically: element 0 first, then element 1,
/// stopping at the first non-equal pair. A sequence that is a strict prefix of another sorts
/// first.
pub trait SortKey {
    /// Compares `self` with `other`.
    fn cmp_key(&self, other: &Self) -> Ordering;
}

macro_rules! impl_sort_key_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl SortKey for $t {
                #[inline]
                fn cmp_key(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_sort_key_ord!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, str, String,
);

impl SortKey for f64 {
    #[inline]
    fn cmp_key(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else {
            self.total_cmp(other)
        }
    }
}

impl SortKey for f32 {
    #[inline]
    fn cmp_key(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else {
            self.total_cmp(other)
        }
    }
}

impl<T: SortKey + ?Sized> SortKey for &T {
    #[inline]
    fn cmp_key(&self, other: &Self) -> Ordering {
        (**self).cmp_key(*other)
    }
}

impl<T: SortKey> SortKey for Option<T> {
    fn cmp_key(&self, other: &Self) -> Ordering {
        match (self, other) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.cmp_key(b),
        }
    }
}

impl<T: SortKey> SortKey for [T] {
    fn cmp_key(&self, other: &Self) -> Ordering {
        for (a, b) in self.iter().zip(other) {
            match a.cmp_key(b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        self.len().cmp(&other.len())
    }
}

impl<T: SortKey, const N: usize> SortKey for [T; N] {
    #[inline]
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.as_slice().cmp_key(other.as_slice())
    }
}

impl<T: SortKey> SortKey for Vec<T> {
    #[inline]
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.as_slice().cmp_key(other.as_slice())
    }
}

macro_rules! impl_sort_key_tuple {
    ($($name:ident $idx:tt),+) => {
        impl<$($name: SortKey),+> SortKey for ($($name,)+) {
            fn cmp_key(&self, other: &Self) -> Ordering {
                $(
                    match self.$idx.cmp_key(&other.$idx) {
                        Ordering::Equal => {}
                        ord => return ord,
                    }
                )+
                Ordering::Equal
            }
        }
    };
}

impl_sort_key_tuple!(A 0);
impl_sort_key_tuple!(A 0, B 1);
impl_sort_key_tuple!(A 0, B 1, C 2);
impl_sort_key_tuple!(A 0, B 1, C 2, D 3);
impl_sort_key_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_sort_key_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
