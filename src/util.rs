// This file is part of the sightline library.
// Copyright (C) 2026 The sightline developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

/// Element of a 64 bit set.
pub(crate) trait BitIndex: Copy {
    fn bit(self) -> u32;
    fn from_bit(bit: u32) -> Self;
}

/// Defines a set over at most 64 elements, stored as a single `u64`.
macro_rules! bitset {
    ($(#[$attr:meta])* $name:ident, $iter:ident, $elem:ty) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
        pub struct $name(pub u64);

        impl $name {
            /// The empty set.
            pub const EMPTY: $name = $name(0);

            #[inline]
            pub fn from_elem(elem: $elem) -> $name {
                $name(1 << $crate::util::BitIndex::bit(elem))
            }

            #[inline]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            #[inline]
            pub const fn any(self) -> bool {
                self.0 != 0
            }

            #[inline]
            pub fn contains(self, elem: $elem) -> bool {
                self.0 & $name::from_elem(elem).0 != 0
            }

            #[inline]
            pub fn add(&mut self, elem: $elem) {
                self.0 |= $name::from_elem(elem).0;
            }

            #[inline]
            pub fn discard(&mut self, elem: $elem) {
                self.0 &= !$name::from_elem(elem).0;
            }

            #[must_use]
            #[inline]
            pub fn with(self, elem: $elem) -> $name {
                $name(self.0 | $name::from_elem(elem).0)
            }

            #[must_use]
            #[inline]
            pub fn without(self, elem: $elem) -> $name {
                $name(self.0 & !$name::from_elem(elem).0)
            }

            #[inline]
            pub const fn count(self) -> usize {
                self.0.count_ones() as usize
            }

            #[inline]
            pub const fn more_than_one(self) -> bool {
                self.0 & self.0.wrapping_sub(1) != 0
            }

            /// The element with the lowest index, if any.
            #[inline]
            pub fn first(self) -> Option<$elem> {
                if self.0 == 0 {
                    None
                } else {
                    Some(<$elem as $crate::util::BitIndex>::from_bit(self.0.trailing_zeros()))
                }
            }

            /// The only element, or `None` if the set is empty or has more
            /// than one element.
            #[inline]
            pub fn single(self) -> Option<$elem> {
                if self.more_than_one() {
                    None
                } else {
                    self.first()
                }
            }
        }

        impl core::ops::BitOr for $name {
            type Output = $name;

            #[inline]
            fn bitor(self, rhs: $name) -> $name {
                $name(self.0 | rhs.0)
            }
        }

        impl core::ops::BitOrAssign for $name {
            #[inline]
            fn bitor_assign(&mut self, rhs: $name) {
                self.0 |= rhs.0;
            }
        }

        impl core::ops::BitAnd for $name {
            type Output = $name;

            #[inline]
            fn bitand(self, rhs: $name) -> $name {
                $name(self.0 & rhs.0)
            }
        }

        impl core::ops::BitAndAssign for $name {
            #[inline]
            fn bitand_assign(&mut self, rhs: $name) {
                self.0 &= rhs.0;
            }
        }

        impl core::ops::Sub for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 & !rhs.0)
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<T>(iter: T) -> $name
            where
                T: IntoIterator<Item = $elem>,
            {
                let mut result = $name::EMPTY;
                result.extend(iter);
                result
            }
        }

        impl Extend<$elem> for $name {
            fn extend<T: IntoIterator<Item = $elem>>(&mut self, iter: T) {
                for elem in iter {
                    self.add(elem);
                }
            }
        }

        impl IntoIterator for $name {
            type Item = $elem;
            type IntoIter = $iter;

            #[inline]
            fn into_iter(self) -> $iter {
                $iter(self.0)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_set().entries(*self).finish()
            }
        }

        /// Iterator over the elements of a set, in ascending order.
        #[derive(Debug, Clone)]
        pub struct $iter(u64);

        impl Iterator for $iter {
            type Item = $elem;

            #[inline]
            fn next(&mut self) -> Option<$elem> {
                if self.0 == 0 {
                    None
                } else {
                    let bit = self.0.trailing_zeros();
                    self.0 &= self.0.wrapping_sub(1);
                    Some(<$elem as $crate::util::BitIndex>::from_bit(bit))
                }
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                let len = self.len();
                (len, Some(len))
            }
        }

        impl ExactSizeIterator for $iter {
            #[inline]
            fn len(&self) -> usize {
                self.0.count_ones() as usize
            }
        }

        impl core::iter::FusedIterator for $iter {}
    };
}
