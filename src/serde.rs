// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`GrowVec`](crate::GrowVec).
//!
//! - **Serialize**: as a sequence of elements (length `len`).
//! - **Deserialize**: from any sequence, for any allocator that is `Default`.
//!
//! The deserializer reserves the format's length hint up front, capped so
//! that a hostile length prefix cannot force a huge allocation before any
//! element has been read.

// Crate imports
use crate::{allocator::RawAlloc, vec::GrowVec};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

/// Largest length hint reserved before elements arrive.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize, A: RawAlloc> Serialize for GrowVec<T, A> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T, A>(PhantomData<(T, A)>);

impl<'de, T, A> de::Visitor<'de> for VecVisitor<T, A>
where
    T: Deserialize<'de>,
    A: RawAlloc + Default,
{
    type Value = GrowVec<T, A>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<S: de::SeqAccess<'de>>(self, mut seq: S) -> Result<Self::Value, S::Error> {
        let mut out = GrowVec::<T, A>::default();
        let hint = seq.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        out.reserve(hint).map_err(<S::Error as de::Error>::custom)?;
        while let Some(elem) = seq.next_element::<T>()? {
            out.push(elem).map_err(<S::Error as de::Error>::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T, A> Deserialize<'de> for GrowVec<T, A>
where
    T: Deserialize<'de>,
    A: RawAlloc + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, A>(PhantomData))
    }
}
