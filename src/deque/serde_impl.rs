//! Serde support: a deque is a sequence, front to back.

use super::CenteredDeque;
use core::fmt;
use core::marker::PhantomData;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

impl<T: Serialize> Serialize for CenteredDeque<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

const MAX_PREALLOCATED: usize = 4096;

struct DequeVisitor<T> {
    marker: PhantomData<fn() -> CenteredDeque<T>>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for DequeVisitor<T> {
    type Value = CenteredDeque<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        // Length hints come from untrusted input.
        let hint = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED);
        // Only the back half of centered storage takes `push_back`s.
        let mut deque = CenteredDeque::with_capacity(2 * hint);
        while let Some(value) = seq.next_element()? {
            deque.push_back(value);
        }
        Ok(deque)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CenteredDeque<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(DequeVisitor {
            marker: PhantomData,
        })
    }
}
