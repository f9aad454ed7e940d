/*
Copyright 2025

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Multi-part sentence reassembly.
//!
//! A logical AIS message may span up to [`MAX_PARTS`] physical sentences.
//! Each group collects into a [`FragmentBuffer`]: a fixed arena of
//! optional slots indexed by `num - 1` plus a received count. Slots are
//! write-once — re-delivery of an occupied slot is rejected without
//! mutating the buffer — and a completed group is joined in slot order
//! with the fill-bit count of the *last* fragment applied to the joined
//! payload. The buffer holds no clock; abandoning a group that never
//! completes is the caller's timeout policy, exposed as [`reset`].
//!
//! [`reset`]: FragmentBuffer::reset

use alloc::format;
use alloc::string::String;

use crate::error::ParseError;

/// Most fragments a logical message may span.
pub const MAX_PARTS: usize = 5;

/// One sentence's contribution to a logical message.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    /// Armored payload substring of this sentence.
    pub payload: String,
    /// Padding bits in the final payload character; only meaningful on
    /// the last fragment of a group.
    pub fill_bits: u8,
    /// Announced fragment count of the group.
    pub total: u8,
    /// This fragment's 1-based number.
    pub num: u8,
    /// Raw sentence text, kept for diagnostics.
    pub raw: String,
}

/// Bounded slot arena collecting the fragments of one group.
#[derive(Debug, Default)]
pub struct FragmentBuffer {
    slots: [Option<Fragment>; MAX_PARTS],
    received: u8,
}

impl FragmentBuffer {
    /// Create an empty buffer.
    pub fn new() -> FragmentBuffer {
        FragmentBuffer::default()
    }

    /// Number of fragments stored so far.
    pub fn received(&self) -> u8 {
        self.received
    }

    /// Fragment count announced by the stored fragments, if any.
    pub fn expected_total(&self) -> Option<u8> {
        self.slots.iter().flatten().next().map(|f| f.total)
    }

    /// Store a fragment at slot `num - 1`.
    ///
    /// Rejects out-of-capacity groups, fragment numbers outside
    /// `[1, total]` and duplicate deliveries; a rejection leaves the
    /// buffer exactly as it was.
    pub fn insert(&mut self, fragment: Fragment) -> Result<(), ParseError> {
        let total = usize::from(fragment.total);
        let num = usize::from(fragment.num);
        if total == 0 || total > MAX_PARTS {
            return Err(ParseError::MalformedSentence(format!(
                "fragment count {} outside 1-{}",
                total, MAX_PARTS
            )));
        }
        if num == 0 || num > total {
            return Err(ParseError::MalformedSentence(format!(
                "fragment number {} outside 1-{}",
                num, total
            )));
        }
        let slot = num - 1;
        if self.slots[slot].is_some() {
            return Err(ParseError::MalformedSentence(format!(
                "duplicate fragment {} of {}",
                num, total
            )));
        }
        self.slots[slot] = Some(fragment);
        self.received += 1;
        Ok(())
    }

    /// True when every slot of the announced group is occupied.
    pub fn is_complete(&self) -> bool {
        match self.expected_total() {
            Some(total) => {
                usize::from(self.received) == usize::from(total)
                    && self.slots[..usize::from(total)]
                        .iter()
                        .all(|slot| slot.is_some())
            }
            None => false,
        }
    }

    /// Join a completed group in slot order and reset the buffer.
    ///
    /// Returns the concatenated payload together with the fill-bit count
    /// of the last fragment, or `None` while fragments are still missing
    /// — a partial payload is never released.
    pub fn take_joined(&mut self) -> Option<(String, u8)> {
        if !self.is_complete() {
            return None;
        }
        let total = usize::from(self.expected_total()?);
        let mut payload = String::new();
        let mut fill_bits = 0;
        for slot in &mut self.slots[..total] {
            let fragment = slot.take()?;
            payload.push_str(&fragment.payload);
            fill_bits = fragment.fill_bits;
        }
        self.received = 0;
        Some((payload, fill_bits))
    }

    /// Release every slot and zero the received count.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.received = 0;
    }
}

// -------------------------------------------------------------------------------------------------
