// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact points and stable pair ordering.

use kurbo::Point;

/// Opaque identifier of one active touch or pointer.
///
/// Identifiers are stable for the lifetime of a contact and are the only
/// thing used to order contacts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactId(pub u64);

/// One active contact: its identifier and screen-space position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactPoint {
    /// Identifier of the contact.
    pub id: ContactId,
    /// Position in screen space.
    pub pos: Point,
}

impl ContactPoint {
    /// Creates a contact point.
    #[must_use]
    pub const fn new(id: ContactId, pos: Point) -> Self {
        Self { id, pos }
    }
}

/// Returns the two contacts ordered by identifier, or `None` unless there are
/// exactly two.
///
/// The ordering keeps "first" and "second" roles stable across samples even
/// when the input source reports contacts in a different order.
#[must_use]
pub fn ordered_pair(contacts: &[ContactPoint]) -> Option<(ContactPoint, ContactPoint)> {
    match *contacts {
        [a, b] if a.id <= b.id => Some((a, b)),
        [a, b] => Some((b, a)),
        _ => None,
    }
}
