// Copyright (c) 2025 ward-alloc contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::common::{Identifier, IdentifierMarkerName};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomIdentifierMarker;

impl IdentifierMarkerName for RoomIdentifierMarker {
    const NAME: &'static str = "RoomId";
}

pub type RoomIdentifier = Identifier<u32, RoomIdentifierMarker>;

/// A room of the ward with a fixed number of beds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Room {
    id: RoomIdentifier,
    capacity: u32,
}

impl Room {
    #[inline]
    pub fn new(id: RoomIdentifier, capacity: u32) -> Self {
        Self { id, capacity }
    }

    #[inline]
    pub fn id(&self) -> RoomIdentifier {
        self.id
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// A zero-capacity room can never hold a patient.
    #[inline]
    pub fn is_usable(&self) -> bool {
        self.capacity > 0
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Room({}, capacity {})", self.id, self.capacity)
    }
}

#[repr(transparent)]
#[derive(Debug, Clone, Default)]
pub struct RoomContainer(HashMap<RoomIdentifier, Room>);

impl RoomContainer {
    #[inline]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self(HashMap::with_capacity(cap))
    }

    #[inline]
    pub fn insert(&mut self, room: Room) -> Option<Room> {
        self.0.insert(room.id(), room)
    }

    #[inline]
    pub fn get(&self, id: RoomIdentifier) -> Option<&Room> {
        self.0.get(&id)
    }

    #[inline]
    pub fn contains_id(&self, id: RoomIdentifier) -> bool {
        self.0.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.0.values()
    }
}

impl FromIterator<Room> for RoomContainer {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Room>>(iter: I) -> Self {
        let mut c = Self::new();
        for r in iter {
            c.insert(r);
        }
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn rid(n: u32) -> RoomIdentifier {
        RoomIdentifier::new(n)
    }

    #[test]
    fn test_room_accessors() {
        let r = Room::new(rid(3), 2);
        assert_eq!(r.id(), rid(3));
        assert_eq!(r.capacity(), 2);
        assert!(r.is_usable());
        assert!(!Room::new(rid(4), 0).is_usable());
    }

    #[test]
    fn test_container_insert_replaces_by_id() {
        let mut c = RoomContainer::new();
        assert!(c.insert(Room::new(rid(1), 1)).is_none());
        let old = c.insert(Room::new(rid(1), 4));
        assert_eq!(old, Some(Room::new(rid(1), 1)));
        assert_eq!(c.len(), 1);
        assert_eq!(c.get(rid(1)).unwrap().capacity(), 4);
    }

    #[test]
    fn test_container_from_iter_and_lookup() {
        let c: RoomContainer = vec![Room::new(rid(1), 1), Room::new(rid(2), 2)]
            .into_iter()
            .collect();
        assert_eq!(c.len(), 2);
        assert!(c.contains_id(rid(2)));
        assert!(!c.contains_id(rid(9)));
        assert!(!c.is_empty());
    }
}
