use crate::marker::{GroupKey, MarkerDescriptor};
use serde::Serialize;

/// Sink that accepts markers for display, e.g. a map's marker manager.
pub trait MarkerRegistry {
    fn add_marker(&mut self, marker: MarkerDescriptor, priority: u32);
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Entry {
    pub priority: u32,
    pub marker: MarkerDescriptor,
}

/// In-memory registry keeping markers in the order they were added.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct MarkerManager {
    entries: Vec<Entry>,
}

impl MarkerManager {
    pub fn new() -> Self {
        MarkerManager::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MarkerRegistry for MarkerManager {
    fn add_marker(&mut self, marker: MarkerDescriptor, priority: u32) {
        self.entries.push(Entry { priority, marker });
    }
}

/// One registry per marker group.
pub struct Registries<'a> {
    pub airfield: &'a mut dyn MarkerRegistry,
    pub waypoint: &'a mut dyn MarkerRegistry,
}

impl<'a> Registries<'a> {
    fn for_group(&mut self, key: GroupKey) -> &mut dyn MarkerRegistry {
        match key {
            GroupKey::Airfield => &mut *self.airfield,
            GroupKey::Waypoint => &mut *self.waypoint,
        }
    }
}

/// Hands each marker to the registry of its group, at the marker's own
/// priority. Returns the number registered.
pub fn register_all<I>(markers: I, registries: &mut Registries) -> usize
where
    I: IntoIterator<Item = MarkerDescriptor>,
{
    let mut count = 0;
    for marker in markers {
        let priority = marker.group.priority;
        registries.for_group(marker.group.key).add_marker(marker, priority);
        count += 1;
    }
    count
}
