//! The fleet store: an ordered, optionally bounded collection of boats.
//!
//! The store owns its boats exclusively and keeps them sorted by name
//! (case-insensitive, ascending) after every mutation. Sorting is stable,
//! so boats with equal names keep their relative insertion order.

use std::cmp::Ordering;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::codec::{decode_boat_with_options, encode_boat, DecodeOptions};
use crate::error::CommandError;
use crate::model::Boat;

/// Compares two boat names, ASCII case-insensitively.
pub fn name_cmp(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|c| c.to_ascii_lowercase());
    let b = b.bytes().map(|c| c.to_ascii_lowercase());
    a.cmp(b)
}

/// The in-memory collection of boats, sorted by name.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    boats: Vec<Boat>,
    capacity: Option<usize>,
}

impl Fleet {
    /// Creates an empty, unbounded fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty fleet that rejects inserts beyond `capacity` boats.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            boats: Vec::new(),
            capacity: Some(capacity),
        }
    }

    /// Returns the configured capacity, if any.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Number of boats in the fleet.
    pub fn len(&self) -> usize {
        self.boats.len()
    }

    /// Returns true if the fleet holds no boats.
    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    /// The boats in current (name-sorted) order.
    pub fn boats(&self) -> &[Boat] {
        &self.boats
    }

    /// Iterates boats in current (name-sorted) order.
    pub fn iter(&self) -> std::slice::Iter<'_, Boat> {
        self.boats.iter()
    }

    pub(crate) fn boats_mut(&mut self) -> &mut [Boat] {
        &mut self.boats
    }

    /// Finds the first boat whose name matches, case-insensitively.
    pub fn find(&self, name: &str) -> Option<usize> {
        // O(n) scan; first occurrence wins when names repeat.
        self.boats
            .iter()
            .position(|b| name_cmp(&b.name, name) == Ordering::Equal)
    }

    /// Returns the boat at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&Boat> {
        self.boats.get(index)
    }

    /// Inserts a boat and restores the name-sort invariant.
    pub fn insert(&mut self, boat: Boat) -> Result<(), CommandError> {
        if let Some(capacity) = self.capacity {
            if self.boats.len() >= capacity {
                return Err(CommandError::CapacityExceeded { capacity });
            }
        }
        self.boats.push(boat);
        self.sort();
        Ok(())
    }

    /// Removes the first boat matching `name`, preserving the order of the
    /// rest, and returns it.
    pub fn remove(&mut self, name: &str) -> Result<Boat, CommandError> {
        let index = self.find(name).ok_or_else(|| CommandError::NotFound {
            name: name.to_string(),
        })?;
        // Order-preserving shift. The collection stays sorted, but re-sort
        // anyway so the invariant never depends on it.
        let boat = self.boats.remove(index);
        self.sort();
        Ok(boat)
    }

    /// Stable sort by name, case-insensitive ascending.
    pub fn sort(&mut self) {
        self.boats.sort_by(|a, b| name_cmp(&a.name, &b.name));
    }

    /// Loads a fleet from a line-oriented reader.
    ///
    /// Lines that fail to decode are skipped; boats beyond the capacity are
    /// silently discarded. The result is sorted.
    pub fn load<R: BufRead>(
        reader: R,
        capacity: Option<usize>,
        options: &DecodeOptions,
    ) -> io::Result<Fleet> {
        let mut fleet = Fleet {
            boats: Vec::new(),
            capacity,
        };
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let Ok(boat) = decode_boat_with_options(&line, options) else {
                continue;
            };
            if let Some(capacity) = fleet.capacity {
                if fleet.boats.len() >= capacity {
                    continue;
                }
            }
            fleet.boats.push(boat);
        }
        fleet.sort();
        Ok(fleet)
    }

    /// Loads a fleet from a file path.
    ///
    /// A missing file is not an error: it yields an empty fleet.
    pub fn load_path(
        path: impl AsRef<Path>,
        capacity: Option<usize>,
        options: &DecodeOptions,
    ) -> io::Result<Fleet> {
        match File::open(path) {
            Ok(file) => Fleet::load(BufReader::new(file), capacity, options),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Fleet {
                boats: Vec::new(),
                capacity,
            }),
            Err(err) => Err(err),
        }
    }

    /// Writes every boat, in current order, one record line each.
    pub fn save<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for boat in &self.boats {
            writeln!(writer, "{}", encode_boat(boat))?;
        }
        writer.flush()
    }

    /// Overwrites the file at `path` with the fleet's records.
    pub fn save_path(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let file = File::create(path)?;
        self.save(BufWriter::new(file))
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a Boat;
    type IntoIter = std::slice::Iter<'a, Boat>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
