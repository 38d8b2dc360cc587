//! Faction membership.

/// Ordered set of faction names.
///
/// Membership is unique; listing preserves join order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Factions(Vec<String>);

impl Factions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a faction. Returns false if it was already present.
    pub fn join(&mut self, faction: &str) -> bool {
        if self.contains(faction) {
            return false;
        }
        self.0.push(faction.to_owned());
        true
    }

    /// Removes a faction. Returns false if it was not present.
    pub fn leave(&mut self, faction: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|f| f != faction);
        self.0.len() != before
    }

    pub fn contains(&self, faction: &str) -> bool {
        self.0.iter().any(|f| f == faction)
    }

    /// True iff the two sets share at least one faction.
    pub fn intersects(&self, other: &Factions) -> bool {
        self.0.iter().any(|f| other.contains(f))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
