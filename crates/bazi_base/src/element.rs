//! Five elements (五行) and their generating / controlling cycles.
//!
//! Generating (相生): 木→火→土→金→水→木.
//! Controlling (相克): 木→土→水→火→金→木.

use std::fmt::{Display, Formatter};

use crate::pillar::FourPillars;

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    /// 木 (wood)
    Mu,
    /// 火 (fire)
    Huo,
    /// 土 (earth)
    Tu,
    /// 金 (metal)
    Jin,
    /// 水 (water)
    Shui,
}

/// All five elements in generating order (index 0 = 木).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Mu,
    Element::Huo,
    Element::Tu,
    Element::Jin,
    Element::Shui,
];

impl Element {
    /// Single-character Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mu => "木",
            Self::Huo => "火",
            Self::Tu => "土",
            Self::Jin => "金",
            Self::Shui => "水",
        }
    }

    /// 0-based index in generating order (木=0 .. 水=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The element this one generates.
    pub const fn generates(self) -> Element {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one controls (two steps ahead in generating order).
    pub const fn controls(self) -> Element {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }

    /// Relation of `other` as seen from `self`.
    pub fn relation_to(self, other: Element) -> ElementRelation {
        if self == other {
            ElementRelation::Same
        } else if self.generates() == other {
            ElementRelation::Generates
        } else if other.generates() == self {
            ElementRelation::GeneratedBy
        } else if self.controls() == other {
            ElementRelation::Controls
        } else {
            ElementRelation::ControlledBy
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

crate::text_serde::impl_text_serialize!(Element);

/// Directional relation between two elements, from the first one's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRelation {
    Same,
    /// First generates second.
    Generates,
    /// Second generates first.
    GeneratedBy,
    /// First controls second.
    Controls,
    /// Second controls first.
    ControlledBy,
}

// ---------------------------------------------------------------------------
// Element tally
// ---------------------------------------------------------------------------

/// Count of each element among the eight characters of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct ElementTally {
    #[serde(default)]
    pub mu: u8,
    #[serde(default)]
    pub huo: u8,
    #[serde(default)]
    pub tu: u8,
    #[serde(default)]
    pub jin: u8,
    #[serde(default)]
    pub shui: u8,
}

impl ElementTally {
    /// Tally the visible stems and branches (eight characters, no hidden stems).
    pub fn from_pillars(pillars: &FourPillars) -> Self {
        let mut tally = Self::default();
        for pillar in pillars.pillars() {
            tally.add(pillar.stem().element());
            tally.add(pillar.branch().element());
        }
        tally
    }

    /// Increment the count for `element`.
    pub fn add(&mut self, element: Element) {
        let slot = self.slot_mut(element);
        *slot = slot.saturating_add(1);
    }

    /// Count for `element`.
    pub const fn count(&self, element: Element) -> u8 {
        match element {
            Element::Mu => self.mu,
            Element::Huo => self.huo,
            Element::Tu => self.tu,
            Element::Jin => self.jin,
            Element::Shui => self.shui,
        }
    }

    /// Elements with a zero count, in generating order.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .into_iter()
            .filter(|&e| self.count(e) == 0)
            .collect()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        ALL_ELEMENTS.iter().map(|&e| self.count(e) as u32).sum()
    }

    fn slot_mut(&mut self, element: Element) -> &mut u8 {
        match element {
            Element::Mu => &mut self.mu,
            Element::Huo => &mut self.huo,
            Element::Tu => &mut self.tu,
            Element::Jin => &mut self.jin,
            Element::Shui => &mut self.shui,
        }
    }
}
