//! Modal registry: the fixed set of named modals and their open flags.

use serde::{Deserialize, Serialize};

/// The modals the frontend can open.
///
/// The set is closed. Unknown names arriving over the wire are ignored
/// rather than rejected, so a stale frontend build cannot crash the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalName {
    Idea,
    Course,
    Webinar,
    Branding,
    Checkout,
    Confirmation,
    Event,
    Workflow,
}

impl ModalName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalName::Idea => "idea",
            ModalName::Course => "course",
            ModalName::Webinar => "webinar",
            ModalName::Branding => "branding",
            ModalName::Checkout => "checkout",
            ModalName::Confirmation => "confirmation",
            ModalName::Event => "event",
            ModalName::Workflow => "workflow",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "idea" => Some(ModalName::Idea),
            "course" => Some(ModalName::Course),
            "webinar" => Some(ModalName::Webinar),
            "branding" => Some(ModalName::Branding),
            "checkout" => Some(ModalName::Checkout),
            "confirmation" => Some(ModalName::Confirmation),
            "event" => Some(ModalName::Event),
            "workflow" => Some(ModalName::Workflow),
            _ => None,
        }
    }
}

/// Open/closed flags for every known modal.
///
/// A struct rather than a map, so exactly these eight entries exist and a
/// snapshot can never gain or lose one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalSet {
    pub idea: bool,
    pub course: bool,
    pub webinar: bool,
    pub branding: bool,
    pub checkout: bool,
    pub confirmation: bool,
    pub event: bool,
    pub workflow: bool,
}

impl ModalSet {
    /// All modals closed.
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: ModalName, open: bool) {
        match name {
            ModalName::Idea => self.idea = open,
            ModalName::Course => self.course = open,
            ModalName::Webinar => self.webinar = open,
            ModalName::Branding => self.branding = open,
            ModalName::Checkout => self.checkout = open,
            ModalName::Confirmation => self.confirmation = open,
            ModalName::Event => self.event = open,
            ModalName::Workflow => self.workflow = open,
        }
    }

    pub fn is_open(&self, name: ModalName) -> bool {
        match name {
            ModalName::Idea => self.idea,
            ModalName::Course => self.course,
            ModalName::Webinar => self.webinar,
            ModalName::Branding => self.branding,
            ModalName::Checkout => self.checkout,
            ModalName::Confirmation => self.confirmation,
            ModalName::Event => self.event,
            ModalName::Workflow => self.workflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ModalName; 8] = [
        ModalName::Idea,
        ModalName::Course,
        ModalName::Webinar,
        ModalName::Branding,
        ModalName::Checkout,
        ModalName::Confirmation,
        ModalName::Event,
        ModalName::Workflow,
    ];

    #[test]
    fn test_name_round_trips_through_str() {
        for name in ALL {
            assert_eq!(ModalName::from_str(name.as_str()), Some(name));
        }
        assert_eq!(ModalName::from_str("settings"), None);
        assert_eq!(ModalName::from_str(""), None);
        // Matching is exact, not case-folded
        assert_eq!(ModalName::from_str("Idea"), None);
    }

    #[test]
    fn test_set_and_is_open_agree() {
        let mut modals = ModalSet::closed();
        for name in ALL {
            assert!(!modals.is_open(name));
        }

        modals.set(ModalName::Checkout, true);
        assert!(modals.is_open(ModalName::Checkout));
        for name in ALL.into_iter().filter(|n| *n != ModalName::Checkout) {
            assert!(!modals.is_open(name));
        }

        modals.set(ModalName::Checkout, false);
        assert_eq!(modals, ModalSet::closed());
    }
}
