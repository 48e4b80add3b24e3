use crate::SectionId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction a navigation control is labelled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Prev,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Next => f.write_str("next"),
            Direction::Prev => f.write_str("prev"),
        }
    }
}

/// A navigation control bound to a fixed target at declaration time
///
/// `target` is whatever the template declares, kept as a raw number. It is
/// not checked against the declared sections, and may even be `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub name: String,
    pub direction: Direction,
    pub source: SectionId,
    pub target: u32,
}

impl Control {
    pub fn next(name: impl Into<String>, source: SectionId, target: u32) -> Self {
        Self {
            name: name.into(),
            direction: Direction::Next,
            source,
            target,
        }
    }

    pub fn prev(name: impl Into<String>, source: SectionId, target: u32) -> Self {
        Self {
            name: name.into(),
            direction: Direction::Prev,
            source,
            target,
        }
    }

    /// The event this control produces when activated
    pub fn event(&self) -> NavigationEvent {
        NavigationEvent {
            direction: self.direction,
            target: self.target,
        }
    }
}

/// User-triggered request to move to a pre-declared section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEvent {
    pub direction: Direction,
    pub target: u32,
}

/// How the user activated a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivationSource {
    #[default]
    Pointer,
    Keyboard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_event_uses_declared_target() {
        let from = SectionId::new(1).unwrap();
        let control = Control::next("to-nowhere", from, 99);

        let event = control.event();
        assert_eq!(event.direction, Direction::Next);
        assert_eq!(event.target, 99);
    }

    #[test]
    fn test_control_accepts_zero_target() {
        let control: Control = serde_json::from_str(
            r#"{"name": "zero", "direction": "next", "source": 1, "target": 0}"#,
        )
        .unwrap();
        assert_eq!(control.event().target, 0);
    }

    #[test]
    fn test_direction_serde() {
        let json = serde_json::to_string(&Direction::Prev).unwrap();
        assert_eq!(json, "\"prev\"");
        let parsed: Direction = serde_json::from_str("\"next\"").unwrap();
        assert_eq!(parsed, Direction::Next);
    }
}
