//! Prototype: produce new objects by cloning existing ones behind a trait object

use crate::error::PatternError;
use std::fmt;

/// Object that can copy itself behind a trait object
pub trait Prototype: fmt::Debug {
    /// Boxed deep copy of this object
    fn clone_box(&self) -> Box<dyn Prototype>;

    /// One-line description used by the demo
    fn describe(&self) -> String;
}

impl Clone for Box<dyn Prototype> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Prototype carrying owned heap data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcretePrototypeA {
    pub label: String,
    pub tags: Vec<String>,
}

impl Prototype for ConcretePrototypeA {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!("ConcretePrototypeA {:?} tagged {:?}", self.label, self.tags)
    }
}

/// Plain-data prototype
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcretePrototypeB {
    pub size: u32,
}

impl Prototype for ConcretePrototypeB {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!("ConcretePrototypeB of size {}", self.size)
    }
}

/// Clone one prototype directly and a mixed shelf through `Box<dyn Prototype>`
pub fn demo() -> Result<Vec<String>, PatternError> {
    let original = ConcretePrototypeA {
        label: "template".to_string(),
        tags: vec!["base".to_string()],
    };

    let mut copy = original.clone();
    copy.tags.push("copy".to_string());

    let shelf: Vec<Box<dyn Prototype>> = vec![Box::new(original), Box::new(ConcretePrototypeB { size: 3 })];
    let cloned = shelf.clone();

    let mut lines = vec![copy.describe()];
    lines.extend(cloned.iter().map(|prototype| prototype.describe()));
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_independent() {
        let original = ConcretePrototypeA {
            label: "a".to_string(),
            tags: vec![],
        };
        let mut copy = original.clone();
        copy.tags.push("changed".to_string());

        assert!(original.tags.is_empty());
        assert_ne!(original, copy);
    }

    #[test]
    fn test_boxed_clone_keeps_state() {
        let boxed: Box<dyn Prototype> = Box::new(ConcretePrototypeB { size: 7 });
        let copy = boxed.clone();
        assert_eq!(copy.describe(), boxed.describe());
    }

    #[test]
    fn test_demo_original_untouched() {
        let lines = demo().unwrap();
        assert_eq!(lines[0], "ConcretePrototypeA \"template\" tagged [\"base\", \"copy\"]");
        assert_eq!(lines[1], "ConcretePrototypeA \"template\" tagged [\"base\"]");
        assert_eq!(lines[2], "ConcretePrototypeB of size 3");
    }
}
