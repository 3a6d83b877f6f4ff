//! Catalogue of Illustrations

use crate::behavioral::{chain_of_responsibility, command, strategy, template_method};
use crate::creational::{abstract_factory, builder, factory_method, prototype, singleton};
use crate::error::PatternError;
use crate::structural::{adapter, bridge, composite, decorator, facade, flyweight, proxy};
use std::fmt;
use tracing::info;

/// Demonstration entry point; returns the lines it would print
pub type Demo = fn() -> Result<Vec<String>, PatternError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Behavioral,
    Creational,
    Structural,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Behavioral => "behavioral",
            Category::Creational => "creational",
            Category::Structural => "structural",
        })
    }
}

/// One illustration
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub name: &'static str,
    pub category: Category,
    pub demo: Demo,
}

const fn entry(name: &'static str, category: Category, demo: Demo) -> Entry {
    Entry { name, category, demo }
}

static ENTRIES: [Entry; 16] = [
    entry("chain-of-responsibility", Category::Behavioral, chain_of_responsibility::demo),
    entry("command", Category::Behavioral, command::demo),
    entry("strategy", Category::Behavioral, strategy::demo),
    entry("template-method", Category::Behavioral, template_method::demo),
    entry("abstract-factory", Category::Creational, abstract_factory::demo),
    entry("builder", Category::Creational, builder::demo),
    entry("factory-method", Category::Creational, factory_method::demo),
    entry("prototype", Category::Creational, prototype::demo),
    entry("singleton", Category::Creational, singleton::demo),
    entry("adapter", Category::Structural, adapter::demo),
    entry("bridge", Category::Structural, bridge::demo),
    entry("composite", Category::Structural, composite::demo),
    entry("decorator", Category::Structural, decorator::demo),
    entry("facade", Category::Structural, facade::demo),
    entry("flyweight", Category::Structural, flyweight::demo),
    entry("proxy", Category::Structural, proxy::demo),
];

/// Fixed, ordered index of every illustration
pub struct Catalogue;

impl Catalogue {
    pub fn entries() -> &'static [Entry] {
        &ENTRIES
    }

    /// Look up an illustration; `_` and `-` are interchangeable
    pub fn find(name: &str) -> Option<&'static Entry> {
        let wanted = name.trim().replace('_', "-");
        ENTRIES.iter().find(|entry| entry.name.eq_ignore_ascii_case(&wanted))
    }

    pub fn run(name: &str) -> Result<Vec<String>, PatternError> {
        let entry = Self::find(name).ok_or_else(|| PatternError::UnknownPattern(name.to_string()))?;
        info!(pattern = entry.name, category = %entry.category, "Running illustration");
        (entry.demo)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_runs() {
        for entry in Catalogue::entries() {
            let lines = (entry.demo)().unwrap_or_else(|err| panic!("{} failed: {err}", entry.name));
            assert!(!lines.is_empty(), "{} produced no output", entry.name);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = Catalogue::entries().iter().map(|entry| entry.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Catalogue::entries().len());
    }

    #[test]
    fn test_find_normalises_name() {
        assert_eq!(Catalogue::find("Template_Method").map(|entry| entry.name), Some("template-method"));
        assert_eq!(Catalogue::find("proxy").map(|entry| entry.category), Some(Category::Structural));
    }

    #[test]
    fn test_unknown_pattern() {
        assert_eq!(
            Catalogue::run("visitor"),
            Err(PatternError::UnknownPattern("visitor".to_string()))
        );
    }

    #[test]
    fn test_run_by_name() {
        assert_eq!(
            Catalogue::run("builder").unwrap(),
            vec!["This is a Red car with 8 wheels and 4 seats."]
        );
    }
}
