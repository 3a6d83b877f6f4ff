//! Composite: leaves and groups rendered through one interface

use crate::error::PatternError;

pub trait Component {
    fn name(&self) -> &str;

    /// Append one line per leaf, indented by nesting depth
    fn render(&self, depth: usize, out: &mut Vec<String>);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    name: String,
}

impl Leaf {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Component for Leaf {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, depth: usize, out: &mut Vec<String>) {
        out.push(format!("{}{}", "  ".repeat(depth), self.name));
    }
}

/// Group that owns its own children
pub struct Composite {
    name: String,
    children: Vec<Box<dyn Component>>,
}

impl Composite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, child: impl Component + 'static) -> &mut Self {
        self.children.push(Box::new(child));
        self
    }

    /// Detach the first direct child named `name`
    pub fn remove(&mut self, name: &str) -> Result<Box<dyn Component>, PatternError> {
        let index = self
            .children
            .iter()
            .position(|child| child.name() == name)
            .ok_or_else(|| PatternError::LeafNotFound(name.to_string()))?;
        Ok(self.children.remove(index))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Render every leaf below this composite
    pub fn get_composite(&self) -> Vec<String> {
        let mut out = Vec::new();
        for child in &self.children {
            child.render(0, &mut out);
        }
        out
    }
}

impl Component for Composite {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, depth: usize, out: &mut Vec<String>) {
        for child in &self.children {
            child.render(depth + 1, out);
        }
    }
}

pub fn demo() -> Result<Vec<String>, PatternError> {
    let mut nested = Composite::new("branch");
    nested.add(Leaf::new("leaf no4")).add(Leaf::new("leaf no5"));

    let mut root = Composite::new("root");
    root.add(Leaf::new("leaf no1"))
        .add(Leaf::new("leaf no2"))
        .add(Leaf::new("leaf no3"))
        .add(nested);
    root.remove("leaf no2")?;

    Ok(root.get_composite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_are_per_instance() {
        let mut first = Composite::new("first");
        first.add(Leaf::new("a"));
        let second = Composite::new("second");

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn test_remove_missing_child() {
        let mut root = Composite::new("root");
        root.add(Leaf::new("a"));

        assert_eq!(root.remove("b").err(), Some(PatternError::LeafNotFound("b".to_string())));
        assert_eq!(root.remove("a").map(|child| child.name().to_string()), Ok("a".to_string()));
        assert!(root.is_empty());
    }

    #[test]
    fn test_nested_render() {
        assert_eq!(demo().unwrap(), vec!["leaf no1", "leaf no3", "  leaf no4", "  leaf no5"]);
    }
}
