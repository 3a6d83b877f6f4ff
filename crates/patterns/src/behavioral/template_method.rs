//! Template method: a fixed skeleton with overridable steps

use crate::error::PatternError;

/// Algorithm whose steps plug into a fixed skeleton
pub trait Algorithm {
    /// Name shown by the invariant first step
    fn name(&self) -> &'static str;

    fn do_step_1(&self) -> String;

    fn do_step_2(&self) -> String;

    /// Hook with a default body
    fn do_something(&self) -> String {
        "do something".to_string()
    }

    /// Run the skeleton: the invariant step, both primitive steps, then the hook
    fn template_method(&self) -> Vec<String> {
        vec![
            format!("{}.do_absolutely_this", self.name()),
            self.do_step_1(),
            self.do_step_2(),
            self.do_something(),
        ]
    }
}

#[derive(Debug, Default)]
pub struct AlgorithmA;

impl Algorithm for AlgorithmA {
    fn name(&self) -> &'static str {
        "AlgorithmA"
    }

    fn do_step_1(&self) -> String {
        "do step 1 for Algorithm A".to_string()
    }

    fn do_step_2(&self) -> String {
        "do step 2 for Algorithm A".to_string()
    }
}

#[derive(Debug, Default)]
pub struct AlgorithmB;

impl Algorithm for AlgorithmB {
    fn name(&self) -> &'static str {
        "AlgorithmB"
    }

    fn do_step_1(&self) -> String {
        "do step 1 for Algorithm B".to_string()
    }

    fn do_step_2(&self) -> String {
        "do step 2 for Algorithm B".to_string()
    }

    fn do_something(&self) -> String {
        "do something else".to_string()
    }
}

pub fn demo() -> Result<Vec<String>, PatternError> {
    let mut lines = vec!["Algorithm A".to_string()];
    lines.extend(AlgorithmA.template_method());
    lines.push("Algorithm B".to_string());
    lines.extend(AlgorithmB.template_method());
    Ok(lines)
}
