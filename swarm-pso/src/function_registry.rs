//! Name-keyed registry of benchmark functions.
//!
//! Drivers look functions up by name instead of hard-coding a dispatch
//! table. The registry only covers the callable itself; bounds, optima and
//! constraints come from [`swarm_test_functions::get_function_metadata`].

use ndarray::Array1;
use std::collections::HashMap;
use swarm_test_functions::{
    ackley, beale, booth, cobb_douglas, himmelblau, matyas, rastrigin, rosenbrock, sphere,
};

/// A benchmark function under test.
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Benchmark functions addressable by name.
pub struct FunctionRegistry {
    functions: HashMap<String, TestFunction>,
}

impl FunctionRegistry {
    /// Builds the registry with every bundled benchmark function.
    pub fn new() -> Self {
        let mut functions: HashMap<String, TestFunction> = HashMap::new();
        functions.insert("ackley".to_string(), ackley as TestFunction);
        functions.insert("beale".to_string(), beale as TestFunction);
        functions.insert("booth".to_string(), booth as TestFunction);
        functions.insert("cobb_douglas".to_string(), cobb_douglas as TestFunction);
        functions.insert("himmelblau".to_string(), himmelblau as TestFunction);
        functions.insert("matyas".to_string(), matyas as TestFunction);
        functions.insert("rastrigin".to_string(), rastrigin as TestFunction);
        functions.insert("rosenbrock".to_string(), rosenbrock as TestFunction);
        functions.insert("sphere".to_string(), sphere as TestFunction);
        FunctionRegistry { functions }
    }

    /// Looks a function up by name.
    pub fn get(&self, name: &str) -> Option<TestFunction> {
        self.functions.get(name).copied()
    }

    /// All registered names, sorted.
    pub fn list_functions(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }

    /// Iterates over (name, function) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TestFunction)> {
        self.functions.iter()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use swarm_test_functions::get_function_metadata;

    #[test]
    fn lookup_returns_working_functions() {
        let registry = FunctionRegistry::new();
        let sphere_fn = registry.get("sphere").unwrap();
        assert_eq!(sphere_fn(&array![0.0, 0.0]), 0.0);
        assert!(registry.get("does_not_exist").is_none());
    }

    #[test]
    fn listing_is_sorted() {
        let registry = FunctionRegistry::new();
        let names = registry.list_functions();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"rosenbrock".to_string()));
    }

    #[test]
    fn registry_and_metadata_agree() {
        let registry = FunctionRegistry::new();
        let metadata = get_function_metadata();
        for (name, function) in registry.iter() {
            let info = metadata
                .get(name)
                .unwrap_or_else(|| panic!("{} has no metadata", name));
            let probe = Array1::from_vec(info.global_minima[0].0.clone());
            assert!(function(&probe).is_finite());
        }
        for name in metadata.keys() {
            assert!(registry.get(name).is_some(), "{} is not registered", name);
        }
    }
}
