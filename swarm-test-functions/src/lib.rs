#![doc = include_str!("../README.md")]
#![doc = include_str!("../REFERENCES.md")]
#![warn(missing_docs)]

/// Individual benchmark function implementations.
pub mod functions;

pub use functions::*;

use ndarray::Array1;
use std::collections::HashMap;

/// Everything a driver needs to set up a run against one benchmark function.
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Registry name of the function.
    pub name: String,
    /// Per-coordinate (lower, upper) search bounds for the canonical domain.
    pub bounds: Vec<(f64, f64)>,
    /// Known global minima as (point, value) pairs.
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Inequality residuals, feasible when each evaluates to zero or below.
    pub inequality_constraints: Vec<fn(&Array1<f64>) -> f64>,
    /// Equality residuals, feasible when each evaluates to zero.
    pub equality_constraints: Vec<fn(&Array1<f64>) -> f64>,
    /// One-line description.
    pub description: String,
    /// Whether the function has more than one local optimum.
    pub multimodal: bool,
    /// Dimensions the function is defined for.
    pub dimensions: Vec<usize>,
}

fn square_bounds(n: usize, half_width: f64) -> Vec<(f64, f64)> {
    vec![(-half_width, half_width); n]
}

/// Builds the metadata map for every function in this crate.
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let mut metadata = HashMap::new();

    metadata.insert(
        "ackley".to_string(),
        FunctionMetadata {
            name: "ackley".to_string(),
            bounds: square_bounds(2, 32.768),
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            inequality_constraints: vec![],
            equality_constraints: vec![],
            description: "Multimodal with a deep well at the origin".to_string(),
            multimodal: true,
            dimensions: vec![2, 5, 10, 30],
        },
    );

    metadata.insert(
        "beale".to_string(),
        FunctionMetadata {
            name: "beale".to_string(),
            bounds: square_bounds(2, 4.5),
            global_minima: vec![(vec![3.0, 0.5], 0.0)],
            inequality_constraints: vec![],
            equality_constraints: vec![],
            description: "Sharp curved valley with flat plateaus".to_string(),
            multimodal: false,
            dimensions: vec![2],
        },
    );

    metadata.insert(
        "booth".to_string(),
        FunctionMetadata {
            name: "booth".to_string(),
            bounds: square_bounds(2, 10.0),
            global_minima: vec![(vec![1.0, 3.0], 0.0)],
            inequality_constraints: vec![],
            equality_constraints: vec![],
            description: "Smooth quadratic bowl".to_string(),
            multimodal: false,
            dimensions: vec![2],
        },
    );

    metadata.insert(
        "cobb_douglas".to_string(),
        FunctionMetadata {
            name: "cobb_douglas".to_string(),
            bounds: vec![(0.0, 1.0), (0.0, 1.0)],
            global_minima: vec![(vec![0.0, 1.0], FACTOR_B)],
            inequality_constraints: vec![cobb_douglas_drs_margin],
            equality_constraints: vec![cobb_douglas_crs_residual],
            description: "Production score over exponents, maximized at (1, 0)".to_string(),
            multimodal: false,
            dimensions: vec![2],
        },
    );

    metadata.insert(
        "himmelblau".to_string(),
        FunctionMetadata {
            name: "himmelblau".to_string(),
            bounds: square_bounds(2, 5.0),
            global_minima: vec![
                (vec![3.0, 2.0], 0.0),
                (vec![-2.805118, 3.131312], 0.0),
                (vec![-3.779310, -3.283186], 0.0),
                (vec![3.584428, -1.848126], 0.0),
            ],
            inequality_constraints: vec![],
            equality_constraints: vec![],
            description: "Four equal global minima".to_string(),
            multimodal: true,
            dimensions: vec![2],
        },
    );

    metadata.insert(
        "matyas".to_string(),
        FunctionMetadata {
            name: "matyas".to_string(),
            bounds: square_bounds(2, 10.0),
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            inequality_constraints: vec![],
            equality_constraints: vec![],
            description: "Nearly flat plate tilted toward the origin".to_string(),
            multimodal: false,
            dimensions: vec![2],
        },
    );

    metadata.insert(
        "rastrigin".to_string(),
        FunctionMetadata {
            name: "rastrigin".to_string(),
            bounds: square_bounds(2, 5.12),
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            inequality_constraints: vec![],
            equality_constraints: vec![],
            description: "Regular grid of local minima".to_string(),
            multimodal: true,
            dimensions: vec![2, 5, 10, 30],
        },
    );

    metadata.insert(
        "rosenbrock".to_string(),
        FunctionMetadata {
            name: "rosenbrock".to_string(),
            bounds: square_bounds(2, 2.048),
            global_minima: vec![(vec![1.0, 1.0], 0.0)],
            inequality_constraints: vec![],
            equality_constraints: vec![],
            description: "Narrow parabolic valley".to_string(),
            multimodal: false,
            dimensions: vec![2, 5, 10, 30],
        },
    );

    metadata.insert(
        "sphere".to_string(),
        FunctionMetadata {
            name: "sphere".to_string(),
            bounds: square_bounds(2, 5.12),
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            inequality_constraints: vec![],
            equality_constraints: vec![],
            description: "Convex quadratic baseline".to_string(),
            multimodal: false,
            dimensions: vec![2, 5, 10, 30],
        },
    );

    metadata
}

#[cfg(test)]
mod metadata_tests {
    use super::*;

    fn lookup(name: &str) -> fn(&Array1<f64>) -> f64 {
        match name {
            "ackley" => ackley,
            "beale" => beale,
            "booth" => booth,
            "cobb_douglas" => cobb_douglas,
            "himmelblau" => himmelblau,
            "matyas" => matyas,
            "rastrigin" => rastrigin,
            "rosenbrock" => rosenbrock,
            "sphere" => sphere,
            other => panic!("no implementation for metadata entry {}", other),
        }
    }

    #[test]
    fn minima_match_implementations() {
        for (name, info) in get_function_metadata() {
            let function = lookup(&name);
            assert!(!info.global_minima.is_empty(), "{} lists no optima", name);
            for (point, value) in &info.global_minima {
                let x = Array1::from_vec(point.clone());
                let f = function(&x);
                assert!(
                    (f - value).abs() < 1e-6,
                    "{} at {:?}: expected {}, got {}",
                    name,
                    point,
                    value,
                    f
                );
            }
        }
    }

    #[test]
    fn bounds_are_well_formed() {
        for (name, info) in get_function_metadata() {
            assert_eq!(info.name, name);
            assert!(!info.bounds.is_empty());
            for &(lower, upper) in &info.bounds {
                assert!(lower < upper, "{}: bad bound ({}, {})", name, lower, upper);
            }
            assert!(info.dimensions.contains(&2));
        }
    }

    #[test]
    fn cobb_douglas_carries_its_constraints() {
        let metadata = get_function_metadata();
        let info = &metadata["cobb_douglas"];
        assert_eq!(info.equality_constraints.len(), 1);
        assert_eq!(info.inequality_constraints.len(), 1);
        let on_simplex = Array1::from_vec(vec![0.5, 0.5]);
        assert_eq!(info.equality_constraints[0](&on_simplex), 0.0);
        assert!(info.inequality_constraints[0](&on_simplex) > 0.0);
    }
}
