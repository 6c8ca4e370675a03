// Shared fixtures for unit tests

use crate::domain::{Furnace, FurnaceColumns, FurnaceSet, PlantLimits};

/// Furnace 1 of the reference plant
pub(crate) fn furnace() -> Furnace {
    Furnace {
        name: None,
        base_gas: 15000.0,
        min_gas: 10000.0,
        max_gas: 20000.0,
        substitution_ratio: 0.59,
        base_coke: 64.25,
        base_production: 146.4,
        delta_prod_per_gas: -0.0007295,
        delta_prod_per_coke: -0.00297,
        quality_per_gas: 0.0001186,
        quality_per_coke: 0.0001198,
        quality_per_production: -0.0282,
        quality_base: 0.59,
        quality_min: 0.4,
        quality_max: 0.8,
    }
}

pub(crate) fn single_furnace_set() -> FurnaceSet {
    FurnaceSet {
        furnaces: vec![furnace()],
        limits: PlantLimits {
            total_gas: 20000.0,
            total_coke: 70.0,
            required_production: 140.0,
        },
    }
}

/// Five-furnace plant with its operating limits
pub(crate) fn reference_plant() -> FurnaceSet {
    let columns = FurnaceColumns {
        names: Vec::new(),
        base_gas: vec![15000.0, 17000.0, 11000.0, 13000.0, 12000.0],
        min_gas: vec![10000.0; 5],
        max_gas: vec![20000.0; 5],
        substitution_ratio: vec![0.59, 0.53, 0.85, 0.59, 0.75],
        base_coke: vec![64.25, 66.76, 56.08, 49.78, 62.92],
        base_production: vec![146.4, 136.4, 134.3, 122.3, 138.2],
        delta_prod_per_gas: vec![-0.0007295, -0.0006695, 0.0, -0.00072373, -0.0007724],
        delta_prod_per_coke: vec![-0.00297, -0.00297, -0.002928, -0.002897, -0.00297],
        quality_per_gas: vec![0.0001186, 6.34e-05, 6.42e-05, 7.02e-05, 8.14e-05],
        quality_per_coke: vec![0.0001198, 0.0001187, 9.87e-05, 0.000119, 0.000109],
        quality_per_production: vec![-0.0282, -0.0292, -0.03, -0.0229, -0.0277],
        quality_base: vec![0.59, 0.51, 0.66, 0.6, 0.535],
        quality_min: vec![0.4; 5],
        quality_max: vec![0.8; 5],
    };

    columns
        .into_furnace_set(PlantLimits {
            total_gas: 85000.0,
            total_coke: 300.0,
            required_production: 650.0,
        })
        .expect("reference plant is valid")
}
