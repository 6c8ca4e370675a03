// Domain module: LP model, solver contract and furnace plant data

pub mod models;
pub mod plant;
pub mod response;
pub mod solver_service;
pub mod value_objects;

pub use models::*;
pub use plant::*;
pub use response::*;
pub use solver_service::*;
pub use value_objects::*;
