pub use crate::analysis::*;
pub use crate::bipartite::*;
pub use crate::cbip::*;
pub use crate::colouring::*;
pub use crate::config::ExperimentConfig;
pub use crate::degeneracy::*;
pub use crate::edges::*;
pub use crate::error::{Error, Result};
pub use crate::experiment::*;
pub use crate::first_fit::*;
pub use crate::generator::*;
pub use crate::graph::*;
pub use crate::order::*;
pub use crate::validate::*;

pub mod analysis;
pub mod bipartite;
pub mod cbip;
pub mod colouring;
pub mod config;
pub mod degeneracy;
pub mod edges;
pub mod error;
pub mod experiment;
pub mod first_fit;
pub mod generator;
pub mod graph;
pub mod logger;
pub mod order;
pub mod validate;
