pub mod config;
pub mod core;
pub mod utils;

pub use config::ProbeConfig;
pub use core::{
    Pacing, Product, SearchQuery, SearchSession, SearchSummary, SearchType, ServiceHealth,
    UserTask, CATEGORY_TERMS, NAME_TERMS,
};
pub use utils::error::{LoadgenError, Result};
