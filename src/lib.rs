pub use aggregator::{AggregatedProfile, Aggregator};
pub use client::ProfileClient;
pub use config::AppConfig;
pub use error::{PortfolioError, Result};
pub use fallback::{DataSource, FallbackPolicy, FallbackReport, OnError};
pub use model::*;
pub use router::{build_router, AppState};
pub use token::TokenProvider;

pub mod aggregator;
pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod handlers;
pub(crate) mod linkedin;
pub mod mock;
pub mod model;
pub mod placeholder;
pub mod router;
pub mod screenshot;
pub mod token;
