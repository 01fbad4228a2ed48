pub mod models;
pub mod repository;
pub mod requests;
pub mod season;

pub use models::*;
pub use repository::StatsRepository;
pub use requests::*;
pub use season::{Season, SeasonWindow};
