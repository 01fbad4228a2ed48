pub mod games;
pub mod players;
pub mod system;

pub use games::*;
pub use players::*;
pub use system::*;
