pub mod animation;
pub mod chaos;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod scheduler;
pub mod session;
pub mod surface;
pub mod viewport;

pub use animation::*;
pub use chaos::*;
pub use constants::*;
pub use error::*;
pub use geometry::*;
pub use scheduler::*;
pub use session::*;
pub use surface::*;
pub use viewport::*;
