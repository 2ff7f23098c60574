pub mod investment;
pub mod project;
pub mod stats;
pub mod testimonial;
pub mod transaction;
pub mod user;

pub use investment::*;
pub use project::*;
pub use stats::*;
pub use testimonial::*;
pub use transaction::*;
pub use user::*;
