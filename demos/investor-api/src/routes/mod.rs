pub mod dashboard;
pub mod projects;
pub mod testimonials;
pub mod tools;
