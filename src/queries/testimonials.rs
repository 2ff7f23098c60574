//! Investor testimonials.

use crate::error::Result;
use crate::models::{NewTestimonial, Testimonial};
use crate::storage::Storage;

/// Query interface for testimonials.
pub struct TestimonialQuery<'a> {
    storage: &'a dyn Storage,
}

impl<'a> TestimonialQuery<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> Result<Vec<Testimonial>> {
        self.storage.all_testimonials()
    }

    pub fn featured(&self) -> Result<Vec<Testimonial>> {
        Ok(self.list()?.into_iter().filter(|t| t.featured).collect())
    }

    /// Validate (non-empty name and content, rating 1 to 5) and store.
    pub fn create(&self, testimonial: NewTestimonial) -> Result<Testimonial> {
        testimonial.validate()?;
        self.storage.create_testimonial(testimonial)
    }
}
