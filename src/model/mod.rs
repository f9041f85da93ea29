pub mod course;
pub mod criteria;
