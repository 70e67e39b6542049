pub mod submission;

pub use submission::{Submission, REQUIRED_FIELDS};
