//! Reference policies for the blog domain.

pub mod post;
pub mod report;

pub use post::PostPolicy;
pub use report::ReportPolicy;
