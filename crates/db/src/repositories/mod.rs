//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod college_repo;
pub mod item_repo;
pub mod student_repo;

pub use college_repo::CollegeRepo;
pub use item_repo::ItemRepo;
pub use student_repo::StudentRepo;
