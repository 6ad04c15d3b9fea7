pub use super::recommendations::Entity as Recommendations;
