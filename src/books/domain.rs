use crate::core::domain::Identifiable;

pub mod model;

// Book exposes the read-only view the catalog needs from a book record
pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &model::Author;
    fn published_year(&self) -> i32;
}
