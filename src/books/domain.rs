use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn published_year(&self) -> i32;
}
