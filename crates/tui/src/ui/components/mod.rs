pub mod collection;
pub mod component;
pub mod detail;
pub mod form;
pub mod text_input;

pub use collection::CollectionComponent;
pub use detail::DetailComponent;
pub use form::FormComponent;
