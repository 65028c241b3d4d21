pub mod declaration;
pub mod layout;
pub mod records;

pub use declaration::DeclarationForm;
pub use records::RecordsPage;
