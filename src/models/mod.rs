pub mod declaration;

pub use declaration::{CreateDeclarationRequest, Declaration, DeclarationsResponse};
