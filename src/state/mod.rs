pub mod draft;
pub mod pagination;
pub mod records;
pub mod wizard;

pub use draft::DraftDeclaration;
pub use pagination::{page_window, PageItem, PaginationState};
pub use records::{LoadRequest, RecordsState};
pub use wizard::{FieldErrors, Phase, Step, Wizard, WizardAction};
