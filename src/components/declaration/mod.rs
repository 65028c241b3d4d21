mod choice_step;
mod declaration_form;
mod details_step;
mod progress_bar;
mod review_step;

pub use declaration_form::DeclarationForm;
