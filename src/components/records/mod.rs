mod pagination_controls;
mod records_page;
mod records_table;
mod status_pill;

pub use records_page::RecordsPage;
