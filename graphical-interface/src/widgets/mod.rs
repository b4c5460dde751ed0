mod add_airline;
mod airline;
mod airlines_table;
mod delete_airline;
mod edit_airline;
mod form;

pub use add_airline::WidgetAddAirline;
pub use airline::WidgetAirlineDetail;
pub use airlines_table::WidgetAirlinesTable;
pub use delete_airline::WidgetDeleteAirline;
pub use edit_airline::WidgetEditAirline;
