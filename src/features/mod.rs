pub mod console;
pub mod number_set;
pub mod prize_table;
pub mod result_aggregator;
pub mod ticket_factory;
