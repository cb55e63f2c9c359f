// Jobs API: in-memory store plus create/list/get handlers.

pub mod handlers;
pub mod store;
