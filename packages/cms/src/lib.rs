mod data;
mod helpers;
mod schema;

pub use data::emit_data;
pub use helpers::{emit_helpers, emit_stub_helpers};
pub use schema::{emit_schema, field_ts_type, type_name};
