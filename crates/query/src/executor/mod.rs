//! Query executor module.

mod cross_product;
mod filter;
mod project;
mod source;

pub use cross_product::{build_cross_product, cross_rows, CrossProduct, CrossSchema, FromTable, TableBlock};
pub use filter::{filter, FilterExecutor};
pub use project::{project, ProjectExecutor};
pub use source::{DataSource, InMemoryDataSource};
