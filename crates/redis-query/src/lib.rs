//! Compiles metadata filter expressions into RediSearch query strings.
//!
//! ```
//! use model::{filter::FilterExpr, schema::{FieldSchema, FieldType}};
//! use redis_query::compile;
//!
//! let schema = FieldSchema::new().with_field("price", FieldType::Numeric);
//! let expr = FilterExpr::eq("color", "red").and(FilterExpr::gt("price", 10));
//!
//! assert_eq!(
//!     compile(Some(&expr), &schema).unwrap(),
//!     "(@color:{red} @price:[(10 inf])"
//! );
//! ```

pub mod boundary;
pub mod capability;
pub mod compiler;
pub mod error;
pub mod numeric;
pub mod render;

pub use compiler::{FilterCompiler, MATCH_ALL, RedisFilterCompiler, compile};
pub use error::FilterError;
