use crate::{
    error::FilterError,
    render::{Render, Renderer},
};
use model::{filter::FilterExpr, schema::FieldSchema};
use tracing::debug;

/// Query that matches every document; produced for an absent filter.
pub const MATCH_ALL: &str = "(*)";

/// A trait for compiling filter expressions into a specific format.
pub trait FilterCompiler {
    /// The type of filter that this compiler produces.
    type Filter;
    type Error;

    /// Compile the expression into a filter. `None` means "no filter".
    fn compile(&self, expr: Option<&FilterExpr>) -> Result<Self::Filter, Self::Error>;
}

/// Compiles filter expressions into RediSearch query strings using a fixed
/// field schema.
#[derive(Debug, Clone, Default)]
pub struct RedisFilterCompiler {
    schema: FieldSchema,
}

impl RedisFilterCompiler {
    pub fn new(schema: FieldSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }
}

impl FilterCompiler for RedisFilterCompiler {
    type Filter = String;
    type Error = FilterError;

    fn compile(&self, expr: Option<&FilterExpr>) -> Result<String, FilterError> {
        compile(expr, &self.schema)
    }
}

/// Compiles `expr` against `schema` in a single depth-first pass.
///
/// Compilation is all-or-nothing: the first unsupported node or operator
/// aborts it and no partial query is returned.
pub fn compile(expr: Option<&FilterExpr>, schema: &FieldSchema) -> Result<String, FilterError> {
    let Some(expr) = expr else {
        return Ok(MATCH_ALL.to_string());
    };

    debug!(kind = expr.kind(), depth = expr.depth(), "Compiling filter");

    let mut renderer = Renderer::new(schema);
    expr.render(&mut renderer)?;
    Ok(renderer.finish())
}
