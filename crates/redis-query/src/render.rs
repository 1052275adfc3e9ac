//! Lowers filter expressions into RediSearch query text.

use crate::{
    boundary::Boundary,
    capability::{self, OperatorClass},
    error::FilterError,
    numeric::NumericBound,
};
use model::{
    core::value::Value,
    filter::FilterExpr,
    schema::{FieldSchema, FieldType},
};
use tracing::{debug, trace};

const FIELD_PREFIX: &str = "@";
const FIELD_SUFFIX: &str = ":";
const NOT_PREFIX: &str = "-";
const AND_DELIMITER: &str = " ";
const OR_DELIMITER: &str = " | ";

/// Anything that can be written into a query by a [`Renderer`].
pub trait Render {
    fn render(&self, renderer: &mut Renderer<'_>) -> Result<(), FilterError>;
}

/// Accumulates query text for one compilation.
///
/// The buffer is only handed out by [`Renderer::finish`]; callers drop the
/// renderer on error so a failed compilation never yields a partial query.
pub struct Renderer<'a> {
    query: String,
    schema: &'a FieldSchema,
}

impl<'a> Renderer<'a> {
    pub fn new(schema: &'a FieldSchema) -> Self {
        Self {
            query: String::new(),
            schema,
        }
    }

    pub fn finish(self) -> String {
        self.query
    }

    /// `@key:{v}`, `@key:"v"` or `@key:[v v]` depending on the field type.
    pub fn emit_equal(&mut self, key: &str, value: &Value) -> Result<(), FilterError> {
        let field_type = self.resolve(key, FieldSchema::equality_type);
        capability::require(key, field_type, OperatorClass::Equality)?;

        let body = match field_type {
            FieldType::Numeric => Boundary::NUMERIC.wrap_range(value, value),
            FieldType::Tag => Boundary::TAG.wrap(value),
            FieldType::Text => Boundary::TEXT.wrap(value),
            FieldType::Geo | FieldType::Vector => {
                return Err(capability::unsupported(key, field_type, OperatorClass::Equality));
            }
        };
        self.emit_field(key, &body);
        Ok(())
    }

    /// `@key:[lower upper]`; numeric fields only.
    pub fn emit_range(
        &mut self,
        key: &str,
        lower: NumericBound<'_>,
        upper: NumericBound<'_>,
    ) -> Result<(), FilterError> {
        let field_type = self.resolve(key, FieldSchema::range_type);
        capability::require(key, field_type, OperatorClass::Range)?;

        let body = Boundary::NUMERIC.wrap_range(lower, upper);
        self.emit_field(key, &body);
        Ok(())
    }

    /// `@key:{v1 | v2}` for tags, `@key:("v1" | "v2")` for text.
    pub fn emit_in(&mut self, key: &str, values: &[Value]) -> Result<(), FilterError> {
        let field_type = self.resolve(key, FieldSchema::equality_type);
        capability::require(key, field_type, OperatorClass::Membership)?;

        let body = match field_type {
            FieldType::Tag => Boundary::TAG.wrap(join(values.iter().map(Value::to_string))),
            FieldType::Text => {
                Boundary::TEXT_IN.wrap(join(values.iter().map(|v| Boundary::TEXT.wrap(v))))
            }
            FieldType::Numeric | FieldType::Geo | FieldType::Vector => {
                return Err(capability::unsupported(key, field_type, OperatorClass::Membership));
            }
        };
        self.emit_field(key, &body);
        Ok(())
    }

    /// `(-<inner>)`. The inner fragment is kept as is, never rewritten.
    pub fn emit_negated(
        &mut self,
        inner: impl FnOnce(&mut Self) -> Result<(), FilterError>,
    ) -> Result<(), FilterError> {
        self.query.push('(');
        self.query.push_str(NOT_PREFIX);
        inner(self)?;
        self.query.push(')');
        Ok(())
    }

    /// `(<left><delimiter><right>)`, left first.
    pub fn emit_group(
        &mut self,
        left: &FilterExpr,
        delimiter: &str,
        right: &FilterExpr,
    ) -> Result<(), FilterError> {
        self.query.push('(');
        left.render(self)?;
        self.query.push_str(delimiter);
        right.render(self)?;
        self.query.push(')');
        Ok(())
    }

    fn emit_field(&mut self, key: &str, body: &str) {
        trace!(key, body, "Emitting field predicate");
        self.query.push_str(FIELD_PREFIX);
        self.query.push_str(key);
        self.query.push_str(FIELD_SUFFIX);
        self.query.push_str(body);
    }

    /// Looks `key` up through one of the schema's defaulting lookups
    /// ([`FieldSchema::equality_type`] or [`FieldSchema::range_type`]).
    fn resolve(&self, key: &str, lookup: fn(&FieldSchema, &str) -> FieldType) -> FieldType {
        let field_type = lookup(self.schema, key);
        if !self.schema.contains(key) {
            debug!(key, default = %field_type, "Field is not registered in the schema, using default type");
        }
        field_type
    }
}

impl Render for FilterExpr {
    fn render(&self, r: &mut Renderer<'_>) -> Result<(), FilterError> {
        match self {
            FilterExpr::Eq { key, value } => r.emit_equal(key, value),
            FilterExpr::NotEq { key, value } => r.emit_negated(|r| r.emit_equal(key, value)),
            FilterExpr::Gt { key, value } => r.emit_range(
                key,
                NumericBound::exclusive(value),
                NumericBound::PositiveInfinity,
            ),
            FilterExpr::Gte { key, value } => r.emit_range(
                key,
                NumericBound::inclusive(value),
                NumericBound::PositiveInfinity,
            ),
            FilterExpr::Lt { key, value } => r.emit_range(
                key,
                NumericBound::NegativeInfinity,
                NumericBound::exclusive(value),
            ),
            FilterExpr::Lte { key, value } => r.emit_range(
                key,
                NumericBound::NegativeInfinity,
                NumericBound::inclusive(value),
            ),
            FilterExpr::In { key, values } => r.emit_in(key, values),
            FilterExpr::NotIn { key, values } => r.emit_negated(|r| r.emit_in(key, values)),
            FilterExpr::Contains { .. } => Err(FilterError::UnsupportedFilterKind {
                kind: self.kind().to_string(),
            }),
            FilterExpr::And { left, right } => r.emit_group(left, AND_DELIMITER, right),
            FilterExpr::Or { left, right } => r.emit_group(left, OR_DELIMITER, right),
            FilterExpr::Not { expr } => r.emit_negated(|r| expr.render(r)),
        }
    }
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(OR_DELIMITER)
}
