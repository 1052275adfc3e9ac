/// Example showing how filter expressions map onto RediSearch query syntax
use model::{
    filter::FilterExpr,
    schema::{FieldSchema, FieldType},
};
use redis_query::{FilterCompiler, RedisFilterCompiler};

fn main() {
    let schema = FieldSchema::new()
        .with_field("price", FieldType::Numeric)
        .with_field("color", FieldType::Tag)
        .with_field("title", FieldType::Text);
    let compiler = RedisFilterCompiler::new(schema);

    let filters = vec![
        ("no filter", None),
        ("tag equality", Some(FilterExpr::eq("color", "red"))),
        ("text equality", Some(FilterExpr::eq("title", "hello"))),
        ("open range", Some(FilterExpr::gt("price", 10))),
        ("closed range", Some(FilterExpr::lte("price", 5))),
        ("tag membership", Some(FilterExpr::is_in("color", ["red", "blue"]))),
        ("text membership", Some(FilterExpr::not_in("title", ["a", "b"]))),
        (
            "combined",
            Some(
                FilterExpr::eq("color", "red")
                    .or(FilterExpr::gte("price", 100))
                    .and(!FilterExpr::eq("title", "used")),
            ),
        ),
        ("range on a tag", Some(FilterExpr::gt("color", 1))),
    ];

    for (label, expr) in filters {
        match compiler.compile(expr.as_ref()) {
            Ok(query) => println!("{label:<16} {query}"),
            Err(err) => println!("{label:<16} error: {err}"),
        }
    }
}
