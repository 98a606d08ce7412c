use crate::errors::ResourceError;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::Postgres;
use type_mapping::PostgresValue;

pub(crate) type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Bind compiled arguments in placeholder order
pub(crate) fn bind_args<'q>(
    mut query: PgQuery<'q>,
    args: Vec<PostgresValue>,
) -> Result<PgQuery<'q>, ResourceError> {
    for value in args {
        query = match value {
            PostgresValue::Text(v) => query.bind(v),
            PostgresValue::Integer(v) => query.bind(v),
            PostgresValue::BigInt(v) => query.bind(v),
            PostgresValue::Float(v) => query.bind(v),
            PostgresValue::Boolean(v) => query.bind(v),
            PostgresValue::Timestamp(v) => query.bind(v),
            PostgresValue::TextArray(v) => query.bind(v),
            PostgresValue::IntegerArray(v) => query.bind(v),
            PostgresValue::BigIntArray(v) => query.bind(v),
            PostgresValue::Json(v) => query.bind(v),
            other @ PostgresValue::Array(_) => {
                return Err(ResourceError::UnsupportedArgument(format!(
                    "{} values cannot be bound as a single parameter",
                    other.pg_type()
                )))
            }
        };
    }
    Ok(query)
}
