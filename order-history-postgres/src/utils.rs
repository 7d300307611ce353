use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::str::FromStr;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    to_heapless_string(&s, col_name)
}

/// Converts a value returned by the database into a `HeaplessString`.
pub fn to_heapless_string<const N: usize>(
    value: &str,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    HeaplessString::from_str(value).map_err(|_| {
        format!("Value for column '{col_name}' is too long (max {N} chars)").into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_heapless_string_rejects_long_values() {
        let ok: HeaplessString<6> = to_heapless_string("S00001", "name").unwrap();
        assert_eq!(ok.as_str(), "S00001");

        let err = to_heapless_string::<4>("S00001", "name").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Value for column 'name' is too long (max 4 chars)"
        );
    }
}
