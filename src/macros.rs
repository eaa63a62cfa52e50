/// Format a query template with `?` placeholders, converting each argument with
/// [`SqlValue::from`](crate::SqlValue).
///
/// Returns an owned `String`.
///
/// ```rust
/// use sql_literal::sql_format;
///
/// let sql = sql_format!("select * from t where id in (?) and name = ?", vec![1, 2], "bob");
/// assert_eq!(sql, "select * from t where id in (1,2) and name = 'bob'");
/// ```
#[macro_export]
macro_rules! sql_format {
    ($template:expr $(,)?) => {
        ::std::string::String::from($template)
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::format(
            $template,
            &[$($crate::SqlValue::from($arg)),+],
        )
        .into_owned()
    };
}
