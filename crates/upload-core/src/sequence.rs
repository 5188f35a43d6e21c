use crate::error::CoreError;

/// Terms from `start` to `end` inclusive: multiples of `foo` become "foo",
/// multiples of `bar` become "bar", multiples of both "foobar".
pub fn foobar_terms(start: i64, end: i64, foo: i64, bar: i64) -> Result<Vec<String>, CoreError> {
    for divisor in [foo, bar] {
        if divisor <= 0 {
            return Err(CoreError::InvalidDivisor(divisor));
        }
    }

    let terms = (start..=end)
        .map(|value| {
            let mut term = String::new();
            if value % foo == 0 {
                term.push_str("foo");
            }
            if value % bar == 0 {
                term.push_str("bar");
            }
            if term.is_empty() {
                term = value.to_string();
            }
            term
        })
        .collect();
    Ok(terms)
}

pub fn foobar(start: i64, end: i64, foo: i64, bar: i64) -> Result<String, CoreError> {
    Ok(foobar_terms(start, end, foo, bar)?.join(", "))
}
