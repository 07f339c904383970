use crate::model::Shape;

/// Classify a token by its surface form.
///
/// Checks run in a fixed order and the first hit wins: any ASCII letter
/// makes a NAME, then `/` a DATE, `$` MONEY, `.` FLOAT, and anything else
/// is an INT.
pub fn classify(token: &str) -> Shape {
    if token.chars().any(|c| c.is_ascii_alphabetic()) {
        Shape::Name
    } else if token.contains('/') {
        Shape::Date
    } else if token.contains('$') {
        Shape::Money
    } else if token.contains('.') {
        Shape::Float
    } else {
        Shape::Int
    }
}

/// Classify a run of tokens.
pub fn shapes<S: AsRef<str>>(tokens: &[S]) -> Vec<Shape> {
    tokens.iter().map(|t| classify(t.as_ref())).collect()
}
