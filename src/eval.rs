use crate::expr::Expr;

/// Evaluates a filter expression against a list of subject names. An
/// identifier matches when any subject equals its pattern exactly
/// (case-sensitive); "and", "or", and "not" combine verdicts, with the
/// right operand skipped once the result is determined. Total over every
/// tree and subject list, including the empty list.
pub fn evaluate<S: AsRef<str>>(expr: &Expr, subjects: &[S]) -> bool {
    match expr {
        Expr::Identifier { pattern } => subjects.iter().any(|s| s.as_ref() == pattern),
        Expr::And { left, right } => evaluate(left, subjects) && evaluate(right, subjects),
        Expr::Or { left, right } => evaluate(left, subjects) || evaluate(right, subjects),
        Expr::Not { expr } => !evaluate(expr, subjects),
    }
}

/// Binds an expression once for repeated evaluation against many subject
/// lists. A convenience over `evaluate`, nothing more.
pub fn create_evaluator(expr: Expr) -> impl Fn(&[&str]) -> bool {
    move |subjects| evaluate(&expr, subjects)
}
