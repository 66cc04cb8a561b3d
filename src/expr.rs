use std::fmt;

/// A parsed filter expression. Nodes are immutable and each owns its
/// children, so a tree built once can be evaluated any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A leaf pattern matched against subject names. '*' characters are
    /// stored verbatim and matched as literal text, not expanded.
    Identifier {
        pattern: String,
    },
    And {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Or {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Not {
        expr: Box<Expr>,
    },
}

impl Expr {
    /// Any string is a legal pattern, including the empty string.
    pub fn identifier(pattern: impl Into<String>) -> Expr {
        Expr::Identifier { pattern: pattern.into() }
    }

    pub fn and(left: Expr, right: Expr) -> Expr {
        Expr::And { left: Box::new(left), right: Box::new(right) }
    }

    pub fn or(left: Expr, right: Expr) -> Expr {
        Expr::Or { left: Box::new(left), right: Box::new(right) }
    }

    pub fn not(expr: Expr) -> Expr {
        Expr::Not { expr: Box::new(expr) }
    }

    /// Collects every identifier pattern in the tree, left to right.
    pub fn patterns(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_patterns(&mut out);
        out
    }

    fn collect_patterns<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Identifier { pattern } => out.push(pattern),
            Expr::And { left, right } | Expr::Or { left, right } => {
                left.collect_patterns(out);
                right.collect_patterns(out);
            }
            Expr::Not { expr } => expr.collect_patterns(out),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Expr::Identifier { pattern } => write!(f, "{}", pattern),
            Expr::And { left, right } => write!(f, "({} and {})", left, right),
            Expr::Or { left, right } => write!(f, "({} or {})", left, right),
            Expr::Not { expr } => write!(f, "(not {})", expr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_walk_left_to_right() {
        let expr = Expr::or(
            Expr::identifier("a"),
            Expr::and(Expr::not(Expr::identifier("b")), Expr::identifier("c")),
        );
        assert_eq!(expr.patterns(), vec!["a", "b", "c"]);
    }

    #[test]
    fn display_parenthesizes_structure() {
        let expr = Expr::and(
            Expr::identifier("slow"),
            Expr::not(Expr::identifier("integration")),
        );
        assert_eq!(expr.to_string(), "(slow and (not integration))");
    }

    #[test]
    fn empty_pattern_is_constructible() {
        assert_eq!(Expr::identifier("").patterns(), vec![""]);
    }
}
