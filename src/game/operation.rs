/// The four list operations a player can pick.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Operation {
    Insert,
    Delete,
    Search,
    Reverse,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Insert,
        Operation::Delete,
        Operation::Search,
        Operation::Reverse,
    ];

    /// Reverse works on the whole list and takes no operand.
    pub fn needs_value(&self) -> bool {
        !matches!(self, Operation::Reverse)
    }

    pub fn instructions(&self) -> &'static str {
        match self {
            Operation::Insert => "Enter a value to insert into the linked list",
            Operation::Delete => "Enter a value to delete from the linked list",
            Operation::Search => "Enter a value to search for in the linked list",
            Operation::Reverse => "Submit to reverse the entire linked list",
        }
    }
}

impl TryFrom<&str> for Operation {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "insert" => Ok(Operation::Insert),
            "delete" => Ok(Operation::Delete),
            "search" => Ok(Operation::Search),
            "reverse" => Ok(Operation::Reverse),
            other => Err(anyhow::anyhow!("unknown operation: {}", other)),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Operation::Insert => "insert",
            Operation::Delete => "delete",
            Operation::Search => "search",
            Operation::Reverse => "reverse",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        assert!(Operation::ALL
            .into_iter()
            .all(|op| Operation::try_from(op.to_string().as_str()).ok() == Some(op)));
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Operation::try_from(" Reverse ").ok(), Some(Operation::Reverse));
        assert!(Operation::try_from("sort").is_err());
    }

    #[test]
    fn display_respects_padding() {
        assert_eq!(format!("{:<8}|", Operation::Insert), "insert  |");
    }

    #[test]
    fn reverse_instructions_need_no_value() {
        assert_eq!(
            Operation::Reverse.instructions(),
            "Submit to reverse the entire linked list"
        );
        assert!(Operation::ALL
            .into_iter()
            .filter(Operation::needs_value)
            .all(|op| op.instructions().starts_with("Enter a value")));
    }

    #[test]
    fn only_reverse_is_valueless() {
        assert!(Operation::Insert.needs_value());
        assert!(Operation::Delete.needs_value());
        assert!(Operation::Search.needs_value());
        assert!(!Operation::Reverse.needs_value());
    }
}
