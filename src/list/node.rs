use crate::Value;

/// Owning edge between nodes. None marks the end of the chain.
pub(crate) type Link = Option<Box<Node>>;

/// A single link in the chain: one value and ownership of everything after it.
#[derive(Debug, PartialEq, Eq)]
pub struct Node {
    pub(crate) data: Value,
    pub(crate) next: Link,
}

impl Node {
    pub(crate) fn new(data: Value) -> Self {
        Self { data, next: None }
    }
    pub fn data(&self) -> Value {
        self.data
    }
    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.data)
    }
}
