use super::operation::Operation;
use crate::Value;
use std::time::SystemTime;

/// One successful move in the game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub operation: Operation,
    pub value: Option<Value>,
    pub success: bool,
    pub timestamp: SystemTime,
}

impl Record {
    pub fn new(operation: Operation, value: Option<Value>, success: bool) -> Self {
        Self {
            operation,
            value,
            success,
            timestamp: SystemTime::now(),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Some(value) => write!(f, "{:<8}{}", self.operation, value),
            None => write!(f, "{:<8}", self.operation),
        }
    }
}
