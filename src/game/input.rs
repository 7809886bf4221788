use crate::VALUE_MAX;
use crate::VALUE_MIN;
use crate::Value;

/// Parse a player-submitted operand, accepting only integers within
/// `VALUE_MIN..=VALUE_MAX`.
pub fn parse_value(input: &str) -> anyhow::Result<Value> {
    let value = input
        .trim()
        .parse::<Value>()
        .map_err(|e| anyhow::anyhow!("not a number: {:?} ({})", input.trim(), e))?;
    match (VALUE_MIN..=VALUE_MAX).contains(&value) {
        true => Ok(value),
        false => Err(anyhow::anyhow!(
            "{} is outside {}..={}",
            value,
            VALUE_MIN,
            VALUE_MAX
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(parse_value("0").ok(), Some(0));
        assert_eq!(parse_value(" 999\n").ok(), Some(999));
        assert_eq!(parse_value("42").ok(), Some(42));
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(parse_value("-1").is_err());
        assert!(parse_value("1000").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_value("").is_err());
        assert!(parse_value("ten").is_err());
        assert!(parse_value("4.5").is_err());
    }
}
