//! Parsing of raw console text into typed menu choices and scores.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected a number, got {0:?}")]
    NotANumber(String),
    #[error("unknown menu choice {0}")]
    UnknownChoice(i64),
}

/// The actions offered by the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    PrintAll,
    PrintSorted,
    PrintOne,
    Remove,
    DeleteAll,
    SetWeights,
    Summary,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Result<Self, ParseError> {
        Ok(match n {
            1 => MenuChoice::Add,
            2 => MenuChoice::PrintAll,
            3 => MenuChoice::PrintSorted,
            4 => MenuChoice::PrintOne,
            5 => MenuChoice::Remove,
            6 => MenuChoice::DeleteAll,
            7 => MenuChoice::SetWeights,
            8 => MenuChoice::Summary,
            0 => MenuChoice::Exit,
            other => return Err(ParseError::UnknownChoice(other)),
        })
    }
}

/// Parses a menu selection such as `"3"`.
///
/// # Errors
///
/// [`ParseError::NotANumber`] when the text is not an integer,
/// [`ParseError::UnknownChoice`] when it is outside the menu.
pub fn parse_choice(input: &str) -> Result<MenuChoice, ParseError> {
    let trimmed = input.trim();
    let n: i64 = trimmed
        .parse()
        .map_err(|_| ParseError::NotANumber(trimmed.to_string()))?;
    MenuChoice::from_number(n)
}

/// Parses a score or weight. Range checks are not the parser's job, but the
/// `nan`/`inf` spellings `f64` would otherwise accept are rejected.
pub fn parse_number(input: &str) -> Result<f64, ParseError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ParseError::NotANumber(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1"), Ok(MenuChoice::Add));
        assert_eq!(parse_choice(" 7 \n"), Ok(MenuChoice::SetWeights));
        assert_eq!(parse_choice("8"), Ok(MenuChoice::Summary));
        assert_eq!(parse_choice("0"), Ok(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_choice_errors() {
        assert_eq!(
            parse_choice("abc"),
            Err(ParseError::NotANumber("abc".to_string()))
        );
        assert_eq!(parse_choice(""), Err(ParseError::NotANumber(String::new())));
        assert_eq!(parse_choice("9"), Err(ParseError::UnknownChoice(9)));
        assert_eq!(parse_choice("-1"), Err(ParseError::UnknownChoice(-1)));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("85"), Ok(85.0));
        assert_eq!(parse_number(" 72.5\n"), Ok(72.5));
        assert_eq!(parse_number("-3"), Ok(-3.0));
        assert!(parse_number("eighty").is_err());
        assert!(parse_number("").is_err());
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        for text in ["nan", "NaN", "inf", "-inf", "infinity"] {
            assert_eq!(
                parse_number(text),
                Err(ParseError::NotANumber(text.to_string()))
            );
        }
        assert_eq!(parse_number("1e308"), Ok(1e308));
    }
}
