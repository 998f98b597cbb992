/// The two fields of one source line, still unparsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTokens<'a> {
    pub mnemonic: &'a str,
    pub argument: &'a str,
}

/// Splits a line at its single separating space. A line without one yields
/// the whole text as mnemonic and an empty argument.
pub fn tokenize_line(line: &str) -> LineTokens<'_> {
    match line.split_once(' ') {
        Some((mnemonic, argument)) => LineTokens { mnemonic, argument },
        None => LineTokens {
            mnemonic: line,
            argument: "",
        },
    }
}

/// Parses `sign digit+` with a mandatory sign. Returns `None` on anything
/// else, including trailing characters and overflow.
pub fn parse_argument(input: &str) -> Option<i64> {
    let mut chars = input.chars();

    let negative = match chars.next() {
        Some('+') => false,
        Some('-') => true,
        _ => return None,
    };

    // Accumulate negatively so i64::MIN is representable.
    let mut value: i64 = 0;
    let mut digits = 0;

    for c in chars {
        match c {
            '0'..='9' => {
                let digit = i64::from(c.to_digit(10)?);
                value = value.checked_mul(10)?.checked_sub(digit)?;
                digits += 1;
            }
            _ => return None,
        }
    }

    if digits == 0 {
        return None;
    }

    if negative { Some(value) } else { value.checked_neg() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_space() {
        let tokens = tokenize_line("acc +1");
        assert_eq!(tokens.mnemonic, "acc");
        assert_eq!(tokens.argument, "+1");
    }

    #[test]
    fn missing_separator_leaves_argument_empty() {
        let tokens = tokenize_line("nop");
        assert_eq!(tokens.mnemonic, "nop");
        assert_eq!(tokens.argument, "");
    }

    #[test]
    fn extra_spaces_stay_in_the_argument() {
        let tokens = tokenize_line("jmp  +3");
        assert_eq!(tokens.argument, " +3");
        assert_eq!(parse_argument(tokens.argument), None);
    }

    #[test]
    fn parses_signed_values() {
        assert_eq!(parse_argument("+12345"), Some(12345));
        assert_eq!(parse_argument("-12345"), Some(-12345));
        assert_eq!(parse_argument("+0"), Some(0));
        assert_eq!(parse_argument("-0"), Some(0));
        assert_eq!(parse_argument("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(parse_argument(""), None);
        assert_eq!(parse_argument("12"), None);
        assert_eq!(parse_argument("+"), None);
        assert_eq!(parse_argument("-"), None);
        assert_eq!(parse_argument("+1a"), None);
        assert_eq!(parse_argument("-12345asdfg"), None);
        assert_eq!(parse_argument("++1"), None);
        assert_eq!(parse_argument("+9223372036854775808"), None);
    }
}
