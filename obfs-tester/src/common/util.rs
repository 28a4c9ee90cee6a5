pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse comma-separated seed tokens. Negative values fold onto their magnitude.
///
/// # Errors
///
/// Returns an error naming the first token that is not an integer.
pub fn parse_seeds(tokens: &[String]) -> anyhow::Result<Vec<u64>> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<i64>()
                .map(i64::unsigned_abs)
                .or_else(|_| token.parse::<u64>())
                .map_err(|_| anyhow::anyhow!("invalid seed '{token}'"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" alpha, ,beta,  gamma ");
        assert_eq!(parts, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn parse_seeds_accepts_signed_and_large_values() {
        let tokens = split_csv("1337,-5,18446744073709551615");
        assert_eq!(
            parse_seeds(&tokens).unwrap(),
            vec![1337, 5, u64::MAX]
        );
    }

    #[test]
    fn parse_seeds_rejects_words() {
        let err = parse_seeds(&["banana".to_string()]).unwrap_err();
        assert!(err.to_string().contains("banana"));
    }
}
