pub mod normalize;
pub mod similarity;
pub mod splitter;

/// Uppercase the first character, lowercase the rest.
#[inline]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("monday"), "Monday");
        assert_eq!(capitalize("Monday"), "Monday");
        assert_eq!(capitalize("MONDAY"), "Monday");
        assert_eq!(capitalize(""), "");
    }
}
