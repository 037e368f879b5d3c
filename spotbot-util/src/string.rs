/// Uppercase the first letter of every word and lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    let mut word_start = true;

    for c in s.chars() {
        if c.is_whitespace() || c == '-' {
            word_start = true;
            res.push(c);
        } else if word_start {
            word_start = false;
            res.extend(c.to_uppercase());
        } else {
            res.extend(c.to_lowercase());
        }
    }

    res
}

/// Lowercase the input and replace every run of non-alphanumeric characters
/// with a single underscore, e.g. `MERCEDES-BENZ` becomes `mercedes_benz`.
pub fn snake_case(s: &str) -> String {
    let mut res = String::with_capacity(s.len());

    for word in s.split(|c: char| !c.is_alphanumeric()) {
        if word.is_empty() {
            continue;
        }

        if !res.is_empty() {
            res.push('_');
        }

        res.extend(word.chars().flat_map(char::to_lowercase));
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_words() {
        assert_eq!(title_case("VOLKSWAGEN"), "Volkswagen");
        assert_eq!(title_case("golf gti"), "Golf Gti");
        assert_eq!(title_case("MERCEDES-BENZ"), "Mercedes-Benz");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn snake_cases_brands() {
        assert_eq!(snake_case("MERCEDES-BENZ"), "mercedes_benz");
        assert_eq!(snake_case("Alfa Romeo"), "alfa_romeo");
        assert_eq!(snake_case("  BMW "), "bmw");
    }
}
