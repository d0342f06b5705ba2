//! Name de-duplication for host data-blocks.
//!
//! Hosts keep data-block names unique by appending a numeric suffix
//! (".001", ".002", ...) when a requested name is already taken. This is
//! the host's default collision policy; operators never see it.

/// Return `requested` unchanged if it is free, otherwise the first free
/// `"requested.NNN"` candidate.
///
/// `is_taken` answers whether a candidate name is already in use. The
/// suffix is appended to the requested name as-is; an existing numeric
/// suffix is not parsed or incremented.
pub fn unique_name(requested: &str, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(requested) {
        return requested.to_string();
    }
    let mut n = 1u32;
    loop {
        let candidate = format!("{}.{:03}", requested, n);
        if !is_taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_name_passes_through() {
        let taken: Vec<String> = vec![];
        let name = unique_name("Cube", |n| taken.iter().any(|t| t == n));
        assert_eq!(name, "Cube");
    }

    #[test]
    fn test_taken_name_gets_suffix() {
        let taken = vec!["Cube".to_string()];
        let name = unique_name("Cube", |n| taken.iter().any(|t| t == n));
        assert_eq!(name, "Cube.001");
    }

    #[test]
    fn test_first_free_index_wins() {
        // .001 free while .002 is taken: the lower index is used.
        let taken = vec!["Foo".to_string(), "Foo.002".to_string()];
        let name = unique_name("Foo", |n| taken.iter().any(|t| t == n));
        assert_eq!(name, "Foo.001");
    }

    #[test]
    fn test_sequence() {
        let mut taken = vec!["New Collection".to_string()];
        for expected in ["New Collection.001", "New Collection.002"] {
            let name = unique_name("New Collection", |n| taken.iter().any(|t| t == n));
            assert_eq!(name, expected);
            taken.push(name);
        }
    }
}
