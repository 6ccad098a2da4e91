use semver::Version;

/// Pull the first version-looking token out of `--version` output.
/// Common patterns: "v1.2.3", "1.2.3", "tool 1.2.3", "tool version 1.2".
pub fn parse_version(output: &str) -> Option<Version> {
    output
        .lines()
        .flat_map(str::split_whitespace)
        .find_map(|word| {
            let clean = word
                .trim_start_matches('v')
                .trim_end_matches(|c: char| c == ',' || c == ';' || c == ')');

            if let Ok(version) = Version::parse(clean) {
                return Some(version);
            }

            // Partial version, "1.2" -> "1.2.0"
            let (major, minor) = clean.split_once('.')?;
            if minor.contains('.') {
                // e.g. "2.39.2.windows.1": keep the leading triple
                let mut parts = clean.splitn(4, '.');
                let triple = format!(
                    "{}.{}.{}",
                    parts.next()?,
                    parts.next()?,
                    parts.next()?
                );
                return Version::parse(&triple).ok();
            }
            Version::parse(&format!("{major}.{minor}.0")).ok()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parsing() {
        assert_eq!(
            parse_version("git version 2.34.1"),
            Some(Version::new(2, 34, 1))
        );
        assert_eq!(parse_version("v20.11.0"), Some(Version::new(20, 11, 0)));
        assert_eq!(
            parse_version("Docker version 24.0.7, build afdd53b"),
            Some(Version::new(24, 0, 7))
        );
        assert_eq!(parse_version("jq-1.6\nfoo 1.6"), Some(Version::new(1, 6, 0)));
        assert_eq!(
            parse_version("git version 2.39.2.windows.1"),
            Some(Version::new(2, 39, 2))
        );
        assert_eq!(parse_version("no digits here"), None);
    }
}
