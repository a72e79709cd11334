//! Host platform detection.
//!
//! Produces the identifier that is matched against profile names:
//! `Darwin`, `Windows`, or the distribution name on Linux.

use crate::registry::CI_PROFILE;

/// Where Linux distributions describe themselves.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Identifier used on Linux when the distribution cannot be read.
pub const GENERIC_LINUX: &str = "Linux";

/// Detect the current platform identifier.
pub fn detect() -> String {
    detect_with(std::env::consts::OS, || {
        std::fs::read_to_string(OS_RELEASE_PATH).ok()
    })
}

/// Detect with a custom OS name and os-release reader (for testing).
///
/// `os` uses Rust's `std::env::consts::OS` vocabulary. The reader is only
/// called on Linux.
pub fn detect_with<F>(os: &str, read_os_release: F) -> String
where
    F: FnOnce() -> Option<String>,
{
    match os {
        "macos" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "linux" => read_os_release()
            .as_deref()
            .and_then(distribution_name)
            .unwrap_or_else(|| GENERIC_LINUX.to_string()),
        other => other.to_string(),
    }
}

/// Extract the distribution identifier from os-release content.
///
/// Takes the first word of `NAME`, so `Debian GNU/Linux` becomes `Debian`
/// and `Arch Linux` becomes `Arch`.
pub fn distribution_name(os_release: &str) -> Option<String> {
    os_release
        .lines()
        .find_map(|line| line.trim().strip_prefix("NAME="))
        .map(|value| value.trim().trim_matches(|c| c == '"' || c == '\''))
        .and_then(|value| value.split_whitespace().next())
        .map(str::to_string)
}

/// The identifier to select a profile with.
///
/// `--travis` wins over whatever the host is; `detect` is not called then.
pub fn effective_platform<F>(force_ci: bool, detect: F) -> String
where
    F: FnOnce() -> String,
{
    if force_ci {
        CI_PROFILE.to_string()
    } else {
        detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UBUNTU: &str = r#"PRETTY_NAME="Ubuntu 22.04.4 LTS"
NAME="Ubuntu"
VERSION_ID="22.04"
ID=ubuntu
ID_LIKE=debian
"#;

    #[test]
    fn macos_is_darwin() {
        assert_eq!(detect_with("macos", || None), "Darwin");
    }

    #[test]
    fn windows_is_windows() {
        assert_eq!(detect_with("windows", || None), "Windows");
    }

    #[test]
    fn linux_uses_distribution_name() {
        assert_eq!(detect_with("linux", || Some(UBUNTU.to_string())), "Ubuntu");
    }

    #[test]
    fn linux_without_os_release_is_generic() {
        assert_eq!(detect_with("linux", || None), "Linux");
    }

    #[test]
    fn linux_without_name_field_is_generic() {
        assert_eq!(detect_with("linux", || Some("ID=alpine\n".to_string())), "Linux");
    }

    #[test]
    fn other_os_passes_through() {
        assert_eq!(detect_with("freebsd", || None), "freebsd");
    }

    #[test]
    fn distribution_name_takes_first_word() {
        assert_eq!(
            distribution_name("NAME=\"Debian GNU/Linux\"\n").as_deref(),
            Some("Debian")
        );
        assert_eq!(
            distribution_name("NAME=\"Fedora Linux\"\n").as_deref(),
            Some("Fedora")
        );
        assert_eq!(
            distribution_name("NAME='Arch Linux'\n").as_deref(),
            Some("Arch")
        );
    }

    #[test]
    fn distribution_name_ignores_pretty_name() {
        let content = "PRETTY_NAME=\"Something Else\"\nNAME=Ubuntu\n";
        assert_eq!(distribution_name(content).as_deref(), Some("Ubuntu"));
    }

    #[test]
    fn distribution_name_handles_empty_value() {
        assert_eq!(distribution_name("NAME=\"\"\n"), None);
    }

    #[test]
    fn ci_flag_overrides_detected_os() {
        let platform = effective_platform(true, || "Darwin".to_string());
        assert_eq!(platform, "Travis");
    }

    #[test]
    fn ci_flag_skips_detection() {
        let platform = effective_platform(true, || panic!("detection must not run"));
        assert_eq!(platform, CI_PROFILE);
    }

    #[test]
    fn without_ci_flag_detection_is_used() {
        let platform = effective_platform(false, || "Ubuntu".to_string());
        assert_eq!(platform, "Ubuntu");
    }
}
