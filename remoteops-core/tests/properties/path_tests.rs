//! Property tests for host path normalization

use proptest::prelude::*;
use remoteops_core::HostStyle;

fn arb_segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-][A-Za-z0-9 _.-]{0,11}"
}

fn arb_drive() -> impl Strategy<Value = char> {
    prop::char::range('A', 'Z').prop_union(prop::char::range('a', 'z'))
}

proptest! {
    /// Property: on POSIX hosts normalization never changes the input
    #[test]
    fn posix_host_is_identity(path in ".*") {
        prop_assert_eq!(HostStyle::Posix.posix_path(&path), path);
    }

    /// Property: a drive path maps under /cygdrive with segments (spaces
    /// included) kept in order
    #[test]
    fn windows_drive_maps_to_cygdrive(
        drive in arb_drive(),
        segments in prop::collection::vec(arb_segment(), 1..6),
    ) {
        let input = format!("{drive}:\\{}", segments.join("\\"));
        let expected = format!(
            "/cygdrive/{}/{}",
            drive.to_ascii_lowercase(),
            segments.join("/")
        );
        prop_assert_eq!(HostStyle::Windows.posix_path(&input), expected);
    }

    /// Property: surrounding quotes survive normalization
    #[test]
    fn windows_preserves_surrounding_quote(
        drive in arb_drive(),
        segments in prop::collection::vec(arb_segment(), 1..4),
        quote in prop::sample::select(vec!['"', '\'']),
    ) {
        let input = format!("{quote}{drive}:/{}{quote}", segments.join("/"));
        let output = HostStyle::Windows.posix_path(&input);
        prop_assert!(output.starts_with(quote), "lost opening quote: {}", output);
        prop_assert!(output.ends_with(quote), "lost closing quote: {}", output);
        prop_assert!(output.contains("/cygdrive/"));
    }

    /// Property: paths without a drive letter are left alone on Windows too
    #[test]
    fn windows_without_drive_unchanged(path in "[/\\\\.a-z][a-z0-9 /\\\\._-]{0,30}") {
        prop_assert_eq!(HostStyle::Windows.posix_path(&path), path);
    }
}
