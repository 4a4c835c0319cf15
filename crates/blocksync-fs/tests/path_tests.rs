use blocksync_fs::NormalizedPath;
use rstest::rstest;

#[rstest]
#[case("frontend/src/pages", "frontend/src/pages")]
#[case("frontend\\src\\pages", "frontend/src/pages")]
#[case("frontend/src\\pages", "frontend/src/pages")]
#[case("frontend//src///pages", "frontend/src/pages")]
fn test_normalization(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(input).as_str(), expected);
}

#[test]
fn test_join_paths() {
    let base = NormalizedPath::new("frontend/src");
    let joined = base.join("pages/admin/AdminDashboardPage.jsx");
    assert_eq!(
        joined.as_str(),
        "frontend/src/pages/admin/AdminDashboardPage.jsx"
    );
}

#[test]
fn test_join_onto_trailing_slash() {
    let base = NormalizedPath::new("frontend/");
    assert_eq!(base.join("src").as_str(), "frontend/src");
}

#[test]
fn test_join_dot_is_identity() {
    let base = NormalizedPath::new("frontend");
    assert_eq!(base.join("."), base);
}

#[rstest]
#[case("/abs/path", true)]
#[case("C:/Users/dev", true)]
#[case("relative/path", false)]
#[case("./page.jsx", false)]
fn test_is_absolute(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(NormalizedPath::new(input).is_absolute(), expected);
}

#[test]
fn test_parent_and_file_name() {
    let path = NormalizedPath::new("frontend/src/pages/agent/AgentDashboardPage.jsx");
    assert_eq!(path.file_name(), Some("AgentDashboardPage.jsx"));
    assert_eq!(
        path.parent().unwrap().as_str(),
        "frontend/src/pages/agent"
    );
}

#[rstest]
#[case("blocksync.toml", Some("toml"))]
#[case("dir/jobs.yaml", Some("yaml"))]
#[case(".hidden", None)]
#[case("Makefile", None)]
fn test_extension(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(input).extension(), expected);
}

#[test]
fn test_display_matches_as_str() {
    let path = NormalizedPath::new("a\\b");
    assert_eq!(path.to_string(), "a/b");
}
