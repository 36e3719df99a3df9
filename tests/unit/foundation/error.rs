use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LogoError::invalid_target("x")
            .to_string()
            .contains("invalid target:")
    );
    assert!(
        LogoError::invalid_dimension("x")
            .to_string()
            .contains("invalid dimension:")
    );
    assert!(LogoError::config("x").to_string().contains("config error:"));
    assert!(LogoError::render("x").to_string().contains("render error:"));
    assert!(
        LogoError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LogoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
