use site_refs::{scan_content, Format, ScanOptions, SiteManifest};

#[test]
fn options_default_values_are_all_off() {
    let options = ScanOptions::default();
    assert!(!options.ignore_inline_svg);
    assert!(!options.ignore_mailto);
    assert!(!options.ignore_cc_editor_links);
    assert!(!options.scan_js);
}

#[test]
fn options_struct_update_syntax_overrides_selected_fields_only() {
    let options = ScanOptions {
        ignore_inline_svg: true,
        ..ScanOptions::default()
    };

    assert!(options.ignore_inline_svg);
    assert!(!options.ignore_mailto);
    assert!(!options.scan_js);
}

#[test]
fn options_load_from_json_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("site-refs.json");
    std::fs::write(&path, r#"{ "ignore_mailto": true, "scan_js": true }"#).expect("write config");

    let options = ScanOptions::from_json_file(&path).expect("load config");
    assert!(options.ignore_mailto);
    assert!(options.scan_js);
    assert!(!options.ignore_inline_svg);
}

#[test]
fn each_ignore_option_only_drops_its_own_values() {
    let page = r#"
        <a href="mailto:hi@example.com">mail</a>
        <a href="cloudcannon:collections/posts">edit</a>
        <img src="data:image/svg+xml;utf8,%3Csvg%3E">"#;
    let manifest = SiteManifest::new();

    let all = scan_content(Format::Html, page, &ScanOptions::default(), &manifest);
    assert_eq!(all.len(), 3);

    let cases = [
        ScanOptions { ignore_mailto: true, ..ScanOptions::default() },
        ScanOptions { ignore_cc_editor_links: true, ..ScanOptions::default() },
        ScanOptions { ignore_inline_svg: true, ..ScanOptions::default() },
    ];
    for options in cases {
        let set = scan_content(Format::Html, page, &options, &manifest);
        assert_eq!(set.len(), 2, "{options:?}");
    }
}

#[test]
fn ignored_values_do_not_shadow_later_values() {
    let options = ScanOptions {
        ignore_inline_svg: true,
        ..ScanOptions::default()
    };
    let css = r#"a{b:url("data:image/svg+xml;utf8,x")}c{d:url(/after.png)}"#;
    let set = scan_content(Format::Css, css, &options, &SiteManifest::new());
    assert_eq!(set.internal_assets(), ["/after.png"]);
}
