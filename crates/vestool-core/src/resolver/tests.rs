use super::*;

fn endpoints() -> DownloadEndpoints {
    DownloadEndpoints::default()
}

fn app(app_id: &str) -> AppRecord {
    AppRecord::new(app_id)
}

#[test]
fn local_file_wins_over_everything() {
    let rec = AppRecord {
        title: Some("Zalo".to_string()),
        local_apk_url: Some("/data/apks/com.zing.zalo.apk".to_string()),
        apk_url: Some("https://example.com/zalo.apk".to_string()),
        telegram_link: Some("https://t.me/x/1#size=99".to_string()),
        apk_size_mb: Some(80.0),
        ..app("com.zing.zalo")
    };
    let t = resolve_app(&rec, &endpoints());
    assert_eq!(t.url.as_deref(), Some("/api/apk/com.zing.zalo.apk"));
    assert!(t.is_direct);
    assert!(t.is_local);
    assert_eq!(t.size_mb, Some(80.0));
    assert!(t.original_source_link.is_none());
}

#[test]
fn direct_apk_url() {
    let rec = AppRecord {
        apk_url: Some("https://example.com/app.apk".to_string()),
        apk_size_mb: Some(30.0),
        ..app("com.example.app")
    };
    let t = resolve_app(&rec, &endpoints());
    assert_eq!(t.url.as_deref(), Some("https://example.com/app.apk"));
    assert!(t.is_direct);
    assert!(!t.is_local);
    assert_eq!(t.size_mb, Some(30.0));
}

#[test]
fn telegram_link_with_size_suffix() {
    let rec = AppRecord {
        telegram_link: Some("https://t.me/x/1#size=12.5".to_string()),
        ..app("com.example.app")
    };
    let t = resolve_app(&rec, &endpoints());
    assert_eq!(t.size_mb, Some(12.5));
    assert!(t.is_direct);
    let url = t.url.unwrap();
    assert!(url.starts_with("/api/download?"));
    assert!(url.contains("link=https%3A%2F%2Ft.me%2Fx%2F1&"));
    assert!(url.ends_with("name=app.apk"));
    assert_eq!(t.original_source_link.as_deref(), Some("https://t.me/x/1"));
}

#[test]
fn size_suffix_overrides_record_size() {
    let rec = AppRecord {
        telegram_link: Some("https://t.me/x/1#size=12.5".to_string()),
        apk_size_mb: Some(40.0),
        ..app("com.example.app")
    };
    assert_eq!(resolve_app(&rec, &endpoints()).size_mb, Some(12.5));
}

#[test]
fn malformed_size_suffix_falls_back_to_record_size() {
    let rec = AppRecord {
        telegram_link: Some("https://t.me/x/1#size=lots".to_string()),
        apk_size_mb: Some(40.0),
        ..app("com.example.app")
    };
    let t = resolve_app(&rec, &endpoints());
    assert_eq!(t.size_mb, Some(40.0));
    assert_eq!(t.original_source_link.as_deref(), Some("https://t.me/x/1"));

    let rec = AppRecord {
        telegram_link: Some("https://t.me/x/1#size=lots".to_string()),
        ..app("com.example.app")
    };
    assert_eq!(resolve_app(&rec, &endpoints()).size_mb, None);
}

#[test]
fn telegram_link_filename_from_title() {
    let rec = AppRecord {
        title: Some("Liên Quân Mobile".to_string()),
        telegram_link: Some("https://t.me/x/7".to_string()),
        ..app("com.garena.game.kgvn")
    };
    let url = resolve_app(&rec, &endpoints()).url.unwrap();
    assert!(url.ends_with("&name=Li_n_Qu_n_Mobile.apk"));
}

#[test]
fn telegram_link_beats_chat_apk_url() {
    let rec = AppRecord {
        apk_url: Some("https://t.me/x/2".to_string()),
        telegram_link: Some("https://t.me/x/3".to_string()),
        ..app("com.example.app")
    };
    let t = resolve_app(&rec, &endpoints());
    assert_eq!(t.original_source_link.as_deref(), Some("https://t.me/x/3"));
}

#[test]
fn chat_apk_url_without_telegram_link_is_proxied() {
    let rec = AppRecord {
        apk_url: Some("https://telegram.me/x/2#size=5".to_string()),
        apk_size_mb: Some(9.0),
        ..app("com.example.app")
    };
    let t = resolve_app(&rec, &endpoints());
    assert!(t.is_direct);
    // The size suffix is only honoured on telegram_link.
    assert_eq!(t.size_mb, Some(9.0));
    assert_eq!(
        t.original_source_link.as_deref(),
        Some("https://telegram.me/x/2#size=5")
    );
    assert!(t
        .url
        .unwrap()
        .starts_with("/api/download?link=https%3A%2F%2Ftelegram.me%2Fx%2F2%23size%3D5&"));
}

#[test]
fn nothing_to_download() {
    let rec = AppRecord {
        title: Some("Ghost".to_string()),
        apk_size_mb: Some(3.0),
        ..app("com.example.ghost")
    };
    let t = resolve_app(&rec, &endpoints());
    assert!(t.url.is_none());
    assert!(!t.is_direct);
    assert!(!t.is_available());
    assert_eq!(t.size_mb, Some(3.0));

    let t = resolve_app(&app("com.example.empty"), &endpoints());
    assert!(t.url.is_none());
    assert!(t.size_mb.is_none());
}

#[test]
fn public_base_prefixes_generated_urls() {
    let e = endpoints().with_fallback_base("http://vps:5000");
    let rec = AppRecord {
        telegram_link: Some("https://t.me/x/1".to_string()),
        ..app("com.example.app")
    };
    let url = resolve_app(&rec, &e).url.unwrap();
    assert!(url.starts_with("http://vps:5000/api/download?link="));
}

#[test]
fn resolution_is_deterministic() {
    let rec = AppRecord {
        title: Some("TikTok".to_string()),
        telegram_link: Some("https://t.me/x/1#size=12.5".to_string()),
        ..app("com.ss.android.ugc.trill")
    };
    assert_eq!(resolve_app(&rec, &endpoints()), resolve_app(&rec, &endpoints()));
}

#[test]
fn serialized_contract_uses_camel_case() {
    let rec = AppRecord {
        local_apk_url: Some("/data/apks/a.apk".to_string()),
        ..app("a.b")
    };
    let json = serde_json::to_value(resolve_app(&rec, &endpoints())).unwrap();
    assert_eq!(json["url"], "/api/apk/a.apk");
    assert_eq!(json["isDirect"], true);
    assert_eq!(json["isLocal"], true);
    assert!(json["sizeMb"].is_null());
    assert!(json.get("originalSourceLink").is_none());

    let json = serde_json::to_value(resolve_app(&app("a.b"), &endpoints())).unwrap();
    assert!(json["url"].is_null());
    assert!(json.get("isLocal").is_none());
}

#[test]
fn version_local_file() {
    let v = VersionRecord {
        local_apk_url: Some("/data/apks/zalo-24.apk".to_string()),
        size_str: Some("70 MB".to_string()),
        ..VersionRecord::new("24.1")
    };
    let t = resolve_version(&app("com.zing.zalo"), &v, &endpoints());
    assert_eq!(t.url.as_deref(), Some("/api/apk/zalo-24.apk"));
    assert!(t.is_local);
    assert_eq!(t.size_mb, Some(70.0));
}

#[test]
fn version_telegram_link_uses_versioned_name() {
    let rec = AppRecord {
        title: Some("Zalo".to_string()),
        ..app("com.zing.zalo")
    };
    let v = VersionRecord {
        telegram_link: Some("https://t.me/x/5#size=66.6".to_string()),
        apk_url: Some("https://en.uptodown.com/android/zalo".to_string()),
        ..VersionRecord::new("24.1.2")
    };
    let t = resolve_version(&rec, &v, &endpoints());
    let url = t.url.unwrap();
    assert!(url.starts_with("/api/download?link="));
    assert!(url.ends_with("&name=Zalo_24.1.2.apk"));
    assert_eq!(t.size_mb, Some(66.6));
}

#[test]
fn version_external_source_goes_through_proxy() {
    let rec = AppRecord {
        title: Some("Zalo".to_string()),
        ..app("com.zing.zalo")
    };
    let v = VersionRecord {
        apk_url: Some("https://en.uptodown.com/android/zalo".to_string()),
        apk_size_mb: Some(60.0),
        ..VersionRecord::new("23.9")
    };
    let t = resolve_version(&rec, &v, &endpoints());
    assert_eq!(
        t.url.as_deref(),
        Some("/api/proxy-download?url=https%3A%2F%2Fen.uptodown.com%2Fandroid%2Fzalo&name=Zalo_23.9.apk")
    );
    assert!(t.is_direct);
    assert_eq!(t.size_mb, Some(60.0));
    assert_eq!(
        t.original_source_link.as_deref(),
        Some("https://en.uptodown.com/android/zalo")
    );
}

#[test]
fn version_chat_apk_url_uses_chat_endpoint() {
    let v = VersionRecord {
        apk_url: Some("https://t.me/x/8".to_string()),
        ..VersionRecord::new("1.0")
    };
    let url = resolve_version(&app("a.b"), &v, &endpoints()).url.unwrap();
    assert!(url.starts_with("/api/download?link=https%3A%2F%2Ft.me%2Fx%2F8&name=app_1.0.apk"));
}

#[test]
fn version_without_sources() {
    let t = resolve_version(&app("a.b"), &VersionRecord::new("1.0"), &endpoints());
    assert!(t.url.is_none());
    assert!(!t.is_direct);
}
