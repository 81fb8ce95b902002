//! End-to-end runs of the two binaries against a mock provider

use std::path::Path;
use std::process::{Command, Output};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FULL_CONFIG: &str = r#"
window.MINIMAX_ENV = {
    GROUP_ID: "group-1",
    API_KEY: "test-key",
    ZHIPU_API_KEY: "abc.def",
};
"#;

fn write_config(dir: &Path, contents: &str) -> std::path::PathBuf {
    let config = dir.join("env.js");
    std::fs::write(&config, contents).unwrap();
    config
}

async fn run(bin: &'static str, args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || {
        Command::new(bin)
            .args(args)
            .env_remove("RUST_LOG")
            .env_remove("VOXLINE_STRICT")
            .output()
            .unwrap()
    })
    .await
    .unwrap()
}

fn combined_output(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

async fn mount_tts_audio(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/v1/t2a_v2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "base_resp": { "status_code": 0, "status_msg": "success" },
            "data": { "audio": "68656c6c6f" }
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn download_audio_writes_every_scripted_line() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), FULL_CONFIG);
    let output_dir = dir.path().join("assets").join("audio");

    mount_tts_audio(&server, 5).await;

    let output = run(
        env!("CARGO_BIN_EXE_download-audio"),
        vec![
            format!("--config={}", config.display()),
            format!("--output-dir={}", output_dir.display()),
            format!("--tts-base-url={}", server.uri()),
        ],
    )
    .await;

    assert!(output.status.success(), "{}", combined_output(&output));

    for id in ["ai_intro", "ai_age", "ai_check_risk", "ai_living_status", "ai_safety_log"] {
        let bytes = std::fs::read(output_dir.join(format!("{id}.mp3"))).unwrap();
        assert_eq!(bytes, b"hello", "{id}");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn download_audio_exits_zero_when_items_fail() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), FULL_CONFIG);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "base_resp": { "status_code": 1004, "status_msg": "authorization failed" }
        })))
        .expect(5)
        .mount(&server)
        .await;

    let output = run(
        env!("CARGO_BIN_EXE_download-audio"),
        vec![
            format!("--config={}", config.display()),
            format!("--output-dir={}", dir.path().join("audio").display()),
            format!("--tts-base-url={}", server.uri()),
        ],
    )
    .await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("authorization failed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn download_audio_requires_minimax_keys() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "GROUP_ID: \"group-1\"\n");

    mount_tts_audio(&server, 0).await;

    let output = run(
        env!("CARGO_BIN_EXE_download-audio"),
        vec![
            format!("--config={}", config.display()),
            format!("--output-dir={}", dir.path().join("audio").display()),
            format!("--tts-base-url={}", server.uri()),
        ],
    )
    .await;

    let combined = combined_output(&output);
    assert_eq!(output.status.code(), Some(1), "{combined}");
    assert_eq!(combined.matches("missing configuration: API_KEY").count(), 1, "{combined}");
    assert!(!dir.path().join("audio").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn unreadable_config_is_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("missing-env.js");

    let output = run(
        env!("CARGO_BIN_EXE_download-audio"),
        vec![format!("--config={}", config.display())],
    )
    .await;

    let combined = combined_output(&output);
    assert_eq!(output.status.code(), Some(1), "{combined}");
    assert_eq!(combined.matches("failed to read config file").count(), 1, "{combined}");
}

#[tokio::test(flavor = "multi_thread")]
async fn download_audio_ignores_unexpandable_unrelated_keys() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        dir.path(),
        "window.MINIMAX_ENV = { GROUP_ID: \"group-1\", API_KEY: \"test-key\", GREETING: \"{{ user.name }}\" };\n",
    );

    mount_tts_audio(&server, 5).await;

    let output = run(
        env!("CARGO_BIN_EXE_download-audio"),
        vec![
            format!("--config={}", config.display()),
            format!("--output-dir={}", dir.path().join("audio").display()),
            format!("--tts-base-url={}", server.uri()),
        ],
    )
    .await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(dir.path().join("audio").join("ai_intro.mp3").is_file());
}

#[tokio::test(flavor = "multi_thread")]
async fn check_keys_stops_before_any_request_when_a_key_is_missing() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "GROUP_ID: \"group-1\"\nAPI_KEY: \"test-key\"\n");

    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let output = run(
        env!("CARGO_BIN_EXE_check-keys"),
        vec![
            format!("--config={}", config.display()),
            format!("--tts-base-url={}", server.uri()),
            format!("--chat-base-url={}", server.uri()),
        ],
    )
    .await;

    let combined = combined_output(&output);
    assert_eq!(output.status.code(), Some(1), "{combined}");
    assert_eq!(combined.matches("missing configuration: ZHIPU_API_KEY").count(), 1, "{combined}");
}

#[tokio::test(flavor = "multi_thread")]
async fn check_keys_reports_failures_but_exits_zero_by_default() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), FULL_CONFIG);

    Mock::given(method("POST"))
        .and(path("/api/paas/v4/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .expect(1)
        .mount(&server)
        .await;
    mount_tts_audio(&server, 1).await;

    let output = run(
        env!("CARGO_BIN_EXE_check-keys"),
        vec![
            format!("--config={}", config.display()),
            format!("--tts-base-url={}", server.uri()),
            format!("--chat-base-url={}", server.uri()),
        ],
    )
    .await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("connection failed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn check_keys_strict_exits_non_zero_on_failure() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), FULL_CONFIG);

    Mock::given(method("POST"))
        .and(path("/api/paas/v4/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_tts_audio(&server, 1).await;

    let output = run(
        env!("CARGO_BIN_EXE_check-keys"),
        vec![
            "--strict".to_owned(),
            format!("--config={}", config.display()),
            format!("--tts-base-url={}", server.uri()),
            format!("--chat-base-url={}", server.uri()),
        ],
    )
    .await;

    assert_eq!(output.status.code(), Some(1), "{}", combined_output(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn check_keys_strict_passes_when_both_probes_succeed() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), FULL_CONFIG);

    Mock::given(method("POST"))
        .and(path("/api/paas/v4/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Hello!" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_tts_audio(&server, 1).await;

    let output = run(
        env!("CARGO_BIN_EXE_check-keys"),
        vec![
            "--strict".to_owned(),
            format!("--config={}", config.display()),
            format!("--tts-base-url={}", server.uri()),
            format!("--chat-base-url={}", server.uri()),
        ],
    )
    .await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("connection succeeded"));
}
