//! E2E тесты для CLI инструмента `chls2postman`.
//!
//! Проверяем весь путь: файл сессии Charles на входе, файл коллекции
//! Postman на выходе, поведение при ошибках и политику обработки
//! битых записей.

use std::fs;

use assert_cmd::Command;
use e2e_tests::fixture;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

/// Создать команду для запуска chls2postman.
///
/// `cargo_bin` deprecated из-за edge case с custom build directories,
/// но это единственный способ для кросс-крейтовых бинарников.
#[expect(deprecated)]
fn chls2postman() -> Command {
    Command::cargo_bin("chls2postman").unwrap()
}

// ============================================================================
// Успешная конвертация
// ============================================================================

#[test]
fn test_convert_session_to_collection() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("collection.json");

    chls2postman()
        .args([
            "--input",
            fixture("session_example.chlsj").to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--name",
            "Example API",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Converted 3 request(s)"));

    let collection: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

    // Конверт коллекции
    assert_eq!(collection["info"]["name"], "Example API");
    assert!(
        collection["info"]["description"].as_str().unwrap().starts_with("Converted from")
    );
    assert_eq!(
        collection["info"]["schema"],
        "https://schema.getpostman.com/json/collection/v2.0.0/collection.json"
    );

    // Порядок элементов совпадает с порядком записей сессии
    let items = collection["item"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["name"], "/foo");
    assert_eq!(items[1]["name"], "/search");
    assert_eq!(items[2]["name"], "/items/7");
}

#[test]
fn test_converted_item_shape() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("collection.json");

    chls2postman()
        .args([
            "-i",
            fixture("session_example.chlsj").to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-n",
            "Example API",
        ])
        .assert()
        .success();

    let collection: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let items = collection["item"].as_array().unwrap();

    // POST с JSON-телом в обе стороны
    let post = &items[0];
    assert_eq!(post["request"]["url"], "https://www.example.com/foo");
    assert_eq!(post["request"]["method"], "POST");
    assert_eq!(post["request"]["header"][0]["key"], "Connection");
    assert_eq!(post["request"]["body"]["raw"], "{\"key\":\"value\"}");
    let response = &post["response"][0];
    assert_eq!(response["code"], 200);
    assert_eq!(response["status"], "OK");
    assert_eq!(response["header"][0]["name"], "content-type");
    assert_eq!(response["body"], "{\"the\":\"response\"}");
    assert_eq!(response["_postman_previewlanguage"], "json");
    assert_eq!(response["_postman_previewtype"], "parsed");
    assert_eq!(response["originalRequest"]["url"], "https://www.example.com/foo");

    // GET с портом и строкой запроса; HTML-тело без полей предпросмотра
    let get = &items[1];
    assert_eq!(get["request"]["url"], "https://www.example.com:8443/search?q=rust&page=2");
    let response = &get["response"][0];
    assert_eq!(response["body"], "<html><body>results</body></html>");
    assert!(response.get("_postman_previewlanguage").is_none());

    // DELETE без тел: raw пустой, у ответа ключа body нет вовсе
    let delete = &items[2];
    assert_eq!(delete["request"]["url"], "http://api.example.com/items/7");
    assert_eq!(delete["request"]["body"]["raw"], "");
    let response = &delete["response"][0];
    assert_eq!(response["code"], 204);
    assert_eq!(response["status"], "No Content");
    assert!(response.get("body").is_none());
}

// ============================================================================
// Ошибки входа
// ============================================================================

#[test]
fn test_missing_input_file_fails() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("collection.json");

    chls2postman()
        .args([
            "-i",
            dir.path().join("no_such_file.chlsj").to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-n",
            "Example API",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));

    assert!(!output.exists());
}

#[test]
fn test_invalid_json_fails_without_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.chlsj");
    let output = dir.path().join("collection.json");
    fs::write(&input, "this is not json").unwrap();

    chls2postman()
        .args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-n",
            "Example API",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid JSON"));

    // Никакого частичного вывода при ошибке
    assert!(!output.exists());
}

#[test]
fn test_non_array_session_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("object.chlsj");
    let output = dir.path().join("collection.json");
    fs::write(&input, r#"{"method": "GET"}"#).unwrap();

    chls2postman()
        .args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-n",
            "Example API",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an array"));

    assert!(!output.exists());
}

#[test]
fn test_missing_required_flag_fails() {
    chls2postman()
        .args(["-i", fixture("session_example.chlsj").to_str().unwrap()])
        .assert()
        .failure();
}

// ============================================================================
// Политика обработки битых записей
// ============================================================================

#[test]
fn test_malformed_entry_aborts_by_default() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("collection.json");

    chls2postman()
        .args([
            "-i",
            fixture("session_malformed.chlsj").to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-n",
            "Example API",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed session entry at index 1"));

    assert!(!output.exists());
}

#[test]
fn test_skip_malformed_continues() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("collection.json");

    chls2postman()
        .args([
            "-i",
            fixture("session_malformed.chlsj").to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-n",
            "Example API",
            "--skip-malformed",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Converted 1 request(s)"))
        .stderr(predicate::str::contains("Skipped 1 malformed entry(s)"));

    let collection: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let items = collection["item"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "/ok");
}
