//! Модель целевого формата — Postman Collection v2.0.0.
//!
//! Типы сериализуются через serde ровно в ту структуру JSON, которую
//! ожидает Postman. Два нюанса формата воспроизводятся намеренно:
//!
//! - заголовки запроса пишутся парами `{key, value}`, а заголовки
//!   ответа — парами `{name, value}` (асимметрия исходного формата);
//! - `originalRequest` в ответе — независимая копия запроса, а не
//!   ссылка: формат коллекции не умеет разделять значения.

use serde::Serialize;
use serde_json::Value;

/// URL схемы Postman Collection v2.0.0 — фиксированная константа формата.
pub const COLLECTION_SCHEMA_URL: &str =
    "https://schema.getpostman.com/json/collection/v2.0.0/collection.json";

/// Корневой документ коллекции.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    pub info: CollectionInfo,
    pub item: Vec<Item>,
}

/// Блок `info` коллекции.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionInfo {
    /// Имя коллекции (задаётся пользователем).
    pub name: String,
    /// Описание; содержит путь к исходному файлу сессии.
    pub description: String,
    /// Всегда [`COLLECTION_SCHEMA_URL`].
    pub schema: String,
}

impl CollectionInfo {
    /// Собирает блок `info` для коллекции, сконвертированной из `source`.
    pub fn new(name: &str, source: &str) -> Self {
        Self {
            name: name.to_string(),
            description: format!("Converted from {source}"),
            schema: COLLECTION_SCHEMA_URL.to_string(),
        }
    }
}

/// Один элемент коллекции — пара запрос/ответ.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    /// Имя элемента; берётся из пути запроса.
    pub name: String,
    pub request: Request,
    /// Всегда ровно один ответ, но схема формата требует массив.
    pub response: Vec<Response>,
}

/// Запрос в формате коллекции.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    /// Полностью восстановленный URL.
    pub url: String,
    pub method: String,
    pub header: Vec<RequestHeader>,
    /// Тело присутствует всегда; без захваченного текста `raw` пустой.
    pub body: RequestBody,
    /// Пустая строка-заглушка.
    pub description: String,
}

/// Заголовок запроса: в отличие от ответа, имя хранится в поле `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestHeader {
    pub key: String,
    pub value: String,
}

/// Тело запроса в режиме `raw`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestBody {
    /// Всегда `"raw"`.
    pub mode: String,
    /// Текст тела; пустая строка, если тело не захвачено.
    pub raw: String,
}

impl RequestBody {
    pub fn raw(text: impl Into<String>) -> Self {
        Self { mode: "raw".to_string(), raw: text.into() }
    }
}

impl Default for RequestBody {
    fn default() -> Self {
        Self::raw(String::new())
    }
}

/// Ответ в формате коллекции.
///
/// Опциональные поля при `None` не сериализуются вовсе — формат
/// различает «ключа нет» и «ключ со значением null».
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    /// Совпадает с именем элемента.
    pub name: String,
    /// Независимая копия запроса.
    #[serde(rename = "originalRequest")]
    pub original_request: Request,
    /// Числовой код состояния.
    pub code: i64,
    /// Фраза состояния (`"OK"`, `"Not Found"`, ...). Отсутствует, если
    /// её не удалось вывести из первой строки ответа.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub header: Vec<ResponseHeader>,
    /// Всегда пустой: экспорт Charles не выделяет cookie отдельно.
    pub cookie: Vec<Value>,
    /// Текст тела ответа. Отсутствует, если тело пустое или не текстовое.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// `"json"` для тел с MIME-типом `application/json`.
    #[serde(rename = "_postman_previewlanguage", skip_serializing_if = "Option::is_none")]
    pub preview_language: Option<String>,
    /// `"parsed"` для тел с MIME-типом `application/json`.
    #[serde(rename = "_postman_previewtype", skip_serializing_if = "Option::is_none")]
    pub preview_type: Option<String>,
}

/// Заголовок ответа: имя хранится в поле `name`, как в захвате.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseHeader {
    pub name: String,
    pub value: String,
}
