//! Модель данных сессии Charles Proxy (формат `*.chlsj`).
//!
//! Сессия — это JSON-массив записей, каждая запись описывает одну
//! захваченную пару HTTP запрос/ответ. Разбор выполняется в два шага:
//!
//! 1. [`parse_session`] — весь текст → массив «сырых» JSON-значений;
//! 2. [`entry_from_value`] — одно значение → типизированная [`SessionEntry`].
//!
//! Двухшаговый разбор позволяет сообщать об ошибке с номером конкретной
//! записи и, по желанию вызывающего кода, пропускать битые записи,
//! не отбрасывая всю сессию.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ConvertError, ConvertResult};

/// Одна запись сессии — захваченная пара запрос/ответ.
///
/// Обязательные поля (`method`, `protocolVersion`, `scheme`, `host`,
/// `path`, `request`, `response`) при отсутствии дают ошибку
/// [`ConvertError::MalformedEntry`]. Опциональные поля (`port`, `query`)
/// моделируются как [`Option`]: и отсутствующий ключ, и явный `null`
/// дают `None`.
///
/// Поля экспорта, не участвующие в конвертации (`charset`,
/// `contentEncoding`, тайминги и т.п.), игнорируются.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEntry {
    /// HTTP-метод запроса.
    pub method: String,
    /// Версия протокола, например `"HTTP/1.1"`.
    pub protocol_version: String,
    /// Схема URL (`http` / `https`).
    pub scheme: String,
    /// Имя хоста.
    pub host: String,
    /// Порт. `None` означает порт по умолчанию для схемы.
    ///
    /// Оригинальный экспорт Charles пишет `"port": null` для портов
    /// по умолчанию, поэтому `null` и отсутствие ключа равнозначны.
    #[serde(default)]
    pub port: Option<u16>,
    /// Путь запроса, например `"/foo"`.
    pub path: String,
    /// Строка запроса без ведущего `?`. `None` или пустая строка —
    /// запроса нет.
    #[serde(default)]
    pub query: Option<String>,
    /// Сторона запроса.
    pub request: Message,
    /// Сторона ответа.
    pub response: ResponseMessage,
}

/// Одна сторона HTTP-обмена (запрос или ответ).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Размеры сторон обмена. `sizes.body` — единственный достоверный
    /// признак наличия тела.
    #[serde(default)]
    pub sizes: Sizes,
    /// MIME-тип тела, если Charles его определил.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Заголовочная секция.
    #[serde(default)]
    pub header: MessageHeader,
    /// Захваченное тело. Присутствует только для текстовых тел.
    #[serde(default)]
    pub body: Option<MessageBody>,
}

/// Сторона ответа: всё то же, что у [`Message`], плюс код состояния.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseMessage {
    /// Числовой код состояния HTTP.
    pub status: i64,
    /// Общие поля стороны обмена.
    #[serde(flatten)]
    pub message: Message,
}

/// Размеры сторон обмена в байтах.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Sizes {
    /// Размер тела в байтах. `0` — тела нет.
    #[serde(default)]
    pub body: u64,
}

/// Заголовочная секция стороны обмена.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageHeader {
    /// Первая строка HTTP-сообщения, например `"HTTP/1.1 200 OK"`.
    #[serde(default)]
    pub first_line: Option<String>,
    /// Заголовки в порядке захвата. Порядок значим и сохраняется.
    #[serde(default)]
    pub headers: Vec<Header>,
}

/// Один HTTP-заголовок.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// Захваченное тело сообщения.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MessageBody {
    /// Текст тела. Отсутствует для бинарных тел.
    #[serde(default)]
    pub text: Option<String>,
}

/// Разбирает текст сессии в массив «сырых» JSON-записей.
///
/// # Ошибки
///
/// - [`ConvertError::InvalidJson`] — текст не является корректным JSON;
/// - [`ConvertError::NotAnArray`] — корневой элемент не массив.
pub fn parse_session(text: &str) -> ConvertResult<Vec<Value>> {
    let root: Value = serde_json::from_str(text).map_err(ConvertError::InvalidJson)?;
    match root {
        Value::Array(entries) => Ok(entries),
        _ => Err(ConvertError::NotAnArray),
    }
}

/// Превращает одно «сырое» JSON-значение в типизированную запись.
///
/// `index` — позиция записи в исходном массиве; попадает в ошибку,
/// чтобы пользователь мог найти битую запись в экспорте.
pub fn entry_from_value(index: usize, value: Value) -> ConvertResult<SessionEntry> {
    serde_json::from_value(value).map_err(|source| ConvertError::MalformedEntry { index, source })
}
