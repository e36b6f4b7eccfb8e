//! Преобразование записей сессии Charles в элементы коллекции Postman.
//!
//! Ядро крейта. [`convert_entry`] — чистая функция «одна запись →
//! один элемент»: без ввода-вывода, без общего состояния, результат
//! зависит только от аргумента. [`convert_session`] прогоняет её по
//! всем записям массива в исходном порядке и собирает итоговый
//! документ коллекции.

use crate::charles::{Header, Message, SessionEntry, entry_from_value, parse_session};
use crate::error::ConvertResult;
use crate::postman::{
    Collection, CollectionInfo, Item, Request, RequestBody, RequestHeader, Response,
    ResponseHeader,
};

/// Политика обработки битых записей сессии.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Malformed {
    /// Прервать конвертацию на первой битой записи (по умолчанию).
    #[default]
    Abort,
    /// Пропустить битую запись и продолжить со следующей.
    Skip,
}

/// Результат конвертации всей сессии.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Собранный документ коллекции.
    pub collection: Collection,
    /// Индексы записей, пропущенных при [`Malformed::Skip`].
    pub skipped: Vec<usize>,
}

impl Conversion {
    /// Количество успешно сконвертированных записей.
    #[must_use]
    pub fn converted(&self) -> usize {
        self.collection.item.len()
    }
}

/// Конвертирует текст сессии целиком в документ коллекции.
///
/// - `name` — имя будущей коллекции;
/// - `source` — путь к исходному файлу (попадает в описание коллекции);
/// - `on_malformed` — что делать с записями без обязательных полей.
///
/// Записи конвертируются независимо и в исходном порядке; порядок
/// элементов коллекции совпадает с порядком записей сессии.
pub fn convert_session(
    text: &str,
    name: &str,
    source: &str,
    on_malformed: Malformed,
) -> ConvertResult<Conversion> {
    let entries = parse_session(text)?;

    let mut items = Vec::with_capacity(entries.len());
    let mut skipped = Vec::new();
    for (index, raw) in entries.into_iter().enumerate() {
        match entry_from_value(index, raw) {
            Ok(entry) => items.push(convert_entry(&entry)),
            Err(e) => match on_malformed {
                Malformed::Abort => return Err(e),
                Malformed::Skip => skipped.push(index),
            },
        }
    }

    let collection = Collection { info: CollectionInfo::new(name, source), item: items };
    Ok(Conversion { collection, skipped })
}

/// Конвертирует одну запись сессии в один элемент коллекции.
///
/// Чистая и детерминированная функция: повторный вызов с той же
/// записью даёт побайтно идентичный результат.
#[must_use]
pub fn convert_entry(entry: &SessionEntry) -> Item {
    let request = build_request(entry);
    let response = build_response(entry, request.clone());
    Item { name: entry.path.clone(), request, response: vec![response] }
}

fn build_request(entry: &SessionEntry) -> Request {
    let body = match message_text(&entry.request) {
        Some(text) => RequestBody::raw(text),
        None => RequestBody::default(),
    };
    Request {
        url: build_url(entry),
        method: entry.method.clone(),
        header: request_headers(&entry.request.header.headers),
        body,
        description: String::new(),
    }
}

fn build_response(entry: &SessionEntry, original_request: Request) -> Response {
    let response = &entry.response;
    let body = message_text(&response.message).map(str::to_string);
    // Поля предпросмотра идут только вместе с телом
    let is_json =
        body.is_some() && response.message.mime_type.as_deref() == Some("application/json");

    Response {
        name: entry.path.clone(),
        original_request,
        code: response.status,
        status: status_phrase(
            &entry.protocol_version,
            response.status,
            response.message.header.first_line.as_deref(),
        ),
        header: response_headers(&response.message.header.headers),
        cookie: Vec::new(),
        body,
        preview_language: is_json.then(|| "json".to_string()),
        preview_type: is_json.then(|| "parsed".to_string()),
    }
}

/// Текст тела сообщения, если тело заявлено и захвачено как текст.
///
/// `sizes.body` — единственный достоверный признак наличия тела:
/// при нулевом размере захваченный текст игнорируется.
fn message_text(message: &Message) -> Option<&str> {
    if message.sizes.body == 0 {
        return None;
    }
    message.body.as_ref()?.text.as_deref()
}

/// Выводит фразу состояния из первой строки ответа.
///
/// Первая строка вида `"HTTP/1.1 200 OK"` при протоколе `HTTP/1.1`
/// и коде `200` даёт `"OK"`. Срезается только точный префикс
/// `"{протокол} {код} "` в начале строки; если строки нет или префикс
/// не совпал, фраза отсутствует.
fn status_phrase(protocol_version: &str, status: i64, first_line: Option<&str>) -> Option<String> {
    let prefix = format!("{protocol_version} {status} ");
    first_line?.strip_prefix(&prefix).map(str::to_string)
}

fn request_headers(headers: &[Header]) -> Vec<RequestHeader> {
    headers
        .iter()
        .map(|h| RequestHeader { key: h.name.clone(), value: h.value.clone() })
        .collect()
}

fn response_headers(headers: &[Header]) -> Vec<ResponseHeader> {
    headers
        .iter()
        .map(|h| ResponseHeader { name: h.name.clone(), value: h.value.clone() })
        .collect()
}

/// Восстанавливает полный URL записи.
///
/// Порт добавляется только при явном значении: экспорт Charles пишет
/// `"port": null` для портов по умолчанию, и такая запись сегмента
/// порта не получает. Пустая строка запроса, как и её отсутствие,
/// `?` к URL не добавляет.
fn build_url(entry: &SessionEntry) -> String {
    let mut url = match entry.port {
        Some(port) => format!("{}://{}:{}{}", entry.scheme, entry.host, port, entry.path),
        None => format!("{}://{}{}", entry.scheme, entry.host, entry.path),
    };
    if let Some(query) = entry.query.as_deref()
        && !query.is_empty()
    {
        url.push('?');
        url.push_str(query);
    }
    url
}
