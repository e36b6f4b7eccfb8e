//! Библиотека конвертации сессий Charles Proxy в коллекции Postman.
//!
//! Этот крейт предоставляет структуры данных и логику преобразования
//! экспорта Charles Proxy (`*.chlsj` — JSON-массив захваченных
//! HTTP-транзакций) в документ формата Postman Collection v2.0.0:
//!
//! - [`charles`] — модель исходного формата сессии
//! - [`postman`] — модель целевого формата коллекции
//! - [`convert`] — само преобразование: одна запись сессии → один элемент коллекции
//!
//! # Быстрый старт
//!
//! ```
//! use converter::prelude::*;
//!
//! let session = r#"[{
//!     "method": "GET",
//!     "protocolVersion": "HTTP/1.1",
//!     "scheme": "https",
//!     "host": "api.example.com",
//!     "path": "/status",
//!     "query": null,
//!     "request": {"sizes": {"body": 0}, "header": {"headers": []}},
//!     "response": {
//!         "status": 204,
//!         "sizes": {"body": 0},
//!         "header": {"firstLine": "HTTP/1.1 204 No Content", "headers": []}
//!     }
//! }]"#;
//!
//! let conversion =
//!     convert_session(session, "My API", "capture.chlsj", Malformed::Abort).unwrap();
//! assert_eq!(conversion.collection.item.len(), 1);
//! assert_eq!(conversion.collection.item[0].request.url, "https://api.example.com/status");
//! ```

pub mod charles;
pub mod convert;
pub mod error;
pub mod postman;

/// Ре-экспорт самых используемых типов и функций крейта.
pub mod prelude {
    pub use crate::charles::{SessionEntry, entry_from_value, parse_session};
    pub use crate::convert::{Conversion, Malformed, convert_entry, convert_session};
    pub use crate::error::{ConvertError, ConvertResult};
    pub use crate::postman::{COLLECTION_SCHEMA_URL, Collection, Item, Request, Response};
}
