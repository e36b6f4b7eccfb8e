//! Модуль ошибок конвертации сессий.

use thiserror::Error;

/// Главная ошибка конвертации сессии Charles в коллекцию Postman.
///
/// Объединяет ошибки разбора входного JSON и ошибки отдельных записей.
/// Ошибки файлового ввода-вывода здесь не представлены: чтение и запись
/// файлов — обязанность вызывающего кода (CLI), а не библиотеки.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Входной текст не является корректным JSON.
    #[error("session file does not contain valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Корневой элемент сессии не массив записей.
    #[error("session JSON is not an array of transaction entries")]
    NotAnArray,

    /// Запись сессии не содержит обязательного поля или содержит
    /// поле неверного типа.
    #[error("malformed session entry at index {index}: {source}")]
    MalformedEntry {
        /// Позиция записи в исходном массиве (0-based).
        index: usize,
        /// Исходная ошибка десериализации.
        source: serde_json::Error,
    },
}

/// Удобный alias для Result с ConvertError.
pub type ConvertResult<T> = Result<T, ConvertError>;
