//! The fixed attribute catalog the classifier extracts against.
//!
//! The schema is defined once, is immutable for the process lifetime, and
//! is shared read-only across all requests.

use std::collections::BTreeMap;

pub const ATTR_EQUIPMENT_TYPE: &str = "equipment_type";
pub const ATTR_FAILURE_POINT: &str = "failure_point";
pub const ATTR_SERIAL_NUMBER: &str = "serial_number";

/// Shown in place of an absent serial number.
pub const SERIAL_EMPTY_PLACEHOLDER: &str = "Уточнить";

/// One attribute the model is asked to extract.
///
/// A plain flag-tagged record: the validator checks the flags, nothing
/// dispatches on behavior.
#[derive(Debug, Clone, Copy)]
pub struct AttributeDefinition {
    /// Unique key, stable for the process lifetime.
    pub name: &'static str,
    /// Human-readable label surfaced to callers.
    pub title: &'static str,
    /// Sample values; the exhaustive legal set when `is_enum` is true.
    pub examples: &'static [&'static str],
    /// The value set is closed and is presented to the model as such.
    pub is_enum: bool,
    /// Remap Cyrillic lookalike characters to Latin after extraction.
    pub convert_to_latin: bool,
    /// Upper-case the extracted value. No current attribute sets this.
    pub upper_case: bool,
    /// Extra guidance injected into the extraction prompt.
    pub hint: Option<&'static str>,
    /// Fallback substituted when the attribute is absent from the reply.
    pub empty_placeholder: Option<&'static str>,
}

/// The declared attribute schema, in prompt and validation order.
pub const SCHEMA: &[AttributeDefinition] = &[
    AttributeDefinition {
        name: ATTR_EQUIPMENT_TYPE,
        title: "Тип оборудования",
        examples: &["Ноутбук", "Сервер", "Коммутатор", "Точка доступа", "Контролллер"],
        is_enum: true,
        convert_to_latin: false,
        upper_case: false,
        hint: None,
        empty_placeholder: None,
    },
    AttributeDefinition {
        name: ATTR_FAILURE_POINT,
        title: "Точка отказа",
        examples: &[
            "Jack",
            "SFP модуль",
            "Wi-fi антенна",
            "Wi-fi модуль",
            "Аккумулятор",
            "Блок питания",
            "Вентилятор",
            "Динамики",
            "Диск",
            "Камера",
            "Клавиатура",
            "Консультация",
            "Корпус",
            "Материнская плата",
            "Матрица",
            "Оперативная память",
            "Программное обеспечение",
            "Сервер",
        ],
        is_enum: true,
        convert_to_latin: false,
        upper_case: false,
        hint: Some(
            "Try to understand and logically infer one of suggested values. This attribute generally means what part or module was broken in equipment.",
        ),
        empty_placeholder: None,
    },
    AttributeDefinition {
        name: ATTR_SERIAL_NUMBER,
        title: "Серийный номер",
        examples: &["C253140360", "CKM01230505747", "D119990456", "E2440311114"],
        is_enum: false,
        convert_to_latin: true,
        upper_case: false,
        hint: Some("It must be some kind of serial number of equipment."),
        empty_placeholder: Some(SERIAL_EMPTY_PLACEHOLDER),
    },
];

/// Looks up an attribute's display title by name.
pub fn title_of(name: &str) -> Option<&'static str> {
    SCHEMA
        .iter()
        .find(|attr| attr.name == name)
        .map(|attr| attr.title)
}

/// Name → display title for every declared attribute.
pub fn attribute_labels() -> BTreeMap<String, String> {
    SCHEMA
        .iter()
        .map(|attr| (attr.name.to_string(), attr.title.to_string()))
        .collect()
}
