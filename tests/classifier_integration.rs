//! End-to-end exercises of the classification pipeline against a scripted
//! chat transport.

use async_trait::async_trait;
use helpdesk_classifier::chat::{ChatCompletion, ChatError, ChatRequest, RetryingChatClient};
use helpdesk_classifier::classifier::{ClassifierService, ClassifyError, ClassifyRequest};
use std::sync::atomic::{AtomicU32, Ordering};

const MODEL: &str = "test-model";

/// Transport that fails a configurable number of times before replying
/// with a fixed text.
struct FlakyTransport {
    failures_left: AtomicU32,
    calls: AtomicU32,
    reply: String,
}

impl FlakyTransport {
    fn new(failures: u32, reply: impl Into<String>) -> Self {
        Self {
            failures_left: AtomicU32::new(failures),
            calls: AtomicU32::new(0),
            reply: reply.into(),
        }
    }

    fn reliable(reply: impl Into<String>) -> Self {
        Self::new(0, reply)
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatCompletion for FlakyTransport {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ChatError> {
        assert_eq!(request.model, MODEL);
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failures_left.load(Ordering::SeqCst) > 0 {
            self.failures_left.fetch_sub(1, Ordering::SeqCst);
            return Err(ChatError::Transport("connection reset".to_string()));
        }
        Ok(self.reply.clone())
    }
}

fn service(transport: FlakyTransport) -> ClassifierService<FlakyTransport> {
    ClassifierService::new(transport, MODEL)
}

fn request(text: &str) -> ClassifyRequest {
    ClassifyRequest {
        name: None,
        topic: None,
        text: text.to_string(),
        generate_answer: false,
    }
}

#[tokio::test(start_paused = true)]
async fn full_extraction_is_valid_and_transliterated() {
    let reply = r#"Here is what I found:
```json
{"attributes": {"equipment_type": "Ноутбук", "failure_point": "Диск", "serial_number": "СЕ253140"}}
```
Let me know if you need anything else."#;
    let classifier = service(FlakyTransport::reliable(reply));

    let result = classifier
        .classify(&request("сломался диск в ноутбуке СЕ253140"))
        .await
        .unwrap();

    assert!(result.valid);
    assert!(result.missing_attributes.is_empty());
    assert!(result.answer.is_none());

    let names: Vec<&str> = result
        .attributes
        .iter()
        .map(|pair| pair.name.as_str())
        .collect();
    assert_eq!(names, vec!["equipment_type", "failure_point", "serial_number"]);

    let serial = result
        .attributes
        .iter()
        .find(|pair| pair.name == "serial_number")
        .unwrap();
    assert_eq!(serial.value, "CE253140");

    // Keywords carry the raw values, untouched by normalization.
    assert!(result.keywords.contains(&"СЕ253140".to_string()));
    assert!(result.keywords.contains(&"Ноутбук".to_string()));
}

#[tokio::test(start_paused = true)]
async fn missing_attributes_produce_generated_answer() {
    let reply = r#"{"attributes": {"equipment_type": "Ноутбук", "failure_point": null}}"#;
    let classifier = service(FlakyTransport::reliable(reply));

    let result = classifier
        .classify(&ClassifyRequest {
            name: Some("Иван".to_string()),
            topic: Some("Поломка".to_string()),
            text: "мой ноутбук не включается".to_string(),
            generate_answer: true,
        })
        .await
        .unwrap();

    assert!(!result.valid);
    assert_eq!(
        result.missing_attributes,
        vec!["failure_point", "serial_number"]
    );

    // The placeholder never promotes the serial number into the extracted set.
    assert_eq!(result.attributes.len(), 1);
    assert_eq!(result.attributes[0].name, "equipment_type");

    let answer = result.answer.expect("invalid result must carry the reply");
    assert!(answer.starts_with("Здравствуйте, Иван!"));
    assert!(answer.contains("- Точка отказа"));
    assert!(answer.contains("- Серийный номер"));
    assert!(!answer.contains("- Тип оборудования"));
}

#[tokio::test(start_paused = true)]
async fn answer_is_withheld_unless_requested() {
    let reply = r#"{"attributes": {"equipment_type": "Сервер"}}"#;
    let classifier = service(FlakyTransport::reliable(reply));

    let result = classifier.classify(&request("сервер шумит")).await.unwrap();

    assert!(!result.valid);
    assert!(result.answer.is_none());
}

#[tokio::test(start_paused = true)]
async fn out_of_schema_attributes_only_become_keywords() {
    let reply = r#"{"attributes": {"equipment_type": "Коммутатор", "color": "красный"}}"#;
    let classifier = service(FlakyTransport::reliable(reply));

    let result = classifier
        .classify(&request("красный коммутатор перегревается"))
        .await
        .unwrap();

    assert!(result.attributes.iter().all(|pair| pair.name != "color"));
    assert!(result.keywords.contains(&"красный".to_string()));
}

#[tokio::test(start_paused = true)]
async fn transient_failures_are_retried_until_the_reply_parses() {
    let reply = r#"{"attributes": {"equipment_type": "Точка доступа", "failure_point": "Wi-fi модуль", "serial_number": "E2440311114"}}"#;
    let classifier = service(FlakyTransport::new(4, reply));

    let result = classifier
        .classify(&request("точка доступа не раздает wi-fi"))
        .await
        .unwrap();

    assert!(result.valid);
    assert_eq!(classifier.transport().calls(), 5);
}

#[tokio::test(start_paused = true)]
async fn exhausted_retries_surface_as_a_hard_error() {
    let classifier = service(FlakyTransport::new(u32::MAX, ""));

    let err = classifier
        .classify(&request("ничего не работает"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClassifyError::Chat(ChatError::RetriesExhausted { attempts: 5 })
    ));
    assert_eq!(classifier.transport().calls(), 5);
}

#[tokio::test(start_paused = true)]
async fn prose_only_replies_exhaust_the_budget_too() {
    let classifier = service(FlakyTransport::reliable(
        "Извините, я не смог найти атрибуты в этом сообщении.",
    ));

    let err = classifier
        .classify(&request("ноутбук сломался"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClassifyError::Chat(ChatError::RetriesExhausted { attempts: 5 })
    ));
}

#[tokio::test(start_paused = true)]
async fn custom_retry_policy_is_honored_end_to_end() {
    let client = RetryingChatClient::new(FlakyTransport::new(u32::MAX, ""))
        .with_retry_policy(2, std::time::Duration::from_millis(1));
    let classifier = ClassifierService::with_client(client, MODEL);

    let err = classifier
        .classify(&request("ничего не работает"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClassifyError::Chat(ChatError::RetriesExhausted { attempts: 2 })
    ));
}

#[test]
fn schema_endpoint_lists_every_declared_attribute() {
    let classifier = service(FlakyTransport::reliable(""));
    let schema = classifier.schema();

    assert_eq!(schema.attribute_labels.len(), 3);
    assert_eq!(
        schema.attribute_labels.get("equipment_type").map(String::as_str),
        Some("Тип оборудования")
    );
    assert_eq!(
        schema.attribute_labels.get("failure_point").map(String::as_str),
        Some("Точка отказа")
    );
    assert_eq!(
        schema.attribute_labels.get("serial_number").map(String::as_str),
        Some("Серийный номер")
    );
}
