//! The classification orchestrator: prompt building, the LLM round trip,
//! validation, and assembly of the outward result.

use super::dto::{AttributePair, ClassifiedMessage, ClassifyRequest, SchemaResponse};
use super::normalize::{MAX_NAME_LEN, MAX_TEXT_LEN, MAX_TOPIC_LEN, normalize_user_text};
use super::schema::{AttributeDefinition, SCHEMA, attribute_labels};
use super::validate::{RawAttributes, ValidationOutcome, validate_attributes};
use crate::chat::{ChatCompletion, ChatError, ChatMessage, ChatRequest, RetryingChatClient};
use crate::prompt::render_prompt;
use minijinja::context;
use serde::Deserialize;
use thiserror::Error;

const SYSTEM_PROMPT: &str = "You are an assistant in the help desk of a company that manufactures micro electronics devices";

/// JSON envelope the model is instructed to reply with.
const RESPONSE_FORMAT: &str = r#"{
  "attributes": {
    "attribute_name_1": "attribute_1_value",
    "attribute_name_2": "attribute_2_value"
    ...
  }
}"#;

const EXTRACTION_TEMPLATE: &str = r#"Below there is a text in Russian between tag BEGIN:MESSAGE and END:MESSAGE.
Also below there is topic of that text between tag BEGIN:TOPIC and END:TOPIC.
You have to try to extract from that text as much as possible attributes by the following schema:

{{ attribute_schema }}

Use the following JSON format to output found attributes:

{{ response_format }}

Attribute must have first value if there are many suitable values. Set null for attributes with no value.

BEGIN:TOPIC
{{ topic }}
END:TOPIC

BEGIN:MESSAGE
{{ text }}
END:MESSAGE
"#;

const ANSWER_TEMPLATE: &str = "{{ greeting }}
Спасибо, что обратились в нашу службу поддержки! Чтобы мы могли максимально эффективно и оперативно помочь вам с вашей проблемой, нам потребуется дополнительная информация.

Пожалуйста, укажите следующие данные:
{% for title in missing_titles -%}
- {{ title }}
{% endfor %}
Как только мы получим эти данные, наши специалисты смогут более точно диагностировать проблему и предложить возможные решения.

Спасибо за сотрудничество!
";

/// Shape of the model's JSON payload.
#[derive(Debug, Deserialize)]
struct LlmClassificationResponse {
    attributes: RawAttributes,
}

/// Errors from the classification pipeline.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Chat(#[from] ChatError),

    /// A template failed to render; a programming error, not an LLM one.
    #[error("prompt rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}

/// Stateless per-request classification pipeline over a chat transport.
pub struct ClassifierService<C> {
    client: RetryingChatClient<C>,
    model: String,
}

impl<C: ChatCompletion> ClassifierService<C> {
    pub fn new(transport: C, model: impl Into<String>) -> Self {
        Self {
            client: RetryingChatClient::new(transport),
            model: model.into(),
        }
    }

    /// Builds a service around an already configured retrying client.
    pub fn with_client(client: RetryingChatClient<C>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// The wrapped transport.
    pub fn transport(&self) -> &C {
        self.client.transport()
    }

    /// The declared schema as attribute name → display title.
    pub fn schema(&self) -> SchemaResponse {
        SchemaResponse {
            attribute_labels: attribute_labels(),
        }
    }

    /// Runs the full pipeline for one inbound message.
    ///
    /// Missing attributes are a normal outcome and are reported in the
    /// result; only an exhausted retry budget (or a template bug) errors.
    pub async fn classify(
        &self,
        request: &ClassifyRequest,
    ) -> Result<ClassifiedMessage, ClassifyError> {
        let topic = normalize_user_text(request.topic.as_deref(), MAX_TOPIC_LEN, "topic");
        let text = normalize_user_text(Some(&request.text), MAX_TEXT_LEN, "text");
        let name = normalize_user_text(request.name.as_deref(), MAX_NAME_LEN, "name");

        let chat_request = ChatRequest {
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_extraction_prompt(&topic, &text)?),
            ],
            model: self.model.clone(),
            temperature: None,
        };

        let response: LlmClassificationResponse =
            self.client.request_structured(&chat_request).await?;
        let raw = drop_empty_values(response.attributes);
        let outcome = validate_attributes(&raw);

        let answer = if !outcome.valid && request.generate_answer {
            Some(build_answer(&name, &outcome)?)
        } else {
            None
        };

        Ok(assemble_result(raw, outcome, answer))
    }
}

/// Drops attributes the model explicitly nulled or left blank, so the
/// validator and the keyword list only ever see real values.
fn drop_empty_values(attributes: RawAttributes) -> RawAttributes {
    attributes
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_some_and(|v| !v.is_empty()))
        .collect()
}

fn build_extraction_prompt(topic: &str, text: &str) -> Result<String, minijinja::Error> {
    let attribute_schema: Vec<String> = SCHEMA.iter().map(describe_attribute).collect();
    render_prompt(
        EXTRACTION_TEMPLATE,
        context! {
            attribute_schema => attribute_schema.join("\n\n"),
            response_format => RESPONSE_FORMAT,
            topic => topic,
            text => text,
        },
    )
}

/// One schema attribute rendered as prompt guidance: enums get the
/// exhaustive value list, everything else gets illustrative examples.
fn describe_attribute(attr: &AttributeDefinition) -> String {
    let mut described = format!("Attribute with name '{}'.", attr.name);
    if let Some(hint) = attr.hint {
        described.push(' ');
        described.push_str(hint);
    }
    if attr.is_enum {
        described.push_str(" Exact list of possible attribute values:");
    } else {
        described.push_str(" Example list of some of attribute values:");
    }
    described.push_str(&attr.examples.join(", "));
    described.push('.');
    described
}

/// Renders the customer-facing follow-up listing what is still needed,
/// with the missing display titles in schema order.
fn build_answer(name: &str, outcome: &ValidationOutcome) -> Result<String, minijinja::Error> {
    let greeting = if name.is_empty() {
        "Здравствуйте!".to_string()
    } else {
        format!("Здравствуйте, {name}!")
    };

    let missing_titles: Vec<&str> = SCHEMA
        .iter()
        .filter(|attr| outcome.missing_attributes.iter().any(|m| m == attr.name))
        .map(|attr| attr.title)
        .collect();

    render_prompt(
        ANSWER_TEMPLATE,
        context! {
            greeting => greeting,
            missing_titles => missing_titles,
        },
    )
}

/// Builds the outward result from the raw extraction and its validation.
fn assemble_result(
    raw: RawAttributes,
    outcome: ValidationOutcome,
    answer: Option<String>,
) -> ClassifiedMessage {
    let attributes = SCHEMA
        .iter()
        .filter(|attr| !outcome.missing_attributes.iter().any(|m| m == attr.name))
        .map(|attr| AttributePair {
            name: attr.name.to_string(),
            value: outcome
                .normalized_attributes
                .get(attr.name)
                .and_then(|value| value.as_deref())
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
        })
        .collect();

    let keywords = raw.into_values().flatten().collect();

    ClassifiedMessage {
        valid: outcome.valid,
        attributes,
        missing_attributes: outcome.missing_attributes,
        keywords,
        answer,
    }
}
