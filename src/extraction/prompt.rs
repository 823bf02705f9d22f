//! The fixed few-shot prompt
//!
//! The model's behavior is bootstrapped entirely by in-context examples;
//! there is no structured-output mode. The message sequence is fixed and
//! ordered — a system message carrying one fully worked markup→JSON
//! example, a second worked example as a user/assistant exchange, then
//! the real sanitized markup. Reordering shifts output quality, so the
//! sequence is built in exactly this shape every time.

use serde::Serialize;

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction
    System,
    /// User turn
    User,
    /// Assistant turn
    Assistant,
}

/// One message in the outbound chat-completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Message role
    pub role: Role,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// System instruction: one fully worked markup→JSON pair demonstrating
/// the target schema, plus the missing-field sentinel rule.
pub const SCHEMA_INSTRUCTION: &str = r#"I have specified HTML content and the converted result of products data as JSON:
HTML:
  <ul>
    <li>
      <div>
        <div><a><div><span>Nike Air Max 90 x OFF-WHITE The Ten 2017</span></div><span>Opens in a new window or tab</span></a>
          <div>
            <div>
              <div><span>IDR9,247,938.75</span></div>
              <div><span>0 bids<span> · </span></span><span><span>Time left</span><span>6d 23h</span></span></div>
              <div><span>Buy It Now</span></div>
              <div><span>+IDR411,019.50 delivery</span></div>
              <div><span>from United Kingdom</span></div>
            </div>
          </div>
        </div>
      </div>
    </li>
    <li>
      <div>
        <div><a><div><span>Nike Air Max 90 SE Lucha Libre DM6178-010</span></div><span>Opens in a new window or tab</span></a>
          <div>
            <div>
              <div><span>IDR2,708,659.20<span> to </span>IDR3,050,497.20</span></div>
              <div><span>Buy It Now</span></div>
              <div><span>Free International Shipping</span></div>
              <div><span>from Japan</span></div>
            </div>
          </div>
        </div>
      </div>
    </li>
  </ul>
Converted JSON:
  [
    {
      "name": "Nike Air Max 90 x OFF-WHITE The Ten 2017",
      "price": "IDR9,247,938.75",
      "description": "+IDR411,019.50 delivery from United Kingdom"
    },
    {
      "name": "Nike Air Max 90 SE Lucha Libre DM6178-010",
      "price": "IDR2,708,659.20 to IDR3,050,497.20",
      "description": "Free International Shipping from Japan"
    }
  ]

If any field (e.g., product price or description) does not have a value, return '-'"#;

/// Second worked example, presented as a user turn: two listed items,
/// the second missing its price.
pub const WORKED_EXAMPLE_REQUEST: &str = r#"<ul>
  <li>
    <div>
      <div><a><div><span>Nike WMNS Air Rift Triple Black HF5389-001</span></div><span>Opens in a new window or tab</span></a>
        <div>
          <div>
            <div><span>IDR1,823,136.00<span> to </span>IDR3,434,658.00</span></div>
            <div><span>Buy It Now</span></div>
            <div><span>Free International Shipping</span></div>
            <div><span>from Japan</span></div>
            <div><span>Free returns</span></div>
          </div>
        </div>
      </div>
    </div>
  </li>
  <li>
    <div>
      <div><a><div><span>Nike React Pegasus Trail 4 GTX V2 Gore-Tex Black Men Trail Running HM9728-002</span></div><span>Opens in a new window or tab</span></a>
        <div>
          <div>
            <div><span></span></div>
            <div><span>Buy It Now</span></div>
            <div><span>Free International Shipping</span></div>
            <div><span>from Taiwan</span></div>
          </div>
        </div>
      </div>
    </div>
  </li>
</ul>"#;

/// The assistant reply matching [`WORKED_EXAMPLE_REQUEST`]: a valid JSON
/// array whose second object carries the `"-"` price sentinel.
pub const WORKED_EXAMPLE_REPLY: &str = r#"[
  {"name":"Nike WMNS Air Rift Triple Black HF5389-001","price":"IDR1,823,136.00 to IDR3,434,658.00","description":"Free International Shipping from Japan"},
  {"name":"Nike React Pegasus Trail 4 GTX V2 Gore-Tex Black Men Trail Running HM9728-002","price":"-","description":"Free International Shipping from Taiwan"}
]"#;

/// Build the fixed four-message sequence with the real sanitized markup
/// as the final user message.
pub fn few_shot_messages(markup: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(Role::System, SCHEMA_INSTRUCTION),
        ChatMessage::new(Role::User, WORKED_EXAMPLE_REQUEST),
        ChatMessage::new(Role::Assistant, WORKED_EXAMPLE_REPLY),
        ChatMessage::new(Role::User, markup),
    ]
}
