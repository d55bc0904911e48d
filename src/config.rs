//! Compiled-in configuration: webhook destinations and select option lists

/// Webhook receiving blog content requests
pub const BLOG_CONTENT_WEBHOOK_URL: &str =
    "https://n8n.dev.aioapp.com/webhook-test/5a6f3605-f853-4dee-b751-9d4b657a81bf";

/// Webhook receiving voice configuration requests
pub const VOICE_CONFIG_WEBHOOK_URL: &str =
    "https://n8n.dev.aioapp.com/webhook-test/6ea1b457-5d59-41be-8dda-b588521c5a7b";

/// A single choice in a select field: the value submitted to the webhook
/// and the label shown in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }

    /// Option whose submitted value is its display label
    pub const fn verbatim(label: &'static str) -> Self {
        Self {
            value: label,
            label,
        }
    }
}

/// Content preference choices for the blog content form
pub const CONTENT_PREFERENCE_OPTIONS: &[SelectOption] = &[
    SelectOption::new("ai-generated", "Ai Generated"),
    SelectOption::new("web-search", "Web Search"),
];

/// Voice type choices for the voice configuration form
pub const VOICE_TYPE_OPTIONS: &[SelectOption] = &[
    SelectOption::verbatim("Personal Voice (I, Me, My)"),
    SelectOption::verbatim("Talk to the Reader (You, Your)"),
    SelectOption::verbatim("Describe Others (He, She, They)"),
    SelectOption::verbatim("Collective Voice (We, Us, Our)"),
    SelectOption::verbatim("Professional Voice (No Pronouns)"),
];

/// Brand voice style choices for the voice configuration form
pub const BRAND_VOICE_OPTIONS: &[SelectOption] = &[
    SelectOption::verbatim("Professional and Authoritative Brand Voice Characteristics"),
    SelectOption::verbatim("Tech-Savvy and Innovative Brand Voice"),
    SelectOption::verbatim("Customer-Centric and Compassionate Brand Voice"),
    SelectOption::verbatim("Inspirational and Motivational Brand Voice"),
    SelectOption::verbatim("Storytelling Brand Voice Characteristics"),
];

/// Content structure choices for the voice configuration form
pub const CONTENT_STRUCTURE_OPTIONS: &[SelectOption] = &[
    SelectOption::verbatim("Listicle Structure"),
    SelectOption::verbatim("How to guide blog"),
    SelectOption::verbatim("Comparison"),
    SelectOption::verbatim("Problem Solution"),
    SelectOption::verbatim("Ultimate Guide"),
    SelectOption::verbatim("Pros and Cons"),
    SelectOption::verbatim("What's in it for Me?"),
    SelectOption::verbatim("Myth-Busting"),
];
