use crate::config::DrugaiConfig;
use crate::pipeline::PageResult;
use crate::pricing::Plan;
use crate::service::checkout::CheckoutOutcome;
use crate::service::inference::InferenceResponse;

pub mod browse;
pub mod config;
pub mod invoke;
pub mod pricing;
pub mod status;
pub mod subscribe;
pub mod tags;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub page: Option<PageResult>,
    pub tags: Vec<String>,
    pub plans: Vec<Plan>,
    pub inference: Option<InferenceResponse>,
    pub checkout: Option<CheckoutOutcome>,
    pub config: Option<DrugaiConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_page(mut self, page: PageResult) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_plans(mut self, plans: Vec<Plan>) -> Self {
        self.plans = plans;
        self
    }

    pub fn with_inference(mut self, response: InferenceResponse) -> Self {
        self.inference = Some(response);
        self
    }

    pub fn with_checkout(mut self, outcome: CheckoutOutcome) -> Self {
        self.checkout = Some(outcome);
        self
    }

    pub fn with_config(mut self, config: DrugaiConfig) -> Self {
        self.config = Some(config);
        self
    }
}
