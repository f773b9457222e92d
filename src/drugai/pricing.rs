use serde::Serialize;

pub const SUBSCRIBE_ROUTE: &str = "/subscribe";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub name: &'static str,
    pub tagline: &'static str,
    pub monthly_price_usd: u32,
    pub predictions_per_month: u32,
    pub concurrent_jobs: u32,
    pub support: &'static str,
    pub highlighted: bool,
}

static PLANS: [Plan; 2] = [
    Plan {
        name: "Free",
        tagline: "Get started with basic predictions.",
        monthly_price_usd: 0,
        predictions_per_month: 100,
        concurrent_jobs: 1,
        support: "Community forum support",
        highlighted: false,
    },
    Plan {
        name: "Pro",
        tagline: "For professionals needing higher throughput.",
        monthly_price_usd: 29,
        predictions_per_month: 10_000,
        concurrent_jobs: 10,
        support: "Priority email support",
        highlighted: true,
    },
];

pub fn plans() -> &'static [Plan] {
    &PLANS
}

pub fn plan(name: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Next step after the user asks to subscribe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeAction {
    StartCheckout,
    SignIn { redirect_url: String },
}

pub fn subscribe_action(signed_in: bool) -> SubscribeAction {
    if signed_in {
        SubscribeAction::StartCheckout
    } else {
        SubscribeAction::SignIn {
            redirect_url: SUBSCRIBE_ROUTE.to_string(),
        }
    }
}
