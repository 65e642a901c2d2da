//! Prompt templates and canned fallback strings.

/// Priming instruction for the chat session.
pub const SYSTEM_PRIMER: &str = "You are an expert AI assistant. You can answer any question \
the user asks. If the question is about trading, provide concise, helpful advice. If it is \
about other topics, answer helpfully and accurately within your knowledge cutoff.";

/// Model-side acknowledgement used to seed the chat history.
pub const PRIMER_ACK: &str =
    "Understood. I'm ready to help users with trading insights and platform navigation.";

/// Shown instead of a raw error when the chat upstream fails.
pub const OFFLINE_REPLY: &str =
    "I'm having trouble connecting to my brain right now. Please try again in a moment.";

/// Fallback for the market-insight prompt.
pub const INSIGHT_UNAVAILABLE: &str = "AI analysis currently unavailable.";

/// Fallback for the risk-assessment prompt.
pub const RISK_UNAVAILABLE: &str = "Unable to assess risk at this moment.";

/// Builds the market-insight prompt from a serialized market snapshot.
pub fn trade_insight_prompt(market_data: &serde_json::Value) -> String {
    format!(
        "Analyze the following market data and provide a concise trading insight:\n{}\n\nFocus on risk factors and potential upside.",
        market_data
    )
}

/// Builds the trader risk-assessment prompt.
pub fn risk_assessment_prompt(trader_profile: &serde_json::Value) -> String {
    format!(
        "Assess the risk level for this trader strictly based on data: {}",
        trader_profile
    )
}
