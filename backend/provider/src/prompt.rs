//! Prompt construction for analysis requests.
//!
//! The system prompt pins the markdown dialect the insights parser consumes
//! (`##` section headings, `-` bullets). The user prompt enumerates only the
//! data slices the request opted into.

use mindtrace_core::AnalysisRequest;

/// System prompt sent with every analysis call.
pub fn system_prompt() -> String {
    "You are a behavioral health analyst. Review the user's tracked data and \
     respond in markdown. Use `##` headings to title each insight section \
     (for example `## Patterns`, `## Triggers`, `## Suggestions`) and `-` \
     bullets for individual observations. Keep each section short and \
     concrete. Do not include any preamble before the first heading."
        .to_string()
}

/// User prompt describing the analysis window and selected data slices.
pub fn user_prompt(request: &AnalysisRequest) -> String {
    let mut sources = Vec::new();
    if request.include_patterns {
        sources.push("logged behavior patterns and their frequency");
    }
    if request.include_journals {
        sources.push("journal entries");
    }
    if request.include_medications {
        sources.push("medication intake records");
    }

    let sources = if sources.is_empty() {
        "whatever general guidance applies".to_string()
    } else {
        sources.join(", ")
    };

    format!(
        "Analyze the last {} days of my data. Consider: {}. Point out \
         recurring patterns, likely triggers, what seems to be working, and \
         any correlations worth watching.",
        request.timeframe_days, sources
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_reflects_timeframe() {
        let request = AnalysisRequest {
            timeframe_days: 7,
            ..Default::default()
        };
        assert!(user_prompt(&request).contains("last 7 days"));
    }

    #[test]
    fn user_prompt_omits_excluded_sources() {
        let request = AnalysisRequest {
            include_medications: false,
            ..Default::default()
        };
        let prompt = user_prompt(&request);
        assert!(prompt.contains("journal entries"));
        assert!(!prompt.contains("medication"));
    }

    #[test]
    fn user_prompt_with_no_sources_still_asks_something() {
        let request = AnalysisRequest {
            include_patterns: false,
            include_journals: false,
            include_medications: false,
            ..Default::default()
        };
        assert!(user_prompt(&request).contains("general guidance"));
    }

    #[test]
    fn system_prompt_pins_parser_dialect() {
        let prompt = system_prompt();
        assert!(prompt.contains("`##`"));
        assert!(prompt.contains("`-`"));
    }
}
