//! Prompt templates.

use gcore::{Corpus, Language, i18n::NOT_FOUND_EN};

/// Organization context for a scoped analysis.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    /// Display name of the organization.
    pub name: &'a str,
    /// The organization's documents, if it has any of its own.
    pub corpus: Option<&'a Corpus>,
}

/// Prompt asking for a short analysis of one metric of a country.
pub fn analysis(
    country: &str,
    dataset: &str,
    value: &str,
    unit: &str,
    language: Language,
    scope: Option<Scope<'_>>,
) -> String {
    let mut lines = Vec::with_capacity(16);
    match scope {
        None => lines.push(format!(
            "Provide a brief, insightful, and easy-to-understand socio-economic analysis for {country}, focusing on the following data point:"
        )),
        Some(scope) => lines.push(format!(
            "Provide a brief, insightful, and easy-to-understand analysis of the work of {} in {country}, focusing on the following data point:",
            scope.name
        )),
    }
    lines.push(format!("- Metric: {dataset}"));
    lines.push(format!("- Value: {value} {unit}").trim_end().to_owned());
    lines.push(String::new());
    lines.push(
        "Based on this single metric, explain what it might imply for the country's development, its people, and its standing in the region."
            .to_owned(),
    );

    if let Some(Scope {
        name,
        corpus: Some(corpus),
    }) = scope
    {
        lines.push(format!(
            "Relate the metric to the activities of {name} described in the documents below. Do not invent activities that are not described there."
        ));
        lines.push(String::new());
        lines.push("Organization Documents:".to_owned());
        lines.push("---".to_owned());
        lines.push(corpus.text().to_owned());
        lines.push("---".to_owned());
        lines.push(String::new());
    }

    lines.push(
        "Keep the analysis concise, to one or two paragraphs. Do not use markdown formatting. Just return plain text."
            .to_owned(),
    );
    lines.push(format!("Respond in {}.", language.name()));
    lines.join("\n")
}

/// Closed-book question answering over `corpus`.
pub fn search(query: &str, language: Language, corpus: &Corpus) -> String {
    [
        "You are a helpful research assistant.".to_owned(),
        "Your task is to answer the user's question based *only* on the content of the document provided below."
            .to_owned(),
        "Do not use any external knowledge.".to_owned(),
        format!(
            "If the information to answer the question is not found in the document, you MUST respond with the exact phrase: \"{NOT_FOUND_EN}\""
        ),
        format!("Your final response must be in {}.", language.name()),
        String::new(),
        format!("User's Question: \"{}\"", query.trim()),
        String::new(),
        "Document Content:".to_owned(),
        "---".to_owned(),
        corpus.text().to_owned(),
        "---".to_owned(),
    ]
    .join("\n")
}
