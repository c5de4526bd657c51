use tabled::{settings::Style, Table, Tabled};

use crate::snippet::Snippet;

#[derive(Tabled)]
pub struct SnippetRow {
    #[tabled(rename = "Keyword")]
    pub keyword: String,
    #[tabled(rename = "Message")]
    pub message: String,
}

impl From<&Snippet> for SnippetRow {
    fn from(snippet: &Snippet) -> Self {
        Self {
            keyword: snippet.keyword.clone(),
            message: snippet.message.clone(),
        }
    }
}

/// Render search hits as a table; empty input renders as an empty string
pub fn snippet_table(snippets: &[Snippet]) -> String {
    if snippets.is_empty() {
        return String::new();
    }

    let rows: Vec<SnippetRow> = snippets.iter().map(SnippetRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}
