//! # Statements
//!
//! Renders a customer's rentals as a plain-text, HTML or JSON statement.
//!
//! ## Output Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TEXT                              HTML                                 │
//! │  ────                              ────                                 │
//! │  Rental Record for A               <h1>Rentals for <em>A</em></h1><p>   │
//! │  \tregular1\t3.5                   regular1: 3.5<br>                    │
//! │  \tnew_release1\t6.0               new_release1: 6.0<br>                │
//! │  Amount owed is 9.5                <p>You own <em>9.5</em></p>          │
//! │  You earned 3 frequent ...         On this rental you earned ...</p>    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All renderers work from a [`StatementSummary`], so every format reports
//! the same figures.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::PriceCategory;
use crate::rental::Rental;

// =============================================================================
// Statement Format
// =============================================================================

/// Output format of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementFormat {
    /// Tab-separated plain text.
    #[default]
    Text,
    /// HTML fragment.
    Html,
    /// Pretty-printed JSON summary.
    Json,
}

impl fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementFormat::Text => write!(f, "text"),
            StatementFormat::Html => write!(f, "html"),
            StatementFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for StatementFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(StatementFormat::Text),
            "html" => Ok(StatementFormat::Html),
            "json" => Ok(StatementFormat::Json),
            other => Err(format!(
                "Unknown statement format: '{}'. Valid options: text, html, json",
                other
            )),
        }
    }
}

// =============================================================================
// Statement Summary
// =============================================================================

/// One rental as it appears on a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    pub title: String,
    pub category: PriceCategory,
    pub days_rented: u32,
    /// Charge in cents.
    pub charge: Money,
    /// Charge as printed on the statement.
    pub charge_formatted: String,
    pub points: u32,
}

impl StatementLine {
    /// Snapshots a rental's current pricing.
    pub fn from_rental(rental: &Rental) -> Self {
        let charge = rental.charge();
        StatementLine {
            title: rental.title(),
            category: rental.movie().category(),
            days_rented: rental.days_rented(),
            charge,
            charge_formatted: charge.to_string(),
            points: rental.frequent_renter_points(),
        }
    }
}

/// Snapshot of everything a statement reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementSummary {
    pub customer: String,
    pub lines: Vec<StatementLine>,
    /// Total charge in cents.
    pub total_charge: Money,
    pub total_charge_formatted: String,
    pub total_points: u32,
}

impl StatementSummary {
    /// Builds a summary for `customer` from rentals in statement order.
    pub fn new<'a>(customer: &str, rentals: impl IntoIterator<Item = &'a Rental>) -> Self {
        let lines: Vec<StatementLine> = rentals
            .into_iter()
            .map(StatementLine::from_rental)
            .collect();
        let total_charge: Money = lines.iter().map(|line| line.charge).sum();
        let total_points = lines.iter().map(|line| line.points).sum();

        StatementSummary {
            customer: customer.to_string(),
            lines,
            total_charge,
            total_charge_formatted: total_charge.to_string(),
            total_points,
        }
    }

    /// Renders the summary in the requested format.
    pub fn render(&self, format: StatementFormat) -> CoreResult<String> {
        match format {
            StatementFormat::Text => Ok(render_text(self)),
            StatementFormat::Html => Ok(render_html(self)),
            StatementFormat::Json => render_json(self),
        }
    }
}

// =============================================================================
// Renderers
// =============================================================================

/// Plain-text statement; the last line has no trailing newline.
pub fn render_text(summary: &StatementSummary) -> String {
    let mut result = format!("Rental Record for {}\n", summary.customer);
    for line in &summary.lines {
        result.push_str(&format!("\t{}\t{}\n", line.title, line.charge));
    }
    result.push_str(&format!("Amount owed is {}\n", summary.total_charge));
    result.push_str(&format!(
        "You earned {} frequent renter points",
        summary.total_points
    ));
    result
}

/// HTML statement fragment. Names and titles are escaped.
pub fn render_html(summary: &StatementSummary) -> String {
    let mut result = format!(
        "<h1>Rentals for <em>{}</em></h1><p>\n",
        escape_html(&summary.customer)
    );
    for line in &summary.lines {
        result.push_str(&format!("{}: {}<br>\n", escape_html(&line.title), line.charge));
    }
    result.push_str(&format!("<p>You own <em>{}</em></p>\n", summary.total_charge));
    result.push_str(&format!(
        "On this rental you earned <em>{}</em> frequent renter points</p>",
        summary.total_points
    ));
    result
}

/// Pretty-printed JSON statement.
pub fn render_json(summary: &StatementSummary) -> CoreResult<String> {
    serde_json::to_string_pretty(summary).map_err(CoreError::from)
}

fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::Movie;

    fn rentals() -> Vec<Rental> {
        vec![
            Rental::new(Movie::new("Alien", PriceCategory::Regular).into_shared(), 3).unwrap(),
            Rental::new(Movie::new("Heat", PriceCategory::NewRelease).into_shared(), 1).unwrap(),
        ]
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("TEXT".parse::<StatementFormat>(), Ok(StatementFormat::Text));
        assert_eq!("html".parse::<StatementFormat>(), Ok(StatementFormat::Html));
        assert_eq!("json".parse::<StatementFormat>(), Ok(StatementFormat::Json));
        assert!("pdf".parse::<StatementFormat>().is_err());
        assert_eq!(StatementFormat::default(), StatementFormat::Text);
    }

    #[test]
    fn test_summary_totals() {
        let rentals = rentals();
        let summary = StatementSummary::new("Dana", &rentals);

        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].charge_formatted, "3.5");
        assert_eq!(summary.lines[1].category, PriceCategory::NewRelease);
        assert_eq!(summary.total_charge.cents(), 650);
        assert_eq!(summary.total_charge_formatted, "6.5");
        assert_eq!(summary.total_points, 2);
    }

    #[test]
    fn test_render_text() {
        let rentals = rentals();
        let text = render_text(&StatementSummary::new("Dana", &rentals));
        assert_eq!(
            text,
            "Rental Record for Dana\n\tAlien\t3.5\n\tHeat\t3.0\n\
             Amount owed is 6.5\nYou earned 2 frequent renter points"
        );
    }

    #[test]
    fn test_render_html_escapes_markup() {
        let movie = Movie::new("Tom & Jerry", PriceCategory::Children).into_shared();
        let rentals = vec![Rental::new(movie, 1).unwrap()];
        let html = render_html(&StatementSummary::new("<b>Dana</b>", &rentals));

        assert!(html.starts_with("<h1>Rentals for <em>&lt;b&gt;Dana&lt;/b&gt;</em></h1><p>\n"));
        assert!(html.contains("Tom &amp; Jerry: 1.5<br>\n"));
    }

    #[test]
    fn test_escape_borrows_plain_text() {
        assert!(matches!(escape_html("Alien"), Cow::Borrowed("Alien")));
        assert_eq!(escape_html("\"quoted\" 'x'"), "&quot;quoted&quot; &#39;x&#39;");
    }

    #[test]
    fn test_render_json() {
        let rentals = rentals();
        let json = StatementSummary::new("Dana", &rentals)
            .render(StatementFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["customer"], "Dana");
        assert_eq!(value["total_charge"], 650);
        assert_eq!(value["total_charge_formatted"], "6.5");
        assert_eq!(value["lines"][1]["category"], "new_release");
    }
}
