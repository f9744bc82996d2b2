use std::fmt;

use chrono::TimeZone;

use crate::domain::log::model::LogRecord;
use crate::view::timestamp::format_created_at;

/// The visualize button of a card, keyed by log id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualizeAction {
    pub log_id: i64,
}

/// One rendered log record.
#[derive(Debug, Clone, PartialEq)]
pub struct LogCard {
    pub title: String,
    pub description: String,
    pub uploaded_at: String,
    pub action: VisualizeAction,
}

impl LogCard {
    /// Build the card, rendering `created_at` in `tz`.
    pub fn from_record<Tz>(record: &LogRecord, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            title: record.name.clone(),
            description: record.description.clone(),
            uploaded_at: format_created_at(&record.created_at, tz),
            action: VisualizeAction { log_id: record.id },
        }
    }

    pub fn description_line(&self) -> String {
        format!("Description: {}", self.description)
    }

    pub fn uploaded_at_line(&self) -> String {
        format!("Uploaded At: {}", self.uploaded_at)
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="form_area">
    <h4 class="title">{}</h4>
    <p class="sub_title">{}</p>
    <p class="sub_title">{}</p>
    <button class="btn" data-log-id="{}">Visualize</button>
</div>"#,
            escape_html(&self.title),
            escape_html(&self.description_line()),
            escape_html(&self.uploaded_at_line()),
            self.action.log_id,
        )
    }
}

impl fmt::Display for LogCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[#{}] {}", self.action.log_id, self.title)?;
        writeln!(f, "    {}", self.description_line())?;
        writeln!(f, "    {}", self.uploaded_at_line())?;
        write!(f, "    [Visualize] vcds-logview visualize {}", self.action.log_id)
    }
}

pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn record() -> LogRecord {
        LogRecord {
            id: 1,
            name: "a".into(),
            description: "d".into(),
            created_at: "2024-01-01T00:00:00Z".into(),
            vin: None,
            motor_type: None,
        }
    }

    #[test]
    fn card_shows_record_fields() {
        let card = LogCard::from_record(&record(), &FixedOffset::east_opt(0).unwrap());

        assert_eq!(card.title, "a");
        assert_eq!(card.description_line(), "Description: d");
        assert_eq!(card.uploaded_at_line(), "Uploaded At: 1/1/2024, 12:00:00 AM");
        assert_eq!(card.action, VisualizeAction { log_id: 1 });
    }

    #[test]
    fn html_escapes_server_strings() {
        let mut rec = record();
        rec.name = "<script>alert(1)</script>".into();
        let html = LogCard::from_record(&rec, &FixedOffset::east_opt(0).unwrap()).to_html();

        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"data-log-id="1""#));
    }

    #[test]
    fn display_lists_visualize_hint() {
        let card = LogCard::from_record(&record(), &FixedOffset::east_opt(0).unwrap());
        let text = card.to_string();
        assert!(text.starts_with("[#1] a\n"));
        assert!(text.ends_with("vcds-logview visualize 1"));
    }
}
