use std::fmt;

use crate::view::card::LogCard;

/// Render target for log cards. Every render replaces the whole content.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CardContainer {
    cards: Vec<LogCard>,
}

impl CardContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn append(&mut self, card: LogCard) {
        self.cards.push(card);
    }

    pub fn replace_with<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = LogCard>,
    {
        self.clear();
        self.cards.extend(cards);
    }

    pub fn cards(&self) -> &[LogCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn to_html(&self) -> String {
        self.cards
            .iter()
            .map(LogCard::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for CardContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return write!(f, "(no logs uploaded yet)");
        }
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::card::VisualizeAction;

    fn card(id: i64) -> LogCard {
        LogCard {
            title: format!("log {id}"),
            description: "d".into(),
            uploaded_at: "1/1/2024, 12:00:00 AM".into(),
            action: VisualizeAction { log_id: id },
        }
    }

    #[test]
    fn replace_does_not_accumulate() {
        let mut container = CardContainer::new();
        container.replace_with(vec![card(1), card(2)]);
        container.replace_with(vec![card(3)]);

        assert_eq!(container.len(), 1);
        assert_eq!(container.cards()[0].action.log_id, 3);

        container.replace_with(Vec::new());
        assert!(container.is_empty());
    }

    #[test]
    fn html_keeps_order() {
        let mut container = CardContainer::new();
        container.append(card(2));
        container.append(card(1));

        let html = container.to_html();
        let first = html.find("log 2").unwrap();
        let second = html.find("log 1").unwrap();
        assert!(first < second);
    }
}
