use serde::{Deserialize, Serialize};

/// Number of strategic moves requested from the generation service.
pub const PREDICTION_COUNT: usize = 3;

/// One strategic move returned by the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    title: String,
    description: String,
}

impl Prediction {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A prediction as laid out in the results grid, with its 1-based ordinal badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    ordinal: usize,
    title: String,
    description: String,
}

impl Card {
    pub fn from_predictions(predictions: &[Prediction]) -> Vec<Card> {
        predictions
            .iter()
            .enumerate()
            .map(|(i, p)| Card {
                ordinal: i + 1,
                title: p.title.clone(),
                description: p.description.clone(),
            })
            .collect()
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_deserializes_from_service_shape() {
        let p: Prediction =
            serde_json::from_str(r#"{"title":"Own the niche","description":"Because."}"#).unwrap();

        assert_eq!(p.title(), "Own the niche");
        assert_eq!(p.description(), "Because.");
    }

    #[test]
    fn test_prediction_requires_both_fields() {
        let result = serde_json::from_str::<Prediction>(r#"{"title":"Only a title"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_cards_are_numbered_from_one() {
        let predictions = vec![
            Prediction::new("A", "B"),
            Prediction::new("C", "D"),
            Prediction::new("E", "F"),
        ];

        let cards = Card::from_predictions(&predictions);

        let ordinals: Vec<usize> = cards.iter().map(|c| c.ordinal()).collect();
        let titles: Vec<&str> = cards.iter().map(|c| c.title()).collect();
        assert_eq!(ordinals, vec![1, 2, 3]);
        assert_eq!(titles, vec!["A", "C", "E"]);
        assert_eq!(cards[1].description(), "D");
    }
}
