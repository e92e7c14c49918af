//! Wire format of the remote trivia API.
//!
//! A `GET {base}/category?id={n}` returns one category together with its full
//! clue list. These types mirror that payload; fields the game never reads
//! (clue values, air dates) are left to serde's unknown-field handling.

use serde::{Deserialize, Serialize};

/// Payload of a single `category` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCategory {
    pub id: u32,
    pub title: String,
    pub clues: Vec<ApiClue>,
}

/// One clue entry as served by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiClue {
    pub id: u32,
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_payload_deserializes_and_skips_unknown_fields() {
        let payload = r#"{
            "id": 11,
            "title": "Literature",
            "clues": [
                {"id": 101, "question": "Hamlet Author", "answer": "Shakespeare", "value": 200},
                {"id": 102, "question": "Bell Jar Author", "answer": "Plath", "value": 400}
            ],
            "clues_count": 2
        }"#;

        let category: ApiCategory = serde_json::from_str(payload).unwrap();

        assert_eq!(category.id, 11);
        assert_eq!(category.title, "Literature");
        assert_eq!(category.clues.len(), 2);
        assert_eq!(category.clues[0].question, "Hamlet Author");
        assert_eq!(category.clues[1].answer, "Plath");
    }
}
