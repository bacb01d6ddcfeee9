use std::collections::BTreeMap;

use mondai_config::quiz::QuizConfig;
use mondai_model::quiz::question::QuestionType;

/// Number of questions to request for one chunk. Larger chunks get proportionally
/// more questions, and every chunk gets one when there are fewer questions than chunks.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn questions_for_chunk(question_number: usize, chunk_number: usize, chunk_size: usize, avg_chunk_size: f64) -> usize {
    if question_number < chunk_number {
        return 1;
    }
    let coefficient = chunk_size as f64 / avg_chunk_size;
    (coefficient * question_number as f64 / chunk_number as f64).ceil() as usize
}

/// Mean chunk length in characters.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_chunk_size(chunks: &[String]) -> f64 {
    if chunks.is_empty() {
        return 0.0;
    }
    let total: usize = chunks.iter().map(|chunk| chunk.chars().count()).sum();
    total as f64 / chunks.len() as f64
}

/// Splits `per_chunk` over the requested types using the configured weights of
/// `difficulty`. Returns `None` when no requested type has a positive weight.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn type_counts(
    config: &QuizConfig,
    difficulty: &str,
    question_types: &[QuestionType],
    per_chunk: usize,
) -> Option<BTreeMap<QuestionType, usize>> {
    let weights: Vec<(QuestionType, f64)> = config
        .type_weights(difficulty)?
        .iter()
        .filter_map(|(name, weight)| {
            let kind = QuestionType::from_wire_name(name)?;
            (question_types.contains(&kind) && weight.is_finite() && *weight > 0.0).then_some((kind, *weight))
        })
        .collect();

    let sum: f64 = weights.iter().map(|(_, weight)| weight).sum();
    if weights.is_empty() || sum <= 0.0 {
        return None;
    }

    let counts: BTreeMap<QuestionType, usize> = weights
        .into_iter()
        .map(|(kind, weight)| (kind, (weight / sum * per_chunk as f64).ceil() as usize))
        .filter(|(_, count)| *count > 0)
        .collect();

    (!counts.is_empty()).then_some(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fewer_questions_than_chunks() {
        for chunk_size in [10, 1000, 100_000] {
            assert_eq!(questions_for_chunk(3, 5, chunk_size, 500.0), 1);
        }
    }

    #[test]
    fn test_proportional_to_chunk_size() {
        assert_eq!(questions_for_chunk(6, 3, 2000, 2000.0), 2);
        assert_eq!(questions_for_chunk(6, 3, 1000, 2000.0), 1);
        assert_eq!(questions_for_chunk(6, 3, 3000, 2000.0), 3);
        assert_eq!(questions_for_chunk(10, 3, 2000, 2000.0), 4);
    }

    #[test]
    fn test_monotonic_in_chunk_size() {
        let mut previous = 0;
        for chunk_size in (100..=5000).step_by(100) {
            let current = questions_for_chunk(12, 4, chunk_size, 1800.0);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_average_chunk_size() {
        let chunks = vec!["a".repeat(1000), "b".repeat(2000), "c".repeat(3000)];
        assert!((average_chunk_size(&chunks) - 2000.0).abs() < f64::EPSILON);
        assert!(average_chunk_size(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_type_counts_renormalize() {
        let config = QuizConfig::default();
        let counts = type_counts(
            &config,
            "easy",
            &[QuestionType::SingleCorrect, QuestionType::TrueFalse],
            4,
        )
        .unwrap();

        assert_eq!(
            counts,
            BTreeMap::from([(QuestionType::SingleCorrect, 2), (QuestionType::TrueFalse, 2)])
        );
    }

    #[test]
    fn test_type_counts_round_up() {
        let config = QuizConfig::default();
        let counts = type_counts(&config, "Hard", &QuestionType::ALL, 3).unwrap();

        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|count| *count >= 1));
        assert!(counts.values().sum::<usize>() >= 3);
    }

    #[test]
    fn test_type_counts_without_weights() {
        let config = QuizConfig::default();
        assert!(type_counts(&config, "Impossible", &QuestionType::ALL, 3).is_none());

        let mut config = QuizConfig::default();
        config.distribution.clear();
        assert!(type_counts(&config, "Easy", &[QuestionType::NoChoice], 3).is_none());
    }
}
