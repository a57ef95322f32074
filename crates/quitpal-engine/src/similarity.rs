use crate::vectorizer::TermCountMatrix;

/// Cosine similarity between two vectors.
///
/// Defined as `0.0` when either norm is zero or the lengths differ. For
/// non-negative count vectors the result lies in `[0, 1]`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let na: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if na == 0.0 || nb == 0.0 {
        0.0
    } else {
        dot / (na * nb)
    }
}

/// Score every row of `matrix` against the row at `query_row`.
///
/// The output has one score per row, in row order; the query row's
/// self-similarity is included. An out-of-range `query_row` scores zero
/// everywhere.
pub fn score_rows(matrix: &TermCountMatrix, query_row: usize) -> Vec<f32> {
    let Some(query) = matrix.row(query_row) else {
        return vec![0.0; matrix.len()];
    };
    matrix
        .rows()
        .map(|row| cosine_similarity(query, row))
        .collect()
}

/// Row indices ordered by score descending.
///
/// Ties break by original index ascending so the order is deterministic.
pub fn rank_descending(scores: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.cmp(&b))
    });
    order
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::vectorizer::TermCountMatrix;

    #[test]
    fn test_cosine_similarity_identical() {
        let v = vec![1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_cosine_similarity_symmetric() {
        let a = vec![1.0, 0.0, 2.0];
        let b = vec![0.0, 1.0, 1.0];
        assert!((cosine_similarity(&a, &b) - cosine_similarity(&b, &a)).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 0.001);
    }

    #[test]
    fn test_cosine_similarity_zero_norm() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_similarity_length_mismatch() {
        let a = vec![1.0];
        let b = vec![1.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_score_rows_self_is_highest() {
        let sentences = vec![
            "smoking is harmful".to_string(),
            "walking helps with cravings".to_string(),
            "cravings pass quickly".to_string(),
        ];
        let matrix = TermCountMatrix::fit(&sentences).unwrap();
        let scores = score_rows(&matrix, 2);
        assert_eq!(scores.len(), 3);
        assert!((scores[2] - 1.0).abs() < 0.001);
        assert!(scores[1] > scores[0]);
    }

    #[test]
    fn test_rank_descending_orders_by_score() {
        let order = rank_descending(&[0.1, 0.9, 0.5]);
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_rank_descending_ties_break_by_index() {
        let order = rank_descending(&[0.5, 0.5, 0.9, 0.5]);
        assert_eq!(order, vec![2, 0, 1, 3]);
    }
}
