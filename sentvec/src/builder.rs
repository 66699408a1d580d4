//! Turns input texts into records

use crate::embedding::Encoder;
use crate::error::Result;
use crate::record::Record;

/// Builds one [`Record`] per input text using an owned encoder handle
pub struct RecordBuilder<E> {
    encoder: E,
    normalize: bool,
}

impl<E: Encoder> RecordBuilder<E> {
    pub fn new(encoder: E, normalize: bool) -> Self {
        Self { encoder, normalize }
    }

    /// Encode every text in order.
    ///
    /// Duplicates are kept and each gets its own id. The first encoding
    /// failure aborts the whole batch.
    pub fn build<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<Record>> {
        let mut records = Vec::with_capacity(texts.len());
        for (i, text) in texts.iter().enumerate() {
            let text = text.as_ref();
            log::info!("Generating embedding {}/{}: {:?}", i + 1, texts.len(), text);
            let embedding = self.encoder.encode(text, self.normalize)?;
            records.push(Record::new(text, embedding));
        }
        Ok(records)
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn normalize(&self) -> bool {
        self.normalize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::l2_norm;
    use crate::embedding::testing::HashEncoder;
    use crate::error::SentvecError;
    use std::collections::HashSet;

    const TEXTS: [&str; 3] = [
        "Brasília é a capital do Brasil.",
        "O maior cajueiro do mundo está no Rio Grande do Norte.",
        "O Sol é uma estrela da sequência principal do tipo espectral G2.",
    ];

    #[test]
    fn test_one_record_per_text_in_order() {
        let builder = RecordBuilder::new(HashEncoder::new(32), true);
        let records = builder.build(&TEXTS).unwrap();
        assert_eq!(records.len(), TEXTS.len());
        for (record, text) in records.iter().zip(TEXTS) {
            assert_eq!(record.text, text);
            assert_eq!(record.dimension(), 32);
        }
    }

    #[test]
    fn test_text_kept_verbatim() {
        let texts = ["  padded  ", "", "linha\nquebrada"];
        let records = RecordBuilder::new(HashEncoder::new(4), true)
            .build(&texts)
            .unwrap();
        let got: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(got, texts);
    }

    #[test]
    fn test_duplicates_get_distinct_ids() {
        let texts = vec!["igual".to_string(); 5];
        let records = RecordBuilder::new(HashEncoder::new(4), true)
            .build(&texts)
            .unwrap();
        let ids: HashSet<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 5);
        assert!(records.windows(2).all(|w| w[0].embedding == w[1].embedding));
    }

    #[test]
    fn test_normalized_embeddings_have_unit_norm() {
        let records = RecordBuilder::new(HashEncoder::new(64), true)
            .build(&TEXTS)
            .unwrap();
        for record in &records {
            assert!((l2_norm(&record.embedding) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_rerun_same_vectors_new_ids() {
        let builder = RecordBuilder::new(HashEncoder::new(16), true);
        let first = builder.build(&TEXTS).unwrap();
        let second = builder.build(&TEXTS).unwrap();
        for (a, b) in first.iter().zip(&second) {
            assert_ne!(a.id, b.id);
            for (x, y) in a.embedding.iter().zip(&b.embedding) {
                assert!((x - y).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let texts: [&str; 0] = [];
        let records = RecordBuilder::new(HashEncoder::new(8), true)
            .build(&texts)
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_failure_mid_loop_aborts() {
        let builder = RecordBuilder::new(HashEncoder::failing_on(8, TEXTS[1]), true);
        let err = builder.build(&TEXTS).unwrap_err();
        assert!(matches!(err, SentvecError::Encoding(_)));
        // The encoder's error is returned as-is, for the caller to report
        assert_eq!(
            err.to_string(),
            format!("Embedding error: cannot encode {:?}", TEXTS[1])
        );
    }
}
