//! CSV ingestion for interaction records

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use polars::prelude::*;

use crate::data::AggregatedPair;
use crate::error::AnalysisError;

/// Load aggregated interaction pairs from a CSV file.
///
/// Expects `member_a` and `member_b` columns. A `count` column is
/// optional: without one, every row counts as a single observed
/// interaction. Duplicate rows for the same unordered pair aggregate into
/// one per-pair count either way.
pub fn load_interaction_pairs(path: &str) -> Result<Vec<AggregatedPair>> {
    log::info!("Reading interaction data: {}", path);

    if !Path::new(path).exists() {
        return Err(AnalysisError::MissingInput.into());
    }

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()?
        .collect()?;

    log::info!("Loaded {} interaction records", df.height());
    if df.height() == 0 {
        return Err(AnalysisError::MissingInput.into());
    }

    let member_a = column_str(&df, "member_a")?;
    let member_b = column_str(&df, "member_b")?;
    let counts = match df.column("count") {
        Ok(column) => Some(column.i64().map_err(|_| schema_error("count"))?),
        Err(_) => None,
    };

    // Fold rows into per-pair counts keyed by the unordered pair.
    let mut aggregated: BTreeMap<(String, String), u32> = BTreeMap::new();
    for row in 0..df.height() {
        let a = member_a.get(row).ok_or_else(|| schema_error("member_a"))?;
        let b = member_b.get(row).ok_or_else(|| schema_error("member_b"))?;
        let count = match counts {
            Some(column) => {
                let value = column.get(row).ok_or_else(|| schema_error("count"))?;
                if value < 1 {
                    return Err(schema_error("count"));
                }
                value as u32
            }
            None => 1,
        };

        let key = if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        };
        *aggregated.entry(key).or_insert(0) += count;
    }

    log::info!("Aggregated {} member pairs", aggregated.len());

    Ok(aggregated
        .into_iter()
        .map(|((member_a, member_b), count)| AggregatedPair {
            member_a,
            member_b,
            count,
        })
        .collect())
}

fn column_str<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    df.column(name)
        .and_then(|column| column.str())
        .map_err(|_| schema_error(name))
}

fn schema_error(field: &str) -> anyhow::Error {
    AnalysisError::Schema {
        field: field.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("temp file should be created");
        file.write_all(contents.as_bytes())
            .expect("temp file should be writable");
        file
    }

    fn path(file: &tempfile::NamedTempFile) -> &str {
        file.path().to_str().expect("temp path should be utf-8")
    }

    #[test]
    fn loads_pre_aggregated_counts() {
        let file = write_csv("member_a,member_b,count\na,b,3\nb,c,3\na,c,1\n");
        let pairs = load_interaction_pairs(path(&file)).expect("load should succeed");

        assert_eq!(pairs.len(), 3);
        assert!(pairs.contains(&AggregatedPair {
            member_a: "a".to_string(),
            member_b: "b".to_string(),
            count: 3,
        }));
    }

    #[test]
    fn raw_rows_without_count_aggregate_per_pair() {
        let file = write_csv("member_a,member_b\na,b\nb,a\na,b\nb,c\n");
        let pairs = load_interaction_pairs(path(&file)).expect("load should succeed");

        assert_eq!(pairs.len(), 2);
        let ab = pairs
            .iter()
            .find(|p| p.member_a == "a" && p.member_b == "b")
            .expect("a/b pair should exist");
        assert_eq!(ab.count, 3);
    }

    #[test]
    fn duplicate_counted_rows_fold_together() {
        let file = write_csv("member_a,member_b,count\na,b,2\nb,a,3\n");
        let pairs = load_interaction_pairs(path(&file)).expect("load should succeed");

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].count, 5);
    }

    #[test]
    fn missing_member_column_is_a_schema_error() {
        let file = write_csv("member_a,count\na,3\n");
        let err = load_interaction_pairs(path(&file)).expect_err("load must fail");

        match err.downcast_ref::<AnalysisError>() {
            Some(AnalysisError::Schema { field }) => assert_eq!(field, "member_b"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_count_is_a_schema_error() {
        let file = write_csv("member_a,member_b,count\na,b,0\n");
        let err = load_interaction_pairs(path(&file)).expect_err("load must fail");

        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::Schema { .. })
        ));
    }

    #[test]
    fn header_only_file_is_missing_input() {
        let file = write_csv("member_a,member_b,count\n");
        let err = load_interaction_pairs(path(&file)).expect_err("load must fail");

        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::MissingInput)
        ));
    }

    #[test]
    fn missing_file_is_missing_input() {
        let err = load_interaction_pairs("/nonexistent/interactions.csv")
            .expect_err("load must fail");

        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::MissingInput)
        ));
    }
}
