use crate::codec::{RecordReader, RecordWriter};
use crate::error::MergeError;
use crate::models::{KeyValue, ReduceFunction};
use crate::naming;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};

/// Merges all shard files for one reduce partition into its output file.
///
/// Reads shards in ascending map-task order, groups values by key, then
/// calls `reduce` once per distinct key in ascending key order and writes
/// each (key, reduced value) as one output record. Re-running over the same
/// inputs truncates and rewrites the output wholesale, so the operation is
/// idempotent and byte-identical across runs.
///
/// Any failure aborts the whole invocation; a failed run may leave a partial
/// output file behind and the caller must re-run rather than trust it.
pub fn merge(
    job: &str,
    partition: usize,
    shard_count: usize,
    reduce: ReduceFunction,
) -> Result<(), MergeError> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for map_index in 0..shard_count {
        let path = naming::shard_path(job, map_index, partition);
        let file = File::open(&path).map_err(|source| MergeError::OpenShard {
            path: path.clone(),
            source,
        })?;

        let mut records = 0usize;
        for record in RecordReader::new(BufReader::new(file)) {
            let kv = record.map_err(|source| MergeError::Corrupt {
                path: path.clone(),
                source,
            })?;
            grouped.entry(kv.key).or_default().push(kv.value);
            records += 1;
        }
        tracing::debug!(shard = %path.display(), records, "read shard");
    }

    let out_path = naming::output_path(job, partition);
    let file = File::create(&out_path).map_err(|source| MergeError::CreateOutput {
        path: out_path.clone(),
        source,
    })?;
    let mut writer = RecordWriter::new(BufWriter::new(file));

    let distinct_keys = grouped.len();
    for (key, values) in grouped {
        let value = reduce(key.clone(), values);
        writer
            .write(&KeyValue { key, value })
            .map_err(|source| MergeError::WriteOutput {
                path: out_path.clone(),
                source,
            })?;
    }
    writer.flush().map_err(|source| MergeError::WriteOutput {
        path: out_path.clone(),
        source,
    })?;

    tracing::info!(
        partition,
        shards = shard_count,
        keys = distinct_keys,
        output = %out_path.display(),
        "merge complete"
    );
    Ok(())
}
