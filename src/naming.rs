use std::path::PathBuf;

/// File-naming convention shared with the map side. `job` is an opaque
/// identifier; here it doubles as the directory the job's files live under.
///
/// Shard `mr-{map_index}-{partition}` is written exclusively by map task
/// `map_index` and read only by the merger for `partition`.
pub fn shard_path(job: &str, map_index: usize, partition: usize) -> PathBuf {
    PathBuf::from(job).join(format!("mr-{map_index}-{partition}"))
}

/// Final output file for one reduce partition.
pub fn output_path(job: &str, partition: usize) -> PathBuf {
    PathBuf::from(job).join(format!("mr-out-{partition}"))
}

#[cfg(test)]
mod naming_test {
    use super::*;

    #[test]
    fn test_shard_path() {
        assert_eq!(
            shard_path("/data/job-7", 3, 1),
            PathBuf::from("/data/job-7/mr-3-1")
        );
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path("/data/job-7", 1),
            PathBuf::from("/data/job-7/mr-out-1")
        );
    }

    #[test]
    fn test_paths_disjoint_across_partitions() {
        assert_ne!(shard_path("j", 0, 0), shard_path("j", 0, 1));
        assert_ne!(output_path("j", 0), output_path("j", 1));
    }
}
